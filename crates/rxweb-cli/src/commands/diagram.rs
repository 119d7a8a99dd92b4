use super::{open_output, resolve_schema};
use crate::cli::DiagramArgs;
use crate::error::Result;
use reaction_web::render::diagram::{web_lines, write_csv};
use reaction_web::workflows::ingest::web_from_csv;
use std::io::Write;
use tracing::info;

pub fn run(args: DiagramArgs) -> Result<()> {
    let schema = resolve_schema(&args.table)?;
    let web = web_from_csv(&args.table.input, &schema)?;
    let lines = web_lines(&web, args.spread, args.notation)?;
    info!("Laid out {} diagram lines.", lines.len());

    let mut out = open_output(args.output.as_deref())?;
    write_csv(&lines, &mut out)?;
    out.flush()?;
    Ok(())
}
