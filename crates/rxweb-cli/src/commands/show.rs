use super::{open_output, resolve_schema};
use crate::cli::ShowArgs;
use crate::error::Result;
use reaction_web::core::io::schema::TableSchema;
use reaction_web::workflows::ingest::{enumeration_from_csv, web_from_csv};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn run(args: ShowArgs) -> Result<()> {
    let schema = resolve_schema(&args.table)?;
    let mut out = open_output(None)?;
    render(&args.table.input, &schema, args.web, &mut out)?;
    out.flush()?;
    Ok(())
}

fn render(input: &Path, schema: &TableSchema, as_web: bool, out: &mut dyn Write) -> Result<()> {
    if as_web {
        let web = web_from_csv(input, schema)?;
        info!("Showing web '{}' with {} paths.", web.name(), web.len());
        writeln!(out, "{}", web)?;
    } else {
        let enumeration = enumeration_from_csv(input, schema)?;
        info!(shape = ?enumeration.shape(), "Showing enumeration.");
        writeln!(out, "{}", enumeration)?;
    }
    Ok(())
}
