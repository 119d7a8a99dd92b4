use super::{open_output, resolve_schema};
use crate::cli::ExtremaArgs;
use crate::error::Result;
use reaction_web::core::models::web::Web;
use reaction_web::workflows::ingest::web_from_csv;
use std::io::Write;
use tracing::{info, warn};

pub fn run(args: ExtremaArgs) -> Result<()> {
    let schema = resolve_schema(&args.table)?;
    let web = web_from_csv(&args.table.input, &schema)?;
    info!("Computing extrema over {} paths.", web.len());
    let mut out = open_output(None)?;
    report(&web, &mut out)?;
    out.flush()?;
    Ok(())
}

/// One line per path, then the web-wide extremes. Steps count points along the
/// path, so step 0 is the common starting level.
fn report(web: &Web, out: &mut dyn Write) -> Result<()> {
    for path in web {
        let (min_step, min) = path.min();
        let (max_step, max) = path.max();
        writeln!(
            out,
            "{}: min {} at step {}, max {} at step {}",
            path.name(),
            min,
            min_step,
            max,
            max_step
        )?;
    }

    match (web.min(), web.max()) {
        (Some(((min_path, min_step), min)), Some(((max_path, max_step), max))) => {
            writeln!(
                out,
                "{}: min {} at {} step {}, max {} at {} step {}",
                web.name(),
                min,
                web[min_path].name(),
                min_step,
                max,
                web[max_path].name(),
                max_step
            )?;
        }
        _ => {
            warn!("Web '{}' has no paths; no extrema to report.", web.name());
            writeln!(out, "{}: empty", web.name())?;
        }
    }
    Ok(())
}
