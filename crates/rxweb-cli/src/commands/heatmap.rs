use super::{open_output, resolve_schema};
use crate::cli::HeatmapArgs;
use crate::error::Result;
use reaction_web::render::heatmap::EnumerationHeatmap;
use reaction_web::render::heatmap::enumeration_grids;
use reaction_web::workflows::ingest::enumeration_from_csv;
use std::io::Write;
use tracing::info;

pub fn run(args: HeatmapArgs) -> Result<()> {
    let schema = resolve_schema(&args.table)?;
    let enumeration = enumeration_from_csv(&args.table.input, &schema)?;
    let heatmap = enumeration_grids(&enumeration, args.metric)?;
    if let Some((vmin, vmax)) = heatmap.range {
        info!(vmin, vmax, "Built {} heatmap panels.", heatmap.grids.len());
    }

    let mut out = open_output(args.output.as_deref())?;
    write_panels(&heatmap, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Panels are written one after another, separated by a blank line.
fn write_panels(heatmap: &EnumerationHeatmap, out: &mut dyn Write) -> Result<()> {
    for (i, grid) in heatmap.grids.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        grid.write_csv(&mut *out)?;
    }
    Ok(())
}
