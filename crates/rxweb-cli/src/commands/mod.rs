pub mod convert;
pub mod diagram;
pub mod extrema;
pub mod heatmap;
pub mod show;
pub mod translate;

use crate::cli::TableArgs;
use crate::config::PartialTableConfig;
use crate::error::Result;
use reaction_web::core::io::schema::TableSchema;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Resolves the table schema from the config file (if any) and the flags.
pub(crate) fn resolve_schema(args: &TableArgs) -> Result<TableSchema> {
    PartialTableConfig::load(args.config.as_deref())?.merge_with_cli(args)
}

/// Buffered writer for `output`, or standard output when none is given.
pub(crate) fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            info!("Writing output to {:?}", path);
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Two R-group axes (`r1`: A, B and `r2`: C, D), two reactions per path.
    pub const GRID_CSV: &str = "\
name,energy,step,r1,r2
S,0.0,0,A,C
TS,2.0,1,A,C
P,-1.0,2,A,C
S,0.0,0,A,D
TS,3.0,1,A,D
P,-2.0,2,A,D
S,0.0,0,B,C
TS,1.0,1,B,C
P,0.5,2,B,C
S,0.0,0,B,D
TS,4.0,1,B,D
P,-3.0,2,B,D
";

    pub fn write_table(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("grid.csv");
        fs::write(&path, content).unwrap();
        path
    }
}
