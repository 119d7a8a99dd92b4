use crate::core::io::schema::TableSchema;
use crate::core::io::table::{self, Table, TableError};
use crate::core::models::enumeration::Enumeration;
use crate::core::models::molecule::Molecule;
use crate::core::models::web::Web;
use std::path::Path;
use tracing::{info, instrument};

/// Reads one molecule per row of the CSV at `path`.
#[instrument(skip_all, name = "molecules_from_csv", fields(path = %path.display()))]
pub fn molecules_from_csv(path: &Path, schema: &TableSchema) -> Result<Vec<Molecule>, TableError> {
    let table = Table::from_path(path)?;
    let molecules = table::read_molecules(&table, schema)?;
    info!(molecules = molecules.len(), "Read molecules.");
    Ok(molecules)
}

/// Reads an R-group sweep from the CSV at `path` into an enumeration.
///
/// Rows are grouped into paths by the schema's path indicators, ordered by step
/// within each group, and placed into the Cartesian product of the indicator
/// labels.
#[instrument(skip_all, name = "enumeration_from_csv", fields(path = %path.display()))]
pub fn enumeration_from_csv(path: &Path, schema: &TableSchema) -> Result<Enumeration, TableError> {
    let table = Table::from_path(path)?;
    let enm = table::read_multipath(&table, schema)?.into_enumeration()?;
    info!(shape = ?enm.shape(), "Built enumeration.");
    Ok(enm)
}

/// Like [`enumeration_from_csv`], with every path flattened in row-major order
/// into one web named after the file stem.
#[instrument(skip_all, name = "web_from_csv", fields(path = %path.display()))]
pub fn web_from_csv(path: &Path, schema: &TableSchema) -> Result<Web, TableError> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(enumeration_from_csv(path, schema)?.to_web(name))
}
