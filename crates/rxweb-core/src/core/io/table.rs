use super::schema::TableSchema;
use crate::core::models::enumeration::{Axis, Enumeration};
use crate::core::models::error::ModelError;
use crate::core::models::molecule::Molecule;
use crate::core::models::path::Path;
use crate::core::models::reaction::Reaction;
use crate::core::utils::labels;
use crate::core::utils::ordering::{is_r_group, natural_cmp};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum TableError {
    /// The table file could not be opened.
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The table is not well-formed CSV.
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    /// A column named by the schema is absent.
    #[error("Column '{column}' not found in table")]
    MissingColumn { column: String },
    /// A numeric cell does not parse as a float.
    #[error("Invalid number '{value}' in column '{column}' on line {line}")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },
    /// A label combination of the sweep has no rows.
    #[error("No path found for combination {labels}")]
    MissingCombination { labels: String },
    /// Neither the schema nor the headers name any path indicator column.
    #[error("No path indicator columns found (expected columns such as 'r1', 'r2')")]
    NoPathIndicators,
    /// Building a model from the rows failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A CSV table held as strings, with whitespace around fields trimmed.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<csv::StringRecord>,
}

impl Table {
    pub fn from_path(path: &std::path::Path) -> Result<Self, TableError> {
        let file = File::open(path).map_err(|e| TableError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::read(file, &path.to_string_lossy())
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, TableError> {
        Self::read(reader, "<reader>")
    }

    fn read(reader: impl Read, origin: &str) -> Result<Self, TableError> {
        let csv_error = |e| TableError::Csv {
            path: origin.to_string(),
            source: e,
        };
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(str::to_string)
            .collect();
        let records = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(csv_error)?;
        debug!(origin, rows = records.len(), "Read table.");
        Ok(Self { headers, records })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Count of data rows, excluding the header.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the column named `name`.
    pub fn column(&self, name: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::MissingColumn {
                column: name.to_string(),
            })
    }

    fn text(&self, row: usize, column: usize) -> &str {
        self.records[row].get(column).unwrap_or("")
    }

    fn number(&self, row: usize, column: usize) -> Result<f64, TableError> {
        let value = self.text(row, column);
        value.parse().map_err(|_| TableError::InvalidNumber {
            // Line 1 holds the header.
            line: row + 2,
            column: self.headers[column].clone(),
            value: value.to_string(),
        })
    }
}

/// One molecule per row, energies scaled by the schema's energy factor.
pub fn read_molecules(table: &Table, schema: &TableSchema) -> Result<Vec<Molecule>, TableError> {
    let name = table.column(&schema.name)?;
    let energy = table.column(&schema.energy)?;
    (0..table.len())
        .map(|row| -> Result<Molecule, TableError> {
            let value = table.number(row, energy)?;
            Ok(Molecule::new(table.text(row, name), value).scaled(schema.energy_factor))
        })
        .collect()
}

/// Columns named `r` followed by digits, in natural order (`r2` before `r10`).
pub fn find_r_groups<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    let mut groups: Vec<String> = headers
        .iter()
        .map(|h| h.as_ref())
        .filter(|h| is_r_group(h))
        .map(str::to_string)
        .collect();
    groups.sort_by(|a, b| natural_cmp(a, b));
    groups
}

/// Paths read from a table, keyed by their indicator labels, together with the
/// axes those labels span.
#[derive(Debug, Clone)]
pub struct MultiPath {
    paths: HashMap<Vec<String>, Path>,
    axes: Vec<Axis>,
}

impl MultiPath {
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// The path selected by one label per axis.
    pub fn get<S: AsRef<str>>(&self, labels: &[S]) -> Option<&Path> {
        let key: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
        self.paths.get(&key)
    }

    /// Count of distinct label combinations present in the table.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Places every path into its row-major cell of the Cartesian product of
    /// the axis labels.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingCombination`] for the first combination of
    /// labels that has no rows in the table.
    pub fn into_enumeration(mut self) -> Result<Enumeration, TableError> {
        let shape: Vec<usize> = self.axes.iter().map(Axis::len).collect();
        let total: usize = shape.iter().product();
        let mut paths = Vec::with_capacity(total);
        let mut index = vec![0usize; shape.len()];
        for _ in 0..total {
            let key: Vec<String> = self
                .axes
                .iter()
                .zip(&index)
                .map(|(axis, &i)| axis.labels()[i].clone())
                .collect();
            let path = self
                .paths
                .remove(&key)
                .ok_or_else(|| TableError::MissingCombination {
                    labels: labels::label_tuple(&key),
                })?;
            paths.push(path);
            advance(&mut index, &shape);
        }
        Ok(Enumeration::new(paths, self.axes)?)
    }
}

/// Steps a row-major multi-index; the last position varies fastest.
fn advance(index: &mut [usize], shape: &[usize]) {
    for dim in (0..index.len()).rev() {
        index[dim] += 1;
        if index[dim] < shape[dim] {
            return;
        }
        index[dim] = 0;
    }
}

struct Row {
    labels: Vec<String>,
    step: f64,
    molecule: Molecule,
}

fn compare_rows(a: &Row, b: &Row) -> Ordering {
    a.labels
        .iter()
        .zip(&b.labels)
        .map(|(x, y)| natural_cmp(x, y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.step.total_cmp(&b.step))
}

/// Groups rows into paths by their indicator columns.
///
/// Rows are sorted by indicator labels (natural order) and then by step. Each
/// run of rows sharing all indicator labels becomes one path whose reactions
/// link consecutive rows, named by the tuple of its labels, e.g. `('H', 'B')`.
///
/// # Errors
///
/// Fails if a named column is absent, a number does not parse, or the table
/// has no indicator columns.
pub fn read_multipath(table: &Table, schema: &TableSchema) -> Result<MultiPath, TableError> {
    let indicators = match &schema.path_indicators {
        Some(columns) => columns.clone(),
        None => find_r_groups(table.headers()),
    };
    if indicators.is_empty() {
        return Err(TableError::NoPathIndicators);
    }
    let indicator_columns = indicators
        .iter()
        .map(|c| table.column(c))
        .collect::<Result<Vec<_>, _>>()?;
    let name = table.column(&schema.name)?;
    let energy = table.column(&schema.energy)?;
    let step = table.column(&schema.step)?;

    let mut rows = (0..table.len())
        .map(|row| -> Result<Row, TableError> {
            Ok(Row {
                labels: indicator_columns
                    .iter()
                    .map(|&c| table.text(row, c).to_string())
                    .collect(),
                step: table.number(row, step)?,
                molecule: Molecule::new(table.text(row, name), table.number(row, energy)?)
                    .scaled(schema.energy_factor),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    rows.sort_by(compare_rows);

    let axes: Vec<Axis> = indicators
        .iter()
        .enumerate()
        .map(|(i, indicator)| {
            let mut values: Vec<&str> = rows.iter().map(|r| r.labels[i].as_str()).collect();
            values.sort_by(|a, b| natural_cmp(a, b));
            values.dedup();
            Axis::new(indicator.as_str(), values)
        })
        .collect();

    let mut paths = HashMap::new();
    for group in rows.chunk_by(|a, b| a.labels == b.labels) {
        let path = pathify(group, labels::label_tuple(&group[0].labels))?;
        if group.len() == 1 {
            warn!(path = path.name(), "Path group has a single row; the path has no reactions.");
        }
        paths.insert(group[0].labels.clone(), path);
    }
    debug!(
        paths = paths.len(),
        axes = axes.len(),
        "Grouped table rows into paths."
    );

    Ok(MultiPath { paths, axes })
}

fn pathify(rows: &[Row], name: String) -> Result<Path, ModelError> {
    let reactions = rows
        .windows(2)
        .map(|pair| Reaction::new([pair[0].molecule.clone()], [pair[1].molecule.clone()]))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Path::new(reactions, name))
}
