use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Column layout of a reaction-data table and how its energies are scaled.
///
/// Loaded from TOML with kebab-case keys. Every key is optional:
///
/// ```toml
/// name = "species"
/// energy = "G"
/// step = "step"
/// path-indicators = ["r1", "r2"]
/// energy-factor = 627.509
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct TableSchema {
    pub name: String,
    pub energy: String,
    pub step: String,
    /// Columns that identify which path a row belongs to. `None` selects every
    /// `r<digits>` column, naturally ordered.
    pub path_indicators: Option<Vec<String>>,
    /// Multiplies every energy read from the table.
    pub energy_factor: f64,
}

impl Default for TableSchema {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            energy: "energy".to_string(),
            step: "step".to_string(),
            path_indicators: None,
            energy_factor: 1.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum SchemaLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl TableSchema {
    pub fn load(path: &Path) -> Result<Self, SchemaLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| SchemaLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| SchemaLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}
