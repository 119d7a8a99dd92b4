use crate::cli::TableArgs;
use crate::error::{CliError, Result};
use reaction_web::core::io::schema::TableSchema;
use reaction_web::core::units::energy_conversion;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Table settings as read from a TOML file: every key optional, merged with
/// command-line flags into a [`TableSchema`].
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialTableConfig {
    name: Option<String>,
    energy: Option<String>,
    step: Option<String>,
    path_indicators: Option<Vec<String>>,
    energy_factor: Option<f64>,
    from_unit: Option<String>,
    to_unit: Option<String>,
}

impl PartialTableConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` when given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    /// Resolves the final schema. Precedence, lowest first: built-in defaults,
    /// the configuration file, `-S` values, dedicated flags.
    ///
    /// A unit pair, if given, scales the energy factor by the conversion factor
    /// between the two units.
    pub fn merge_with_cli(mut self, args: &TableArgs) -> Result<TableSchema> {
        self.apply_set_values(&args.set_values)?;
        let defaults = TableSchema::default();

        let path_indicators = if args.indicators.is_empty() {
            self.path_indicators
        } else {
            Some(args.indicators.clone())
        };

        let from_unit = args.from_unit.clone().or(self.from_unit);
        let to_unit = args.to_unit.clone().or(self.to_unit);
        let unit_factor = match (from_unit, to_unit) {
            (None, None) => 1.0,
            (Some(from), Some(to)) => energy_conversion(&from, &to)?,
            _ => {
                return Err(CliError::Config(
                    "`from-unit` and `to-unit` must be given together".to_string(),
                ));
            }
        };

        let schema = TableSchema {
            name: args.name_column.clone().or(self.name).unwrap_or(defaults.name),
            energy: args
                .energy_column
                .clone()
                .or(self.energy)
                .unwrap_or(defaults.energy),
            step: args.step_column.clone().or(self.step).unwrap_or(defaults.step),
            path_indicators,
            energy_factor: self.energy_factor.unwrap_or(defaults.energy_factor) * unit_factor,
        };
        debug!(?schema, "Resolved table schema.");
        Ok(schema)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let value = value_str.trim().to_string();

            match key.trim() {
                "name" => self.name = Some(value),
                "energy" => self.energy = Some(value),
                "step" => self.step = Some(value),
                "path-indicators" => {
                    self.path_indicators = Some(
                        value
                            .split(',')
                            .map(|c| c.trim().to_string())
                            .filter(|c| !c.is_empty())
                            .collect(),
                    );
                }
                "energy-factor" => {
                    self.energy_factor = Some(value.parse().map_err(|_| {
                        CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                    })?);
                }
                "from-unit" => self.from_unit = Some(value),
                "to-unit" => self.to_unit = Some(value),
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn table_args(extra: &[&str]) -> TableArgs {
        let mut argv = vec!["rxweb", "show", "sweep.csv"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Show(args) => args.table,
            other => panic!("Expected 'show' subcommand, got {:?}", other),
        }
    }

    fn write_config_file(dir: &Path, content: &str) -> PathBuf {
        let file_path = dir.join("table.toml");
        fs::write(&file_path, content).unwrap();
        file_path
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let schema = PartialTableConfig::load(None)
            .unwrap()
            .merge_with_cli(&table_args(&[]))
            .unwrap();
        assert_eq!(schema, TableSchema::default());
    }

    #[test]
    fn file_values_fill_in_schema() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            dir.path(),
            r#"
            energy = "G"
            path-indicators = ["site"]
            energy-factor = 2.0
            "#,
        );
        let schema = PartialTableConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&table_args(&[]))
            .unwrap();
        assert_eq!(schema.energy, "G");
        assert_eq!(schema.name, "name");
        assert_eq!(schema.path_indicators, Some(vec!["site".to_string()]));
        assert_eq!(schema.energy_factor, 2.0);
    }

    #[test]
    fn cli_flags_override_set_values_and_file() {
        let dir = tempdir().unwrap();
        let path = write_config_file(dir.path(), "energy = \"G\"\nstep = \"order\"\n");
        let args = table_args(&[
            "--energy-column",
            "H",
            "-S",
            "energy=E",
            "-S",
            "step=idx",
            "--indicator",
            "r2",
        ]);
        let schema = PartialTableConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();
        assert_eq!(schema.energy, "H");
        assert_eq!(schema.step, "idx");
        assert_eq!(schema.path_indicators, Some(vec!["r2".to_string()]));
    }

    #[test]
    fn units_scale_energy_factor() {
        let args = table_args(&[
            "--from-unit",
            "hartree",
            "--to-unit",
            "kcal/mol",
            "-S",
            "energy-factor=2",
        ]);
        let schema = PartialTableConfig::default().merge_with_cli(&args).unwrap();
        assert_eq!(schema.energy_factor, 2.0 * 627.509);
    }

    #[test]
    fn unknown_unit_is_reported() {
        let args = table_args(&["-S", "from-unit=hartree", "-S", "to-unit=J"]);
        let result = PartialTableConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Unit(_))));
    }

    #[test]
    fn lone_unit_is_a_config_error() {
        let args = table_args(&["-S", "from-unit=eV"]);
        let result = PartialTableConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn set_values_parse_indicator_lists() {
        let args = table_args(&["-S", "path-indicators=r1, r3"]);
        let schema = PartialTableConfig::default().merge_with_cli(&args).unwrap();
        assert_eq!(
            schema.path_indicators,
            Some(vec!["r1".to_string(), "r3".to_string()])
        );
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["energy", "colour=red", "energy-factor=lots"] {
            let args = table_args(&["-S", bad]);
            let result = PartialTableConfig::default().merge_with_cli(&args);
            assert!(matches!(result, Err(CliError::Config(_))), "{bad}");
        }
    }

    #[test]
    fn unknown_file_keys_are_a_parsing_error() {
        let dir = tempdir().unwrap();
        let path = write_config_file(dir.path(), "energy-column = \"G\"\n");
        let result = PartialTableConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}
