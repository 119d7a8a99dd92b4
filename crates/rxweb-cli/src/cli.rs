use clap::{Args, Parser, Subcommand};
use reaction_web::core::translate::Notation;
use reaction_web::render::diagram::DEFAULT_SPREAD;
use reaction_web::render::heatmap::PathMetric;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "rxweb - Inspect reaction paths, webs and R-group enumerations from CSV energy tables.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the enumeration (or flattened web) read from a CSV table.
    Show(ShowArgs),
    /// Report the lowest and highest point of every path and of the whole web.
    Extrema(ExtremaArgs),
    /// Write energy-diagram polylines as CSV (path,x,y).
    Diagram(DiagramArgs),
    /// Write heatmap grids of a per-path metric over the enumeration as CSV.
    Heatmap(HeatmapArgs),
    /// Print the factor converting energies between two units.
    Convert(ConvertArgs),
    /// Typeset a chemical formula or reaction.
    Translate(TranslateArgs),
}

/// Options shared by every command that reads an energy table.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Path to the CSV energy table.
    #[arg(required = true, value_name = "CSV")]
    pub input: PathBuf,

    /// Path to a table configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Column holding species names.
    #[arg(long, value_name = "COLUMN")]
    pub name_column: Option<String>,

    /// Column holding energies.
    #[arg(long, value_name = "COLUMN")]
    pub energy_column: Option<String>,

    /// Column ordering rows within a path.
    #[arg(long, value_name = "COLUMN")]
    pub step_column: Option<String>,

    /// Column identifying paths; repeat for several. Defaults to every r<N> column.
    #[arg(long = "indicator", value_name = "COLUMN")]
    pub indicators: Vec<String>,

    /// Unit the table's energies are given in (hartree, kJ/mol, kcal/mol, eV, 1/cm).
    #[arg(long, value_name = "UNIT", requires = "to_unit")]
    pub from_unit: Option<String>,

    /// Unit to report energies in.
    #[arg(long, value_name = "UNIT", requires = "from_unit")]
    pub to_unit: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S energy-factor=627.509
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Print all paths as one flat web instead of the enumeration.
    #[arg(long)]
    pub web: bool,
}

#[derive(Args, Debug)]
pub struct ExtremaArgs {
    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Args, Debug)]
pub struct DiagramArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Gap left at each end of an energy level.
    #[arg(long, value_name = "FLOAT", default_value_t = DEFAULT_SPREAD)]
    pub spread: f64,

    /// Typeset path names in this notation (latex or unicode).
    #[arg(long, value_name = "NOTATION")]
    pub notation: Option<Notation>,

    /// Output file; defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct HeatmapArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Value shown per path: max, min, energy:N or relative:N.
    #[arg(short, long, value_name = "METRIC", default_value = "max")]
    pub metric: PathMetric,

    /// Output file; defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Unit to convert from.
    #[arg(required = true)]
    pub from: String,

    /// Unit to convert to.
    #[arg(required = true)]
    pub to: String,
}

#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Formula or reaction, e.g. "2H2O -> H3O+ + OH-".
    #[arg(required = true)]
    pub formula: String,

    /// Target notation (latex or unicode).
    #[arg(long, value_name = "NOTATION", default_value_t = Notation::Latex)]
    pub to: Notation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_options_are_parsed() {
        let cli = Cli::parse_from([
            "rxweb",
            "show",
            "sweep.csv",
            "--energy-column",
            "G",
            "--indicator",
            "r1",
            "--indicator",
            "r3",
            "--from-unit",
            "hartree",
            "--to-unit",
            "kcal/mol",
            "--web",
        ]);
        match cli.command {
            Commands::Show(args) => {
                assert!(args.web);
                assert_eq!(args.table.input, PathBuf::from("sweep.csv"));
                assert_eq!(args.table.energy_column.as_deref(), Some("G"));
                assert_eq!(args.table.indicators, ["r1", "r3"]);
                assert_eq!(args.table.from_unit.as_deref(), Some("hartree"));
            }
            other => panic!("Expected 'show' subcommand, got {:?}", other),
        }
    }

    #[test]
    fn heatmap_metric_and_translate_notation_are_parsed() {
        let cli = Cli::parse_from(["rxweb", "heatmap", "sweep.csv", "--metric", "relative:2"]);
        match cli.command {
            Commands::Heatmap(args) => assert_eq!(args.metric, PathMetric::RelativeEnergy(2)),
            other => panic!("Expected 'heatmap' subcommand, got {:?}", other),
        }

        let cli = Cli::parse_from(["rxweb", "translate", "H2O", "--to", "unicode"]);
        match cli.command {
            Commands::Translate(args) => assert_eq!(args.to, Notation::Unicode),
            other => panic!("Expected 'translate' subcommand, got {:?}", other),
        }
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Cli::try_parse_from(["rxweb", "translate", "H2O", "--to", "html"]).is_err());
        assert!(Cli::try_parse_from(["rxweb", "heatmap", "s.csv", "--metric", "mean"]).is_err());
        assert!(Cli::try_parse_from(["rxweb", "show", "s.csv", "--from-unit", "eV"]).is_err());
    }

    #[test]
    fn verbosity_flags_are_global() {
        let cli = Cli::parse_from(["rxweb", "convert", "eV", "hartree", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }
}
