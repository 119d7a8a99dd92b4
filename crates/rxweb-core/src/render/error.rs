use crate::core::translate::TranslateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Paths of a web differ in reaction count.
    #[error(
        "Can only tabulate paths with consistent lengths: '{path}' has {found} reactions, expected {expected}"
    )]
    InconsistentPathLengths {
        path: String,
        expected: usize,
        found: usize,
    },

    /// Webs differ in path count.
    #[error("Can only tabulate webs with the same number of paths: '{web}' has {found}, expected {expected}")]
    InconsistentWebLengths {
        web: String,
        expected: usize,
        found: usize,
    },

    /// A metric asked for a point the path does not have.
    #[error("Step {step} is out of range for path '{path}' with {len} values")]
    StepOutOfRange {
        path: String,
        step: usize,
        len: usize,
    },

    /// A metric name that does not parse.
    #[error("Invalid path metric '{0}' (expected max, min, energy:N or relative:N)")]
    InvalidMetric(String),

    /// A path label could not be typeset.
    #[error("Failed to translate label: {source}")]
    Translate {
        #[from]
        source: TranslateError,
    },

    /// Writing CSV output failed.
    #[error("CSV output error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// Writing output failed.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
