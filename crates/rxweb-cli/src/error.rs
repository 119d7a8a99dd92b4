use reaction_web::core::io::table::TableError;
use reaction_web::core::translate::TranslateError;
use reaction_web::core::units::UnitError;
use reaction_web::render::error::RenderError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
