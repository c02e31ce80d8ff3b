//! Error type for the command-line driver.

use std::path::PathBuf;

use mc_beam::BeamError;
use mc_flow::FlowError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse case file {path}: {source}")]
    CaseFileParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid case: {0}")]
    InvalidCase(String),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Beam(#[from] BeamError),

    #[error("Failed to render output: {0}")]
    Render(String),

    #[error("Failed to install log subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Render(err.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;
