// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdviLensError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Unsupported report type: {0}")]
    UnsupportedReportType(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AdviLensError>;

// Allow `?` on std::io::Error by converting to AdviLensError::Io with unknown path.
impl From<std::io::Error> for AdviLensError {
    fn from(source: std::io::Error) -> Self {
        AdviLensError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for AdviLensError {
    fn from(e: toml::de::Error) -> Self {
        AdviLensError::Config(e.to_string())
    }
}
