// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    Encoding {
        source: std::string::FromUtf8Error,
        path: PathBuf,
    },

    #[error("{path} is not valid JSON: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("no tokenizer for model '{model}': {reason}")]
    UnknownModel { model: String, reason: String },
}

impl TallyError {
    /// True for failures caused by the contents of the input file rather
    /// than by the environment.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Encoding { .. } | Self::Json { .. })
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;
