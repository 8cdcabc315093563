use thiserror::Error;

use crate::engines::decoding::locus::Locus;

#[derive(Error, Debug)]
pub enum PepeError {
    #[error("Invalid locus {locus}: {reason}")]
    InvalidLocus { locus: Locus, reason: String },

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid genome: {0}")]
    InvalidGenome(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, PepeError>;
