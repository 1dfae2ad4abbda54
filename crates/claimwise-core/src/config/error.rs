use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port '{value}': {source}")]
    PortParseError {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("port must be non-zero, got '{value}'")]
    InvalidPort { value: String },

    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("invalid top-k '{value}': {source}")]
    TopKParseError {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("top-k must be at least 1")]
    InvalidTopK,

    #[error("path exists but is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
