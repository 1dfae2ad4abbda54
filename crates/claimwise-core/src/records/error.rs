use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read {table} table at {path}: {source}")]
    Io {
        table: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{table} table is missing required column: {column}")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("{table} table has a malformed header: {reason}")]
    MalformedHeader {
        table: &'static str,
        reason: String,
    },

    #[error("{table} table row {row} is malformed: {reason}")]
    MalformedRow {
        table: &'static str,
        row: u64,
        reason: String,
    },
}
