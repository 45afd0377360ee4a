use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// A required source table could not be located. Fatal; raised before
    /// any processing starts.
    #[error("missing source table: {path}")]
    MissingSource { path: PathBuf },

    /// No header in a loaded table matched a required canonical field.
    /// Carries the observed headers for diagnosis.
    #[error("{table}: no column matches required field `{field}` (observed headers: {observed:?})")]
    MissingColumn {
        table: String,
        field: &'static str,
        observed: Vec<String>,
    },

    /// A cell was non-numeric where a number is required. Never coerced to
    /// zero; fatal for the table being loaded.
    #[error("{table}: row {row}: `{column}` value {value:?} is not numeric")]
    MalformedValue {
        table: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
