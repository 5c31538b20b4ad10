use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WrangleError {
    #[error("Unknown month name '{month}': expected one of the twelve Icelandic month names")]
    UnknownMonth { month: String },

    #[error("Malformed row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Field too short in row {row}: '{field}' must be at least 2 characters")]
    FieldTooShort { row: usize, field: String },

    #[error("Invalid amount in row {row}, column {column}: '{value}'")]
    InvalidAmount {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),

    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Date calculation error: {0}")]
    DateError(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WrangleError>;
