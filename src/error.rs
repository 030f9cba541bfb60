use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JaggedError {
    #[error("matrix must have at least one row")]
    EmptyMatrix,
    #[error("index out of range for row {row}")]
    ColumnOutOfRange { row: usize },
    #[error("to index out of range for row {row}")]
    ToColumnOutOfRange { row: usize },
    #[error("no column value for row {row}")]
    MissingColumnValue { row: usize },
    #[error("source row out of range")]
    SourceRowOutOfRange,
    #[error("source column out of range for row {row}")]
    SourceColumnOutOfRange { row: usize },
    #[error("destination resolves before the start of the matrix")]
    DestinationOutOfRange,
    #[error("row {row} has {found} cells, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
    #[error("cannot grow the matrix: {0}")]
    Capacity(#[from] TryReserveError),

    #[error("{0}")]
    Range(String),
    #[error("invalid sorting definition: {0}")]
    InvalidSortKey(String),
    #[error("the given value is not an object")]
    NotAnObject,
    #[error("could not understand the command")]
    Syntax,
}

impl JaggedError {
    pub(crate) fn range(message: impl ToString) -> anyhow::Error {
        anyhow::Error::from(JaggedError::Range(message.to_string()))
    }

    /// The `JaggedError` at the root of an `anyhow` chain, if there is one.
    pub fn extract(err: &anyhow::Error) -> Option<&JaggedError> {
        err.chain().find_map(|e| e.downcast_ref::<JaggedError>())
    }
}
