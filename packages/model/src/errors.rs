//! Error types for content validation and structural edits

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Table must have at least one header")]
    EmptyHeaders,

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Chart must have at least one data point")]
    EmptySeries,

    #[error("Cannot remove the last column")]
    LastColumn,

    #[error("Cannot remove the last row")]
    LastRow,

    #[error("Cannot remove the last data point")]
    LastDataPoint,

    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
