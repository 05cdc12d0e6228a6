use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(
        "Predecessor matrix of dimension {matrix_rows}x{matrix_columns} does not match reference length {reference_length} and query length {query_length}"
    )]
    SequenceLengthMismatch {
        matrix_rows: usize,
        matrix_columns: usize,
        reference_length: usize,
        query_length: usize,
    },

    #[error(
        "Predecessor at reference index {reference_index} and query index {query_index} points outside of the matrix"
    )]
    PredecessorOutOfBounds {
        reference_index: usize,
        query_index: usize,
    },
}
