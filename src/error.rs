use thiserror::Error;

/// Result alias for fallible list operations.
pub type ListResult<T> = Result<T, ListError>;

/// Errors raised by the few list operations that take a caller-supplied position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("list is empty")]
    EmptyList,

    #[error("position {position} out of bounds for list of length {len}")]
    PositionOutOfBounds { position: usize, len: usize },
}
