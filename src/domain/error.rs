use thiserror::Error;

/// Errors raised by grid construction and coordinate lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size must be a positive integer, got {0}")]
    InvalidSize(i64),
    #[error("grid size {size} is larger than the maximum of {max}")]
    TooLarge { size: usize, max: usize },
    #[error("grid size {0:?} is not a number")]
    NotANumber(String),
    #[error("cell ({row}, {column}) is outside a {size}x{size} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },
}
