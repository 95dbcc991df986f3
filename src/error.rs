//! Error types for queue operations.

use thiserror::Error;

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;

/// Queue errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The queue had no item to take from the front.
    #[error("queue is empty")]
    Empty,

    /// An index did not address an existing item.
    #[error("index {index} out of range for queue of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
