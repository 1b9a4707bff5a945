//! Error handling module for the queue engine
//!
//! Provides the error taxonomy for every fallible queue operation using thiserror.
//! Truncation on removal is not an error: it is reported as a byte count.

use thiserror::Error;

use crate::types::Operation;

/// Main error type for the queue engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Operation invoked without a queue handle
    #[error("{op}: no queue")]
    InvalidReference { op: Operation },

    /// Removal invoked on a queue with no elements
    #[error("{op}: queue is empty")]
    Empty { op: Operation },

    /// Node or value storage could not be obtained
    #[error("{op}: failed to allocate {bytes} bytes")]
    Allocation { op: Operation, bytes: usize },

    /// Value longer than the configured bound
    #[error("value of {len} bytes exceeds the {max} byte limit")]
    ValueTooLong { len: usize, max: usize },

    /// Value contains a NUL byte, which is reserved as the terminator
    #[error("value contains a NUL byte at offset {position}")]
    InteriorNul { position: usize },

    /// Invariant audit failed
    #[error("queue corrupted: {0}")]
    Corrupted(String),
}

/// Result type alias for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;

impl QueueError {
    /// Create an invalid-reference error
    pub fn invalid_reference(op: Operation) -> Self {
        Self::InvalidReference { op }
    }

    /// Create an empty-container error
    pub fn empty(op: Operation) -> Self {
        Self::Empty { op }
    }

    /// Create an allocation-failure error
    pub fn allocation(op: Operation, bytes: usize) -> Self {
        Self::Allocation { op, bytes }
    }

    /// Create a corruption error
    pub fn corrupted(msg: impl Into<String>) -> Self {
        Self::Corrupted(msg.into())
    }

    /// The operation that failed, when the error is tied to one
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::InvalidReference { op } | Self::Empty { op } | Self::Allocation { op, .. } => {
                Some(*op)
            }
            Self::ValueTooLong { .. } | Self::InteriorNul { .. } | Self::Corrupted(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QueueError::empty(Operation::RemoveHead);
        assert_eq!(err.to_string(), "remove_head: queue is empty");

        let err = QueueError::allocation(Operation::InsertTail, 64);
        assert_eq!(err.to_string(), "insert_tail: failed to allocate 64 bytes");

        let err = QueueError::ValueTooLong { len: 2000, max: 1024 };
        assert_eq!(err.to_string(), "value of 2000 bytes exceeds the 1024 byte limit");
    }

    #[test]
    fn test_error_operation() {
        let err = QueueError::invalid_reference(Operation::Sort);
        assert_eq!(err.operation(), Some(Operation::Sort));

        let err = QueueError::corrupted("cycle");
        assert_eq!(err.operation(), None);
        assert!(matches!(err, QueueError::Corrupted(_)));
    }
}
