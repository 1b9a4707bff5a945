//! Handle-based call surface for external drivers.
//!
//! Every function accepts an optional queue handle and folds failures into
//! `false`, `0`, or a no-op, logging the reason at debug level. Callers that
//! want the reason use the [`TextQueue`] methods directly.

use tracing::debug;

use crate::config::QueueConfig;
use crate::error::QueueError;
use crate::queue::TextQueue;
use crate::types::Operation;

/// Create an empty queue with the default configuration.
///
/// Returns `None` only if storage could not be obtained.
pub fn create_queue() -> Option<TextQueue> {
    create_queue_with(QueueConfig::default())
}

/// Create an empty queue with `config`.
pub fn create_queue_with(config: QueueConfig) -> Option<TextQueue> {
    TextQueue::with_config(config)
        .map_err(|err| debug!(%err, "create_queue failed"))
        .ok()
}

/// Release every node and the queue itself. Absent handles are ignored.
pub fn destroy_queue(q: Option<TextQueue>) {
    if let Some(q) = q {
        debug!(size = q.len(), "destroying queue");
        drop(q);
    }
}

/// Insert a copy of `value` at the head.
pub fn insert_head(q: Option<&mut TextQueue>, value: &str) -> bool {
    report(
        Operation::InsertHead,
        q.ok_or(QueueError::invalid_reference(Operation::InsertHead))
            .and_then(|q| q.insert_head(value)),
    )
}

/// Insert a copy of `value` at the tail.
pub fn insert_tail(q: Option<&mut TextQueue>, value: &str) -> bool {
    report(
        Operation::InsertTail,
        q.ok_or(QueueError::invalid_reference(Operation::InsertTail))
            .and_then(|q| q.insert_tail(value)),
    )
}

/// Remove the head, copying its value into `out` truncated to `out.len() - 1`
/// bytes plus a NUL terminator.
pub fn remove_head(q: Option<&mut TextQueue>, out: Option<&mut [u8]>) -> bool {
    report(
        Operation::RemoveHead,
        q.ok_or(QueueError::invalid_reference(Operation::RemoveHead))
            .and_then(|q| q.remove_head(out)),
    )
}

/// Number of elements; 0 for an absent queue.
pub fn queue_size(q: Option<&TextQueue>) -> usize {
    q.map_or(0, TextQueue::len)
}

/// Reverse in place. No effect on an absent or empty queue.
pub fn reverse(q: Option<&mut TextQueue>) {
    if let Some(q) = q {
        q.reverse();
    }
}

/// Sort ascending in place. No effect on an absent, empty or single-element queue.
pub fn sort(q: Option<&mut TextQueue>) {
    if let Some(q) = q {
        q.sort();
    }
}

fn report<T>(op: Operation, result: Result<T, QueueError>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            debug!(%op, %err, "operation failed");
            false
        }
    }
}
