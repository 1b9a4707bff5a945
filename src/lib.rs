//! Text Queue Library
//!
//! A singly-linked FIFO queue of owned text values supporting insertion at
//! either end, head removal, in-place reversal and in-place merge sort.

pub mod api;
pub mod config;
pub mod error;
pub mod queue;
pub mod types;

// Re-export main types for convenience
pub use config::QueueConfig;
pub use error::{QueueError, Result};
pub use queue::sort::bounded_less;
pub use queue::{NodeId, TextQueue};
pub use types::Operation;
