//! Error types for the queue engine

use thiserror::Error;

/// Errors that can occur while operating on a queue
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("Allocation failed: {requested} bytes refused")]
    AllocationFailed { requested: usize },

    #[error("Queue capacity reached: {capacity} elements")]
    CapacityExceeded { capacity: usize },

    #[error("Value too large: {len} bytes > {max}")]
    ValueTooLarge { len: usize, max: usize },

    #[error("Queue handle is absent")]
    InvalidHandle,

    #[error("Queue is empty")]
    EmptyQueue,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Queue structure corrupted: {0}")]
    Corrupted(String),
}

impl QueueError {
    /// True for every way backing storage can be refused.
    ///
    /// Configured limits count as storage exhaustion: the caller sees the
    /// same "nothing was inserted" outcome and may retry or abort.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self,
            Self::AllocationFailed { .. } | Self::CapacityExceeded { .. } | Self::ValueTooLarge { .. }
        )
    }
}
