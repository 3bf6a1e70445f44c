//! Domain Layer - the linked-list engine
//!
//! This layer contains:
//! - `Node`: chain cell owning one payload
//! - `Queue`: head/tail/size bookkeeping, insertion, removal, reversal
//! - Merge sort over chain links
//! - Bounded buffer copies for removal output
//! - Queue limits configuration
//!
//! RULES:
//! - No I/O operations
//! - No logging
//! - No allocation during reversal or sort

pub mod buffer;
pub mod config;
mod merge_sort;
pub mod node;
pub mod queue;

pub use buffer::{copy_truncated, until_terminator};
pub use config::{QueueConfig, QueueConfigBuilder};
pub use node::Node;
pub use queue::Queue;
