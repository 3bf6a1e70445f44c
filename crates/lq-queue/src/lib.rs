//! # LQ Queue
//!
//! Singly-linked FIFO queue of strings: head/tail insertion, head removal,
//! O(1) size, in-place reversal and stable merge sort on the node links.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure data structure, no I/O
//!   - `Queue`: head ownership, non-owning tail, maintained size
//!   - `Node`: chain cell owning one payload
//!   - `QueueConfig` / `QueueConfigBuilder`: storage limits
//!   - `copy_truncated`: bounded, always-terminated output copies
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `QueueApi`: Driving port (operation contract)
//!   - `AllocationPolicy`: Driven port (storage admission)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `QueueService`: Implements `QueueApi` over an optional handle
//!
//! - **Adapters Layer** (`adapters/`): `AllocationPolicy` implementations
//!   - `SystemAllocator`: Always permits
//!   - `FaultInjector`: Seedable random refusals
//!
//! ## Invariants
//!
//! - **SIZE**: `size` equals the number of nodes reachable from `head`
//! - **EMPTY**: `head` empty iff `size == 0` iff `tail` empty
//! - **TAIL**: `tail` is the last reachable node and its `next` is empty
//! - **IN-PLACE**: `reverse` and `sort` never allocate or free nodes
//! - **STABLE**: `sort` keeps equal payloads in their original order
//!
//! ## Complexity
//!
//! | Operation | Time | Extra space |
//! |-----------|------|-------------|
//! | `insert_head` / `insert_tail` | O(1) | one node |
//! | `remove_head` / `pop_head` | O(1) | none |
//! | `size` | O(1) | none |
//! | `reverse` | O(n) | O(1) |
//! | `sort` | O(n log n) | O(log n) stack |
//! | `destroy` | O(n) | O(1) |
//!
//! ## Usage Example
//!
//! ```ignore
//! use lq_queue::{QueueApi, QueueService, SystemAllocator};
//!
//! let mut service = QueueService::new(SystemAllocator);
//! service.create()?;
//! service.insert_tail("banana")?;
//! service.insert_tail("apple")?;
//! service.insert_tail("cherry")?;
//!
//! service.sort();    // apple, banana, cherry
//! service.reverse(); // cherry, banana, apple
//!
//! assert_eq!(service.pop_head()?, "cherry");
//! assert_eq!(service.size(), 2);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{FaultInjector, SystemAllocator};
pub use domain::{copy_truncated, until_terminator, Node, Queue, QueueConfig, QueueConfigBuilder};
pub use error::QueueError;
pub use metrics::{InsertSide, Metrics, MetricsSnapshot};
pub use ports::{AllocationPolicy, QueueApi};
pub use service::QueueService;
