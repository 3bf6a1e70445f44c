//! # Inbound Port - QueueApi
//!
//! Driving port exposing the queue's operation contract to external
//! collaborators (command shell, test drivers).

use crate::domain::Queue;
use crate::error::QueueError;

/// Operation contract of a queue handle.
///
/// The handle may be absent (before `create`, after `destroy`). Inserts and
/// removals on an absent handle fail with `InvalidHandle`; `size` reports 0;
/// `reverse`, `sort` and `destroy` do nothing.
///
/// # Example
///
/// ```rust,ignore
/// use lq_queue::{QueueApi, QueueService, SystemAllocator};
///
/// let mut service = QueueService::new(SystemAllocator);
/// service.create()?;
/// service.insert_tail("banana")?;
/// service.insert_tail("apple")?;
/// service.sort();
///
/// let mut buf = [0u8; 16];
/// service.remove_head(Some(&mut buf))?; // "apple\0"
/// ```
pub trait QueueApi {
    /// Create a new empty queue, destroying any existing one first.
    ///
    /// # Errors
    /// - `AllocationFailed`: storage for the queue was refused; no queue exists afterwards
    fn create(&mut self) -> Result<(), QueueError>;

    /// Release every node and the queue itself.
    fn destroy(&mut self);

    /// Insert a copy of `value` at the head. O(1).
    ///
    /// # Errors
    /// - `InvalidHandle`: no queue exists
    /// - `AllocationFailed`, `CapacityExceeded`, `ValueTooLarge`: nothing was inserted
    fn insert_head(&mut self, value: &str) -> Result<(), QueueError>;

    /// Insert a copy of `value` at the tail. O(1).
    ///
    /// Same errors as `insert_head`.
    fn insert_tail(&mut self, value: &str) -> Result<(), QueueError>;

    /// Remove the head element, copying it (truncated, NUL-terminated) into
    /// `out` when supplied. Returns payload bytes written.
    ///
    /// # Errors
    /// - `InvalidHandle`: no queue exists
    /// - `EmptyQueue`: nothing to remove; queue unchanged
    fn remove_head(&mut self, out: Option<&mut [u8]>) -> Result<usize, QueueError>;

    /// Remove the head element and return it.
    fn pop_head(&mut self) -> Result<String, QueueError>;

    /// Element count. O(1); 0 when no queue exists.
    fn size(&self) -> usize;

    /// Reverse element order in place.
    fn reverse(&mut self);

    /// Stable ascending sort in place.
    fn sort(&mut self);

    /// Read-only view of the queue, if one exists.
    fn queue(&self) -> Option<&Queue>;
}
