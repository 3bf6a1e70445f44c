//! Queue Service
//!
//! Owns the queue handle and implements `QueueApi` on top of the domain
//! `Queue`, adding absent-handle detection, storage admission, metrics and
//! logging.

use std::mem;

use tracing::{debug, warn};

use crate::adapters::SystemAllocator;
use crate::domain::{Node, Queue, QueueConfig};
use crate::error::QueueError;
use crate::metrics::{InsertSide, Metrics, MetricsSnapshot};
use crate::ports::{AllocationPolicy, QueueApi};

/// Queue handle with injected allocation policy
pub struct QueueService<A: AllocationPolicy = SystemAllocator> {
    /// `None` before `create` and after `destroy`
    queue: Option<Queue>,
    allocator: A,
    config: QueueConfig,
    metrics: Metrics,
}

impl<A: AllocationPolicy> QueueService<A> {
    /// Create a service with no queue yet and unlimited configuration
    pub fn new(allocator: A) -> Self {
        Self {
            queue: None,
            allocator,
            config: QueueConfig::default(),
            metrics: Metrics::new(),
        }
    }

    /// Create with custom limits
    pub fn with_config(allocator: A, config: QueueConfig) -> Result<Self, QueueError> {
        config.validate()?;
        Ok(Self {
            queue: None,
            allocator,
            config,
            metrics: Metrics::new(),
        })
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Replace the limits. Elements already queued are kept even if they
    /// exceed the new limits.
    pub fn set_config(&mut self, config: QueueConfig) -> Result<(), QueueError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.allocator
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn has_queue(&self) -> bool {
        self.queue.is_some()
    }

    fn insert(&mut self, side: InsertSide, value: &str) -> Result<(), QueueError> {
        let result = match self.queue.as_mut() {
            None => Err(QueueError::InvalidHandle),
            Some(queue) => Self::insert_into(queue, &self.config, &mut self.allocator, side, value),
        };

        match &result {
            Ok(()) => {
                self.metrics.record_insert(side);
                debug!(op = side.op_name(), bytes = value.len(), size = self.size(), "Inserted");
            }
            Err(QueueError::InvalidHandle) => {
                self.metrics.record_invalid_handle();
                warn!(op = side.op_name(), "Insert on absent queue");
            }
            Err(e) => {
                if e.is_allocation_failure() {
                    self.metrics.record_allocation_failure();
                }
                warn!(op = side.op_name(), error = %e, "Insert refused");
            }
        }
        result
    }

    fn insert_into(
        queue: &mut Queue,
        config: &QueueConfig,
        allocator: &mut A,
        side: InsertSide,
        value: &str,
    ) -> Result<(), QueueError> {
        config.admit(queue.size(), value)?;

        let requested = Node::footprint(value);
        if !allocator.permit(requested) {
            return Err(QueueError::AllocationFailed { requested });
        }

        match side {
            InsertSide::Head => queue.insert_head(value),
            InsertSide::Tail => queue.insert_tail(value),
        }
    }

    fn observe_removal<T>(&self, result: &Result<T, QueueError>) {
        match result {
            Ok(_) => {
                self.metrics.record_removal();
                debug!(op = "remove_head", size = self.size(), "Removed head");
            }
            Err(QueueError::EmptyQueue) => {
                self.metrics.record_failed_removal();
                debug!(op = "remove_head", "Remove on empty queue");
            }
            Err(QueueError::InvalidHandle) => {
                self.metrics.record_invalid_handle();
                warn!(op = "remove_head", "Remove on absent queue");
            }
            Err(e) => warn!(op = "remove_head", error = %e, "Remove failed"),
        }
    }

    fn absent(&self, op: &'static str) {
        self.metrics.record_invalid_handle();
        debug!(op, "No queue; nothing to do");
    }
}

impl<A: AllocationPolicy> QueueApi for QueueService<A> {
    fn create(&mut self) -> Result<(), QueueError> {
        self.destroy();

        let requested = mem::size_of::<Queue>();
        if !self.allocator.permit(requested) {
            self.metrics.record_allocation_failure();
            warn!(op = "create", requested, "Queue allocation refused");
            return Err(QueueError::AllocationFailed { requested });
        }

        self.queue = Some(Queue::new());
        self.metrics.record_created();
        debug!(op = "create", "Queue created");
        Ok(())
    }

    fn destroy(&mut self) {
        if let Some(queue) = self.queue.take() {
            let released = queue.size();
            queue.destroy();
            self.metrics.record_destroyed();
            debug!(op = "destroy", released, "Queue destroyed");
        }
    }

    fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        self.insert(InsertSide::Head, value)
    }

    fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        self.insert(InsertSide::Tail, value)
    }

    fn remove_head(&mut self, out: Option<&mut [u8]>) -> Result<usize, QueueError> {
        let result = match self.queue.as_mut() {
            None => Err(QueueError::InvalidHandle),
            Some(queue) => queue.remove_head(out),
        };
        self.observe_removal(&result);
        result
    }

    fn pop_head(&mut self) -> Result<String, QueueError> {
        let result = match self.queue.as_mut() {
            None => Err(QueueError::InvalidHandle),
            Some(queue) => queue.pop_head(),
        };
        self.observe_removal(&result);
        result
    }

    fn size(&self) -> usize {
        self.queue.as_ref().map_or(0, Queue::size)
    }

    fn reverse(&mut self) {
        match self.queue.as_mut() {
            Some(queue) => {
                queue.reverse();
                self.metrics.record_reversal();
                debug!(op = "reverse", size = queue.size(), "Reversed");
            }
            None => self.absent("reverse"),
        }
    }

    fn sort(&mut self) {
        match self.queue.as_mut() {
            Some(queue) => {
                queue.sort();
                self.metrics.record_sort();
                debug!(op = "sort", size = queue.size(), "Sorted");
            }
            None => self.absent("sort"),
        }
    }

    fn queue(&self) -> Option<&Queue> {
        self.queue.as_ref()
    }
}

impl<A: AllocationPolicy + Default> Default for QueueService<A> {
    fn default() -> Self {
        Self::new(A::default())
    }
}
