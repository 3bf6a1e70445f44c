//! Operation counters for queue handles
//!
//! ## Usage
//!
//! ```ignore
//! use lq_queue::metrics::{InsertSide, Metrics};
//!
//! let metrics = Metrics::new();
//! metrics.record_insert(InsertSide::Tail);
//! let snapshot = metrics.snapshot();
//! println!("{}", serde_json::to_string(&snapshot)?);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Which end of the queue an insert targeted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertSide {
    Head,
    Tail,
}

impl InsertSide {
    pub fn op_name(self) -> &'static str {
        match self {
            Self::Head => "insert_head",
            Self::Tail => "insert_tail",
        }
    }
}

/// Counters for queue operations
#[derive(Debug, Default)]
pub struct Metrics {
    pub queues_created: AtomicU64,
    pub queues_destroyed: AtomicU64,
    pub head_inserts: AtomicU64,
    pub tail_inserts: AtomicU64,
    pub removals: AtomicU64,
    /// Removals refused because the queue was empty
    pub failed_removals: AtomicU64,
    pub reversals: AtomicU64,
    pub sorts: AtomicU64,
    /// Creates and inserts refused for lack of storage or by configured limits
    pub allocation_failures: AtomicU64,
    /// Operations attempted with no queue present
    pub invalid_handle_calls: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_created(&self) {
        self.queues_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_destroyed(&self) {
        self.queues_destroyed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_insert(&self, side: InsertSide) {
        let counter = match side {
            InsertSide::Head => &self.head_inserts,
            InsertSide::Tail => &self.tail_inserts,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_removal(&self) {
        self.removals.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed_removal(&self) {
        self.failed_removals.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reversal(&self) {
        self.reversals.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_sort(&self) {
        self.sorts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_allocation_failure(&self) {
        self.allocation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invalid_handle(&self) {
        self.invalid_handle_calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queues_created: self.queues_created.load(Ordering::Relaxed),
            queues_destroyed: self.queues_destroyed.load(Ordering::Relaxed),
            head_inserts: self.head_inserts.load(Ordering::Relaxed),
            tail_inserts: self.tail_inserts.load(Ordering::Relaxed),
            removals: self.removals.load(Ordering::Relaxed),
            failed_removals: self.failed_removals.load(Ordering::Relaxed),
            reversals: self.reversals.load(Ordering::Relaxed),
            sorts: self.sorts.load(Ordering::Relaxed),
            allocation_failures: self.allocation_failures.load(Ordering::Relaxed),
            invalid_handle_calls: self.invalid_handle_calls.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of `Metrics`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub queues_created: u64,
    pub queues_destroyed: u64,
    pub head_inserts: u64,
    pub tail_inserts: u64,
    pub removals: u64,
    pub failed_removals: u64,
    pub reversals: u64,
    pub sorts: u64,
    pub allocation_failures: u64,
    pub invalid_handle_calls: u64,
}

impl MetricsSnapshot {
    pub fn total_inserts(&self) -> u64 {
        self.head_inserts + self.tail_inserts
    }
}
