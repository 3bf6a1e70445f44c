//! Chain cell owning one string payload

use crate::error::QueueError;

/// Ownership link to the next cell, `None` at the end of the chain.
pub(crate) type Link = Option<Box<Node>>;

/// One cell of the queue's chain.
///
/// A node exclusively owns its payload and at most one successor. Nodes are
/// only created by queue insertion and only freed by head removal or queue
/// teardown.
#[derive(Debug)]
pub struct Node {
    value: String,
    pub(crate) next: Link,
}

impl Node {
    /// Allocate a detached node holding an independent copy of `value`.
    ///
    /// The payload buffer is reserved fallibly so exhaustion is reported as
    /// `AllocationFailed` rather than aborting. Nothing is kept on failure.
    pub(crate) fn try_new(value: &str) -> Result<Box<Self>, QueueError> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(value.len())
            .map_err(|_| QueueError::AllocationFailed {
                requested: value.len(),
            })?;
        owned.push_str(value);

        Ok(Box::new(Self {
            value: owned,
            next: None,
        }))
    }

    /// Payload stored in this node.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn into_value(self) -> String {
        self.value
    }

    /// Bytes of backing storage one node holding `value` occupies.
    pub fn footprint(value: &str) -> usize {
        std::mem::size_of::<Self>() + value.len()
    }
}
