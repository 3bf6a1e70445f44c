//! Singly-linked FIFO queue of strings
//!
//! INVARIANTS:
//! - `size` equals the number of nodes reachable from `head`.
//! - `head` is `None` iff `size == 0` iff `tail` is `None`.
//! - `tail` points at the last node of the chain, whose `next` is `None`.
//!
//! `head` owns the chain. `tail` is a non-owning pointer into it, updated in
//! lockstep with every operation that changes which node is last or moves
//! the box that owns it; it is never used to free anything.

use std::fmt;
use std::ptr::{self, NonNull};

use super::buffer::copy_truncated;
use super::merge_sort::merge_sort;
use super::node::{Link, Node};
use crate::error::QueueError;

/// FIFO queue with O(1) insertion at both ends and O(1) head removal.
pub struct Queue {
    head: Link,
    tail: Option<NonNull<Node>>,
    size: usize,
}

impl Queue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Insert a copy of `value` before the current head.
    ///
    /// O(1). On failure the queue is unchanged.
    pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        let mut node = Node::try_new(value)?;
        node.next = self.head.take();
        let head = self.head.insert(node);

        // The tail is re-derived whenever the box owning the last node moves
        match self.size {
            0 => self.tail = Some(NonNull::from(&mut **head)),
            1 => self.tail = head.next.as_deref_mut().map(NonNull::from),
            _ => {}
        }
        self.size += 1;
        Ok(())
    }

    /// Insert a copy of `value` after the current tail.
    ///
    /// O(1). On failure the queue is unchanged.
    pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        let node = Node::try_new(value)?;
        let slot = match self.tail {
            // SAFETY: `tail` points at the last node of the chain owned by
            // `head`, and `&mut self` rules out any other live reference into it.
            Some(mut tail) => unsafe { &mut tail.as_mut().next },
            None => &mut self.head,
        };
        let node = slot.insert(node);

        self.tail = Some(NonNull::from(&mut **node));
        self.size += 1;
        Ok(())
    }

    /// Detach the head node and hand back its payload.
    pub fn pop_head(&mut self) -> Result<String, QueueError> {
        let mut node = self.head.take().ok_or(QueueError::EmptyQueue)?;
        self.head = node.next.take();
        self.size -= 1;

        match self.size {
            0 => self.tail = None,
            // The last node's box just moved into `head`
            1 => self.tail = self.head.as_deref_mut().map(NonNull::from),
            _ => {}
        }
        Ok(node.into_value())
    }

    /// Remove the head node, optionally copying its payload into `out`.
    ///
    /// At most `out.len() - 1` bytes are copied, always followed by a NUL
    /// terminator. Returns the number of payload bytes written, 0 when no
    /// buffer was supplied.
    pub fn remove_head(&mut self, out: Option<&mut [u8]>) -> Result<usize, QueueError> {
        let value = self.pop_head()?;
        Ok(out.map_or(0, |buf| copy_truncated(&value, buf)))
    }

    /// Number of elements, from the maintained counter.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn peek_head(&self) -> Option<&str> {
        self.head.as_deref().map(Node::value)
    }

    pub fn peek_tail(&self) -> Option<&str> {
        // SAFETY: `tail` points into the chain owned by `self`, which outlives
        // the returned borrow.
        self.tail.map(|tail| unsafe { tail.as_ref() }.value())
    }

    /// Payloads from head to tail.
    pub fn values(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.size);
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            out.push(node.value());
            cursor = node.next.as_deref();
        }
        out
    }

    /// Reverse the chain in place, swapping head and tail.
    ///
    /// O(n) time, O(1) extra space. No node is allocated, freed or modified
    /// beyond its link.
    pub fn reverse(&mut self) {
        if self.size <= 1 {
            return;
        }

        let mut previous: Link = None;
        let mut current = self.head.take();
        self.tail = None;

        while let Some(mut node) = current {
            let next = node.next.take();
            node.next = previous;
            if self.tail.is_none() {
                // Old head, now in its final slot behind the second node
                self.tail = node.next.as_deref_mut().map(NonNull::from);
            }
            previous = Some(node);
            current = next;
        }

        self.head = previous;
    }

    /// Sort ascending by byte-wise payload comparison, keeping equal
    /// payloads in their original order.
    pub fn sort(&mut self) {
        if self.size <= 1 {
            return;
        }

        self.head = merge_sort(self.head.take());
        self.tail = last_node(&mut self.head);
    }

    /// Walk the chain and verify every structural invariant.
    pub fn check_invariants(&self) -> Result<(), QueueError> {
        let mut count = 0usize;
        let mut last: Option<&Node> = None;
        let mut cursor = self.head.as_deref();

        while let Some(node) = cursor {
            count += 1;
            if count > self.size {
                return Err(QueueError::Corrupted(format!(
                    "chain is longer than recorded size {}",
                    self.size
                )));
            }
            last = Some(node);
            cursor = node.next.as_deref();
        }

        if count != self.size {
            return Err(QueueError::Corrupted(format!(
                "recorded size {} but chain holds {} nodes",
                self.size, count
            )));
        }

        match (last, self.tail) {
            (None, None) => Ok(()),
            (Some(node), Some(tail)) if ptr::eq(node, tail.as_ptr()) => Ok(()),
            (None, Some(_)) => Err(QueueError::Corrupted(
                "tail is set on an empty queue".to_string(),
            )),
            _ => Err(QueueError::Corrupted(
                "tail does not reference the last node".to_string(),
            )),
        }
    }

    /// Consume the queue, releasing every node and payload.
    pub fn destroy(self) {
        drop(self);
    }
}

/// Pointer to the last node of a chain.
fn last_node(head: &mut Link) -> Option<NonNull<Node>> {
    let mut cursor = head.as_mut()?;
    while cursor.next.is_some() {
        cursor = cursor.next.as_mut()?;
    }
    Some(NonNull::from(&mut **cursor))
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop of `Box` chains can
        // overflow the stack on long queues.
        self.tail = None;
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("size", &self.size)
            .field("values", &self.values())
            .finish()
    }
}
