//! Stable merge sort over owned chain links
//!
//! Nodes are relinked, never copied or reallocated. Recursion depth is
//! `O(log n)` because every split halves the chain.
//!
//! INVARIANTS:
//! - The multiset of nodes is unchanged.
//! - Equal payloads keep their relative order (front half wins ties).

use super::node::{Link, Node};

/// Sort a detached chain ascending by byte-wise payload comparison.
pub(crate) fn merge_sort(head: Link) -> Link {
    let mut front = match head {
        Some(node) if node.next.is_some() => node,
        short => return short,
    };

    let front_len = front_half_len(&front);
    let back = detach_after(&mut front, front_len);

    merge(merge_sort(Some(front)), merge_sort(back))
}

/// Number of nodes the front half keeps.
///
/// A fast cursor advances two links for every link the slow cursor
/// advances; the slow cursor's position when fast runs out is the midpoint.
/// Odd lengths leave the extra node in the front half.
fn front_half_len(head: &Node) -> usize {
    let mut slow = 1;
    let mut fast = head;
    while let Some(next) = fast.next.as_deref().and_then(|n| n.next.as_deref()) {
        fast = next;
        slow += 1;
    }
    slow
}

/// Cut the chain after its `len`-th node and return the remainder.
fn detach_after(head: &mut Box<Node>, len: usize) -> Link {
    let mut cursor = head;
    for _ in 1..len {
        cursor = cursor.next.as_mut()?;
    }
    cursor.next.take()
}

/// Merge two sorted chains by relinking their nodes.
fn merge(mut left: Link, mut right: Link) -> Link {
    let mut merged: Link = None;
    let mut tail = &mut merged;

    loop {
        let take_right = match (left.as_deref(), right.as_deref()) {
            (Some(l), Some(r)) => r.value() < l.value(),
            _ => break,
        };
        let source = if take_right { &mut right } else { &mut left };
        let Some(mut node) = source.take() else {
            break;
        };
        *source = node.next.take();
        tail = &mut tail.insert(node).next;
    }

    *tail = if left.is_some() { left } else { right };
    merged
}
