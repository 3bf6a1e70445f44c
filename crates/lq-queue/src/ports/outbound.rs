//! Outbound Ports (Driven Ports)
//!
//! Dependencies the queue service consults but does not implement.

/// Decides whether a request for backing storage may proceed.
///
/// Consulted before the queue handle or any node is allocated. A refusal is
/// reported to the caller as `AllocationFailed` with no state change.
pub trait AllocationPolicy {
    /// Return `false` to refuse a request for `bytes` of storage.
    fn permit(&mut self, bytes: usize) -> bool;
}

impl<P: AllocationPolicy + ?Sized> AllocationPolicy for Box<P> {
    fn permit(&mut self, bytes: usize) -> bool {
        (**self).permit(bytes)
    }
}
