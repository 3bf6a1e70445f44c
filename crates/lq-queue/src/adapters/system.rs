//! Allocation policy that defers entirely to the global allocator

use crate::ports::AllocationPolicy;

/// Permits every request.
///
/// Real exhaustion still surfaces through the fallible payload reservation
/// in the domain layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAllocator;

impl AllocationPolicy for SystemAllocator {
    fn permit(&mut self, _bytes: usize) -> bool {
        true
    }
}
