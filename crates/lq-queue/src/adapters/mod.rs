//! Adapters Layer - `AllocationPolicy` implementations

pub mod fault_injection;
pub mod system;

pub use fault_injection::FaultInjector;
pub use system::SystemAllocator;
