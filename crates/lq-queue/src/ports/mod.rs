//! Ports Layer - trait definitions
//!
//! - `QueueApi`: driving port (inbound operation contract)
//! - `AllocationPolicy`: driven port (storage admission)

pub mod inbound;
pub mod outbound;

pub use inbound::QueueApi;
pub use outbound::AllocationPolicy;
