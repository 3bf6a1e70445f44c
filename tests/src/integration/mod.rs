//! # Integration Tests
//!
//! Flows through the public `QueueApi`, the allocation policies, and the
//! command shell.

pub mod fault_injection;
pub mod service_flows;
