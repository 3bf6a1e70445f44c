//! # Linked-Queue Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Service and shell flows across crates
//! │   ├── service_flows.rs
//! │   ├── fault_injection.rs
//! │   └── shell_scripts.rs
//! │
//! └── properties/       # Randomized checks against a model
//!     └── queue_properties.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lq-tests
//!
//! # By category
//! cargo test -p lq-tests integration::
//! cargo test -p lq-tests properties::
//!
//! # Benchmarks
//! cargo bench -p lq-tests
//! ```

pub mod integration;
pub mod properties;
