//! # Property Tests
//!
//! Random operation sequences checked against a `VecDeque` model.
