//! Queue limits and their validation
//!
//! # Example
//!
//! ```ignore
//! use lq_queue::domain::QueueConfigBuilder;
//!
//! let config = QueueConfigBuilder::new()
//!     .max_elements(10_000)
//!     .max_value_bytes(1024)
//!     .build()
//!     .expect("Valid config");
//! ```

use crate::error::QueueError;
use serde::{Deserialize, Serialize};

/// Storage limits enforced before a node is allocated.
///
/// `None` means unlimited. A request beyond a limit is refused the same way
/// exhausted backing storage is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Maximum number of elements held at once
    pub max_elements: Option<usize>,
    /// Maximum payload length in bytes
    pub max_value_bytes: Option<usize>,
}

impl QueueConfig {
    /// Create a new configuration with validation
    pub fn new(
        max_elements: Option<usize>,
        max_value_bytes: Option<usize>,
    ) -> Result<Self, QueueError> {
        let config = Self {
            max_elements,
            max_value_bytes,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), QueueError> {
        if self.max_elements == Some(0) {
            return Err(QueueError::InvalidConfig(
                "max_elements cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Check whether one more element holding `value` fits beside `current`.
    pub fn admit(&self, current: usize, value: &str) -> Result<(), QueueError> {
        if let Some(capacity) = self.max_elements {
            if current >= capacity {
                return Err(QueueError::CapacityExceeded { capacity });
            }
        }
        if let Some(max) = self.max_value_bytes {
            if value.len() > max {
                return Err(QueueError::ValueTooLarge {
                    len: value.len(),
                    max,
                });
            }
        }
        Ok(())
    }

    pub fn with_max_elements(mut self, max: usize) -> Self {
        self.max_elements = Some(max);
        self
    }

    pub fn with_max_value_bytes(mut self, max: usize) -> Self {
        self.max_value_bytes = Some(max);
        self
    }
}

/// Builder for QueueConfig with validation
#[derive(Default)]
pub struct QueueConfigBuilder {
    max_elements: Option<usize>,
    max_value_bytes: Option<usize>,
}

impl QueueConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum number of elements
    pub fn max_elements(mut self, max: usize) -> Self {
        self.max_elements = Some(max);
        self
    }

    /// Set maximum payload length in bytes (0 admits only empty strings)
    pub fn max_value_bytes(mut self, max: usize) -> Self {
        self.max_value_bytes = Some(max);
        self
    }

    /// Build the QueueConfig, validating all parameters
    pub fn build(self) -> Result<QueueConfig, QueueError> {
        QueueConfig::new(self.max_elements, self.max_value_bytes)
    }
}
