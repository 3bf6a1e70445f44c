//! Randomised allocation failures for exercising failure paths
//!
//! Every request is refused with probability `p`. Seeding the generator makes
//! a failure sequence reproducible across runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::QueueError;
use crate::ports::AllocationPolicy;

/// Allocation policy that refuses requests at random.
#[derive(Debug)]
pub struct FaultInjector {
    probability: f64,
    rng: StdRng,
    injected: u64,
}

impl FaultInjector {
    /// Create an injector refusing requests with `probability` (0.0 to 1.0).
    ///
    /// `seed` fixes the random sequence; `None` seeds from OS entropy.
    pub fn new(probability: f64, seed: Option<u64>) -> Result<Self, QueueError> {
        validate_probability(probability)?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            probability,
            rng,
            injected: 0,
        })
    }

    /// Injector that never refuses.
    pub fn disabled() -> Self {
        Self {
            probability: 0.0,
            rng: StdRng::seed_from_u64(0),
            injected: 0,
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn set_probability(&mut self, probability: f64) -> Result<(), QueueError> {
        validate_probability(probability)?;
        self.probability = probability;
        Ok(())
    }

    /// Number of requests refused so far
    pub fn injected(&self) -> u64 {
        self.injected
    }
}

impl Default for FaultInjector {
    fn default() -> Self {
        Self::disabled()
    }
}

impl AllocationPolicy for FaultInjector {
    fn permit(&mut self, bytes: usize) -> bool {
        if self.probability <= 0.0 {
            return true;
        }
        if self.rng.gen_bool(self.probability) {
            self.injected += 1;
            tracing::trace!(bytes, injected = self.injected, "Injected allocation failure");
            return false;
        }
        true
    }
}

fn validate_probability(probability: f64) -> Result<(), QueueError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(QueueError::InvalidConfig(format!(
            "failure probability {} must be between 0 and 1",
            probability
        )));
    }
    Ok(())
}
