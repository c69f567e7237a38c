//! Configuration options for the PageRank estimators.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rank::RankError;

/// Probability of following a link rather than jumping to a random page.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Number of pages drawn by the sampling estimator.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Largest per-page change at which iteration counts as converged.
pub const DEFAULT_THRESHOLD: f64 = 0.001;

/// Upper bound on fixed-point passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Configuration for PageRank estimation.
///
/// # Example
/// ```
/// use solver_poc_ai::rank::RankConfig;
///
/// let config = RankConfig::default().with_samples(1_000).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.damping, 0.85);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Damping factor in `[0, 1]`.
    pub damping: f64,

    /// Number of samples for the Monte Carlo estimator.
    pub samples: usize,

    /// Convergence threshold for the iterative estimator.
    pub threshold: f64,

    /// Maximum passes before the iterative estimator gives up.
    pub max_iterations: usize,

    /// Random seed for reproducible sampling.
    ///
    /// If `None`, a random seed is used.
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl RankConfig {
    /// Create a new RankConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RankError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| RankError::Io {
            operation: "read config",
            path: path.to_path_buf(),
            source,
        })?;
        let config: RankConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method: set damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set number of samples.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Builder method: set convergence threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder method: set iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_damping(self.damping)?;

        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        Ok(())
    }

    /// Random source for sampling, seeded if a seed is configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Check that a damping factor is a probability.
pub fn validate_damping(damping: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(ConfigError::InvalidDamping(damping));
    }
    Ok(())
}

/// Errors that can occur when validating rank configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Damping factor is out of range [0, 1] or not a number.
    #[error("damping factor {0} is out of range [0, 1]")]
    InvalidDamping(f64),
    /// Threshold is not a positive finite number.
    #[error("convergence threshold {0} must be positive")]
    InvalidThreshold(f64),
    /// Iteration cap of zero.
    #[error("max_iterations must be at least 1")]
    ZeroMaxIterations,
}
