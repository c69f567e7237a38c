//! Error type for corpus loading and rank estimation.

use std::path::PathBuf;

use rand::distributions::WeightedError;
use thiserror::Error;

use crate::rank::config::ConfigError;

/// Errors produced by the rank estimators and the corpus builder.
#[derive(Error, Debug)]
pub enum RankError {
    /// The corpus has no pages, so no distribution over it exists.
    #[error("corpus has no pages")]
    EmptyCorpus,

    /// A page name that is not a key of the corpus.
    #[error("page '{0}' is not in the corpus")]
    UnknownPage(String),

    /// Sampling was asked for zero samples.
    #[error("sample count must be at least 1")]
    NoSamples,

    /// The iteration cap was reached before the ranks settled.
    #[error("ranks did not converge after {iterations} iterations (last change {max_delta})")]
    NotConverged {
        /// Passes performed.
        iterations: usize,
        /// Largest per-page change in the final pass.
        max_delta: f64,
    },

    /// Invalid estimator parameters.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A transition distribution with no positive weight.
    #[error("invalid transition distribution: {0}")]
    Distribution(#[from] WeightedError),

    /// Filesystem failure while reading a corpus or writing a report.
    #[error("failed to {operation} {}: {source}", path.display())]
    Io {
        /// What was being attempted.
        operation: &'static str,
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
