//! Configuration options for the minimax solver.
//!
//! This module provides the configuration struct that selects the search
//! variant and seeds move shuffling, plus the statistics returned with
//! every search.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Order in which the solver expands the moves of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrdering {
    /// Row-major order with full alpha-beta bounds.
    ///
    /// Deterministic: ties keep the earliest move in row-major order.
    #[default]
    Sequential,

    /// Random order with a single opponent bound.
    ///
    /// Ties keep the earliest move in the shuffled order, so the chosen move
    /// depends on the seed. The game value does not.
    Shuffled,
}

impl std::str::FromStr for MoveOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(MoveOrdering::Sequential),
            "shuffled" => Ok(MoveOrdering::Shuffled),
            other => Err(format!(
                "unknown move ordering '{}' (expected 'sequential' or 'shuffled')",
                other
            )),
        }
    }
}

/// Configuration for the minimax solver.
///
/// # Example
/// ```
/// use solver_poc_ai::search::{MoveOrdering, SearchConfig};
///
/// let config = SearchConfig::default();
/// assert_eq!(config.ordering, MoveOrdering::Sequential);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Move expansion order, which also selects the pruning scheme.
    pub ordering: MoveOrdering,

    /// Random seed for shuffled ordering.
    ///
    /// If `None`, a random seed is used. Ignored by sequential ordering.
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Create a new SearchConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic alpha-beta search.
    pub fn sequential() -> Self {
        Self {
            ordering: MoveOrdering::Sequential,
            seed: None,
        }
    }

    /// Randomized-order search with the given seed.
    pub fn shuffled(seed: u64) -> Self {
        Self {
            ordering: MoveOrdering::Shuffled,
            seed: Some(seed),
        }
    }

    /// Builder method: set move ordering.
    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random source for move shuffling.
    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Statistics tracked during a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, the root included.
    pub nodes: u64,

    /// Times a helper stopped expanding moves early.
    pub cutoffs: u64,
}

impl SearchStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the counts of another search.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ordering() {
        assert_eq!("sequential".parse(), Ok(MoveOrdering::Sequential));
        assert_eq!("Shuffled".parse(), Ok(MoveOrdering::Shuffled));
        assert!("random".parse::<MoveOrdering>().is_err());
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = SearchConfig::shuffled(7);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"ordering":"shuffled","seed":7}"#);

        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ordering, MoveOrdering::Shuffled);
        assert_eq!(back.seed, Some(7));
    }

    #[test]
    fn test_stats_merge() {
        let mut total = SearchStats::new();
        total.merge(&SearchStats { nodes: 10, cutoffs: 2 });
        total.merge(&SearchStats { nodes: 5, cutoffs: 1 });
        assert_eq!(total, SearchStats { nodes: 15, cutoffs: 3 });
    }
}
