//! Estimated ranks keyed by page name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Page -> estimated rank, iterated in sorted page order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankTable {
    ranks: BTreeMap<String, f64>,
}

impl RankTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank of a page, `None` if the page is absent.
    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    /// Set the rank of a page.
    pub fn insert(&mut self, page: impl Into<String>, rank: f64) {
        self.ranks.insert(page.into(), rank);
    }

    /// Number of pages with a rank.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether no page has a rank.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// `(page, rank)` pairs sorted by page name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ranks.iter().map(|(page, &rank)| (page.as_str(), rank))
    }

    /// Sum of all ranks.
    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// The highest-ranked page. Ties go to the first page in sorted order.
    pub fn top(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (page, rank) in self.iter() {
            if best.map_or(true, |(_, best_rank)| rank > best_rank) {
                best = Some((page, rank));
            }
        }
        best
    }

    /// Largest absolute difference between two tables.
    ///
    /// A page missing from one table counts as rank 0 there.
    pub fn max_abs_diff(&self, other: &RankTable) -> f64 {
        self.ranks
            .keys()
            .chain(other.ranks.keys())
            .map(|page| {
                let a = self.get(page).unwrap_or(0.0);
                let b = other.get(page).unwrap_or(0.0);
                (a - b).abs()
            })
            .fold(0.0, f64::max)
    }
}

impl<P: Into<String>> FromIterator<(P, f64)> for RankTable {
    fn from_iter<I: IntoIterator<Item = (P, f64)>>(iter: I) -> Self {
        Self {
            ranks: iter
                .into_iter()
                .map(|(page, rank)| (page.into(), rank))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_and_total() {
        let table: RankTable = [("a", 0.2), ("b", 0.5), ("c", 0.3)].into_iter().collect();
        assert_eq!(table.top(), Some(("b", 0.5)));
        assert!((table.total() - 1.0).abs() < 1e-12);
        assert_eq!(RankTable::new().top(), None);
    }

    #[test]
    fn test_top_tie_prefers_first_page() {
        let table: RankTable = [("b", 0.5), ("a", 0.5)].into_iter().collect();
        assert_eq!(table.top(), Some(("a", 0.5)));
    }

    #[test]
    fn test_max_abs_diff_counts_missing_as_zero() {
        let a: RankTable = [("x", 0.6), ("y", 0.4)].into_iter().collect();
        let b: RankTable = [("x", 0.5)].into_iter().collect();
        assert!((a.max_abs_diff(&b) - 0.4).abs() < 1e-12);
        assert_eq!(a.max_abs_diff(&a), 0.0);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let table: RankTable = [("1.html", 0.25)].into_iter().collect();
        assert_eq!(serde_json::to_string(&table).unwrap(), r#"{"1.html":0.25}"#);
    }
}
