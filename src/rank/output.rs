//! Output formatting for PageRank results.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rank::table::RankTable;
use crate::rank::RankError;

/// Results of both estimators over one corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankReport {
    /// Number of pages in the corpus.
    pub pages: usize,
    /// Damping factor used by both estimators.
    pub damping: f64,
    /// Sample count of the Monte Carlo estimate.
    pub samples: usize,
    /// Passes taken by the iterative estimate.
    pub iterations: usize,
    /// Monte Carlo estimate.
    pub sampled: RankTable,
    /// Fixed-point estimate.
    pub iterated: RankTable,
}

impl RankReport {
    /// Largest disagreement between the two estimates.
    pub fn max_disagreement(&self) -> f64 {
        self.sampled.max_abs_diff(&self.iterated)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, RankError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save as JSON to a file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), RankError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        File::create(path)
            .and_then(|mut file| file.write_all(json.as_bytes()))
            .map_err(|source| RankError::Io {
                operation: "write report",
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Write one estimate as indented `page: rank` lines, sorted by page.
fn write_table(f: &mut fmt::Formatter<'_>, title: &str, table: &RankTable) -> fmt::Result {
    writeln!(f, "{}", title)?;
    for (page, rank) in table.iter() {
        writeln!(f, "  {}: {:.4}", page, rank)?;
    }
    Ok(())
}

impl fmt::Display for RankReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(
            f,
            &format!("PageRank Results from Sampling (n = {})", self.samples),
            &self.sampled,
        )?;
        write_table(f, "PageRank Results from Iteration", &self.iterated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RankReport {
        RankReport {
            pages: 2,
            damping: 0.85,
            samples: 100,
            iterations: 3,
            sampled: [("b.html", 0.61), ("a.html", 0.38)].into_iter().collect(),
            iterated: [("a.html", 0.4), ("b.html", 0.6)].into_iter().collect(),
        }
    }

    #[test]
    fn test_display_sorted_four_decimals() {
        let expected = "\
PageRank Results from Sampling (n = 100)
  a.html: 0.3800
  b.html: 0.6100
PageRank Results from Iteration
  a.html: 0.4000
  b.html: 0.6000
";
        assert_eq!(report().to_string(), expected);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranks.json");
        let original = report();
        original.save_json(&path).unwrap();

        let loaded: RankReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, original);
        assert!((loaded.max_disagreement() - 0.02).abs() < 1e-12);
    }
}
