//! Iterative PageRank estimation.
//!
//! Every page starts at `1 / N`, then each pass recomputes all ranks from
//! the previous pass:
//!
//! ```text
//! PR(p) = (1 - d) / N + d * ( Σ_{i → p} PR(i) / |out(i)|  +  Σ_{dangling j} PR(j) / N )
//! ```
//!
//! Iteration stops once no page moves by more than the threshold. The
//! ranks are then divided by their sum so they total exactly 1.

use crate::rank::config::RankConfig;
use crate::rank::corpus::{Corpus, PageId};
use crate::rank::table::RankTable;
use crate::rank::RankError;

/// Result of running the fixed-point iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Convergence {
    /// Normalized ranks after the final pass.
    pub ranks: RankTable,
    /// Passes performed.
    pub iterations: usize,
    /// Largest per-page change in the final pass.
    pub max_delta: f64,
    /// Whether `max_delta` reached the threshold within the iteration cap.
    pub converged: bool,
}

/// Estimate PageRank by fixed-point iteration from uniform ranks, using the
/// default threshold (0.001) and iteration cap.
///
/// # Errors
/// - [`RankError::EmptyCorpus`] if the corpus has no pages
/// - [`RankError::Config`] if `damping` is outside `[0, 1]`
/// - [`RankError::NotConverged`] if the ranks do not settle within
///   the default iteration cap
pub fn iterate_pagerank(corpus: &Corpus, damping: f64) -> Result<RankTable, RankError> {
    let config = RankConfig::default().with_damping(damping);

    let result = iterate_pagerank_from(corpus, &config, None)?;
    if !result.converged {
        return Err(RankError::NotConverged {
            iterations: result.iterations,
            max_delta: result.max_delta,
        });
    }
    Ok(result.ranks)
}

/// Run the fixed-point iteration with explicit parameters.
///
/// Starts from `initial` if given (pages missing from it start at 0),
/// otherwise from uniform ranks. Returns after convergence or after
/// `config.max_iterations` passes, whichever comes first; the result says
/// which.
pub fn iterate_pagerank_from(
    corpus: &Corpus,
    config: &RankConfig,
    initial: Option<&RankTable>,
) -> Result<Convergence, RankError> {
    config.validate()?;
    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus);
    }

    let n = corpus.len();
    let damping = config.damping;
    let base = (1.0 - damping) / n as f64;
    let inlinks = corpus.inlinks();
    let dangling: Vec<PageId> = (0..n).filter(|&id| corpus.is_dangling(id)).collect();

    let mut ranks: Vec<f64> = match initial {
        Some(table) => corpus
            .names()
            .iter()
            .map(|name| table.get(name).unwrap_or(0.0))
            .collect(),
        None => vec![1.0 / n as f64; n],
    };

    let mut iterations = 0;
    let mut max_delta = f64::INFINITY;

    while iterations < config.max_iterations {
        iterations += 1;

        let dangling_share: f64 =
            dangling.iter().map(|&id| ranks[id]).sum::<f64>() / n as f64;

        let next: Vec<f64> = inlinks
            .iter()
            .map(|sources| {
                let linked: f64 = sources
                    .iter()
                    .map(|&source| ranks[source] / corpus.outlinks(source).len() as f64)
                    .sum();
                base + damping * (linked + dangling_share)
            })
            .collect();

        max_delta = next
            .iter()
            .zip(&ranks)
            .map(|(new, old)| (new - old).abs())
            .fold(0.0, f64::max);
        ranks = next;

        if max_delta <= config.threshold {
            break;
        }
    }

    let total: f64 = ranks.iter().sum();
    if total > 0.0 {
        for rank in &mut ranks {
            *rank /= total;
        }
    }

    Ok(Convergence {
        ranks: corpus
            .names()
            .iter()
            .zip(ranks)
            .map(|(name, rank)| (name.as_str(), rank))
            .collect(),
        iterations,
        max_delta,
        converged: max_delta <= config.threshold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_corpus() -> Corpus {
        Corpus::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html"]),
        ])
    }

    #[test]
    fn test_most_linked_page_ranks_highest() {
        let ranks = iterate_pagerank(&sample_corpus(), 0.85).unwrap();

        assert_eq!(ranks.top().map(|(page, _)| page), Some("2.html"));
        assert!((ranks.total() - 1.0).abs() < 1e-6);
        assert!((ranks.get("2.html").unwrap() - 0.486).abs() < 0.002);
        assert!((ranks.get("1.html").unwrap() - ranks.get("3.html").unwrap()).abs() < 1e-12);
    }

    #[test]
    fn test_rerun_from_result_stays_put() {
        let corpus = sample_corpus();
        let config = RankConfig::default();
        let first = iterate_pagerank_from(&corpus, &config, None).unwrap();
        assert!(first.converged);

        let second = iterate_pagerank_from(&corpus, &config, Some(&first.ranks)).unwrap();
        assert!(second.converged);
        assert_eq!(second.iterations, 1);
        assert!(second.ranks.max_abs_diff(&first.ranks) <= config.threshold);
    }

    #[test]
    fn test_dangling_pages_spread_rank() {
        let corpus = Corpus::from_links([
            ("1", vec!["2"]),
            ("2", vec!["3"]),
            ("3", vec![]),
            ("4", vec!["1", "3"]),
        ]);
        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();

        assert_eq!(ranks.len(), 4);
        assert!((ranks.total() - 1.0).abs() < 1e-6);
        assert_eq!(ranks.top().map(|(page, _)| page), Some("3"));
        // Nothing links to 4, it only receives the random jump and dangling share.
        let lowest = ranks.iter().map(|(_, r)| r).fold(f64::INFINITY, f64::min);
        assert_eq!(ranks.get("4"), Some(lowest));
    }

    #[test]
    fn test_all_dangling_is_uniform() {
        let corpus = Corpus::from_links([("a", Vec::<&str>::new()), ("b", vec![])]);
        let result = iterate_pagerank_from(&corpus, &RankConfig::default(), None).unwrap();
        assert_eq!(result.iterations, 1);
        assert!((result.ranks.get("a").unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_iteration_cap_reports_not_converged() {
        let config = RankConfig::default().with_max_iterations(1).with_threshold(1e-12);
        let result = iterate_pagerank_from(&sample_corpus(), &config, None).unwrap();
        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
        assert!((result.ranks.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            iterate_pagerank(&Corpus::default(), 0.85),
            Err(RankError::EmptyCorpus)
        ));
        assert!(matches!(
            iterate_pagerank(&sample_corpus(), 1.01),
            Err(RankError::Config(_))
        ));
    }
}
