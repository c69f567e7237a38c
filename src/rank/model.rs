//! Random-surfer transition model.
//!
//! From a page with outlinks, the surfer follows one of them uniformly with
//! probability `damping`, and otherwise jumps to any page of the corpus
//! uniformly. A dangling page jumps uniformly with probability 1.
//!
//! ```text
//! P(q | p) = (1 - d) / N + d / |out(p)|   if q ∈ out(p)
//!          = (1 - d) / N                  otherwise
//!          = 1 / N                        if out(p) = ∅
//! ```

use crate::rank::config::validate_damping;
use crate::rank::corpus::{Corpus, PageId};
use crate::rank::table::RankTable;
use crate::rank::RankError;

/// Probability distribution over the pages of a corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionModel<'a> {
    corpus: &'a Corpus,

    /// Probability per page, indexed by [`PageId`].
    probabilities: Vec<f64>,
}

impl<'a> TransitionModel<'a> {
    /// Probability of moving to `page`, `None` if the page is unknown.
    pub fn get(&self, page: &str) -> Option<f64> {
        self.corpus.id(page).map(|id| self.probabilities[id])
    }

    /// Probabilities indexed by [`PageId`].
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// `(page, probability)` pairs in sorted page order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.corpus
            .names()
            .iter()
            .zip(&self.probabilities)
            .map(|(name, &p)| (name.as_str(), p))
    }

    /// Sum of all probabilities (1.0 up to rounding).
    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Copy the distribution into a page-keyed table.
    pub fn to_table(&self) -> RankTable {
        self.iter().collect()
    }
}

/// Distribution over the next page to visit from `page`.
///
/// # Errors
/// - [`RankError::EmptyCorpus`] if the corpus has no pages
/// - [`RankError::UnknownPage`] if `page` is not in the corpus
/// - [`RankError::Config`] if `damping` is outside `[0, 1]`
pub fn transition_model<'a>(
    corpus: &'a Corpus,
    page: &str,
    damping: f64,
) -> Result<TransitionModel<'a>, RankError> {
    validate_damping(damping)?;
    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus);
    }
    let id = corpus
        .id(page)
        .ok_or_else(|| RankError::UnknownPage(page.to_string()))?;

    Ok(TransitionModel {
        corpus,
        probabilities: transition_probabilities(corpus, id, damping),
    })
}

/// Unchecked core of [`transition_model`]: `corpus` must be non-empty and
/// `id` valid.
pub(crate) fn transition_probabilities(corpus: &Corpus, id: PageId, damping: f64) -> Vec<f64> {
    let n = corpus.len() as f64;
    let links = corpus.outlinks(id);

    if links.is_empty() {
        return vec![1.0 / n; corpus.len()];
    }

    let mut probabilities = vec![(1.0 - damping) / n; corpus.len()];
    let follow = damping / links.len() as f64;
    for &target in links {
        probabilities[target] += follow;
    }
    probabilities
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn sample_corpus() -> Corpus {
        Corpus::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html"]),
            ("4.html", vec![]),
        ])
    }

    #[test]
    fn test_linked_pages_get_damped_share() {
        let corpus = sample_corpus();
        let model = transition_model(&corpus, "2.html", 0.85).unwrap();

        let jump = 0.15 / 4.0;
        assert!((model.get("1.html").unwrap() - (jump + 0.425)).abs() < EPSILON);
        assert!((model.get("3.html").unwrap() - (jump + 0.425)).abs() < EPSILON);
        assert!((model.get("2.html").unwrap() - jump).abs() < EPSILON);
        assert!((model.get("4.html").unwrap() - jump).abs() < EPSILON);
        assert!((model.total() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_dangling_page_is_uniform() {
        let corpus = sample_corpus();
        let model = transition_model(&corpus, "4.html", 0.85).unwrap();
        for (_, p) in model.iter() {
            assert!((p - 0.25).abs() < EPSILON);
        }
    }

    #[test]
    fn test_to_table_covers_every_page() {
        let corpus = sample_corpus();
        let table = transition_model(&corpus, "1.html", 0.5).unwrap().to_table();
        assert_eq!(table.len(), 4);
        assert!((table.total() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_errors() {
        let corpus = sample_corpus();
        assert!(matches!(
            transition_model(&corpus, "nope.html", 0.85),
            Err(RankError::UnknownPage(page)) if page == "nope.html"
        ));
        assert!(matches!(
            transition_model(&corpus, "1.html", 1.2),
            Err(RankError::Config(_))
        ));

        let empty = Corpus::default();
        assert!(matches!(
            transition_model(&empty, "1.html", 0.85),
            Err(RankError::EmptyCorpus)
        ));
    }
}
