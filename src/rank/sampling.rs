//! Monte Carlo PageRank estimation.
//!
//! A random surfer starts on a uniformly chosen page and takes `n - 1`
//! steps through the [transition model](crate::rank::model). Each page's
//! rank is the number of steps that landed on it divided by `n`.
//!
//! The starting page is not counted, so ranks sum to `(n - 1) / n`. Pages
//! the walk never reaches are absent from the result rather than ranked 0.
//! Both are expected sampling noise and vanish as `n` grows.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::rank::config::validate_damping;
use crate::rank::corpus::{Corpus, PageId};
use crate::rank::model::transition_probabilities;
use crate::rank::table::RankTable;
use crate::rank::RankError;

/// Progress reported to the sampling callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingProgress {
    /// Steps taken so far.
    pub steps: usize,
    /// Steps the walk will take in total (`n - 1`).
    pub total_steps: usize,
}

/// Estimate PageRank by sampling `samples` pages from a random walk.
///
/// Reproducible under a seeded `rng`.
///
/// # Errors
/// - [`RankError::NoSamples`] if `samples` is 0
/// - [`RankError::EmptyCorpus`] if the corpus has no pages
/// - [`RankError::Config`] if `damping` is outside `[0, 1]`
pub fn sample_pagerank<R: Rng + ?Sized>(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<RankTable, RankError> {
    sample_pagerank_with_callback(corpus, damping, samples, rng, 0, |_| {})
}

/// [`sample_pagerank`] with a callback for progress tracking.
///
/// # Arguments
/// * `callback_interval` - Steps between callback invocations (0 = never)
/// * `callback` - Function called every `callback_interval` steps
pub fn sample_pagerank_with_callback<R, F>(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    rng: &mut R,
    callback_interval: usize,
    mut callback: F,
) -> Result<RankTable, RankError>
where
    R: Rng + ?Sized,
    F: FnMut(&SamplingProgress),
{
    validate_damping(damping)?;
    if samples == 0 {
        return Err(RankError::NoSamples);
    }
    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus);
    }

    let total_steps = samples - 1;
    let mut walker = Walker::new(corpus, damping);
    let mut visits = vec![0u64; corpus.len()];
    let mut page: PageId = rng.gen_range(0..corpus.len());

    for step in 1..=total_steps {
        page = walker.step(page, rng)?;
        visits[page] += 1;

        if callback_interval > 0 && step % callback_interval == 0 {
            callback(&SamplingProgress { steps: step, total_steps });
        }
    }

    Ok(visits
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(id, &count)| (corpus.names()[id].as_str(), count as f64 / samples as f64))
        .collect())
}

/// Random walk over a corpus with per-page distributions built on first use.
struct Walker<'a> {
    corpus: &'a Corpus,
    damping: f64,
    distributions: Vec<Option<WeightedIndex<f64>>>,
}

impl<'a> Walker<'a> {
    fn new(corpus: &'a Corpus, damping: f64) -> Self {
        Self {
            corpus,
            damping,
            distributions: (0..corpus.len()).map(|_| None).collect(),
        }
    }

    fn step<R: Rng + ?Sized>(&mut self, from: PageId, rng: &mut R) -> Result<PageId, RankError> {
        let distribution = match &mut self.distributions[from] {
            Some(distribution) => distribution,
            slot => {
                let weights = transition_probabilities(self.corpus, from, self.damping);
                slot.insert(WeightedIndex::new(weights)?)
            }
        };
        Ok(distribution.sample(rng))
    }
}
