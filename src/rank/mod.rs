//! PageRank Estimation Module.
//!
//! Estimates the importance of each page in a closed corpus under the
//! random-surfer model, two ways.
//!
//! # Overview
//!
//! The surfer on page `p` follows one of `p`'s links with probability `d`
//! (the damping factor) and otherwise jumps to a uniformly random page. A
//! page with no links (a *dangling* page) always jumps uniformly. A page's
//! rank is the long-run fraction of time the surfer spends on it.
//!
//! - [`sample_pagerank`]: simulate the walk and count visits.
//! - [`iterate_pagerank`]: repeatedly apply the rank equation until no
//!   page moves by more than the threshold, then normalize.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use solver_poc_ai::rank::{iterate_pagerank, sample_pagerank, Corpus};
//!
//! let corpus = Corpus::from_links([
//!     ("1.html", vec!["2.html"]),
//!     ("2.html", vec!["1.html", "3.html"]),
//!     ("3.html", vec!["2.html"]),
//! ]);
//!
//! let iterated = iterate_pagerank(&corpus, 0.85).unwrap();
//! assert_eq!(iterated.top().unwrap().0, "2.html");
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let sampled = sample_pagerank(&corpus, 0.85, 10_000, &mut rng).unwrap();
//! assert!(sampled.max_abs_diff(&iterated) < 0.05);
//! ```
//!
//! # References
//!
//! - Page, L., Brin, S., et al. "The PageRank Citation Ranking: Bringing Order to the Web" (1999)

pub mod config;
pub mod corpus;
pub mod crawl;
pub mod error;
pub mod iteration;
pub mod model;
pub mod output;
pub mod sampling;
pub mod table;

pub use config::{ConfigError, RankConfig};
pub use corpus::{Corpus, PageId};
pub use crawl::{crawl, extract_links};
pub use error::RankError;
pub use iteration::{iterate_pagerank, iterate_pagerank_from, Convergence};
pub use model::{transition_model, TransitionModel};
pub use output::RankReport;
pub use sampling::{sample_pagerank, sample_pagerank_with_callback, SamplingProgress};
pub use table::RankTable;
