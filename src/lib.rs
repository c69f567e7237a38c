//! # Solver POC: Adversarial Search and PageRank
//!
//! Two small classic-AI engines behind one crate:
//!
//! - a perfect-play minimax solver for tic-tac-toe, with alpha-beta pruning
//! - a PageRank estimator for a closed corpus of linked pages, by random
//!   surfer sampling and by fixed-point iteration
//!
//! ## Quick Start
//!
//! ```
//! use solver_poc_ai::games::tictactoe::{Board, Move};
//! use solver_poc_ai::search::minimax;
//!
//! // X to move, completing the top row wins.
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(minimax(&board), Some(Move::new(0, 2)));
//! ```
//!
//! ```
//! use solver_poc_ai::rank::{iterate_pagerank, Corpus};
//!
//! let corpus = Corpus::from_links([
//!     ("1.html", vec!["2.html"]),
//!     ("2.html", vec!["1.html"]),
//! ]);
//! let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
//! assert!((ranks.total() - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`games`]: Game positions (tic-tac-toe)
//! - [`search`]: Minimax search over game positions
//! - [`rank`]: Corpus model and both PageRank estimators
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐     ┌──────────────────────────────┐
//! │        search::Solver        │     │        rank estimators       │
//! │  - sequential alpha-beta     │     │  - sample_pagerank           │
//! │  - shuffled single bound     │     │  - iterate_pagerank          │
//! └──────────────────────────────┘     └──────────────────────────────┘
//!                │                                    │
//!                ▼                                    ▼
//!   ┌──────────────────────────┐       ┌──────────────────────────────┐
//!   │  games::tictactoe::Board │       │  Corpus ─► TransitionModel   │
//!   └──────────────────────────┘       │  crawl (HTML directory)      │
//!                                      └──────────────────────────────┘
//! ```

#![warn(missing_docs)]

/// Game implementations module.
///
/// Contains the immutable tic-tac-toe board searched by [`search`].
pub mod games;

/// PageRank module.
///
/// Corpus representation, transition model and the two estimators.
pub mod rank;

/// Minimax search module.
///
/// Sequential and shuffled alpha-beta over game positions.
pub mod search;

// Re-export commonly used types at crate root for convenience
pub use games::tictactoe::{Board, Move, Player};
pub use rank::{iterate_pagerank, sample_pagerank, Corpus, RankTable};
pub use search::{minimax, SearchConfig, SearchResult, Solver};
