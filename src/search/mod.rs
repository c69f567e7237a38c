//! Minimax Search Module.
//!
//! Exhaustive adversarial search with pruning over [`Board`] positions.
//!
//! # Overview
//!
//! X maximizes and O minimizes a shared utility (+1 X wins, -1 O wins,
//! 0 draw). The solver explores every continuation, cutting off branches
//! that cannot change the decision at the root:
//!
//! - **Sequential** ordering uses the full alpha-beta window and row-major
//!   move order, so ties always resolve to the earliest move.
//! - **Shuffled** ordering draws move order from a seeded random source and
//!   prunes with a single bound, the best value the opponent already holds.
//!
//! Both variants return the exact game value at the root. Each search
//! returns its own [`SearchStats`]; nothing is counted globally.
//!
//! # Example
//!
//! ```
//! use solver_poc_ai::games::tictactoe::Board;
//! use solver_poc_ai::search::{SearchConfig, Solver};
//!
//! let mut solver = Solver::new(SearchConfig::shuffled(42));
//! let game = solver.play_out(&Board::new()).unwrap();
//! assert_eq!(game.final_board.utility(), 0);
//! ```
//!
//! [`Board`]: crate::games::tictactoe::Board

pub mod config;
pub mod solver;

pub use config::{MoveOrdering, SearchConfig, SearchStats};
pub use solver::{minimax, search_sequential, search_shuffled, PlayOut, SearchResult, Solver};
