//! Minimax solver for tic-tac-toe.
//!
//! Two interchangeable variants are provided:
//! - **Sequential** (canonical): moves in row-major order, full alpha-beta
//!   window. The same board always yields the same move.
//! - **Shuffled**: moves in an order drawn from a random source, pruning
//!   with only the opponent's best guaranteed value.
//!
//! Both return the exact game value at the root. X maximizes, O minimizes.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::games::tictactoe::{Board, Move, MoveError, Player};
use crate::search::config::{MoveOrdering, SearchConfig, SearchStats};

/// Outcome of searching a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Game value under perfect play: +1 X wins, 0 draw, -1 O wins.
    pub utility: i32,
    /// Best move for the side to move, `None` on terminal boards.
    pub best_move: Option<Move>,
    /// Work done by the search.
    pub stats: SearchStats,
}

/// A full game played by the solver against itself.
#[derive(Debug, Clone)]
pub struct PlayOut {
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// The terminal board.
    pub final_board: Board,
    /// Accumulated statistics over every search in the game.
    pub stats: SearchStats,
}

/// Value and move returned by the recursive helpers.
#[derive(Debug, Clone, Copy)]
struct Scored {
    value: i32,
    best: Option<Move>,
}

impl Scored {
    fn leaf(board: &Board) -> Self {
        Self {
            value: board.utility(),
            best: None,
        }
    }
}

/// The minimax solver.
///
/// # Example
/// ```
/// use solver_poc_ai::games::tictactoe::Board;
/// use solver_poc_ai::search::{SearchConfig, Solver};
///
/// let mut solver = Solver::new(SearchConfig::default());
/// let result = solver.search(&Board::new());
/// assert_eq!(result.utility, 0); // perfect play draws
/// ```
pub struct Solver {
    /// Configuration for the solver.
    config: SearchConfig,

    /// Random number generator for shuffled ordering.
    rng: StdRng,
}

impl Solver {
    /// Create a new solver.
    pub fn new(config: SearchConfig) -> Self {
        let rng = config.rng();
        Self { config, rng }
    }

    /// Search `board` with the configured variant.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        match self.config.ordering {
            MoveOrdering::Sequential => search_sequential(board),
            MoveOrdering::Shuffled => search_shuffled(board, &mut self.rng),
        }
    }

    /// Best move for the side to move, `None` if the game is over.
    pub fn minimax(&mut self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }

    /// Let the solver play both sides from `board` until the game ends.
    pub fn play_out(&mut self, board: &Board) -> Result<PlayOut, MoveError> {
        let mut current = *board;
        let mut moves = Vec::new();
        let mut stats = SearchStats::new();

        loop {
            let result = self.search(&current);
            stats.merge(&result.stats);

            match result.best_move {
                Some(mv) => {
                    current = current.apply_move(mv)?;
                    moves.push(mv);
                }
                None => break,
            }
        }

        Ok(PlayOut {
            moves,
            final_board: current,
            stats,
        })
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Best move for the side to move using deterministic alpha-beta.
///
/// Returns `None` on terminal boards.
pub fn minimax(board: &Board) -> Option<Move> {
    search_sequential(board).best_move
}

/// Deterministic alpha-beta search over row-major move order.
pub fn search_sequential(board: &Board) -> SearchResult {
    let mut stats = SearchStats::new();
    let scored = match board.current_player() {
        Player::X => max_value(board, i32::MIN, i32::MAX, &mut stats),
        Player::O => min_value(board, i32::MIN, i32::MAX, &mut stats),
    };

    SearchResult {
        utility: scored.value,
        best_move: scored.best,
        stats,
    }
}

/// Randomized-order search drawing move order from `rng`.
///
/// A seeded `rng` makes the chosen move reproducible.
pub fn search_shuffled<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> SearchResult {
    let mut stats = SearchStats::new();
    let scored = match board.current_player() {
        Player::X => max_shuffled(board, i32::MAX, rng, &mut stats),
        Player::O => min_shuffled(board, i32::MIN, rng, &mut stats),
    };

    SearchResult {
        utility: scored.value,
        best_move: scored.best,
        stats,
    }
}

fn max_value(board: &Board, mut alpha: i32, beta: i32, stats: &mut SearchStats) -> Scored {
    stats.nodes += 1;
    if board.is_terminal() {
        return Scored::leaf(board);
    }

    let children: Vec<(Move, Board)> = board.successors().collect();
    let total = children.len();
    let mut best = Scored {
        value: i32::MIN,
        best: None,
    };

    for (i, (mv, child)) in children.into_iter().enumerate() {
        let reply = min_value(&child, alpha, beta, stats);
        if reply.value > best.value {
            best = Scored {
                value: reply.value,
                best: Some(mv),
            };
        }

        alpha = alpha.max(best.value);
        if beta <= alpha {
            if i + 1 < total {
                stats.cutoffs += 1;
            }
            break;
        }
    }

    best
}

fn min_value(board: &Board, alpha: i32, mut beta: i32, stats: &mut SearchStats) -> Scored {
    stats.nodes += 1;
    if board.is_terminal() {
        return Scored::leaf(board);
    }

    let children: Vec<(Move, Board)> = board.successors().collect();
    let total = children.len();
    let mut best = Scored {
        value: i32::MAX,
        best: None,
    };

    for (i, (mv, child)) in children.into_iter().enumerate() {
        let reply = max_value(&child, alpha, beta, stats);
        if reply.value < best.value {
            best = Scored {
                value: reply.value,
                best: Some(mv),
            };
        }

        beta = beta.min(best.value);
        if beta <= alpha {
            if i + 1 < total {
                stats.cutoffs += 1;
            }
            break;
        }
    }

    best
}

/// `best_min` is the lowest value the minimizing caller already has.
fn max_shuffled<R: Rng + ?Sized>(
    board: &Board,
    best_min: i32,
    rng: &mut R,
    stats: &mut SearchStats,
) -> Scored {
    stats.nodes += 1;
    if board.is_terminal() {
        return Scored::leaf(board);
    }

    let mut children: Vec<(Move, Board)> = board.successors().collect();
    children.shuffle(rng);
    let total = children.len();
    let mut best = Scored {
        value: i32::MIN,
        best: None,
    };

    for (i, (mv, child)) in children.into_iter().enumerate() {
        let reply = min_shuffled(&child, best.value, rng, stats);
        if reply.value > best.value {
            best = Scored {
                value: reply.value,
                best: Some(mv),
            };
        }

        if best.value >= best_min {
            if i + 1 < total {
                stats.cutoffs += 1;
            }
            break;
        }
    }

    best
}

/// `best_max` is the highest value the maximizing caller already has.
fn min_shuffled<R: Rng + ?Sized>(
    board: &Board,
    best_max: i32,
    rng: &mut R,
    stats: &mut SearchStats,
) -> Scored {
    stats.nodes += 1;
    if board.is_terminal() {
        return Scored::leaf(board);
    }

    let mut children: Vec<(Move, Board)> = board.successors().collect();
    children.shuffle(rng);
    let total = children.len();
    let mut best = Scored {
        value: i32::MAX,
        best: None,
    };

    for (i, (mv, child)) in children.into_iter().enumerate() {
        let reply = max_shuffled(&child, best.value, rng, stats);
        if reply.value < best.value {
            best = Scored {
                value: reply.value,
                best: Some(mv),
            };
        }

        if best.value <= best_max {
            if i + 1 < total {
                stats.cutoffs += 1;
            }
            break;
        }
    }

    best
}
