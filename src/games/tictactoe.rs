//! Tic-tac-toe board representation.
//!
//! The board is a plain `Copy` value: every move produces a new board and
//! nothing is shared between positions explored by the search.
//!
//! ## Game Rules
//!
//! - 3×3 grid, X moves first, players alternate
//! - Three marks in a row, column or diagonal wins
//! - A full board with no line is a draw
//!
//! ## Coordinates
//!
//! ```text
//!  (0,0) | (0,1) | (0,2)
//!  ------+-------+------
//!  (1,0) | (1,1) | (1,2)
//!  ------+-------+------
//!  (2,0) | (2,1) | (2,2)
//! ```
//!
//! ## Utility
//!
//! Scores are always from X's point of view: +1 X wins, -1 O wins, 0 otherwise.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of the board.
pub const SIZE: usize = 3;

/// The eight winning lines, scanned in order: rows, columns, diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A tic-tac-toe player (and the mark it places).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, maximizes utility.
    X,
    /// Moves second, minimizes utility.
    O,
}

impl Player {
    /// Get the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character used for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell is either empty or holds a player's mark.
pub type Cell = Option<Player>;

/// A move: the (row, column) of the cell to mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row index, 0..3.
    pub row: usize,
    /// Column index, 0..3.
    pub col: usize,
}

impl Move {
    /// Create a move for the given cell.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors from applying a move to a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[error("cell {row},{col} is already occupied by {occupant}")]
    Occupied {
        /// Row of the rejected move.
        row: usize,
        /// Column of the rejected move.
        col: usize,
        /// Mark found in the cell.
        occupant: Player,
    },
    /// The move references a cell outside the 3×3 grid.
    #[error("cell {row},{col} is outside the board")]
    OutOfBounds {
        /// Row of the rejected move.
        row: usize,
        /// Column of the rejected move.
        col: usize,
    },
}

/// Errors from parsing a board from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// Wrong number of cells.
    #[error("expected {expected} cells, got {got}")]
    InvalidLength {
        /// Always 9.
        expected: usize,
        /// Number of cell characters found.
        got: usize,
    },
    /// A character that is not `X`, `O`, `.`, `-` or `_`.
    #[error("invalid character '{character}' at cell {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Cell index (row-major) where it appeared.
        position: usize,
    },
    /// Mark counts that cannot arise from legal play.
    #[error("invalid piece counts: X={x_count}, O={o_count} (X must equal O or lead by one)")]
    InvalidPieceCounts {
        /// Number of X marks.
        x_count: usize,
        /// Number of O marks.
        o_count: usize,
    },
}

/// A 3×3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create the initial (empty) board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw cells.
    ///
    /// No piece-count validation is done here, so arbitrary positions can be
    /// built for analysis. Use [`str::parse`] for validated input.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Raw cell grid.
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Content of a single cell, `None` if empty or out of bounds.
    pub fn get(&self, mv: Move) -> Cell {
        if mv.in_bounds() {
            self.cells[mv.row][mv.col]
        } else {
            None
        }
    }

    /// Number of marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(player))
            .count()
    }

    /// Total number of marks on the board.
    pub fn moves_played(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// The player whose turn it is.
    ///
    /// X moves whenever both players have placed the same number of marks.
    pub fn current_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// All empty cells in row-major order. Empty iff the board is full.
    pub fn available_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(SIZE * SIZE);
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col].is_none() {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Return the board that results from the current player marking `mv`.
    ///
    /// The receiver is left untouched.
    pub fn apply_move(&self, mv: Move) -> Result<Board, MoveError> {
        if !mv.in_bounds() {
            return Err(MoveError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }

        if let Some(occupant) = self.cells[mv.row][mv.col] {
            return Err(MoveError::Occupied {
                row: mv.row,
                col: mv.col,
                occupant,
            });
        }

        Ok(self.place(mv, self.current_player()))
    }

    /// Every legal move paired with the board it leads to, in row-major order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        let player = self.current_player();
        self.available_moves()
            .into_iter()
            .map(move |mv| (mv, self.place(mv, player)))
    }

    fn place(&self, mv: Move, player: Player) -> Board {
        let mut next = *self;
        next.cells[mv.row][mv.col] = Some(player);
        next
    }

    /// The player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(row, col)| self.cells[row][col]);
            match a {
                Some(player) if b == a && c == a => Some(player),
                _ => None,
            }
        })
    }

    /// Whether every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }

    /// Whether the game is over (a winner or a full board).
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// +1 if X has won, -1 if O has won, 0 otherwise.
    ///
    /// Only meaningful on terminal boards.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let c = match cell {
                    Some(player) => player.symbol(),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse nine cells in row-major order. `/` and whitespace are ignored,
    /// so `"X.O/.X./..O"` and the `Display` output both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if symbols.len() != SIZE * SIZE {
            return Err(BoardParseError::InvalidLength {
                expected: SIZE * SIZE,
                got: symbols.len(),
            });
        }

        let mut cells = [[None; SIZE]; SIZE];
        for (position, &character) in symbols.iter().enumerate() {
            cells[position / SIZE][position % SIZE] = match character.to_ascii_uppercase() {
                'X' => Some(Player::X),
                'O' => Some(Player::O),
                '.' | '-' | '_' => None,
                _ => {
                    return Err(BoardParseError::InvalidCharacter {
                        character,
                        position,
                    })
                }
            };
        }

        let board = Board::from_cells(cells);
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(BoardParseError::InvalidPieceCounts { x_count, o_count });
        }

        Ok(board)
    }
}
