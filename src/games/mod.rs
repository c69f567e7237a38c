//! Game implementations for the minimax solver.
//!
//! A game here is an immutable position type: applying a move returns a new
//! position and leaves the old one untouched, so the solver can branch freely.
//!
//! ## Available Games
//!
//! - [`tictactoe`]: 3×3 tic-tac-toe, X moves first

pub mod tictactoe;
