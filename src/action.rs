//! First-class move and error types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They can be validated
//! independently of execution and serialized by callers that replay
//! positions into the engine.

use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: placing the side-to-move's mark at a cell.
///
/// Coordinates are zero-based. A move is legal only when both
/// coordinates are in range and the target cell is empty; the mark
/// placed is always derived from the board, never carried by the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row of the target cell (0-2).
    pub row: usize,
    /// Column of the target cell (0-2).
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error that occurs when a move cannot be applied to a board.
///
/// This is a caller-contract violation, not an expected runtime
/// condition: move generation through [`legal_moves`] never produces
/// a move that triggers it.
///
/// [`legal_moves`]: crate::legal_moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The target cell is already occupied.
    #[display("Cell ({}, {}) is already occupied", _0, _1)]
    Occupied(usize, usize),

    /// A coordinate lies outside the 3x3 board.
    #[display("Coordinates ({}, {}) are outside the board", _0, _1)]
    OutOfBounds(usize, usize),
}

impl std::error::Error for InvalidMove {}
