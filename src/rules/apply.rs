//! Move application for tic-tac-toe.

use super::turn::current_player;
use crate::action::{InvalidMove, Move};
use crate::invariants::assert_invariants;
use crate::types::{Board, Square};
use tracing::instrument;

/// Applies a move, returning the resulting board.
///
/// The side-to-move's mark is placed at the target cell of a fresh
/// copy. The input board is never mutated, so sibling search branches
/// can never observe each other's trial moves.
///
/// # Errors
///
/// Returns [`InvalidMove`] if a coordinate lies outside the board or
/// the target cell is already occupied. Callers that generate moves
/// with [`legal_moves`] never hit either case.
///
/// [`legal_moves`]: super::legal_moves
#[instrument(skip(board))]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, InvalidMove> {
    if mv.row >= Board::SIZE || mv.col >= Board::SIZE {
        return Err(InvalidMove::OutOfBounds(mv.row, mv.col));
    }
    if !board.is_empty(mv.row, mv.col) {
        return Err(InvalidMove::Occupied(mv.row, mv.col));
    }

    let player = current_player(board);
    let mut next = board.clone();
    next.set(mv.row, mv.col, Square::Occupied(player));
    assert_invariants(&next);
    Ok(next)
}
