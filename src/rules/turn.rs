//! Turn derivation and legal-move enumeration.

use crate::action::Move;
use crate::types::{Board, Player, Square};
use std::collections::HashSet;
use tracing::instrument;

/// Returns the player who has the next turn on a board.
///
/// X moves first and players strictly alternate, so the turn belongs
/// to X exactly when both players have placed the same number of
/// marks. Two players only.
#[instrument(skip(board))]
pub fn current_player(board: &Board) -> Player {
    let mut diff: i32 = 0;
    for square in board.squares() {
        match square {
            Square::Occupied(Player::X) => diff += 1,
            Square::Occupied(Player::O) => diff -= 1,
            Square::Empty => {}
        }
    }
    if diff == 0 { Player::X } else { Player::O }
}

/// Returns the set of all legal moves on a board.
///
/// A move is legal when its target cell is empty. Iteration order of
/// the returned set carries no meaning; callers must not rely on
/// which of several equally good moves a consumer picks from it.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board) -> HashSet<Move> {
    let mut moves = HashSet::new();
    for row in 0..Board::SIZE {
        for col in 0..Board::SIZE {
            if board.is_empty(row, col) {
                moves.insert(Move::new(row, col));
            }
        }
    }
    moves
}
