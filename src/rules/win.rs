//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks if there is a completed line on the board.
///
/// Scans the three rows top-to-bottom, the three columns
/// left-to-right, then the two diagonals, and returns the mark of the
/// first line holding three identical non-empty marks. Under
/// alternating play at most one mark can ever complete a line, so the
/// scan order only determines which check fires, not the answer.
#[instrument]
pub fn winning_mark(board: &Board) -> Option<Player> {
    const LINES: [[(usize, usize); 3]; 8] = [
        // Rows
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        // Columns
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        // Diagonals
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];

    for [a, b, c] in LINES {
        let sq = board.get(a.0, a.1);
        if sq != Some(Square::Empty) && sq == board.get(b.0, b.1) && sq == board.get(c.0, c.1) {
            if let Some(Square::Occupied(player)) = sq {
                return Some(player);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_mark(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(0, 0, Square::Occupied(Player::X));
        board.set(0, 1, Square::Occupied(Player::X));
        board.set(0, 2, Square::Occupied(Player::X));
        assert_eq!(winning_mark(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        board.set(0, 1, Square::Occupied(Player::O));
        board.set(1, 1, Square::Occupied(Player::O));
        board.set(2, 1, Square::Occupied(Player::O));
        assert_eq!(winning_mark(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(0, 0, Square::Occupied(Player::O));
        board.set(1, 1, Square::Occupied(Player::O));
        board.set(2, 2, Square::Occupied(Player::O));
        assert_eq!(winning_mark(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(0, 2, Square::Occupied(Player::X));
        board.set(1, 1, Square::Occupied(Player::X));
        board.set(2, 0, Square::Occupied(Player::X));
        assert_eq!(winning_mark(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(0, 0, Square::Occupied(Player::X));
        board.set(0, 1, Square::Occupied(Player::X));
        assert_eq!(winning_mark(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.set(0, 0, Square::Occupied(Player::X));
        board.set(0, 1, Square::Occupied(Player::O));
        board.set(0, 2, Square::Occupied(Player::X));
        assert_eq!(winning_mark(&board), None);
    }
}
