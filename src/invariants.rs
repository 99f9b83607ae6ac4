//! Well-formedness checks for board states.
//!
//! Reachable boards obey the alternating-turn rule: X places the first
//! mark and the players strictly alternate, so X's count equals O's or
//! exceeds it by exactly one. States violating this only arise from
//! caller bugs; the checks here surface them in debug builds.

use crate::types::{Board, Player, Square};
use tracing::warn;

/// Invariant: mark counts stay balanced (X equals O or leads by one).
pub struct BalancedMarks;

impl BalancedMarks {
    /// Checks whether the invariant holds for the given board.
    pub fn holds(board: &Board) -> bool {
        let x_count = board
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Player::X)))
            .count();
        let o_count = board
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Player::O)))
            .count();

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }
}

/// Asserts that board invariants hold (panic on violation in debug builds).
pub fn assert_invariants(board: &Board) {
    debug_assert!(BalancedMarks::holds(board), "Mark balance violated");
}
