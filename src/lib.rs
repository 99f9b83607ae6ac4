//! Optimal tic-tac-toe play via exhaustive game-tree search.
//!
//! This crate models the 3x3 board and computes moves that are optimal
//! under adversarial play by both sides. Two layers:
//!
//! - **Board-state rules**: pure functions over a board snapshot -
//!   whose turn it is, which moves are legal, whether the game is over
//!   and who won.
//! - **Search engine**: unpruned minimax that explores every legal
//!   continuation to a terminal board and backs up the optimal value.
//!
//! There is no I/O here. A caller (a CLI prompt loop, a board
//! renderer) owns the board, asks [`best_move`] for a decision, and
//! advances the game with [`apply_move`].
//!
//! # Example
//!
//! ```
//! use tictactoe_solver::{apply_move, best_move, is_terminal, Board};
//!
//! let board = Board::new();
//! let mv = best_move(&board).expect("empty board is not terminal");
//! let board = apply_move(&board, mv)?;
//! assert!(!is_terminal(&board));
//! # Ok::<(), tictactoe_solver::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod invariants;
mod rules;
mod search;
mod types;

// Crate-level exports - Moves and errors
pub use action::{InvalidMove, Move};

// Crate-level exports - Well-formedness checks
pub use invariants::BalancedMarks;

// Crate-level exports - Board-state rules
pub use rules::{
    apply_move, current_player, is_full, is_terminal, legal_moves, utility, winning_mark,
};

// Crate-level exports - Search engine
pub use search::{best_move, evaluate};

// Crate-level exports - Domain types
pub use types::{Board, Player, Square};
