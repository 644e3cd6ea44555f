//! Minimax search and move selection

pub mod config;
pub mod minimax;
pub mod selector;
pub mod self_play;

pub use config::{SearchConfig, TieBreak};
pub use minimax::{Minimax, SearchStats};
pub use selector::{MoveScore, Searcher};
pub use self_play::{SelfPlaySummary, self_play};

use crate::tictactoe::{Board, Move};

/// An optimal move for the player to move, or `None` on a finished board.
///
/// Ties are broken at random; build a [`Searcher`] for control over that.
pub fn best_move(board: &Board) -> Option<Move> {
    Searcher::default().best_move(board)
}

/// Value of `board` with the maximizing side to choose, searched exhaustively.
///
/// Total over well-formed boards: if O is actually to move, the maximizer
/// chooses where O's mark goes.
pub fn max_value(board: &Board) -> i32 {
    Minimax::new(true).max_value(board)
}

/// Value of `board` with the minimizing side to choose, searched exhaustively.
///
/// Total over well-formed boards, like [`max_value`].
pub fn min_value(board: &Board) -> i32 {
    Minimax::new(true).min_value(board)
}
