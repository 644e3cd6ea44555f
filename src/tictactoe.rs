//! Tic-Tac-Toe game implementation
//!
//! The free functions here are the board API callers drive a game with.
//! Each one delegates to the matching [`Board`] method.

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_SIZE, Board, Cell, Move, Player};
pub use game::{Game, Outcome};
pub use lines::{LineAnalyzer, WINNING_LINES};

/// The all-empty starting board
pub fn initial_state() -> Board {
    Board::new()
}

pub fn whose_turn(board: &Board) -> Player {
    board.whose_turn()
}

pub fn legal_moves(board: &Board) -> Vec<Move> {
    board.legal_moves()
}

/// # Errors
///
/// Returns [`crate::Error::InvalidMove`] for an off-board or occupied cell.
pub fn apply_move(board: &Board, mv: Move) -> crate::Result<Board> {
    board.apply_move(mv)
}

pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// Utility of a finished game; `None` while the game is in progress
pub fn utility(board: &Board) -> Option<i32> {
    board.utility()
}
