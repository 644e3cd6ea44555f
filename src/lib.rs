//! Optimal Tic-Tac-Toe play by exhaustive minimax search
//!
//! This crate provides:
//! - A value-type board with turn inference, move generation and win/draw detection
//! - Minimax evaluation of any reachable position
//! - Move selection among equally valued moves, random or row-major
//! - Self-play and a small command-line front end
//!
//! ```
//! use tictactoe_minimax::{Move, apply_move, best_move, initial_state, is_terminal};
//!
//! let board = apply_move(&initial_state(), Move::new(1, 1)).unwrap();
//! let reply = best_move(&board).unwrap();
//! assert!(board.legal_moves().contains(&reply));
//! assert!(!is_terminal(&board));
//! ```

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{
    MoveScore, SearchConfig, SearchStats, Searcher, SelfPlaySummary, TieBreak, best_move,
    self_play,
};
pub use tictactoe::{
    Board, Cell, Game, Move, Outcome, Player, apply_move, initial_state, is_terminal, legal_moves,
    utility, whose_turn, winner,
};
