//! Games played by the searcher against itself

use serde::Serialize;

use super::Searcher;
use crate::tictactoe::{Board, Game, Outcome, Player};

/// Play optimal moves for both sides from `start` until the game ends.
///
/// # Errors
///
/// Returns an error only if the searcher produces an illegal move, which
/// indicates a bug.
pub fn self_play(searcher: &mut Searcher, start: Board) -> crate::Result<Game> {
    let mut game = Game::from_board(start);
    let mut board = start;
    while let Some(mv) = searcher.best_move(&board) {
        board = game.play(mv)?;
    }
    Ok(game)
}

/// Outcome tally over a batch of games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelfPlaySummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SelfPlaySummary {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return,
        }
        self.games += 1;
    }

    pub fn all_draws(&self) -> bool {
        self.draws == self.games
    }
}
