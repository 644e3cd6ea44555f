//! Game records and outcomes

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Player};

/// Outcome of a board, derived from its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// A game as a sequence of moves from an initial board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Create a game that continues from an existing position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
        }
    }

    /// Play a move for the player whose turn it is
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game has already ended and
    /// [`crate::Error::InvalidMove`] if the move is illegal.
    pub fn play(&mut self, mv: Move) -> Result<Board, crate::Error> {
        let current = self.current_state()?;
        if current.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let next = current.apply_move(mv)?;
        self.moves.push(mv);
        Ok(next)
    }

    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut state = self.initial;
        for &mv in self.moves.iter().take(end_index) {
            state = state.apply_move(mv)?;
        }
        Ok(state)
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the state it
    /// was played on. This indicates corrupted game data.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Every board from the initial one through the current one
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);
        for &mv in &self.moves {
            state = state.apply_move(mv)?;
            states.push(state);
        }
        Ok(states)
    }

    /// # Errors
    ///
    /// Returns error if any move in the history is invalid.
    pub fn outcome(&self) -> Result<Outcome, crate::Error> {
        Ok(self.current_state()?.outcome())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
