//! Top-level move selection

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::Serialize;
use tracing::{debug, trace};

use super::{
    config::{SearchConfig, TieBreak},
    minimax::{Minimax, SearchStats},
};
use crate::tictactoe::{Board, Move, Player};

/// A legal move and the minimax value of the board it leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveScore {
    #[serde(rename = "move")]
    pub mv: Move,
    pub value: i32,
}

/// Picks optimal moves according to a [`SearchConfig`]
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    rng: StdRng,
    last_stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Self {
            config,
            rng,
            last_stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the most recent search call
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Game-theoretic value of `board`: +1 X wins, -1 O wins, 0 draw
    pub fn value(&mut self, board: &Board) -> i32 {
        let mut minimax = Minimax::new(self.config.immediate_win_shortcut);
        let value = minimax.value(board);
        self.last_stats = minimax.stats();
        value
    }

    /// Every legal move with its value, in row-major order. Empty for a
    /// finished game.
    pub fn scored_moves(&mut self, board: &Board) -> Vec<MoveScore> {
        if board.is_terminal() {
            self.last_stats = SearchStats::default();
            return Vec::new();
        }

        let mut minimax = Minimax::new(self.config.immediate_win_shortcut);
        let scores: Vec<MoveScore> = board
            .successors()
            .map(|(mv, child)| MoveScore {
                mv,
                value: minimax.value(&child),
            })
            .collect();

        for score in &scores {
            trace!(mv = %score.mv, value = score.value, "scored move");
        }
        self.last_stats = minimax.stats();
        scores
    }

    /// All moves attaining the minimax value for the player to move, in
    /// row-major order.
    ///
    /// A mover who can complete a line only gets the completing moves back,
    /// whatever the shortcut setting; that setting only prunes the search.
    pub fn optimal_moves(&mut self, board: &Board) -> Vec<Move> {
        if board.is_terminal() {
            self.last_stats = SearchStats::default();
            return Vec::new();
        }

        let mover = board.whose_turn();
        let wins = board.winning_moves(mover);
        if !wins.is_empty() {
            self.last_stats = SearchStats::default();
            return wins;
        }

        let mut best_value = match mover {
            Player::X => i32::MIN,
            Player::O => i32::MAX,
        };
        let mut best_moves = Vec::new();

        for MoveScore { mv, value } in self.scored_moves(board) {
            let improves = match mover {
                Player::X => value > best_value,
                Player::O => value < best_value,
            };
            if improves {
                best_value = value;
                best_moves.clear();
                best_moves.push(mv);
            } else if value == best_value {
                best_moves.push(mv);
            }
        }

        best_moves
    }

    /// An optimal move for the player to move, or `None` if the game is over.
    ///
    /// Under [`TieBreak::Random`] repeated calls on the same board may return
    /// different moves of equal value.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        let candidates = self.optimal_moves(board);
        let chosen = self.choose(&candidates);

        if let Some(mv) = chosen {
            debug!(
                board = %board.encode(),
                mover = %board.whose_turn(),
                mv = %mv,
                candidates = candidates.len(),
                nodes = self.last_stats.nodes,
                cutoffs = self.last_stats.cutoffs,
                "selected move"
            );
        }
        chosen
    }

    /// Pick one of `candidates` by the configured tie-break
    pub fn choose(&mut self, candidates: &[Move]) -> Option<Move> {
        match self.config.tie_break {
            TieBreak::RowMajor => candidates.first().copied(),
            TieBreak::Random => candidates.choose(&mut self.rng).copied(),
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    fn row_major() -> Searcher {
        Searcher::new(SearchConfig::new().with_tie_break(TieBreak::RowMajor))
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let mut searcher = Searcher::default();
        assert_eq!(searcher.best_move(&board("XXXOO....")), None);
        assert_eq!(searcher.best_move(&board("XOXXOOOXX")), None);
        assert!(searcher.scored_moves(&board("XOXXOOOXX")).is_empty());
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // O to move with the middle row open
        let position = board("XX.OO.X..");
        assert_eq!(row_major().optimal_moves(&position), vec![Move::new(1, 2)]);
    }

    #[test]
    fn test_immediate_win_without_shortcut() {
        // X X .
        // O . .
        // . . O
        let position = board("XX.O....O");
        for seed in 0..20 {
            let config = SearchConfig::new()
                .with_immediate_win_shortcut(false)
                .with_seed(seed);
            let mut searcher = Searcher::new(config);
            assert_eq!(searcher.optimal_moves(&position), vec![Move::new(0, 2)]);
            assert_eq!(searcher.best_move(&position), Some(Move::new(0, 2)));
        }
    }

    #[test]
    fn test_choose_follows_tie_break() {
        let candidates = [Move::new(1, 1), Move::new(2, 2)];
        assert_eq!(row_major().choose(&candidates), Some(Move::new(1, 1)));
        let mut random = Searcher::new(SearchConfig::new().with_seed(3));
        assert!(candidates.contains(&random.choose(&candidates).unwrap()));
        assert_eq!(random.choose(&[]), None);
    }

    #[test]
    fn test_o_blocks() {
        // X X .
        // . O .
        // . . .
        let position = board("XX..O....");
        assert_eq!(row_major().best_move(&position), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_scored_moves_cover_every_legal_move() {
        let position = board("XX..O....");
        let scores = row_major().scored_moves(&position);
        assert_eq!(scores.len(), position.legal_moves().len());
        let block = scores
            .iter()
            .find(|s| s.mv == Move::new(0, 2))
            .unwrap();
        assert_eq!(block.value, 0);
        assert!(scores.iter().filter(|s| s.mv != block.mv).all(|s| s.value == 1));
    }

    #[test]
    fn test_optimal_moves_keep_ties() {
        // Every reply to a centre opening except a corner loses for O
        let position = board("....X....");
        let moves = row_major().optimal_moves(&position);
        assert_eq!(
            moves,
            vec![
                Move::new(0, 0),
                Move::new(0, 2),
                Move::new(2, 0),
                Move::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let config = SearchConfig::new().with_seed(11);
        let empty = Board::new();
        let first: Vec<_> = {
            let mut searcher = Searcher::new(config.clone());
            (0..5).map(|_| searcher.best_move(&empty)).collect()
        };
        let second: Vec<_> = {
            let mut searcher = Searcher::new(config);
            (0..5).map(|_| searcher.best_move(&empty)).collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_last_stats_recorded() {
        let mut searcher = Searcher::new(SearchConfig::new().with_immediate_win_shortcut(false));
        searcher.best_move(&board("XOX.O...."));
        assert!(searcher.last_stats().nodes > 0);
        assert_eq!(searcher.last_stats().cutoffs, 0);
    }
}
