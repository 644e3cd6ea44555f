//! Exhaustive minimax evaluation.
//!
//! X maximizes and O minimizes the terminal utility. [`Minimax::max_value`]
//! and [`Minimax::min_value`] take their role from the caller and accept any
//! board; the mark placed on each child is still the one `whose_turn` gives.
//! [`Minimax::value`] picks the role that matches the player to move.

use crate::tictactoe::{Board, LineAnalyzer, Player};

/// Counters for one evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards visited, terminal ones included
    pub nodes: u64,
    /// Subtrees cut off by the immediate-win shortcut
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Depth-first minimax evaluator
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    immediate_win_shortcut: bool,
    stats: SearchStats,
}

impl Minimax {
    pub fn new(immediate_win_shortcut: bool) -> Self {
        Self {
            immediate_win_shortcut,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Game-theoretic value of `board` with the player to move choosing
    pub fn value(&mut self, board: &Board) -> i32 {
        match board.whose_turn() {
            Player::X => self.max_value(board),
            Player::O => self.min_value(board),
        }
    }

    /// Value of `board` with the maximizing side choosing the next move
    pub fn max_value(&mut self, board: &Board) -> i32 {
        self.stats.nodes += 1;

        if let Some(utility) = board.utility() {
            return utility;
        }
        if self.cut_off(board, Player::X) {
            return Player::X.win_utility();
        }

        let mut best = i32::MIN;
        for (_, child) in board.successors() {
            best = best.max(self.min_value(&child));
        }
        best
    }

    /// Value of `board` with the minimizing side choosing the next move
    pub fn min_value(&mut self, board: &Board) -> i32 {
        self.stats.nodes += 1;

        if let Some(utility) = board.utility() {
            return utility;
        }
        if self.cut_off(board, Player::O) {
            return Player::O.win_utility();
        }

        let mut best = i32::MAX;
        for (_, child) in board.successors() {
            best = best.min(self.max_value(&child));
        }
        best
    }

    // Only exact when `role` is also the player to move: completing a line
    // then reaches the best value that role can get.
    fn cut_off(&mut self, board: &Board, role: Player) -> bool {
        if self.immediate_win_shortcut
            && board.whose_turn() == role
            && LineAnalyzer::has_immediate_win(&board.cells, role)
        {
            self.stats.cutoffs += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_terminal_values() {
        let mut minimax = Minimax::new(true);
        assert_eq!(minimax.value(&board("XXXOO....")), 1);
        assert_eq!(minimax.value(&board("XOXXOOOXX")), 0);
        assert_eq!(minimax.stats().nodes, 2);
    }

    #[test]
    fn test_forced_loss_for_x() {
        // O threatens both (1,2) and (2,0); X can block only one
        // X X O
        // O O .
        // . . X
        let fork = board("XXOOO...X");
        assert_eq!(Minimax::new(false).value(&fork), -1);
        assert_eq!(Minimax::new(true).value(&fork), -1);
    }

    #[test]
    fn test_mover_with_immediate_win() {
        // O to move and can complete the middle row
        let position = board("XX.OO.X..");
        let mut minimax = Minimax::new(true);
        assert_eq!(minimax.value(&position), -1);
        assert_eq!(minimax.stats().nodes, 1);
        assert_eq!(minimax.stats().cutoffs, 1);
    }

    #[test]
    fn test_shortcut_prunes_without_changing_value() {
        let position = board("X...O....");
        let mut plain = Minimax::new(false);
        let mut pruned = Minimax::new(true);
        assert_eq!(plain.value(&position), pruned.value(&position));
        assert!(pruned.stats().nodes < plain.stats().nodes);
        assert_eq!(plain.stats().cutoffs, 0);
    }

    #[test]
    fn test_roles_on_any_board() {
        let empty = Board::new();
        assert_eq!(Minimax::new(true).max_value(&empty), 0);

        // The minimizer places X's marks here, so the shortcut never applies
        let mut pruned = Minimax::new(true);
        let value = pruned.min_value(&empty);
        assert!((-1..=1).contains(&value));
        assert_eq!(value, Minimax::new(false).min_value(&empty));
        assert_eq!(pruned.stats().cutoffs, 0);
    }

    #[test]
    fn test_no_cutoff_for_player_not_to_move() {
        // X X .
        // O . .
        // . . .
        // O to move; X's open row is not reachable this ply
        let position = board("XX.O.....");
        for shortcut in [false, true] {
            let mut minimax = Minimax::new(shortcut);
            let value = minimax.max_value(&position);
            assert_eq!(value, Minimax::new(false).max_value(&position));
            assert_eq!(minimax.stats().cutoffs, 0);
        }
    }

    #[test]
    fn test_stats_merge() {
        let mut total = SearchStats { nodes: 3, cutoffs: 1 };
        total.merge(SearchStats { nodes: 4, cutoffs: 2 });
        assert_eq!(total, SearchStats { nodes: 7, cutoffs: 3 });
    }
}
