//! Board rules through the public function API

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use tictactoe_minimax::{
    Board, Cell, Error, Move, Outcome, Player, apply_move, initial_state, is_terminal,
    legal_moves, utility, whose_turn, winner,
};

fn play(moves: &[(usize, usize)]) -> Board {
    moves.iter().fold(initial_state(), |board, &mv| {
        apply_move(&board, Move::from(mv)).unwrap()
    })
}

mod turn_order {
    use super::*;

    #[test]
    fn test_turn_alternates_over_random_games() {
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..200 {
            let mut board = initial_state();
            let mut k = 0;
            while !is_terminal(&board) {
                let expected = if k % 2 == 0 { Player::X } else { Player::O };
                assert_eq!(whose_turn(&board), expected, "after {k} moves on\n{board}");

                let moves = legal_moves(&board);
                let mv = *moves.choose(&mut rng).unwrap();
                board = apply_move(&board, mv).unwrap();
                k += 1;
            }
        }
    }

    #[test]
    fn test_mark_placed_is_movers() {
        let board = play(&[(0, 0)]);
        assert_eq!(board.get(Move::new(0, 0)), Some(Cell::X));
        let board = apply_move(&board, Move::new(2, 2)).unwrap();
        assert_eq!(board.get(Move::new(2, 2)), Some(Cell::O));
    }
}

mod move_generation {
    use super::*;

    #[test]
    fn test_initial_board_has_nine_moves() {
        assert_eq!(legal_moves(&initial_state()).len(), 9);
    }

    #[test]
    fn test_move_count_tracks_occupied_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let mut board = initial_state();
            while !is_terminal(&board) {
                let moves = legal_moves(&board);
                assert_eq!(moves.len(), 9 - board.occupied_count());
                assert!(moves.iter().all(|&mv| board.get(mv) == Some(Cell::Empty)));
                board = apply_move(&board, *moves.choose(&mut rng).unwrap()).unwrap();
            }
            assert_eq!(legal_moves(&board).len(), 9 - board.occupied_count());
        }
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let board = play(&[(1, 1), (0, 0)]);
        let before = board;

        let after = apply_move(&board, Move::new(2, 2)).unwrap();
        assert_eq!(board, before);
        assert_ne!(after, before);

        let _ = apply_move(&board, Move::new(1, 1));
        assert_eq!(board, before);
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let board = play(&[(1, 1)]);
        let err = apply_move(&board, Move::new(1, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { row: 1, col: 1 }));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let board = initial_state();
        for mv in [(3, 0), (0, 3), (3, 3), (10, 1)] {
            assert!(
                matches!(apply_move(&board, Move::from(mv)), Err(Error::InvalidMove { .. })),
                "{mv:?} should be rejected"
            );
        }
    }
}

mod terminal_detection {
    use super::*;

    #[test]
    fn test_top_row_win() {
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(winner(&board), Some(Player::X));
        assert!(is_terminal(&board));
        assert_eq!(utility(&board), Some(1));
    }

    #[test]
    fn test_column_win_for_o() {
        let board = play(&[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)]);
        assert_eq!(winner(&board), Some(Player::O));
        assert_eq!(utility(&board), Some(-1));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = play(&[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_full_board_draw() {
        // X O X
        // X O O
        // O X X
        let board = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        assert_eq!(board.occupied_count(), 9);
        assert!(is_terminal(&board));
        assert_eq!(winner(&board), None);
        assert_eq!(utility(&board), Some(0));
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_every_full_board_is_terminal() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let mut board = initial_state();
            // Keep filling cells past a win to reach a full grid
            while board.occupied_count() < 9 {
                let moves = legal_moves(&board);
                board = apply_move(&board, *moves.choose(&mut rng).unwrap()).unwrap();
            }
            assert!(is_terminal(&board));
            assert!(utility(&board).is_some());
        }
    }

    #[test]
    fn test_no_utility_in_progress() {
        let board = play(&[(0, 0), (1, 1)]);
        assert!(!is_terminal(&board));
        assert_eq!(utility(&board), None);
        assert_eq!(board.outcome(), Outcome::InProgress);
    }
}
