//! Property tests for the reducer and its building blocks.
//!
//! Random seeds and action scripts drive whole games; every visited state is
//! checked against the invariants that must hold regardless of input.

use proptest::prelude::*;

use blockfall::core::collision::collides_board;
use blockfall::core::{level_for_score, Board, GameState, Piece, RandomSequence};
use blockfall::types::{Action, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SCORE_PER_ROW};

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => Just(Action::MoveLeft),
        3 => Just(Action::MoveRight),
        6 => Just(Action::MoveDown),
        3 => Just(Action::Rotate),
        1 => Just(Action::Hold),
        1 => Just(Action::Reset),
        2 => (1u32..=5).prop_map(Action::Tick),
    ]
}

fn kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn assert_active_in_bounds(state: &GameState) {
    for cell in state.active().cells() {
        assert!((0..BOARD_WIDTH as i8).contains(&cell.x), "x out of bounds: {cell:?}");
        assert!(cell.y >= -1 && cell.y < BOARD_HEIGHT as i8, "y out of bounds: {cell:?}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rng_is_deterministic_and_in_range(seed in any::<u32>()) {
        let a: Vec<u8> = RandomSequence::new(seed).draws().take(200).collect();
        let b: Vec<u8> = RandomSequence::new(seed).draws().take(200).collect();
        prop_assert_eq!(&a, &b);
        prop_assert!(a.iter().all(|v| (1..=7).contains(v)));
    }

    #[test]
    fn prop_four_rotations_are_identity(k in kind(), dx in -3i8..=3, dy in 0i8..=15) {
        let piece = Piece::new(k).shifted(dx, dy);
        let back = piece.rotated().rotated().rotated().rotated();
        prop_assert_eq!(back, piece);
    }

    #[test]
    fn prop_games_keep_invariants(
        seed in any::<u32>(),
        script in prop::collection::vec(action(), 1..400),
    ) {
        let mut state = GameState::new(seed);
        assert_active_in_bounds(&state);

        for action in script {
            let next = state.reduce(action);

            assert_active_in_bounds(&next);
            if !next.game_end() {
                prop_assert!(!collides_board(next.board(), next.active()));
            }
            prop_assert!(next.high_score() >= state.high_score());
            prop_assert_eq!(next.level(), level_for_score(next.score()));
            prop_assert_eq!(next.score(), next.lines() * SCORE_PER_ROW);
            prop_assert!(next.board().full_rows().is_empty());
            if next.game_end() {
                prop_assert!(next.high_score() >= next.score());
            }
            if state.game_end() && action != Action::Reset {
                prop_assert_eq!(&next, &state);
            }

            state = next;
        }
    }

    #[test]
    fn prop_remove_rows_keeps_remaining_order(
        rows in prop::collection::vec(prop::collection::vec(any::<bool>(), BOARD_WIDTH as usize), BOARD_HEIGHT as usize),
        full in prop::collection::vec(any::<bool>(), BOARD_HEIGHT as usize),
    ) {
        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (y, row) in rows.iter().enumerate() {
            for (x, &set) in row.iter().enumerate() {
                grid[y][x] = u8::from(set || full[y]);
            }
        }
        let board = Board::from_rows(&grid);
        let cleared = board.remove_rows(&board.full_rows());

        let kept: Vec<[u8; BOARD_WIDTH as usize]> = grid
            .iter()
            .filter(|row| row.contains(&0))
            .copied()
            .collect();
        let out = cleared.to_rows();
        let empties = BOARD_HEIGHT as usize - kept.len();

        prop_assert!(out[..empties].iter().all(|row| row.iter().all(|&v| v == 0)));
        prop_assert_eq!(&out[empties..], kept.as_slice());
    }
}
