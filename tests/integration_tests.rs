//! Integration tests for whole-game behaviour through the public reducer

use blockfall::core::{Board, GameState, Piece};
use blockfall::types::{Action, Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SCORE_PER_ROW};

fn row_except(board: Board, y: i8, gap: i8) -> Board {
    (0..BOARD_WIDTH as i8)
        .filter(|&x| x != gap)
        .fold(board, |b, x| b.with_cell(Cell::new(x, y)))
}

fn drop_until_locked(mut state: GameState) -> GameState {
    let active = *state.active();
    for _ in 0..=BOARD_HEIGHT {
        let next = state.reduce(Action::MoveDown);
        if next.board() != state.board() {
            return next;
        }
        state = next;
    }
    panic!("piece {:?} never locked", active.kind());
}

#[test]
fn test_i_piece_locks_on_bottom_row() {
    let start = GameState::new(9).with_active(Piece::spawn(PieceKind::I));
    let preview = *start.next();

    let mut state = start.clone();
    for _ in 0..19 {
        state = state.apply_action(Action::MoveDown).unwrap();
    }
    assert!(state.active().cells().iter().all(|c| c.y == 19));
    assert_eq!(state.board(), &Board::new());

    let locked = state.apply_action(Action::MoveDown).unwrap();
    for x in 3..7 {
        assert!(locked.board().is_occupied(x, 19));
    }
    assert_eq!(locked.board().occupied_row_count(), 1);
    assert_eq!(locked.active(), &preview.shifted(0, -1));
    assert_eq!(locked.score(), 0);
    assert!(!locked.game_end());
}

#[test]
fn test_single_line_clear() {
    let board = row_except(Board::new(), 19, 4);
    let t_south = Piece::new(PieceKind::T).rotated().rotated().shifted(0, 17);
    let state = GameState::new(3).with_board(board).with_active(t_south);

    let cleared = state.apply_action(Action::MoveDown).unwrap();

    assert_eq!(cleared.score(), SCORE_PER_ROW);
    assert_eq!(cleared.lines(), 1);
    // The three cells locked on row 18 drop into row 19
    assert_eq!(cleared.board().row(19).unwrap(), &[0, 0, 0, 1, 1, 1, 0, 0, 0, 0]);
    assert_eq!(cleared.board().occupied_row_count(), 1);
    assert_eq!(cleared.board().row(0).unwrap(), &[0; 10]);
}

#[test]
fn test_spawn_overlap_ends_game() {
    let board = Board::new().with_cell(Cell::new(4, 0));
    let state = GameState::new(5)
        .with_high_score(30)
        .with_score(70)
        .with_board(board)
        .with_active(Piece::spawn(PieceKind::T));

    let ended = state.apply_action(Action::MoveDown).unwrap();

    assert!(ended.game_end());
    assert_eq!(ended.high_score(), 70);
    assert_eq!(ended.board(), &board);
    assert_eq!(ended.active(), state.active());
}

#[test]
fn test_reset_mid_game_is_noop() {
    let state = GameState::new(11).reduce(Action::MoveDown);
    assert_eq!(state.apply_action(Action::Reset), None);
    assert_eq!(state.reduce(Action::Reset), state);
}

#[test]
fn test_reset_after_game_end_keeps_high_score() {
    let ended = GameState::new(5)
        .with_score(40)
        .with_board(Board::new().with_cell(Cell::new(4, 0)))
        .with_active(Piece::spawn(PieceKind::T))
        .reduce(Action::MoveDown);
    assert!(ended.game_end());

    let fresh = ended.apply_action(Action::Reset).unwrap();
    assert!(!fresh.game_end());
    assert_eq!(fresh.score(), 0);
    assert_eq!(fresh.high_score(), 40);
    assert_eq!(fresh.board(), &Board::new());
}

#[test]
fn test_hold_once_per_piece() {
    let state = GameState::new(21);
    let held = state.apply_action(Action::Hold).unwrap();
    assert!(held.hold_used());
    assert_eq!(held.held().map(Piece::kind), Some(state.active().kind()));
    assert_eq!(held.apply_action(Action::Hold), None);
}

#[test]
fn test_hold_available_again_after_lock() {
    let held = GameState::new(21).reduce(Action::Hold);
    let stored = *held.held().unwrap();

    let locked = drop_until_locked(held);
    assert!(!locked.hold_used());

    let swapped = locked.apply_action(Action::Hold).unwrap();
    assert_eq!(swapped.active(), &stored);
    assert_eq!(swapped.held(), Some(&Piece::new(locked.active().kind())));
    assert!(swapped.hold_used());
}

#[test]
fn test_hold_swap_rejected_when_held_piece_overlaps() {
    let locked = drop_until_locked(GameState::new(21).reduce(Action::Hold));
    let column =
        (1..BOARD_HEIGHT as i8).fold(Board::new(), |b, y| b.with_cell(Cell::new(4, y)));
    let blocked = locked
        .with_board(column)
        .with_active(Piece::new(PieceKind::O).shifted(-3, 2));

    assert_eq!(blocked.apply_action(Action::Hold), None);
    // Keep falling instead: the O lands beside the column, never on it
    let landed = drop_until_locked(blocked);
    assert_eq!(landed.board().cells().iter().filter(|&&c| c == 1).count(), 19 + 4);
}

#[test]
fn test_i_spawn_over_stack_ends_game() {
    let board = Board::new().with_cell(Cell::new(4, 0)).with_cell(Cell::new(4, 1));
    let state = GameState::new(4).with_board(board).with_active(Piece::spawn(PieceKind::I));

    let ended = state.apply_action(Action::MoveDown).unwrap();
    assert!(ended.game_end());
    assert_eq!(ended.board(), &board);
    assert_eq!(ended.apply_action(Action::MoveDown), None);
}

#[test]
fn test_new_games_do_not_share_boards() {
    let a = GameState::new(2);
    let b = GameState::new(2);
    let a_locked = drop_until_locked(a.clone());

    assert_ne!(a_locked.board(), &Board::new());
    assert_eq!(a.board(), &Board::new());
    assert_eq!(b.board(), &Board::new());
}

#[test]
fn test_high_score_survives_two_games() {
    let end = |state: GameState| {
        state
            .with_board(Board::new().with_cell(Cell::new(4, 0)))
            .with_active(Piece::spawn(PieceKind::T))
            .reduce(Action::MoveDown)
    };

    let first = end(GameState::new(8).with_score(90));
    assert_eq!(first.high_score(), 90);

    let second = end(first.reduce(Action::Reset));
    assert!(second.game_end());
    assert_eq!(second.score(), 0);
    assert_eq!(second.high_score(), 90);
}

#[test]
fn test_ticks_only_move_at_current_level() {
    let state = GameState::new(6);
    assert_eq!(state.apply_action(Action::Tick(2)), None);
    assert_eq!(
        state.apply_action(Action::Tick(1)),
        state.apply_action(Action::MoveDown)
    );

    let faster = state.with_score(300);
    assert_eq!(faster.level(), 3);
    assert_eq!(faster.apply_action(Action::Tick(1)), None);
    assert!(faster.apply_action(Action::Tick(3)).is_some());
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        Action::MoveLeft,
        Action::Rotate,
        Action::Hold,
        Action::MoveDown,
        Action::MoveRight,
        Action::Tick(1),
    ];
    let play = |seed| {
        (0..40)
            .flat_map(|_| script)
            .fold(GameState::new(seed), |s, a| s.reduce(a))
    };
    assert_eq!(play(1234), play(1234));
}
