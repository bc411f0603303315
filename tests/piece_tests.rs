//! Falling piece tests - spawn, fall, land, move, rotate, drop

use tui_columns::core::{colors_from_seed, Board, FallOutcome, FallingPiece, GridEngine};
use tui_columns::types::{Cell, Color, Palette, BOARD_HEIGHT, BOARD_WIDTH};

fn engine_with_piece(colors: [Color; 3], col: i8, row: i8) -> GridEngine {
    let mut engine = GridEngine::new(Palette::Classic);
    assert!(engine.spawn_piece(FallingPiece { colors, col, row }));
    engine
}

const RGB: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

#[test]
fn test_spawn_seed_zero_falls_to_floor() {
    let mut engine = GridEngine::new(Palette::Classic);
    assert!(engine.spawn(0));

    let piece = engine.piece().unwrap();
    assert_eq!(piece.colors, colors_from_seed(0, Palette::Classic));
    assert_eq!((piece.col, piece.row), (3, 0));

    for step in 1..BOARD_HEIGHT as i8 {
        assert_eq!(engine.fall_step(), FallOutcome::Fell);
        assert_eq!(engine.piece().unwrap().row, step);
    }

    // Resting on the floor: the next evaluation lands it.
    assert_eq!(engine.fall_step(), FallOutcome::Landed);
    assert!(engine.piece().is_none());
    for (i, row) in (17..=19).enumerate() {
        assert_eq!(engine.cell_at(3, row), Cell::Alive(piece.colors[i]));
    }
}

#[test]
fn test_landing_writes_exactly_three_cells() {
    let board = Board::from_rows(&["R.G.B..", "GBRGBRG"]);
    let mut engine = GridEngine::with_board(board.clone(), Palette::Classic);
    engine.spawn_piece(FallingPiece {
        colors: RGB,
        col: 1,
        row: 18,
    });

    assert_eq!(engine.fall_step(), FallOutcome::Landed);
    assert!(engine.piece().is_none());

    for col in 0..BOARD_WIDTH as i8 {
        for row in 0..BOARD_HEIGHT as i8 {
            let expected = match (col, row) {
                (1, 16) => Cell::Alive(Color::Red),
                (1, 17) => Cell::Alive(Color::Green),
                (1, 18) => Cell::Alive(Color::Blue),
                _ => board.get(col, row),
            };
            assert_eq!(engine.cell_at(col, row), expected, "({}, {})", col, row);
        }
    }
}

#[test]
fn test_spawn_refused_when_blocked() {
    let mut board = Board::new();
    board.set(3, 0, Cell::Alive(Color::Red));
    let mut engine = GridEngine::with_board(board, Palette::Classic);

    assert!(engine.spawn_blocked());
    assert!(!engine.spawn(42));
    assert!(engine.piece().is_none());
}

#[test]
fn test_move_stops_at_walls() {
    let mut engine = engine_with_piece(RGB, 0, 5);
    assert!(!engine.move_left());
    assert_eq!(engine.piece().unwrap().col, 0);

    let mut engine = engine_with_piece(RGB, BOARD_WIDTH as i8 - 1, 5);
    assert!(!engine.move_right());
    assert_eq!(engine.piece().unwrap().col, BOARD_WIDTH as i8 - 1);
}

#[test]
fn test_move_blocked_by_occupied_anchor_row() {
    let mut engine = engine_with_piece(RGB, 3, 19);
    engine.board_mut().set(2, 19, Cell::Alive(Color::Red));

    assert!(!engine.move_left());
    assert_eq!(engine.piece().unwrap().col, 3);
    assert!(engine.move_right());
    assert_eq!(engine.piece().unwrap().col, 4);
    assert_eq!(engine.piece().unwrap().row, 19);
}

#[test]
fn test_move_only_checks_anchor_row() {
    // The cell beside the top of the piece is taken, the anchor row is free.
    let mut engine = engine_with_piece(RGB, 3, 10);
    engine.board_mut().set(2, 8, Cell::Alive(Color::Red));

    assert!(engine.move_left());
    assert_eq!(engine.piece().unwrap().col, 2);
}

#[test]
fn test_rotation_is_a_three_cycle() {
    let mut engine = engine_with_piece(RGB, 3, 4);

    for _ in 0..3 {
        assert!(engine.rotate_up());
    }
    assert_eq!(engine.piece().unwrap().colors, RGB);

    for _ in 0..3 {
        assert!(engine.rotate_down());
    }
    assert_eq!(engine.piece().unwrap().colors, RGB);

    engine.rotate_up();
    engine.rotate_down();
    assert_eq!(engine.piece().unwrap().colors, RGB);
    assert_eq!(engine.piece().unwrap().row, 4);
}

#[test]
fn test_drop_to_bottom_teleports_without_landing() {
    let board = Board::from_rows(&["...R...", "...G..."]);
    let mut engine = GridEngine::with_board(board, Palette::Classic);
    engine.spawn(0);

    assert!(engine.drop_to_bottom());
    let piece = engine.piece().unwrap();
    assert_eq!((piece.col, piece.row), (3, 17));
    assert_eq!(engine.cell_at(3, 17), Cell::Empty);

    assert_eq!(engine.fall_step(), FallOutcome::Landed);
    assert!(engine.cell_at(3, 17).is_alive());
}

#[test]
fn test_drop_on_full_column_targets_row_zero() {
    let mut board = Board::new();
    for row in 1..BOARD_HEIGHT as i8 {
        let color = if row % 2 == 0 { Color::Red } else { Color::Blue };
        board.set(1, row, Cell::Alive(color));
    }
    board.set(1, 0, Cell::Alive(Color::Green));
    let mut engine = GridEngine::with_board(board, Palette::Classic);
    engine.spawn_piece(FallingPiece {
        colors: RGB,
        col: 1,
        row: 0,
    });

    assert!(engine.drop_to_bottom());
    assert_eq!(engine.piece().unwrap().row, 0);
}

#[test]
fn test_landing_near_top_drops_cells_above_grid() {
    let mut board = Board::new();
    for row in 1..BOARD_HEIGHT as i8 {
        let color = if row % 2 == 0 { Color::Yellow } else { Color::Purple };
        board.set(3, row, Cell::Alive(color));
    }
    let mut engine = GridEngine::with_board(board, Palette::Rich);
    assert!(engine.spawn_piece(FallingPiece::new(RGB)));

    assert_eq!(engine.fall_step(), FallOutcome::Landed);
    assert_eq!(engine.cell_at(3, 0), Cell::Alive(Color::Blue));
    assert!(engine.spawn_blocked());
    assert!(!engine.spawn(7));
}
