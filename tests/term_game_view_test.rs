use tui_columns::core::{GameSnapshot, PieceSnapshot};
use tui_columns::term::{block_rgb, GameView, Viewport};
use tui_columns::types::{Cell, Color, Phase, PlayPhase};

fn playing_snapshot() -> GameSnapshot {
    GameSnapshot {
        phase: Phase::Playing(PlayPhase::Controlling),
        episode_id: 1,
        ..GameSnapshot::default()
    }
}

#[test]
fn game_view_draws_border_at_exact_fit() {
    let view = GameView::default();
    assert_eq!(view.frame_size(), (16, 22));

    let fb = view.render(&playing_snapshot(), Viewport::new(16, 22));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(15, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(15, 21).unwrap().ch, '┘');
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
}

#[test]
fn game_view_draws_blocks_two_columns_wide() {
    let mut snap = playing_snapshot();
    snap.board[19][0] = Cell::Alive(Color::Red);
    snap.board[19][1] = Cell::Dead(Color::Blue, 1);

    let fb = GameView::default().render(&snap, Viewport::new(16, 22));

    for x in [1, 2] {
        let cell = fb.get(x, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, block_rgb(Color::Red));
        assert!(cell.style.bold);
    }
    for x in [3, 4] {
        let cell = fb.get(x, 20).unwrap();
        assert_eq!(cell.ch, '▓');
        assert_eq!(cell.style.fg, block_rgb(Color::Blue).lighten());
    }
    assert_eq!(fb.get(5, 20).unwrap().ch, '·');
}

#[test]
fn game_view_clips_piece_above_board() {
    let mut snap = playing_snapshot();
    snap.piece = Some(PieceSnapshot {
        colors: [Color::Red, Color::Green, Color::Yellow],
        col: 3,
        row: 0,
    });

    let fb = GameView::default().render(&snap, Viewport::new(16, 22));

    // Only the bottom block is on the board; the top border is untouched.
    let cell = fb.get(7, 1).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, block_rgb(Color::Yellow));
    assert_eq!(fb.get(8, 1).unwrap().ch, '█');
    assert_eq!(fb.get(7, 0).unwrap().ch, '─');
    assert_eq!(fb.get(7, 2).unwrap().ch, '·');
}

#[test]
fn game_view_centers_frame_and_shows_panel() {
    let mut snap = playing_snapshot();
    snap.score = 120;
    snap.speed = 3;

    let fb = GameView::default().render(&snap, Viewport::new(40, 24));

    // Frame at x=12, y=1; panel two columns to its right.
    assert_eq!(fb.get(12, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(27, 22).unwrap().ch, '┘');
    assert!(fb.row_text(1).contains("SCORE"));
    assert_eq!(fb.get(30, 2).unwrap().ch, '1');
    assert_eq!(fb.get(32, 2).unwrap().ch, '0');
    assert!(fb.row_text(4).contains("SPEED"));
    assert_eq!(fb.get(30, 5).unwrap().ch, '3');
}

#[test]
fn game_view_hides_panel_when_narrow() {
    let fb = GameView::default().render(&playing_snapshot(), Viewport::new(20, 22));
    for y in 0..22 {
        assert!(!fb.row_text(y).contains("SCORE"));
    }
}

#[test]
fn game_view_shows_title_and_game_over_banners() {
    let view = GameView::default();
    let viewport = Viewport::new(16, 22);

    let title = view.render(&GameSnapshot::default(), viewport);
    assert!((0..22).any(|y| title.row_text(y).contains("COLUMNS")));

    let over = GameSnapshot {
        phase: Phase::GameOver,
        ..GameSnapshot::default()
    };
    let fb = view.render(&over, viewport);
    assert!((0..22).any(|y| fb.row_text(y).contains("GAME OVER")));
    assert!(!(0..22).any(|y| fb.row_text(y).contains("COLUMNS")));

    let playing = view.render(&playing_snapshot(), viewport);
    assert!(!(0..22).any(|y| playing.row_text(y).contains("ENTER")));
}
