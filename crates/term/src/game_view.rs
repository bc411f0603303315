//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Color, Phase, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAYFIELD_BG: Rgb = Rgb::new(24, 24, 34);
const GRID_DOT: Rgb = Rgb::new(70, 70, 84);
const BORDER: Rgb = Rgb::new(200, 200, 200);

const BLOCK: char = '█';
const DEAD_BLOCK: char = '▓';

/// Layout of the board inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the Columns board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (w, h) = self.frame_size();
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        for (row, cells) in snap.board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                self.draw_cell(fb, frame, col as u16, row as u16, *cell);
            }
        }

        // Falling piece; rows above the board are clipped.
        if let Some(piece) = snap.piece {
            for (i, color) in piece.colors.iter().enumerate() {
                let row = piece.row - 2 + i as i8;
                if row >= 0 && piece.col >= 0 {
                    self.draw_cell(fb, frame, piece.col as u16, row as u16, Cell::Alive(*color));
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase {
            Phase::TitleScreen => {
                self.draw_banner(fb, frame, &["COLUMNS", "", "ENTER", "to start"]);
            }
            Phase::GameOver => {
                self.draw_banner(fb, frame, &["GAME OVER", "", "ENTER", "for title"]);
            }
            Phase::Playing(_) => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = CellStyle::new(BORDER, Rgb::BLACK);
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, f: Frame, col: u16, row: u16, cell: Cell) {
        let (ch, style) = match cell {
            Cell::Empty => ('·', CellStyle::new(GRID_DOT, PLAYFIELD_BG).dim()),
            Cell::Alive(color) => (BLOCK, CellStyle::new(block_rgb(color), PLAYFIELD_BG).bold()),
            Cell::Dead(color, _) => (
                DEAD_BLOCK,
                CellStyle::new(block_rgb(color).lighten(), PLAYFIELD_BG),
            ),
        };
        let px = f.x + 1 + col * self.cell_w;
        let py = f.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, vp: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x.saturating_add(10) > vp.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        let rows = [
            ("SCORE", snap.score),
            ("SPEED", snap.speed),
            ("BLOCKS", snap.blocks_cleared),
            ("CHAIN", snap.max_chain),
            ("GAME", snap.episode_id),
        ];
        let mut y = f.y;
        for (name, n) in rows {
            if y.saturating_add(1) >= vp.height {
                break;
            }
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y = y.saturating_add(3);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, f: Frame, lines: &[&str]) {
        let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
        let top = f.y + f.h / 2 - lines.len() as u16 / 2;
        for (i, line) in lines.iter().enumerate() {
            let text_w = line.chars().count() as u16;
            let x = f.x + f.w.saturating_sub(text_w) / 2;
            fb.put_str(x, top + i as u16, line, style);
        }
    }
}

/// Terminal color of a block.
pub fn block_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(220, 70, 70),
        Color::Green => Rgb::new(90, 210, 110),
        Color::Blue => Rgb::new(80, 120, 230),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Purple => Rgb::new(190, 110, 220),
        Color::Orange => Rgb::new(255, 160, 40),
        Color::Cyan => Rgb::new(80, 220, 220),
    }
}
