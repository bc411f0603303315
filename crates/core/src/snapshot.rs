use crate::piece::FallingPiece;
use crate::types::{Cell, Color, Palette, Phase, BOARD_HEIGHT, BOARD_WIDTH};

pub type BoardGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub colors: [Color; 3],
    pub col: i8,
    pub row: i8,
}

impl From<FallingPiece> for PieceSnapshot {
    fn from(value: FallingPiece) -> Self {
        Self {
            colors: value.colors,
            col: value.col,
            row: value.row,
        }
    }
}

/// Everything a renderer needs for one frame. Board is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub board_hash: u64,
    pub piece: Option<PieceSnapshot>,
    pub phase: Phase,
    pub palette: Palette,
    pub episode_id: u32,
    pub pieces_spawned: u32,
    pub score: u32,
    pub speed: u32,
    pub blocks_cleared: u32,
    pub chain: u32,
    pub max_chain: u32,
}

impl GameSnapshot {
    /// Cheap change detector for render throttling.
    pub fn fingerprint(&self) -> u64 {
        let (piece_col, piece_row, piece_colors) = match self.piece {
            Some(p) => (
                p.col as u8,
                p.row as u8,
                [
                    color_code(p.colors[0]),
                    color_code(p.colors[1]),
                    color_code(p.colors[2]),
                ],
            ),
            None => (0xff, 0xff, [0xff; 3]),
        };
        let head = self
            .board_hash
            .to_le_bytes()
            .into_iter()
            .chain([piece_col, piece_row])
            .chain(piece_colors)
            .chain(self.phase.as_str().bytes())
            .chain(self.score.to_le_bytes());
        fnv1a64(head)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            board_hash: board_hash(&[[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]),
            piece: None,
            phase: Phase::TitleScreen,
            palette: Palette::Classic,
            episode_id: 0,
            pieces_spawned: 0,
            score: 0,
            speed: 1,
            blocks_cleared: 0,
            chain: 0,
            max_chain: 0,
        }
    }
}

fn color_code(color: Color) -> u8 {
    match color {
        Color::Red => 1,
        Color::Green => 2,
        Color::Blue => 3,
        Color::Yellow => 4,
        Color::Purple => 5,
        Color::Orange => 6,
        Color::Cyan => 7,
    }
}

/// Compact byte code for a cell: 0 empty, 1-7 alive, 9-15 dead.
pub fn cell_code(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => 0,
        Cell::Alive(color) => color_code(color),
        Cell::Dead(color, _) => 8 + color_code(color),
    }
}

pub fn fnv1a64(bytes: impl Iterator<Item = u8>) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

/// FNV-1a over the cell codes in row-major order.
pub fn board_hash(board: &BoardGrid) -> u64 {
    fnv1a64(board.iter().flat_map(|row| row.iter().map(|c| cell_code(*c))))
}
