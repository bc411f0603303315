//! Falling piece - a vertical triple of colors
//!
//! The anchor is the bottommost cell of the triple; the piece occupies rows
//! `row-2`, `row-1` and `row` of its column. Rows above 0 are allowed while the
//! piece enters the board and are simply not drawn.

use crate::types::{Color, Coord, Palette, SPAWN_COLUMN};

/// Derive the three colors of a new piece from one seed value.
///
/// The colors are `seed`, `seed / 10` and `seed / 100` taken modulo the palette
/// size. These are not independent draws: with a millisecond clock as the
/// seed, neighbouring spawns share most of their digits and the colors are
/// correlated. That distribution is part of how the game plays and is kept
/// as is.
pub fn colors_from_seed(seed: u64, palette: Palette) -> [Color; 3] {
    [
        palette.color(seed),
        palette.color(seed / 10),
        palette.color(seed / 100),
    ]
}

/// The active falling triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingPiece {
    /// Top to bottom.
    pub colors: [Color; 3],
    pub col: i8,
    /// Row of the bottommost cell.
    pub row: i8,
}

impl FallingPiece {
    /// Create a piece at the spawn anchor (spawn column, row 0)
    pub fn new(colors: [Color; 3]) -> Self {
        Self {
            colors,
            col: SPAWN_COLUMN as i8,
            row: 0,
        }
    }

    pub fn from_seed(seed: u64, palette: Palette) -> Self {
        Self::new(colors_from_seed(seed, palette))
    }

    /// `(b1, b2, b3) -> (b2, b3, b1)`
    pub fn rotate_up(&mut self) {
        self.colors.rotate_left(1);
    }

    /// `(b1, b2, b3) -> (b3, b1, b2)`
    pub fn rotate_down(&mut self) {
        self.colors.rotate_right(1);
    }

    pub fn anchor(&self) -> Coord {
        Coord::new(self.col, self.row)
    }

    /// The three cells of the piece with their colors, top to bottom.
    pub fn cells(&self) -> [(Coord, Color); 3] {
        [
            (Coord::new(self.col, self.row - 2), self.colors[0]),
            (Coord::new(self.col, self.row - 1), self.colors[1]),
            (Coord::new(self.col, self.row), self.colors[2]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_from_seed_uses_decimal_digits() {
        // 0, 0, 0 -> red red red
        assert_eq!(
            colors_from_seed(0, Palette::Classic),
            [Color::Red, Color::Red, Color::Red]
        );
        // 125: 125 % 3 = 2, 12 % 3 = 0, 1 % 3 = 1
        assert_eq!(
            colors_from_seed(125, Palette::Classic),
            [Color::Blue, Color::Red, Color::Green]
        );
        // 125 with 7 colors: 125 % 7 = 6, 12 % 7 = 5, 1 % 7 = 1
        assert_eq!(
            colors_from_seed(125, Palette::Rich),
            [Color::Cyan, Color::Orange, Color::Green]
        );
    }

    #[test]
    fn test_rotation_directions() {
        let mut piece = FallingPiece::new([Color::Red, Color::Green, Color::Blue]);
        piece.rotate_up();
        assert_eq!(piece.colors, [Color::Green, Color::Blue, Color::Red]);

        let mut piece = FallingPiece::new([Color::Red, Color::Green, Color::Blue]);
        piece.rotate_down();
        assert_eq!(piece.colors, [Color::Blue, Color::Red, Color::Green]);
    }

    #[test]
    fn test_cells_span_three_rows_above_anchor() {
        let mut piece = FallingPiece::new([Color::Red, Color::Green, Color::Blue]);
        piece.row = 5;
        let cells = piece.cells();
        assert_eq!(cells[0], (Coord::new(3, 3), Color::Red));
        assert_eq!(cells[1], (Coord::new(3, 4), Color::Green));
        assert_eq!(cells[2], (Coord::new(3, 5), Color::Blue));
    }
}
