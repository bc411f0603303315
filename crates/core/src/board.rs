//! Board module - manages the game grid
//!
//! The board is a 7x20 grid stored column-major: an array of columns, each an
//! ordered run of cells with index 0 at the top. Columns are the unit gravity
//! works on, so collapsing one is a single in-place shift.
//!
//! Reads outside the grid return [`Cell::Empty`] and writes outside the grid
//! are dropped, so neighbour lookups near the edges need no special casing.

use crate::types::{Cell, Coord, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_COLUMN};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// One column, top to bottom.
type Column = [Cell; HEIGHT];

/// The game board - 7 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    columns: [Column; WIDTH],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            columns: [[Cell::Empty; HEIGHT]; WIDTH],
        }
    }

    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<(usize, usize)> {
        Coord::new(col, row)
            .in_bounds()
            .then_some((col as usize, row as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (col, row). Out-of-range coordinates read as empty.
    pub fn get(&self, col: i8, row: i8) -> Cell {
        match Self::index(col, row) {
            Some((c, r)) => self.columns[c][r],
            None => Cell::Empty,
        }
    }

    pub fn cell_at(&self, coord: Coord) -> Cell {
        self.get(coord.col, coord.row)
    }

    /// Set cell at (col, row).
    /// Returns false (and writes nothing) if out of bounds.
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> bool {
        match Self::index(col, row) {
            Some((c, r)) => {
                self.columns[c][r] = cell;
                true
            }
            None => false,
        }
    }

    pub fn set_at(&mut self, coord: Coord, cell: Cell) -> bool {
        self.set(coord.col, coord.row, cell)
    }

    /// Check if position is in bounds and empty
    pub fn is_vacant(&self, col: i8, row: i8) -> bool {
        Self::index(col, row).is_some() && self.get(col, row).is_empty()
    }

    /// Game over condition: the spawn cell at (width/2, 0) is taken.
    pub fn is_spawn_blocked(&self) -> bool {
        !self.get(SPAWN_COLUMN as i8, 0).is_empty()
    }

    /// Bottommost empty row of a column.
    ///
    /// A full column (or an out-of-range column) yields 0. Dropping a piece on
    /// a full column therefore targets row 0.
    pub fn bottom_empty_cell(&self, col: i8) -> i8 {
        let Some((c, _)) = Self::index(col, 0) else {
            return 0;
        };
        self.columns[c]
            .iter()
            .rposition(Cell::is_empty)
            .map_or(0, |row| row as i8)
    }

    /// Topmost row holding an alive block, if any.
    pub fn top_alive_cell(&self, col: i8) -> Option<i8> {
        let (c, _) = Self::index(col, 0)?;
        self.columns[c]
            .iter()
            .position(Cell::is_alive)
            .map(|row| row as i8)
    }

    /// A column can collapse when some alive block has an empty cell below it,
    /// i.e. its bottommost empty row lies below its topmost alive row.
    pub fn is_column_collapsible(&self, col: i8) -> bool {
        match self.top_alive_cell(col) {
            Some(top) => self.bottom_empty_cell(col) > top,
            None => false,
        }
    }

    /// Shift a column down by exactly one row: the bottommost empty cell is
    /// removed and a fresh empty cell enters at the top.
    ///
    /// Returns false if the column was not collapsible.
    pub fn collapse_column(&mut self, col: i8) -> bool {
        if !self.is_column_collapsible(col) {
            return false;
        }
        let gap = self.bottom_empty_cell(col) as usize;
        let column = &mut self.columns[col as usize];
        column.copy_within(0..gap, 1);
        column[0] = Cell::Empty;
        true
    }

    pub fn has_dead_cells(&self) -> bool {
        self.columns.iter().flatten().any(Cell::is_dead)
    }

    /// Iterate all in-range coordinates in column-major scan order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_WIDTH as i8)
            .flat_map(|col| (0..BOARD_HEIGHT as i8).map(move |row| Coord::new(col, row)))
    }

    /// Copy the board into a row-major grid (for rendering/snapshots).
    pub fn write_row_major(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (c, column) in self.columns.iter().enumerate() {
            for (r, cell) in column.iter().enumerate() {
                out[r][c] = *cell;
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for column in &mut self.columns {
            column.fill(Cell::Empty);
        }
    }

    /// Build a board from rows of characters, top row first.
    ///
    /// `.` is empty, `R G B Y P O C` are alive blocks and the lowercase
    /// letters are dead blocks with multiplier 1. Missing rows at the top
    /// are left empty, so short layouts describe the bottom of the board.
    #[cfg(any(test, feature = "test-util"))]
    pub fn from_rows(rows: &[&str]) -> Self {
        use crate::types::Color;

        assert!(rows.len() <= HEIGHT);
        let mut board = Self::new();
        let top = HEIGHT - rows.len();
        for (i, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), WIDTH, "row {} has wrong width", i);
            for (c, ch) in line.chars().enumerate() {
                let color = match ch.to_ascii_uppercase() {
                    'R' => Some(Color::Red),
                    'G' => Some(Color::Green),
                    'B' => Some(Color::Blue),
                    'Y' => Some(Color::Yellow),
                    'P' => Some(Color::Purple),
                    'O' => Some(Color::Orange),
                    'C' => Some(Color::Cyan),
                    _ => None,
                };
                let cell = match color {
                    Some(color) if ch.is_ascii_lowercase() => Cell::Dead(color, 1),
                    Some(color) => Cell::Alive(color),
                    None => Cell::Empty,
                };
                board.columns[c][top + i] = cell;
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some((0, 0)));
        assert_eq!(Board::index(6, 19), Some((6, 19)));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(7, 0), None);
        assert_eq!(Board::index(0, 20), None);
        assert_eq!(Board::index(0, -1), None);
    }

    #[test]
    fn test_board_is_column_major() {
        let mut board = Board::new();
        board.set(2, 5, Cell::Alive(Color::Green));

        assert_eq!(board.columns[2][5], Cell::Alive(Color::Green));
        assert_eq!(board.get(2, 5), Cell::Alive(Color::Green));
    }

    #[test]
    fn test_collapse_column_shifts_one_row() {
        let mut board = Board::new();
        board.set(0, 17, Cell::Alive(Color::Red));
        board.set(0, 19, Cell::Alive(Color::Blue));

        assert!(board.is_column_collapsible(0));
        assert!(board.collapse_column(0));
        assert_eq!(board.get(0, 17), Cell::Empty);
        assert_eq!(board.get(0, 18), Cell::Alive(Color::Red));
        assert_eq!(board.get(0, 19), Cell::Alive(Color::Blue));
        assert!(!board.is_column_collapsible(0));
        assert!(!board.collapse_column(0));
    }

    #[test]
    fn test_from_rows_places_layout_at_bottom() {
        let board = Board::from_rows(&["R......", "g.....B"]);
        assert_eq!(board.get(0, 18), Cell::Alive(Color::Red));
        assert_eq!(board.get(0, 19), Cell::Dead(Color::Green, 1));
        assert_eq!(board.get(6, 19), Cell::Alive(Color::Blue));
        assert_eq!(board.get(1, 19), Cell::Empty);
    }
}
