//! Grid engine - the board plus the falling piece and every rule acting on them
//!
//! All operations are synchronous and total. Anything that needs an active
//! piece is a no-op without one, invalid moves leave the state untouched and
//! out-of-range coordinates are absorbed by the board. Pacing (when to fall,
//! how fast to eliminate) belongs to the caller; see [`crate::session`].

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::matches::{self, MatchTriple, MatchedCell};
use crate::piece::FallingPiece;
use crate::types::{Cell, Coord, Palette, BOARD_HEIGHT, BOARD_WIDTH};

/// Result of a single fall step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallOutcome {
    /// No piece was falling.
    Idle,
    /// The piece moved down one row.
    Fell,
    /// The piece was written into the grid and cleared.
    Landed,
}

/// Board, optional falling piece and palette for new pieces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEngine {
    board: Board,
    piece: Option<FallingPiece>,
    palette: Palette,
}

impl GridEngine {
    pub fn new(palette: Palette) -> Self {
        Self::with_board(Board::new(), palette)
    }

    pub fn with_board(board: Board, palette: Palette) -> Self {
        Self {
            board,
            piece: None,
            palette,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(any(test, feature = "test-util"))]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> Option<FallingPiece> {
        self.piece
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    pub fn cell_at(&self, col: i8, row: i8) -> Cell {
        self.board.get(col, row)
    }

    pub fn spawn_blocked(&self) -> bool {
        self.board.is_spawn_blocked()
    }

    /// Place a new piece at the spawn anchor with colors derived from `seed`.
    ///
    /// Returns false without changing anything if a piece is already falling
    /// or the spawn cell is taken; the caller treats the latter as game over.
    pub fn spawn(&mut self, seed: u64) -> bool {
        if self.piece.is_some() || self.spawn_blocked() {
            return false;
        }
        let piece = FallingPiece::from_seed(seed, self.palette);
        log::debug!(
            "spawn seed={} colors={:?} at ({}, {})",
            seed,
            piece.colors,
            piece.col,
            piece.row
        );
        self.piece = Some(piece);
        true
    }

    /// Place an explicit piece, bypassing seed derivation.
    ///
    /// Refused when the anchor lies outside the grid.
    #[cfg(any(test, feature = "test-util"))]
    pub fn spawn_piece(&mut self, piece: FallingPiece) -> bool {
        if self.piece.is_some() || self.spawn_blocked() || !piece.anchor().in_bounds() {
            return false;
        }
        self.piece = Some(piece);
        true
    }

    /// Move the piece down one row, or land it when the cell below is taken.
    /// The floor counts as taken.
    pub fn fall_step(&mut self) -> FallOutcome {
        let Some(mut piece) = self.piece else {
            return FallOutcome::Idle;
        };

        // Below the last row is out of range, which is never vacant.
        let below = piece.anchor().offset(0, 1);
        let below_free = self.board.is_vacant(below.col, below.row);

        if below_free {
            piece.row += 1;
            self.piece = Some(piece);
            log::trace!("fall to row {}", piece.row);
            FallOutcome::Fell
        } else {
            self.land();
            FallOutcome::Landed
        }
    }

    /// Write the piece into the grid as alive blocks and clear it.
    ///
    /// Cells above row 0 are dropped by the board.
    pub fn land(&mut self) -> bool {
        let Some(piece) = self.piece.take() else {
            return false;
        };
        for (coord, color) in piece.cells() {
            self.board.set_at(coord, Cell::Alive(color));
        }
        log::debug!("landed {:?} at ({}, {})", piece.colors, piece.col, piece.row);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    /// Only the anchor row of the target column is checked.
    fn shift(&mut self, dcol: i8) -> bool {
        let Some(piece) = self.piece.as_mut() else {
            return false;
        };
        let Some(target) = piece.col.checked_add(dcol) else {
            return false;
        };
        if !self.board.is_vacant(target, piece.row) {
            return false;
        }
        piece.col = target;
        true
    }

    pub fn rotate_up(&mut self) -> bool {
        match self.piece.as_mut() {
            Some(piece) => {
                piece.rotate_up();
                true
            }
            None => false,
        }
    }

    pub fn rotate_down(&mut self) -> bool {
        match self.piece.as_mut() {
            Some(piece) => {
                piece.rotate_down();
                true
            }
            None => false,
        }
    }

    /// Teleport the piece to the bottommost empty cell of its column.
    ///
    /// The piece stays active; it lands on the next fall step. On a full
    /// column this targets row 0.
    pub fn drop_to_bottom(&mut self) -> bool {
        let Some(piece) = self.piece.as_mut() else {
            return false;
        };
        piece.row = self.board.bottom_empty_cell(piece.col);
        true
    }

    pub fn find_match_triples(&self) -> Vec<MatchTriple> {
        matches::find_match_triples(&self.board)
    }

    pub fn find_matches(&self) -> Vec<MatchedCell> {
        matches::find_matches(&self.board)
    }

    /// Turn an alive cell dead. Any other cell is left alone.
    ///
    /// Returns whether the cell changed.
    pub fn eliminate_cell(&mut self, coord: Coord, multiplier: u32) -> bool {
        match self.board.cell_at(coord) {
            Cell::Alive(color) => self.board.set_at(coord, Cell::Dead(color, multiplier)),
            _ => false,
        }
    }

    /// Clear a dead cell once its removal has finished.
    pub fn remove_dead_cell(&mut self, coord: Coord) -> bool {
        match self.board.cell_at(coord) {
            Cell::Dead(_, _) => self.board.set_at(coord, Cell::Empty),
            _ => false,
        }
    }

    pub fn has_dead_cells(&self) -> bool {
        self.board.has_dead_cells()
    }

    pub fn is_collapsible(&self) -> bool {
        (0..BOARD_WIDTH as i8).any(|col| self.board.is_column_collapsible(col))
    }

    /// Drop every collapsible column by one row. Returns the columns that moved.
    pub fn collapse_step(&mut self) -> ArrayVec<u8, { BOARD_WIDTH as usize }> {
        let mut moved = ArrayVec::new();
        for col in 0..BOARD_WIDTH {
            if self.board.collapse_column(col as i8) {
                moved.push(col);
            }
        }
        moved
    }
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}
