//! Match detection
//!
//! Every occupied cell is tested as the centre of a three-in-a-row along four
//! axes. Cells compare by color only, so alive and dead blocks of the same
//! color line up with each other. A longer run is reported as several overlapping triples, one per
//! interior cell, never merged. The flattened result counts in how many
//! triples each coordinate appears; that count is the elimination multiplier.

use crate::board::Board;
use crate::types::Coord;

/// Direction of a match triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchAxis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl MatchAxis {
    pub const ALL: [MatchAxis; 4] = [
        MatchAxis::Horizontal,
        MatchAxis::Vertical,
        MatchAxis::Diagonal,
        MatchAxis::AntiDiagonal,
    ];

    /// Offsets of the two neighbours: (left/above, right/below).
    pub fn neighbour_offsets(&self) -> [(i8, i8); 2] {
        match self {
            MatchAxis::Horizontal => [(-1, 0), (1, 0)],
            MatchAxis::Vertical => [(0, -1), (0, 1)],
            MatchAxis::Diagonal => [(-1, -1), (1, 1)],
            MatchAxis::AntiDiagonal => [(1, -1), (-1, 1)],
        }
    }
}

/// Three occupied cells of one color in a row, centred on `cells[1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchTriple {
    pub axis: MatchAxis,
    pub cells: [Coord; 3],
}

impl MatchTriple {
    pub fn center(&self) -> Coord {
        self.cells[1]
    }
}

/// A coordinate to eliminate and the number of triples it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchedCell {
    pub coord: Coord,
    pub multiplier: u32,
}

/// Find every centred triple on the board, in column-major scan order of the
/// centre and then axis order.
pub fn find_match_triples(board: &Board) -> Vec<MatchTriple> {
    let mut triples = Vec::new();

    for center in Board::coords() {
        let Some(color) = board.cell_at(center).color() else {
            continue;
        };
        let same = |c: Coord| board.cell_at(c).color() == Some(color);

        for axis in MatchAxis::ALL {
            let [(ax, ay), (bx, by)] = axis.neighbour_offsets();
            let a = center.offset(ax, ay);
            let b = center.offset(bx, by);
            // Out-of-range neighbours read as empty and never match.
            if same(a) && same(b) {
                triples.push(MatchTriple {
                    axis,
                    cells: [a, center, b],
                });
            }
        }
    }

    triples
}

/// Flatten triples into distinct coordinates with their occurrence count.
///
/// Coordinates keep the order of their first appearance.
pub fn flatten_triples(triples: &[MatchTriple]) -> Vec<MatchedCell> {
    let mut matched: Vec<MatchedCell> = Vec::with_capacity(triples.len() * 3);

    for coord in triples.iter().flat_map(|t| t.cells) {
        match matched.iter_mut().find(|m| m.coord == coord) {
            Some(existing) => existing.multiplier += 1,
            None => matched.push(MatchedCell {
                coord,
                multiplier: 1,
            }),
        }
    }

    matched
}

/// Every coordinate taking part in a match, deduplicated, with multipliers.
pub fn find_matches(board: &Board) -> Vec<MatchedCell> {
    flatten_triples(&find_match_triples(board))
}
