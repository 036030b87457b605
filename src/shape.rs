//! Ship shapes as boolean masks, and the orientation candidates used to
//! anchor them on a board.

use crate::grid::Coord;

/// A ship shape: an immutable 2-D boolean mask plus how many instances of it
/// the fleet carries. Mask rows must all have the same width and the true
/// cells must form one orthogonally connected piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    name: &'static str,
    mask: &'static [&'static [bool]],
    count: usize,
}

impl ShapeDef {
    pub const fn new(name: &'static str, mask: &'static [&'static [bool]], count: usize) -> Self {
        ShapeDef { name, mask, count }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// How many instances of this shape get placed.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn height(&self) -> usize {
        self.mask.len()
    }

    pub fn width(&self) -> usize {
        self.mask[0].len()
    }

    /// Whether mask cell (i, j) belongs to the ship.
    pub fn filled(&self, i: usize, j: usize) -> bool {
        self.mask[i][j]
    }

    /// Number of true cells in the mask.
    pub fn cell_count(&self) -> usize {
        self.mask
            .iter()
            .map(|row| row.iter().filter(|&&b| b).count())
            .sum()
    }
}

/// One orientation in which a shape can be anchored at an origin: a direction
/// sign per mask axis plus an axis-swap flag. Eight variants are evaluated
/// per origin; degenerate masks may accept the same footprint more than once
/// and duplicates are deliberately kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub row_sign: isize,
    pub col_sign: isize,
    pub swapped: bool,
}

impl Candidate {
    /// The rows-major 2x2 sign combinations followed by the same four with
    /// mask axes swapped.
    pub const ALL: [Candidate; 8] = [
        Candidate { row_sign: 1, col_sign: 1, swapped: false },
        Candidate { row_sign: 1, col_sign: -1, swapped: false },
        Candidate { row_sign: -1, col_sign: 1, swapped: false },
        Candidate { row_sign: -1, col_sign: -1, swapped: false },
        Candidate { row_sign: 1, col_sign: 1, swapped: true },
        Candidate { row_sign: 1, col_sign: -1, swapped: true },
        Candidate { row_sign: -1, col_sign: 1, swapped: true },
        Candidate { row_sign: -1, col_sign: -1, swapped: true },
    ];

    /// Map mask-local offsets (i, j) to an absolute board coordinate relative
    /// to `origin`, or `None` when the mapped cell falls outside a
    /// `height` x `width` board. The origin is a corner of the bounding box,
    /// not its centre.
    pub fn project(
        &self,
        origin: Coord,
        i: usize,
        j: usize,
        height: usize,
        width: usize,
    ) -> Option<Coord> {
        let (di, dj) = if self.swapped { (j, i) } else { (i, j) };
        let row = origin.row as isize + di as isize * self.row_sign;
        let col = origin.col as isize + dj as isize * self.col_sign;
        if row < 0 || col < 0 {
            return None;
        }
        let at = Coord::new(row as usize, col as usize);
        (at.row < height && at.col < width).then_some(at)
    }
}
