//! Cell states and the bounds-checked rectangular grid underlying every board.

/// State of a single grid square. Each square holds exactly one state; there
/// are no combined ship+shot states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    SunkShip,
}

/// A (row, column) position on a grid. The single coordinate type used by
/// every accessor; raw index pairs never cross module boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// The up-to-four orthogonal neighbours inside a `height` x `width` grid.
    pub fn neighbors(self, height: usize, width: usize) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self;
        [
            (row > 0).then(|| Coord::new(row - 1, col)),
            (row + 1 < height).then(|| Coord::new(row + 1, col)),
            (col > 0).then(|| Coord::new(row, col - 1)),
            (col + 1 < width).then(|| Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

/// Fixed-size rectangular grid of [`Cell`]. Out-of-bounds access is a
/// contract violation and panics rather than clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Create a grid filled with `Cell::Empty`. Both dimensions must be >= 2.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(
            height >= 2 && width >= 2,
            "grid dimensions must be at least 2x2, got {}x{}",
            height,
            width
        );
        Grid {
            cells: vec![Cell::Empty; height * width],
            height,
            width,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn in_bounds(&self, at: Coord) -> bool {
        at.row < self.height && at.col < self.width
    }

    pub fn get(&self, at: Coord) -> Cell {
        self.cells[self.index(at)]
    }

    pub fn set(&mut self, at: Coord, cell: Cell) {
        let idx = self.index(at);
        self.cells[idx] = cell;
    }

    fn index(&self, at: Coord) -> usize {
        assert!(
            self.in_bounds(at),
            "coordinate ({}, {}) outside {}x{} grid",
            at.row,
            at.col,
            self.height,
            self.width
        );
        at.row * self.width + at.col
    }

    /// Every coordinate of the grid in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |r| (0..self.width).map(move |c| Coord::new(r, c)))
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Number of squares currently holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}
