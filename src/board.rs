//! Board state and the placement/attack engine.
//!
//! A board owns two same-sized grids: the player's own ship layout, and the
//! record of shots this player has fired at an opponent. Placement happens
//! once, up front; afterwards the ship grid changes only through
//! [`Board::receive_shot`] and the shot grid through [`Board::record_shot`].

use std::collections::VecDeque;

use crate::grid::{Cell, Coord, Grid};
use crate::shape::{Candidate, ShapeDef};

/// Outcome of one shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Miss,
    Hit,
    /// The hit completed a ship: every cell of its contiguous instance has
    /// now been struck.
    Sunk,
}

impl ShotOutcome {
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

pub struct Board {
    ships: Grid,
    shots: Grid,
}

impl Board {
    /// Create a board with empty ship and shot grids of the given size.
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            ships: Grid::new(height, width),
            shots: Grid::new(height, width),
        }
    }

    pub fn height(&self) -> usize {
        self.ships.height()
    }

    pub fn width(&self) -> usize {
        self.ships.width()
    }

    /// The player's own ship layout.
    pub fn ships(&self) -> &Grid {
        &self.ships
    }

    /// Shots this player has fired at the opponent.
    pub fn shots(&self) -> &Grid {
        &self.shots
    }

    /// All orientations in which `shape` fits when anchored at `origin`.
    ///
    /// Each of the eight variants of [`Candidate::ALL`] is accepted or
    /// rejected independently: accepted iff every cell of the transformed
    /// bounding box is in bounds and empty, and no mask-true cell would end
    /// up sharing an edge with an already placed ship. Duplicates from
    /// degenerate masks are kept. An empty result is not an error; the
    /// caller picks a new origin. An out-of-bounds origin panics.
    pub fn candidates(&self, origin: Coord, shape: &ShapeDef) -> Vec<Candidate> {
        // Touch the origin through the checked accessor so a bad origin
        // fails loudly instead of silently producing an empty set.
        let _ = self.ships.get(origin);
        Candidate::ALL
            .iter()
            .copied()
            .filter(|cand| self.fits(origin, shape, *cand))
            .collect()
    }

    fn fits(&self, origin: Coord, shape: &ShapeDef, cand: Candidate) -> bool {
        let (h, w) = (self.height(), self.width());
        for i in 0..shape.height() {
            for j in 0..shape.width() {
                let Some(at) = cand.project(origin, i, j, h, w) else {
                    return false;
                };
                if self.ships.get(at) != Cell::Empty {
                    return false;
                }
                if shape.filled(i, j) && self.touches_ship(at) {
                    return false;
                }
            }
        }
        true
    }

    /// True when an orthogonal neighbour of `at` already holds a ship cell.
    /// Distinct ships must never share an edge, otherwise the sink flood-fill
    /// would merge them into one component.
    fn touches_ship(&self, at: Coord) -> bool {
        at.neighbors(self.height(), self.width())
            .any(|n| matches!(self.ships.get(n), Cell::Ship | Cell::Hit | Cell::SunkShip))
    }

    /// Write `shape` onto the ship grid using a candidate previously
    /// returned by [`Board::candidates`] for the same origin and board
    /// state. Mask-true cells become `Ship`; mask-false cells are written
    /// `Empty` explicitly. Nothing is re-validated here, so calling with
    /// anything but a fresh candidate is a contract violation; a stale
    /// candidate that maps off the board panics on the first write.
    pub fn place(&mut self, origin: Coord, shape: &ShapeDef, cand: Candidate) {
        let (h, w) = (self.height(), self.width());
        for i in 0..shape.height() {
            for j in 0..shape.width() {
                let at = cand
                    .project(origin, i, j, h, w)
                    .expect("placement candidate maps outside the board");
                let cell = if shape.filled(i, j) { Cell::Ship } else { Cell::Empty };
                self.ships.set(at, cell);
            }
        }
    }

    /// Resolve an incoming shot at `at`.
    ///
    /// A `Ship` cell transitions to `Hit` and, when that completes its
    /// contiguous instance, the whole instance is refined to `SunkShip`.
    /// Anything else reports `Miss`, including repeat shots at an
    /// already-resolved cell: re-marking is idempotent and never rejected
    /// here, avoiding repeats is the attacker's policy.
    pub fn receive_shot(&mut self, at: Coord) -> ShotOutcome {
        if self.ships.get(at) != Cell::Ship {
            return ShotOutcome::Miss;
        }
        self.ships.set(at, Cell::Hit);
        let instance = self.instance_cells(at);
        if instance.iter().any(|&c| self.ships.get(c) == Cell::Ship) {
            return ShotOutcome::Hit;
        }
        for c in instance {
            self.ships.set(c, Cell::SunkShip);
        }
        ShotOutcome::Sunk
    }

    /// Record the result of our own outgoing shot on the shot grid.
    pub fn record_shot(&mut self, at: Coord, outcome: ShotOutcome) {
        let mark = if outcome.is_hit() { Cell::Hit } else { Cell::Miss };
        self.shots.set(at, mark);
    }

    /// True when no shot has been recorded at `at` yet.
    pub fn unattacked(&self, at: Coord) -> bool {
        self.shots.get(at) == Cell::Empty
    }

    /// Loss condition: every cell that started as `Ship` has transitioned
    /// away. Always a full-grid scan; callers cache the result once true.
    pub fn all_ships_down(&self) -> bool {
        self.ships.count(Cell::Ship) == 0
    }

    /// Number of cells currently holding `Ship`.
    pub fn ship_cells(&self) -> usize {
        self.ships.count(Cell::Ship)
    }

    /// Collect the contiguous ship instance containing `at` with an
    /// iterative worklist flood-fill over the four orthogonal directions.
    /// Bounded by grid size; no recursion.
    fn instance_cells(&self, at: Coord) -> Vec<Coord> {
        let (h, w) = (self.height(), self.width());
        let mut seen = vec![false; h * w];
        let mut queue = VecDeque::from([at]);
        let mut cells = Vec::new();
        seen[at.row * w + at.col] = true;
        while let Some(cur) = queue.pop_front() {
            if !matches!(self.ships.get(cur), Cell::Ship | Cell::Hit | Cell::SunkShip) {
                continue;
            }
            cells.push(cur);
            for n in cur.neighbors(h, w) {
                let idx = n.row * w + n.col;
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(n);
                }
            }
        }
        cells
    }
}
