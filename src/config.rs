//! Game configuration: board dimensions, the standard fleet, session limits.

use crate::shape::ShapeDef;

pub const BOARD_HEIGHT: usize = 10;
pub const BOARD_WIDTH: usize = 10;

/// Players per session, minimum two.
pub const NUM_PLAYERS: usize = 2;

/// Cap on total turns before a session ends in a draw. Guarantees the loop
/// terminates even if every shot misses.
pub const MAX_TURNS: usize = 100;

/// The standard fleet: one L-shaped carrier, one battleship, two cruisers and
/// one destroyer, 17 ship cells in total.
pub const FLEET: [ShapeDef; 4] = [
    ShapeDef::new(
        "Carrier",
        &[&[true, true], &[true, true], &[false, true]],
        1,
    ),
    ShapeDef::new("Battleship", &[&[true], &[true], &[true], &[true]], 1),
    ShapeDef::new("Cruiser", &[&[true], &[true], &[true]], 2),
    ShapeDef::new("Destroyer", &[&[true], &[true]], 1),
];

/// Total ship cells a full placement of `fleet` writes; the placement
/// invariant checks the board against this.
pub fn fleet_cell_count(fleet: &[ShapeDef]) -> usize {
    fleet.iter().map(|s| s.cell_count() * s.count()).sum()
}
