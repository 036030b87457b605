use broadside::{
    fleet_cell_count, place_fleet, Board, BotController, Candidate, Cell, Coord, ShapeDef,
    ShotOutcome, FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const DESTROYER: ShapeDef = ShapeDef::new("Destroyer", &[&[true], &[true]], 1);
const BATTLESHIP: ShapeDef = ShapeDef::new("Battleship", &[&[true], &[true], &[true], &[true]], 1);
const CARRIER: ShapeDef = ShapeDef::new(
    "Carrier",
    &[&[true, true], &[true, true], &[false, true]],
    1,
);

/// Rows-major, both signs positive: mask (i, j) maps to (row + i, col + j).
const DOWN_RIGHT: Candidate = Candidate {
    row_sign: 1,
    col_sign: 1,
    swapped: false,
};

#[test]
fn test_full_placement_cell_count() {
    let mut board = Board::new(10, 10);
    let mut rng = SmallRng::seed_from_u64(7);
    let mut bot = BotController::new();
    place_fleet(&mut board, &mut bot, &FLEET, &mut rng).unwrap();

    assert_eq!(fleet_cell_count(&FLEET), 17);
    assert_eq!(board.ship_cells(), 17);
}

#[test]
fn test_destroyer_end_to_end() {
    // Spec scenario: one destroyer anchored at (4,4), rows-major +1/+1.
    let mut board = Board::new(10, 10);
    let origin = Coord::new(4, 4);
    let candidates = board.candidates(origin, &DESTROYER);
    assert!(candidates.contains(&DOWN_RIGHT));
    board.place(origin, &DESTROYER, DOWN_RIGHT);
    assert_eq!(board.ship_cells(), 2);

    assert_eq!(board.receive_shot(Coord::new(4, 4)), ShotOutcome::Hit);
    assert_eq!(board.receive_shot(Coord::new(5, 4)), ShotOutcome::Sunk);
    assert!(board.all_ships_down());
    assert_eq!(board.ships().get(Coord::new(4, 4)), Cell::SunkShip);
    assert_eq!(board.ships().get(Coord::new(5, 4)), Cell::SunkShip);
}

#[test]
fn test_repeat_attack_is_idempotent() {
    let mut board = Board::new(10, 10);
    board.place(Coord::new(4, 4), &DESTROYER, DOWN_RIGHT);

    assert_eq!(board.receive_shot(Coord::new(4, 4)), ShotOutcome::Hit);
    let snapshot = board.ships().clone();
    // A second shot at the same cell reports a miss and changes nothing.
    assert_eq!(board.receive_shot(Coord::new(4, 4)), ShotOutcome::Miss);
    assert_eq!(board.ships(), &snapshot);
    assert_eq!(board.ships().get(Coord::new(4, 4)), Cell::Hit);
}

#[test]
fn test_straight_ship_sinks_on_last_hit() {
    let mut board = Board::new(10, 10);
    board.place(Coord::new(0, 0), &BATTLESHIP, DOWN_RIGHT);

    for r in 0..3 {
        assert_eq!(board.receive_shot(Coord::new(r, 0)), ShotOutcome::Hit);
    }
    assert_eq!(board.receive_shot(Coord::new(3, 0)), ShotOutcome::Sunk);
    for r in 0..4 {
        assert_eq!(board.ships().get(Coord::new(r, 0)), Cell::SunkShip);
    }
}

#[test]
fn test_l_shape_sinks_once_in_any_order() {
    // Carrier anchored at (2,2) covers (2,2) (2,3) (3,2) (3,3) and (4,3).
    let cells = [
        Coord::new(2, 2),
        Coord::new(2, 3),
        Coord::new(3, 2),
        Coord::new(3, 3),
        Coord::new(4, 3),
    ];
    let orders: [[usize; 5]; 3] = [[0, 1, 2, 3, 4], [4, 2, 0, 3, 1], [3, 4, 1, 0, 2]];
    for order in orders {
        let mut board = Board::new(10, 10);
        board.place(Coord::new(2, 2), &CARRIER, DOWN_RIGHT);
        for (n, &idx) in order.iter().enumerate() {
            let outcome = board.receive_shot(cells[idx]);
            if n + 1 == cells.len() {
                assert_eq!(outcome, ShotOutcome::Sunk, "order {:?}", order);
            } else {
                assert_eq!(outcome, ShotOutcome::Hit, "order {:?}", order);
            }
        }
    }
}

#[test]
fn test_loss_flips_only_on_final_cell() {
    let mut board = Board::new(10, 10);
    let mut rng = SmallRng::seed_from_u64(11);
    let mut bot = BotController::new();
    place_fleet(&mut board, &mut bot, &FLEET, &mut rng).unwrap();

    let targets: Vec<Coord> = board
        .ships()
        .coords()
        .filter(|&at| board.ships().get(at) == Cell::Ship)
        .collect();
    assert_eq!(targets.len(), 17);
    for &at in &targets[..targets.len() - 1] {
        assert!(board.receive_shot(at).is_hit());
        assert!(!board.all_ships_down());
    }
    assert!(board.receive_shot(targets[targets.len() - 1]).is_hit());
    assert!(board.all_ships_down());
}

#[test]
fn test_corner_origin_rejects_most_orientations() {
    // On a 4x2 board a length-4 ship anchored at the corner only fits
    // pointing down the rows; the axis-swapped variants run off the sides
    // and the negative row sign runs off the top.
    let board = Board::new(4, 2);
    let candidates = board.candidates(Coord::new(0, 0), &BATTLESHIP);
    assert_eq!(candidates.len(), 2);
    for cand in candidates {
        assert_eq!(cand.row_sign, 1);
        assert!(!cand.swapped);
    }
}

#[test]
fn test_adjacent_ship_blocks_placement() {
    let mut board = Board::new(10, 10);
    board.place(Coord::new(0, 0), &DESTROYER, DOWN_RIGHT);

    // Every placement anchored next to the existing ship would share an
    // edge with it, so the candidate set is empty.
    assert!(board.candidates(Coord::new(0, 1), &DESTROYER).is_empty());
    // Far away from it all eight orientation checks pass.
    assert_eq!(board.candidates(Coord::new(5, 5), &DESTROYER).len(), 8);
}

#[test]
fn test_mask_false_cells_stay_empty() {
    let mut board = Board::new(10, 10);
    board.place(Coord::new(2, 2), &CARRIER, DOWN_RIGHT);
    // The carrier mask has a hole at (2, 0); that board cell is written
    // Empty, not Ship.
    assert_eq!(board.ships().get(Coord::new(4, 2)), Cell::Empty);
    assert_eq!(board.ship_cells(), 5);
}

#[test]
fn test_shot_grid_records_outcomes() {
    let mut board = Board::new(10, 10);
    assert!(board.unattacked(Coord::new(1, 1)));
    board.record_shot(Coord::new(1, 1), ShotOutcome::Hit);
    board.record_shot(Coord::new(2, 2), ShotOutcome::Sunk);
    board.record_shot(Coord::new(3, 3), ShotOutcome::Miss);
    assert_eq!(board.shots().get(Coord::new(1, 1)), Cell::Hit);
    assert_eq!(board.shots().get(Coord::new(2, 2)), Cell::Hit);
    assert_eq!(board.shots().get(Coord::new(3, 3)), Cell::Miss);
    assert!(!board.unattacked(Coord::new(1, 1)));
}

#[test]
#[should_panic]
fn test_out_of_bounds_shot_panics() {
    let mut board = Board::new(10, 10);
    board.receive_shot(Coord::new(10, 0));
}

#[test]
#[should_panic]
fn test_out_of_bounds_origin_panics() {
    let board = Board::new(10, 10);
    board.candidates(Coord::new(0, 10), &DESTROYER);
}
