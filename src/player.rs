//! Player state and the decision-making interface implemented by the bot and
//! the console player.

use rand::rngs::SmallRng;

use crate::board::{Board, ShotOutcome};
use crate::grid::Coord;
use crate::shape::{Candidate, ShapeDef};

/// A player: a unique id, a board, and a latched defeat flag.
pub struct Player {
    id: usize,
    board: Board,
    defeated: bool,
}

impl Player {
    pub fn new(id: usize, board: Board) -> Self {
        Player {
            id,
            board,
            defeated: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Defeat is permanent: rescanned from the board while still standing,
    /// cached once true. Only meaningful after the placement phase.
    pub fn has_lost(&mut self) -> bool {
        if !self.defeated {
            self.defeated = self.board.all_ships_down();
        }
        self.defeated
    }
}

/// Decides where a player anchors ships and where it fires. Implementations
/// never mutate the board themselves; the game loop applies the decisions.
pub trait Controller {
    /// Pick an anchor origin for the next instance of `shape`. Called again
    /// whenever the previous origin yielded no placement candidates.
    fn choose_origin(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        shape: &ShapeDef,
    ) -> anyhow::Result<Coord>;

    /// Pick one placement from a non-empty candidate set.
    fn choose_candidate(
        &mut self,
        rng: &mut SmallRng,
        shape: &ShapeDef,
        origin: Coord,
        candidates: &[Candidate],
    ) -> anyhow::Result<Candidate>;

    /// Pick the next attack target: a cell of `board`'s shot grid with no
    /// shot recorded yet.
    fn choose_target(&mut self, rng: &mut SmallRng, board: &Board) -> anyhow::Result<Coord>;

    /// Called when the chosen origin yielded no placement candidates and a
    /// new origin is about to be requested.
    fn on_no_candidates(&mut self, _origin: Coord) {}

    /// Inform the player of the result of its own shot.
    fn on_shot(&mut self, _at: Coord, _outcome: ShotOutcome) {}

    /// Inform the player of a shot resolved against its board.
    fn on_incoming_shot(&mut self, _at: Coord, _outcome: ShotOutcome) {}
}
