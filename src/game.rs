//! Session state and the turn loop driving the players.

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::player::{Controller, Player};
use crate::shape::ShapeDef;
use crate::ui::coord_label;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A single player remains afloat.
    Victory { winner: usize },
    /// Turn cap reached with more than one player still standing. Distinct
    /// from a win; nobody sank everyone in time.
    TurnLimit { survivors: Vec<usize> },
}

/// Run the placement phase for one board: every instance of every fleet
/// shape in order, asking the controller for origins until one yields a
/// non-empty candidate set. Finding no fit at an origin is expected, not an
/// error; the controller is simply asked again.
pub fn place_fleet(
    board: &mut Board,
    controller: &mut dyn Controller,
    fleet: &[ShapeDef],
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    for shape in fleet {
        for _ in 0..shape.count() {
            loop {
                let origin = controller.choose_origin(rng, board, shape)?;
                let candidates = board.candidates(origin, shape);
                if candidates.is_empty() {
                    debug!("no {} placement fits at {}", shape.name(), coord_label(origin));
                    controller.on_no_candidates(origin);
                    continue;
                }
                let cand = controller.choose_candidate(rng, shape, origin, &candidates)?;
                board.place(origin, shape, cand);
                break;
            }
        }
    }
    Ok(())
}

/// One game session: the players, their controllers, and the turn cap. All
/// session state lives here and nothing is global; a finished `Game` can be
/// inspected or dropped and a fresh one started.
pub struct Game {
    players: Vec<Player>,
    controllers: Vec<Box<dyn Controller>>,
    fleet: Vec<ShapeDef>,
    max_turns: usize,
}

impl Game {
    pub fn new(
        players: Vec<Player>,
        controllers: Vec<Box<dyn Controller>>,
        fleet: &[ShapeDef],
        max_turns: usize,
    ) -> Self {
        assert!(players.len() >= 2, "a session needs at least two players");
        assert_eq!(
            players.len(),
            controllers.len(),
            "every player needs a controller"
        );
        Game {
            players,
            controllers,
            fleet: fleet.to_vec(),
            max_turns,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Place every fleet and drive round-robin turns until at most one
    /// player is left standing or the turn cap is reached.
    ///
    /// One turn is atomic: resolve the shot on the defender, record it on
    /// the attacker's shot grid, then re-evaluate sink and loss state.
    /// Defeated players keep their slot but are skipped.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<Outcome> {
        for idx in 0..self.players.len() {
            info!("player {} placing ships", self.players[idx].id());
            place_fleet(
                self.players[idx].board_mut(),
                self.controllers[idx].as_mut(),
                &self.fleet,
                rng,
            )?;
        }

        for turn in 0..self.max_turns {
            let attacker = turn % self.players.len();
            if self.players[attacker].has_lost() {
                continue;
            }
            let Some(defender) = self.next_standing(attacker) else {
                break;
            };

            let target = self.controllers[attacker].choose_target(rng, self.players[attacker].board())?;
            let outcome = self.players[defender].board_mut().receive_shot(target);
            self.players[attacker].board_mut().record_shot(target, outcome);
            self.controllers[attacker].on_shot(target, outcome);
            self.controllers[defender].on_incoming_shot(target, outcome);
            info!(
                "player {} fired at {} against player {}: {:?}",
                self.players[attacker].id(),
                coord_label(target),
                self.players[defender].id(),
                outcome
            );

            if self.players[defender].has_lost() {
                info!("player {} has no ships left", self.players[defender].id());
            }
            if self.standing().len() <= 1 {
                break;
            }
        }

        let survivors = self.standing();
        Ok(match survivors.as_slice() {
            [winner] => Outcome::Victory { winner: *winner },
            _ => Outcome::TurnLimit { survivors },
        })
    }

    /// Ids of players still afloat.
    fn standing(&mut self) -> Vec<usize> {
        self.players
            .iter_mut()
            .filter_map(|p| if !p.has_lost() { Some(p.id()) } else { None })
            .collect()
    }

    /// The next undefeated player after `from`, round-robin.
    fn next_standing(&mut self, from: usize) -> Option<usize> {
        let n = self.players.len();
        (1..n)
            .map(|k| (from + k) % n)
            .find(|&i| !self.players[i].has_lost())
    }
}
