//! Automated player making uniform-random legal decisions.

use anyhow::Context;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::Board;
use crate::grid::Coord;
use crate::player::Controller;
use crate::shape::{Candidate, ShapeDef};

pub struct BotController;

impl BotController {
    pub fn new() -> Self {
        Self
    }
}

impl Controller for BotController {
    fn choose_origin(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        _shape: &ShapeDef,
    ) -> anyhow::Result<Coord> {
        Ok(Coord::new(
            rng.random_range(0..board.height()),
            rng.random_range(0..board.width()),
        ))
    }

    fn choose_candidate(
        &mut self,
        rng: &mut SmallRng,
        _shape: &ShapeDef,
        _origin: Coord,
        candidates: &[Candidate],
    ) -> anyhow::Result<Candidate> {
        candidates
            .choose(rng)
            .copied()
            .context("candidate set was empty")
    }

    fn choose_target(&mut self, rng: &mut SmallRng, board: &Board) -> anyhow::Result<Coord> {
        let open: Vec<Coord> = board
            .shots()
            .coords()
            .filter(|&at| board.unattacked(at))
            .collect();
        open.choose(rng)
            .copied()
            .context("no unattacked cells remain")
    }
}
