//! Interactive console player: prompts with validation loops and board
//! rendering before each decision.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::board::{Board, ShotOutcome};
use crate::grid::Coord;
use crate::player::Controller;
use crate::shape::{Candidate, ShapeDef};
use crate::ui::{column_label, coord_label, parse_column_label, render_grid};

pub struct CliController;

impl CliController {
    pub fn new() -> Self {
        Self
    }
}

fn read_trimmed() -> anyhow::Result<String> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for an integer row in [1, height], looping until one is given.
/// Returns the zero-based row.
fn prompt_row(prompt: &str, height: usize) -> anyhow::Result<usize> {
    loop {
        print!("{} [1;{}]: ", prompt, height);
        io::stdout().flush()?;
        match read_trimmed()?.parse::<usize>() {
            Ok(n) if (1..=height).contains(&n) => return Ok(n - 1),
            _ => println!("Enter a row between 1 and {}", height),
        }
    }
}

/// Prompt for a column letter string in [A, label(width-1)], looping until
/// one is given. Returns the zero-based column.
fn prompt_col(prompt: &str, width: usize) -> anyhow::Result<usize> {
    let max = column_label(width - 1);
    loop {
        print!("{} [A;{}]: ", prompt, max);
        io::stdout().flush()?;
        match parse_column_label(&read_trimmed()?) {
            Some(c) if c < width => return Ok(c),
            _ => println!("Enter a column between A and {}", max),
        }
    }
}

/// Prompt for a choice number in [1, max]. Returns the zero-based index.
fn prompt_choice(prompt: &str, max: usize) -> anyhow::Result<usize> {
    loop {
        print!("{} [1;{}]: ", prompt, max);
        io::stdout().flush()?;
        match read_trimmed()?.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n - 1),
            _ => println!("Enter a number between 1 and {}", max),
        }
    }
}

fn describe(cand: Candidate) -> String {
    let axes = if cand.swapped { ", axes swapped" } else { "" };
    format!("rows {:+}, cols {:+}{}", cand.row_sign, cand.col_sign, axes)
}

impl Controller for CliController {
    fn choose_origin(
        &mut self,
        _rng: &mut SmallRng,
        board: &Board,
        shape: &ShapeDef,
    ) -> anyhow::Result<Coord> {
        println!("Your board:");
        print!("{}", render_grid(board.ships(), true));
        println!(
            "Anchor the {} ({} cells, {}x{} mask)",
            shape.name(),
            shape.cell_count(),
            shape.height(),
            shape.width()
        );
        let row = prompt_row("Which row?", board.height())?;
        let col = prompt_col("Which column?", board.width())?;
        Ok(Coord::new(row, col))
    }

    fn choose_candidate(
        &mut self,
        _rng: &mut SmallRng,
        shape: &ShapeDef,
        origin: Coord,
        candidates: &[Candidate],
    ) -> anyhow::Result<Candidate> {
        println!(
            "Placements for the {} anchored at {}:",
            shape.name(),
            coord_label(origin)
        );
        for (n, cand) in candidates.iter().enumerate() {
            println!("  {}) {}", n + 1, describe(*cand));
        }
        let pick = prompt_choice("Which placement?", candidates.len())?;
        Ok(candidates[pick])
    }

    fn choose_target(&mut self, _rng: &mut SmallRng, board: &Board) -> anyhow::Result<Coord> {
        println!("Your shots so far:");
        print!("{}", render_grid(board.shots(), false));
        println!("Your board:");
        print!("{}", render_grid(board.ships(), true));
        loop {
            let row = prompt_row("Which row to attack?", board.height())?;
            let col = prompt_col("Which column to attack?", board.width())?;
            let at = Coord::new(row, col);
            if board.unattacked(at) {
                return Ok(at);
            }
            println!("You already fired at {}", coord_label(at));
        }
    }

    fn on_no_candidates(&mut self, origin: Coord) {
        println!(
            "Nothing fits around {}, pick another cell",
            coord_label(origin)
        );
    }

    fn on_shot(&mut self, at: Coord, outcome: ShotOutcome) {
        let verdict = match outcome {
            ShotOutcome::Miss => "miss",
            ShotOutcome::Hit => "hit",
            ShotOutcome::Sunk => "hit -- ship sunk!",
        };
        println!("You fired at {}: {}", coord_label(at), verdict);
    }

    fn on_incoming_shot(&mut self, at: Coord, outcome: ShotOutcome) {
        let verdict = match outcome {
            ShotOutcome::Miss => "a miss",
            ShotOutcome::Hit => "a hit",
            ShotOutcome::Sunk => "a hit -- your ship went down!",
        };
        println!("Incoming fire at {}: {}", coord_label(at), verdict);
    }
}
