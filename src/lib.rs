//! Two-player turn-based grid combat: hidden ship placements, alternating
//! shots, flood-fill sink detection.
//!
//! The engine lives in [`Board`]: legal placements of mask-shaped ships
//! around a chosen anchor, cell transitions on hits, and sink/loss detection.
//! [`Game`] drives two (or more) board-owning [`Player`]s with pluggable
//! [`Controller`] decision-making; rendering and prompting are thin console
//! glue in [`ui`] and the CLI controller.

mod board;
mod config;
mod game;
mod grid;
mod logging;
mod player;
mod player_bot;
mod player_cli;
mod shape;
pub mod ui;

pub use board::{Board, ShotOutcome};
pub use config::{fleet_cell_count, BOARD_HEIGHT, BOARD_WIDTH, FLEET, MAX_TURNS, NUM_PLAYERS};
pub use game::{place_fleet, Game, Outcome};
pub use grid::{Cell, Coord, Grid};
pub use logging::init_logging;
pub use player::{Controller, Player};
pub use player_bot::BotController;
pub use player_cli::CliController;
pub use shape::{Candidate, ShapeDef};
pub use ui::{column_label, coord_label, parse_column_label, render_grid};
