use broadside::{
    init_logging, render_grid, Board, BotController, CliController, Controller, Game, Outcome,
    Player, BOARD_HEIGHT, BOARD_WIDTH, FLEET, MAX_TURNS, NUM_PLAYERS,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Watch two automated players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play against an automated opponent.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let (seed, interactive) = match cli.command {
        Commands::Auto { seed } => (seed, false),
        Commands::Play { seed } => (seed, true),
    };

    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut players = Vec::new();
    let mut controllers: Vec<Box<dyn Controller>> = Vec::new();
    for id in 0..NUM_PLAYERS {
        players.push(Player::new(id, Board::new(BOARD_HEIGHT, BOARD_WIDTH)));
        if interactive && id == 0 {
            controllers.push(Box::new(CliController::new()));
        } else {
            controllers.push(Box::new(BotController::new()));
        }
    }

    let mut game = Game::new(players, controllers, &FLEET, MAX_TURNS);
    let outcome = game.run(&mut rng)?;

    for player in game.players() {
        println!("Final board of player {}:", player.id());
        print!("{}", render_grid(player.board().ships(), true));
    }
    match outcome {
        Outcome::Victory { winner } => println!("The winner is player {}", winner),
        Outcome::TurnLimit { survivors } => {
            println!("Iteration limit reached, the survivors are:");
            for id in survivors {
                println!(" - player {}", id);
            }
        }
    }
    Ok(())
}
