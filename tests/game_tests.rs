use broadside::{
    Board, BotController, Controller, Game, Outcome, Player, BOARD_HEIGHT, BOARD_WIDTH, FLEET,
    MAX_TURNS, NUM_PLAYERS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bot_game(max_turns: usize) -> Game {
    let mut players = Vec::new();
    let mut controllers: Vec<Box<dyn Controller>> = Vec::new();
    for id in 0..NUM_PLAYERS {
        players.push(Player::new(id, Board::new(BOARD_HEIGHT, BOARD_WIDTH)));
        controllers.push(Box::new(BotController::new()));
    }
    Game::new(players, controllers, &FLEET, max_turns)
}

#[test]
fn test_bot_game_reaches_an_outcome() {
    let mut rng = SmallRng::seed_from_u64(1234);
    let mut game = bot_game(MAX_TURNS);
    match game.run(&mut rng).unwrap() {
        Outcome::Victory { winner } => {
            // Everyone except the winner is out of ships.
            for player in game.players() {
                if player.id() != winner {
                    assert!(player.board().all_ships_down());
                } else {
                    assert!(!player.board().all_ships_down());
                }
            }
        }
        Outcome::TurnLimit { survivors } => {
            assert!(survivors.len() >= 2);
        }
    }
}

#[test]
fn test_turn_cap_yields_tie() {
    // Two turns cannot sink a 17-cell fleet; the session must end in the
    // distinct turn-limit outcome with both players standing.
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = bot_game(2);
    let outcome = game.run(&mut rng).unwrap();
    assert_eq!(
        outcome,
        Outcome::TurnLimit {
            survivors: vec![0, 1]
        }
    );
}

#[test]
fn test_seeded_games_are_reproducible() {
    let run = |seed: u64| {
        let mut rng = SmallRng::seed_from_u64(seed);
        bot_game(MAX_TURNS).run(&mut rng).unwrap()
    };
    assert_eq!(run(99), run(99));
}

#[test]
#[should_panic]
fn test_single_player_session_rejected() {
    let players = vec![Player::new(0, Board::new(BOARD_HEIGHT, BOARD_WIDTH))];
    let controllers: Vec<Box<dyn Controller>> = vec![Box::new(BotController::new())];
    Game::new(players, controllers, &FLEET, MAX_TURNS);
}
