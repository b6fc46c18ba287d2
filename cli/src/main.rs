mod args;
mod config;
mod input;
mod render;

use clap::Parser;
use cmdtactoe_engine::{
    GameRng, GameSession, Player, PlayerController, SearchPolicy, TurnState, log, logger,
};

use args::Args;
use cmdtactoe_engine::config::Validate;
use config::Config;
use input::Console;
use render::RenderOptions;

fn main() {
    let args = Args::parse();
    logger::init_logger(None);

    let manager = config::get_config_manager(args.config.as_deref());
    let mut config = match manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("{}; falling back to defaults", e);
            Config::default()
        }
    };
    config.apply_args(&args);

    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        std::process::exit(2);
    }

    if config.computer && config.board_size > 3 {
        log!(
            "Exhaustive search on a {0}x{0} board can take a very long time",
            config.board_size
        );
    }

    let rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };
    if config.imperfect {
        // Reported so an imperfect-mode game can be replayed with --seed.
        log!("Session seed: {}", rng.seed());
    }

    let policy = if config.imperfect {
        SearchPolicy::imperfect_percent(config.epsilon_percent)
    } else {
        SearchPolicy::Exhaustive
    };
    let second_controller = if config.computer {
        PlayerController::Computer(policy)
    } else {
        PlayerController::Human
    };
    let starting_player = if config.second_player_first {
        Player::Second
    } else {
        Player::First
    };

    let mut session = GameSession::new(
        config.board_size,
        starting_player,
        PlayerController::Human,
        second_controller,
        rng,
    );
    let mut console = Console::new(RenderOptions {
        numpad: config.numpad,
        suppress_labels: config.suppress_labels,
    });

    console.wipe();
    println!("CMD TAC TOE\n");
    console.prompt("Press enter to continue");
    console.wait_for_enter();
    console.wipe();

    run(&mut session, &mut console);
}

/// Drives the session one transition at a time until it parks in a terminal
/// state, narrating computer moves and the final result.
fn run(session: &mut GameSession, console: &mut Console) {
    loop {
        match session.state() {
            TurnState::AwaitingMove(player) => {
                let computer_turn =
                    matches!(session.controller(player), PlayerController::Computer(_));
                session.advance(console);

                if computer_turn
                    && let Some((index, mover)) = session.last_move()
                {
                    console.print_board(session.board());
                    println!(
                        "The Computer placed an '{}' mark on space {}",
                        mover.mark(),
                        index + 1
                    );
                    console.prompt("Press enter to continue");
                    console.wait_for_enter();
                    console.wipe();
                }
            }
            TurnState::Won(player) => {
                console.print_board(session.board());
                println!("Player {} won!", player.number());
                return;
            }
            TurnState::Draw => {
                console.print_board(session.board());
                let number = session
                    .last_move()
                    .map(|(_, player)| player.number())
                    .unwrap_or(1);
                println!("Player {} ended the game in a draw!", number);
                return;
            }
        }
    }
}
