pub mod config;
pub mod game;
pub mod logger;

pub use game::{
    Board, Cell, DEFAULT_SIZE, GameOutcome, GameRng, GameSession, MoveSource, Player,
    PlayerController, SearchPolicy, TurnState, best_move, rules,
};
