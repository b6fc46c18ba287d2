mod board;
mod rng;
mod search;
mod session;
mod types;

pub mod rules;

pub use board::{Board, DEFAULT_SIZE};
pub use rng::GameRng;
pub use search::best_move;
pub use session::{GameSession, MoveSource, PlayerController, TurnState};
pub use types::{Cell, GameOutcome, Player, SearchPolicy};
