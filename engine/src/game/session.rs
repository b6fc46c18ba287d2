use super::board::Board;
use super::rng::GameRng;
use super::rules;
use super::search;
use super::types::{Player, SearchPolicy};

/// Who supplies moves for a seat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerController {
    Human,
    Computer(SearchPolicy),
}

/// The turn state machine. `Won` and `Draw` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingMove(Player),
    Won(Player),
    Draw,
}

impl TurnState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, TurnState::AwaitingMove(_))
    }
}

/// Boundary contract for human input. Implementations own all prompting and
/// re-prompting; the index they return must target an empty in-range cell,
/// because the session applies it without re-validation.
pub trait MoveSource {
    fn next_move(&mut self, board: &Board, player: Player) -> usize;
}

/// Owns the live board, the current-player flag, and the RNG, and drives one
/// transition per `advance` call. The surrounding loop inspects `state` after
/// each call and stops on a terminal value.
pub struct GameSession {
    board: Board,
    state: TurnState,
    first_controller: PlayerController,
    second_controller: PlayerController,
    last_move: Option<(usize, Player)>,
    rng: GameRng,
}

impl GameSession {
    pub fn new(
        board_size: usize,
        starting_player: Player,
        first_controller: PlayerController,
        second_controller: PlayerController,
        rng: GameRng,
    ) -> Self {
        Self {
            board: Board::new(board_size),
            state: TurnState::AwaitingMove(starting_player),
            first_controller,
            second_controller,
            last_move: None,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn controller(&self, player: Player) -> PlayerController {
        match player {
            Player::First => self.first_controller,
            Player::Second => self.second_controller,
        }
    }

    /// The player whose move is awaited, if the game is still running.
    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            TurnState::AwaitingMove(player) => Some(player),
            _ => None,
        }
    }

    /// The most recently applied move, for announcements.
    pub fn last_move(&self) -> Option<(usize, Player)> {
        self.last_move
    }

    /// Runs exactly one turn: obtain a move for the awaited player, apply it,
    /// and re-evaluate the board. No-op once a terminal state is reached.
    pub fn advance(&mut self, human: &mut dyn MoveSource) -> TurnState {
        let TurnState::AwaitingMove(player) = self.state else {
            return self.state;
        };

        let index = match self.controller(player) {
            PlayerController::Computer(policy) => {
                search::best_move(&self.board, player, &policy, &mut self.rng)
            }
            PlayerController::Human => human.next_move(&self.board, player),
        };

        self.board.apply(index, player);
        self.last_move = Some((index, player));

        self.state = if rules::wins(&self.board, player) {
            TurnState::Won(player)
        } else if rules::is_full(&self.board) {
            TurnState::Draw
        } else {
            TurnState::AwaitingMove(player.opponent())
        };
        self.state
    }
}
