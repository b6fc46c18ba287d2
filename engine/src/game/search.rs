use super::board::Board;
use super::rng::GameRng;
use super::rules;
use super::types::{Player, SearchPolicy};

/// Picks a move for `bot` on `board`. The board must have at least one legal
/// move; asking for a move on a terminal board is a caller bug.
///
/// Under `Imperfect`, a single uniform draw decides whether this turn is
/// played randomly; the random branch skips scoring entirely. `Exhaustive`
/// never consumes randomness.
///
/// The search is a full-width, unpruned minimax. Cost grows factorially with
/// the number of open cells, so this is only practical on small boards.
pub fn best_move(board: &Board, bot: Player, policy: &SearchPolicy, rng: &mut GameRng) -> usize {
    let moves = rules::available_moves(board);
    debug_assert!(!moves.is_empty(), "best_move needs at least one legal move");

    if let SearchPolicy::Imperfect { epsilon } = *policy
        && rng.random::<f64>() < epsilon
    {
        return moves[rng.random_range(0..moves.len())];
    }

    let mut best_index = moves[0];
    let mut best_score = i32::MIN;
    for index in moves {
        let mut next = board.clone();
        next.apply(index, bot);
        let score = minimax(&next, 0, bot, true);
        // Strict comparison: ties go to the lowest index.
        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }
    best_index
}

/// Game-theoretic value of `board` for `bot`, biased by depth so that faster
/// wins score higher and slower losses score less negatively. Draws sit at -1,
/// below any win and above any loss.
fn minimax(board: &Board, depth: i32, bot: Player, minimizing: bool) -> i32 {
    if rules::is_terminal(board) {
        return if rules::wins(board, bot) {
            10 - depth
        } else if rules::wins(board, bot.opponent()) {
            depth - 10
        } else {
            -1
        };
    }

    let to_move = if minimizing { bot.opponent() } else { bot };
    let scores = rules::available_moves(board).into_iter().map(|index| {
        let mut next = board.clone();
        next.apply(index, to_move);
        minimax(&next, depth + 1, bot, !minimizing)
    });

    if minimizing {
        scores.min().unwrap_or(i32::MAX)
    } else {
        scores.max().unwrap_or(i32::MIN)
    }
}
