use super::board::Board;
use super::types::{Cell, GameOutcome, Player};

/// All empty-cell indices in ascending order. The ordering is a contract: it
/// fixes the search's move-enumeration order and therefore its tie-breaks.
pub fn available_moves(board: &Board) -> Vec<usize> {
    let mut moves = Vec::new();
    for index in 0..board.cell_count() {
        if board.cell(index).is_empty() {
            moves.push(index);
        }
    }
    moves
}

pub fn is_full(board: &Board) -> bool {
    (0..board.cell_count()).all(|index| !board.cell(index).is_empty())
}

/// True iff `player` owns a complete row, column, or diagonal.
pub fn wins(board: &Board, player: Player) -> bool {
    let n = board.size();
    let owns = |row: usize, col: usize| board.cell_at(row, col) == Cell::Marked(player);

    for row in 0..n {
        if (0..n).all(|col| owns(row, col)) {
            return true;
        }
    }

    for col in 0..n {
        if (0..n).all(|row| owns(row, col)) {
            return true;
        }
    }

    if (0..n).all(|i| owns(i, i)) {
        return true;
    }

    // Anti-diagonal: cell (r, N-1-r), equivalently index (r+1)(N-1).
    (0..n).all(|i| owns(i, n - 1 - i))
}

pub fn is_terminal(board: &Board) -> bool {
    is_full(board) || wins(board, Player::First) || wins(board, Player::Second)
}

pub fn outcome(board: &Board) -> GameOutcome {
    if wins(board, Player::First) {
        GameOutcome::Win(Player::First)
    } else if wins(board, Player::Second) {
        GameOutcome::Win(Player::Second)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
