use super::types::{Cell, Player};

pub const DEFAULT_SIZE: usize = 3;

/// An N×N grid of cells, row-major. A `Board` is a plain value: cloning it
/// yields a fully independent copy, which is what lets the search explore
/// hypothetical futures without touching the live game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        let cells = (0..size * size)
            .map(|i| Cell::Empty {
                label: i as u32 + 1,
            })
            .collect();
        Self { size, cells }
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total cell count N².
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Writes `player`'s mark at `index`. The index must be in range and the
    /// cell empty; callers validate before calling, so a violation here is a
    /// programming error, not a runtime condition.
    pub fn apply(&mut self, index: usize, player: Player) {
        debug_assert!(index < self.cells.len(), "move index out of range");
        debug_assert!(self.cells[index].is_empty(), "cell already marked");
        self.cells[index] = Cell::Marked(player);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_all_empty_with_shifted_labels() {
        let board = Board::new(3);
        assert_eq!(board.cell_count(), 9);
        for i in 0..9 {
            assert_eq!(board.cell(i), Cell::Empty { label: i as u32 + 1 });
        }
    }

    #[test]
    fn test_default_board_is_three_by_three() {
        assert_eq!(Board::default().size(), 3);
    }

    #[test]
    fn test_apply_marks_the_cell() {
        let mut board = Board::new(3);
        board.apply(4, Player::First);
        assert_eq!(board.cell(4), Cell::Marked(Player::First));
        assert_eq!(board.cell_at(1, 1), Cell::Marked(Player::First));
    }

    #[test]
    fn test_clone_is_value_independent() {
        let original = Board::new(3);
        let mut copy = original.clone();
        copy.apply(0, Player::Second);
        assert!(original.cell(0).is_empty());
        assert_eq!(copy.cell(0), Cell::Marked(Player::Second));
    }
}
