use cmdtactoe_engine::{Board, Cell};

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Print rows bottom-to-top so labels line up with a keypad.
    pub numpad: bool,
    /// Blank out the labels on empty cells.
    pub suppress_labels: bool,
}

/// Formats the board as a box-drawn matrix, each cell right-aligned in a
/// three-character column.
pub fn render_board(board: &Board, options: &RenderOptions) -> String {
    let n = board.size();
    let mut out = String::new();

    out.push('╔');
    out.push_str(&"═══╤".repeat(n - 1));
    out.push_str("═══╗\n");

    let rows: Vec<usize> = if options.numpad {
        (0..n).rev().collect()
    } else {
        (0..n).collect()
    };

    for (printed, &row) in rows.iter().enumerate() {
        out.push('║');
        for col in 0..n {
            let text = cell_text(board.cell_at(row, col), options.suppress_labels);
            out.push_str(&format!("{:>3}", text));
            out.push(if col < n - 1 { '│' } else { '║' });
        }
        out.push_str(" \n");

        if printed < n - 1 {
            out.push('╟');
            out.push_str(&"───┼".repeat(n - 1));
            out.push_str("───╢\n");
        }
    }

    out.push('╚');
    out.push_str(&"═══╧".repeat(n - 1));
    out.push_str("═══╝\n");
    out
}

fn cell_text(cell: Cell, suppress_labels: bool) -> String {
    match cell {
        Cell::Marked(player) => player.mark().to_string(),
        Cell::Empty { label } => {
            if suppress_labels {
                " ".to_string()
            } else {
                label.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdtactoe_engine::Player;

    #[test]
    fn test_empty_board_shows_labels() {
        let rendered = render_board(&Board::new(3), &RenderOptions::default());
        let expected = "╔═══╤═══╤═══╗\n\
                        ║  1│  2│  3║ \n\
                        ╟───┼───┼───╢\n\
                        ║  4│  5│  6║ \n\
                        ╟───┼───┼───╢\n\
                        ║  7│  8│  9║ \n\
                        ╚═══╧═══╧═══╝\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_marks_replace_labels() {
        let mut board = Board::new(3);
        board.apply(0, Player::First);
        board.apply(4, Player::Second);
        let rendered = render_board(&board, &RenderOptions::default());
        assert!(rendered.contains("║  X│  2│  3║"));
        assert!(rendered.contains("║  4│  O│  6║"));
    }

    #[test]
    fn test_suppressed_labels_leave_blanks() {
        let mut board = Board::new(3);
        board.apply(0, Player::First);
        let options = RenderOptions {
            suppress_labels: true,
            ..RenderOptions::default()
        };
        let rendered = render_board(&board, &options);
        assert!(rendered.contains("║  X│   │   ║"));
        assert!(!rendered.contains('2'));
    }

    #[test]
    fn test_numpad_layout_prints_bottom_row_first() {
        let options = RenderOptions {
            numpad: true,
            ..RenderOptions::default()
        };
        let rendered = render_board(&Board::new(3), &options);
        let row7 = rendered.find("  7").unwrap();
        let row1 = rendered.find("  1").unwrap();
        assert!(row7 < row1);
    }

    #[test]
    fn test_two_digit_labels_stay_aligned() {
        let rendered = render_board(&Board::new(4), &RenderOptions::default());
        assert!(rendered.contains("║ 13│ 14│ 15│ 16║"));
        assert!(rendered.starts_with("╔═══╤═══╤═══╤═══╗\n"));
    }
}
