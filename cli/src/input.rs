use std::io::{self, Write};

use cmdtactoe_engine::{Board, MoveSource, Player};

use crate::render::{RenderOptions, render_board};

/// Turns a typed line into a 0-based cell index. Input is 1-based to match
/// the labels on screen; anything non-numeric or out of range is `None`.
pub fn parse_index(line: &str, cell_count: usize) -> Option<usize> {
    let value: i64 = line.trim().parse().ok()?;
    if value < 1 || value as usize > cell_count {
        return None;
    }
    Some(value as usize - 1)
}

/// The interactive console: board drawing, prompting, and the re-prompt loop
/// that guarantees only legal indices ever reach the session.
pub struct Console {
    options: RenderOptions,
}

impl Console {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn print_board(&self, board: &Board) {
        print!("{}", render_board(board, &self.options));
    }

    /// Prints a message wrapped in angle brackets.
    pub fn prompt(&self, message: &str) {
        println!("<{}>", message);
    }

    /// Clears the screen and homes the cursor.
    pub fn wipe(&self) {
        print!("\x1b[2J\x1b[1;1H");
        let _ = io::stdout().flush();
    }

    pub fn wait_for_enter(&self) {
        loop {
            if self.read_line().trim().is_empty() {
                return;
            }
        }
    }

    fn read_line(&self) -> String {
        let mut input = String::new();
        // A closed stdin would otherwise spin forever on re-prompts.
        if io::stdin().read_line(&mut input).unwrap_or(0) == 0 {
            println!();
            std::process::exit(0);
        }
        input
    }
}

impl MoveSource for Console {
    fn next_move(&mut self, board: &Board, player: Player) -> usize {
        loop {
            self.print_board(board);
            self.prompt(&format!(
                "Player {}, which space would you like to mark with an '{}'?",
                player.number(),
                player.mark()
            ));
            let line = self.read_line();
            self.wipe();

            if let Some(index) = parse_index(&line, board.cell_count())
                && board.cell(index).is_empty()
            {
                return index;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_shifts_to_zero_based() {
        assert_eq!(parse_index("1", 9), Some(0));
        assert_eq!(parse_index("9", 9), Some(8));
    }

    #[test]
    fn test_parse_index_trims_whitespace() {
        assert_eq!(parse_index(" 5\n", 9), Some(4));
    }

    #[test]
    fn test_parse_index_rejects_out_of_range() {
        assert_eq!(parse_index("0", 9), None);
        assert_eq!(parse_index("10", 9), None);
        assert_eq!(parse_index("-3", 9), None);
    }

    #[test]
    fn test_parse_index_rejects_non_numeric() {
        assert_eq!(parse_index("", 9), None);
        assert_eq!(parse_index("abc", 9), None);
        assert_eq!(parse_index("4.5", 9), None);
    }
}
