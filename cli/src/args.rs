use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "cmdtactoe", about = "Generalized tic-tac-toe on the command line")]
pub struct Args {
    /// Let player 2 take the first turn
    #[arg(long)]
    pub switch: bool,

    /// Hide the number labels on empty cells
    #[arg(long)]
    pub suppress: bool,

    /// Number the cells like a keypad, rows running bottom to top
    #[arg(long)]
    pub numpad: bool,

    /// Player 2 is computer-controlled
    #[arg(long)]
    pub computer: bool,

    /// The computer occasionally plays a random move (implies --computer)
    #[arg(long)]
    pub imperfect: bool,

    /// Percent chance of a random computer move, 0-100 (implies --imperfect)
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub epsilon: Option<i64>,

    /// Board side length
    #[arg(long, value_name = "N")]
    pub size: Option<usize>,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Settings file location
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_parse_to_defaults() {
        let args = Args::try_parse_from(["cmdtactoe"]).unwrap();
        assert!(!args.switch);
        assert!(!args.computer);
        assert_eq!(args.epsilon, None);
        assert_eq!(args.size, None);
    }

    #[test]
    fn test_all_flags_parse() {
        let args = Args::try_parse_from([
            "cmdtactoe",
            "--switch",
            "--suppress",
            "--numpad",
            "--computer",
            "--imperfect",
            "--epsilon",
            "35",
            "--size",
            "4",
            "--seed",
            "7",
        ])
        .unwrap();
        assert!(args.switch && args.suppress && args.numpad);
        assert!(args.computer && args.imperfect);
        assert_eq!(args.epsilon, Some(35));
        assert_eq!(args.size, Some(4));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn test_negative_epsilon_is_accepted_for_clamping() {
        let args = Args::try_parse_from(["cmdtactoe", "--epsilon", "-5"]).unwrap();
        assert_eq!(args.epsilon, Some(-5));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["cmdtactoe", "--bogus"]).is_err());
    }
}
