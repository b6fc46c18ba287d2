/// One of the two participants. `First` always plays "X", `Second` "O".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub fn mark(self) -> &'static str {
        match self {
            Player::First => "X",
            Player::Second => "O",
        }
    }

    /// Display number used in prompts and announcements.
    pub fn number(self) -> u32 {
        match self {
            Player::First => 1,
            Player::Second => 2,
        }
    }
}

/// A single board cell. Empty cells carry their 1-based position label so the
/// presentation layer never has to re-derive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty { label: u32 },
    Marked(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty { .. })
    }
}

/// Derived view of a board; recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

/// How the computer picks its moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchPolicy {
    /// Full minimax every turn.
    Exhaustive,
    /// With probability `epsilon`, play a uniformly random legal move instead
    /// of the minimax result. `epsilon` is always in [0, 1].
    Imperfect { epsilon: f64 },
}

impl SearchPolicy {
    /// Builds an imperfect policy from a whole-number percentage. Out-of-range
    /// values are clamped to [0, 100], not rejected.
    pub fn imperfect_percent(percent: i64) -> Self {
        let clamped = percent.clamp(0, 100);
        SearchPolicy::Imperfect {
            epsilon: clamped as f64 / 100.0,
        }
    }
}
