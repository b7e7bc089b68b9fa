use core::fmt;
use serde::{Deserialize, Serialize};

/// Result of a completed trick from the policy's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrickOutcome {
    Won,
    Lost,
    Drawn,
}

impl TrickOutcome {
    pub const fn is_won(self) -> bool {
        matches!(self, TrickOutcome::Won)
    }
}

impl fmt::Display for TrickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TrickOutcome::Won => "won",
            TrickOutcome::Lost => "lost",
            TrickOutcome::Drawn => "drawn",
        };
        f.write_str(text)
    }
}
