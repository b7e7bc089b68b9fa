use serde::{Deserialize, Serialize};

/// Points needed to win the match.
pub const WINNING_SCORE: u8 = 12;

/// Score that forces the "mão de onze" hand on the side holding it.
pub const ELEVEN_HAND_SCORE: u8 = 11;

/// Points at risk while an eleven hand is being played.
pub const ELEVEN_HAND_STAKE: u8 = 3;

/// Match score as seen from the policy's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub own: u8,
    pub opponent: u8,
}

impl ScoreBoard {
    pub const fn new(own: u8, opponent: u8) -> Self {
        Self { own, opponent }
    }

    pub const fn is_eleven_hand(&self) -> bool {
        self.own == ELEVEN_HAND_SCORE
    }

    /// Whether handing the opponent `points` would end the match in their favour.
    pub const fn opponent_wins_with(&self, points: u8) -> bool {
        self.opponent.saturating_add(points) >= WINNING_SCORE
    }
}
