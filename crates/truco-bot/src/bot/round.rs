use crate::error::PolicyError;
use truco_core::{Card, GameSnapshot, StakeLevel, TrickOutcome};

/// Trick about to be played. Later tricks carry the outcome of the one
/// before them, so "previous trick" only exists where it is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrickNumber {
    First,
    Second { previous: TrickOutcome },
    Third { previous: TrickOutcome },
}

impl TrickNumber {
    pub const fn number(self) -> u8 {
        match self {
            TrickNumber::First => 1,
            TrickNumber::Second { .. } => 2,
            TrickNumber::Third { .. } => 3,
        }
    }

    pub const fn previous(self) -> Option<TrickOutcome> {
        match self {
            TrickNumber::First => None,
            TrickNumber::Second { previous } | TrickNumber::Third { previous } => Some(previous),
        }
    }
}

/// Projection of the snapshot onto the round-level facts the policies branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundContext {
    trick: TrickNumber,
    opponent_card: Option<Card>,
    stake: StakeLevel,
}

impl RoundContext {
    /// Validates the snapshot and derives the trick being played.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, PolicyError> {
        snapshot.validate()?;
        let trick = match snapshot.outcomes() {
            [] => TrickNumber::First,
            [first] => TrickNumber::Second { previous: *first },
            [_, second] => TrickNumber::Third { previous: *second },
            outcomes => {
                return Err(PolicyError::InvalidRoundState(format!(
                    "{} tricks already completed",
                    outcomes.len()
                )));
            }
        };
        Ok(Self {
            trick,
            opponent_card: snapshot.opponent_card(),
            stake: snapshot.stake()?,
        })
    }

    pub fn trick(&self) -> TrickNumber {
        self.trick
    }

    pub fn trick_number(&self) -> u8 {
        self.trick.number()
    }

    /// `None` on the first trick, where no previous trick exists.
    pub fn won_previous_trick(&self) -> Option<bool> {
        self.trick.previous().map(TrickOutcome::is_won)
    }

    pub fn opponent_already_played(&self) -> bool {
        self.opponent_card.is_some()
    }

    pub fn opponent_card(&self) -> Option<Card> {
        self.opponent_card
    }

    pub fn stake(&self) -> StakeLevel {
        self.stake
    }
}
