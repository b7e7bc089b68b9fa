use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::score::ScoreBoard;
use crate::model::stake::{StakeLevel, UnknownStakeLevel};
use crate::model::trick::TrickOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tricks played in a single hand.
pub const TRICKS_PER_HAND: usize = 3;

/// Read-only view of the game handed to a policy for one decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    hand: Hand,
    vira: Card,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    opponent_card: Option<Card>,
    #[serde(default)]
    outcomes: Vec<TrickOutcome>,
    #[serde(default)]
    scores: ScoreBoard,
    #[serde(default = "default_hand_points")]
    hand_points: u8,
}

fn default_hand_points() -> u8 {
    StakeLevel::Regular.points()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    TooManyTricks { recorded: usize },
    TooManyCards { cards: usize, tricks: usize },
    UnknownStakeLevel(u8),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::TooManyTricks { recorded } => write!(
                f,
                "{recorded} trick outcomes recorded but a hand has only {TRICKS_PER_HAND} tricks"
            ),
            SnapshotError::TooManyCards { cards, tricks } => write!(
                f,
                "{cards} cards in hand after {tricks} completed tricks exceeds {TRICKS_PER_HAND}"
            ),
            SnapshotError::UnknownStakeLevel(points) => {
                write!(f, "{points} is not a recognised stake level")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<UnknownStakeLevel> for SnapshotError {
    fn from(err: UnknownStakeLevel) -> Self {
        SnapshotError::UnknownStakeLevel(err.0)
    }
}

impl GameSnapshot {
    pub fn new(hand: Hand, vira: Card) -> Self {
        Self {
            hand,
            vira,
            opponent_card: None,
            outcomes: Vec::new(),
            scores: ScoreBoard::default(),
            hand_points: default_hand_points(),
        }
    }

    pub fn with_opponent_card(mut self, card: Card) -> Self {
        self.opponent_card = Some(card);
        self
    }

    pub fn with_outcomes(mut self, outcomes: impl IntoIterator<Item = TrickOutcome>) -> Self {
        self.outcomes = outcomes.into_iter().collect();
        self
    }

    pub fn with_scores(mut self, own: u8, opponent: u8) -> Self {
        self.scores = ScoreBoard::new(own, opponent);
        self
    }

    pub fn with_stake(mut self, stake: StakeLevel) -> Self {
        self.hand_points = stake.points();
        self
    }

    /// Raw stake as reported by the engine; checked by [`GameSnapshot::stake`].
    pub fn with_hand_points(mut self, points: u8) -> Self {
        self.hand_points = points;
        self
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn vira(&self) -> Card {
        self.vira
    }

    pub fn opponent_card(&self) -> Option<Card> {
        self.opponent_card
    }

    pub fn outcomes(&self) -> &[TrickOutcome] {
        &self.outcomes
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn hand_points(&self) -> u8 {
        self.hand_points
    }

    pub fn stake(&self) -> Result<StakeLevel, SnapshotError> {
        Ok(StakeLevel::from_points(self.hand_points)?)
    }

    /// One-based number of the trick about to be played.
    pub fn trick_number(&self) -> usize {
        self.outcomes.len() + 1
    }

    pub fn validate(&self) -> Result<(), SnapshotError> {
        let tricks = self.outcomes.len();
        if tricks >= TRICKS_PER_HAND {
            return Err(SnapshotError::TooManyTricks { recorded: tricks });
        }
        if self.hand.len() + tricks > TRICKS_PER_HAND {
            return Err(SnapshotError::TooManyCards {
                cards: self.hand.len(),
                tricks,
            });
        }
        self.stake()?;
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
