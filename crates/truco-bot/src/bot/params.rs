use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable thresholds for the heuristic decisions.
///
/// All values are expressed in relative-value units: a single card scores
/// `0..=39` and a full hand at most `117`. Ordinary cards sit at four times
/// their tier, so `32` is the lowest card of the top ordinary tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotParams {
    /// Relative value from which a card counts as strong (default: 32)
    pub strong_card: u8,

    /// Hand total at or below which the hand is considered bad (default: 32)
    pub bad_hand: u32,

    /// Hand total separating average from good hands (default: 48)
    pub average_hand: u32,

    /// Hand total above which the hand is considered good (default: 72)
    pub good_hand: u32,
}

impl BotParams {
    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            strong_card: read("TRUCO_STRONG_CARD")
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.strong_card),
            bad_hand: read("TRUCO_BAD_HAND")
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.bad_hand),
            average_hand: read("TRUCO_AVERAGE_HAND")
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.average_hand),
            good_hand: read("TRUCO_GOOD_HAND")
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.good_hand),
        }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.bad_hand > self.average_hand || self.average_hand > self.good_hand {
            return Err(ParamsError::UnorderedThresholds {
                bad: self.bad_hand,
                average: self.average_hand,
                good: self.good_hand,
            });
        }
        Ok(())
    }
}

impl Default for BotParams {
    fn default() -> Self {
        Self {
            strong_card: 32,
            bad_hand: 32,
            average_hand: 48,
            good_hand: 72,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error(
        "hand thresholds must satisfy bad <= average <= good (got {bad}, {average}, {good})"
    )]
    UnorderedThresholds { bad: u32, average: u32, good: u32 },
}
