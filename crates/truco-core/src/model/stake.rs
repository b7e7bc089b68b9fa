use core::fmt;
use serde::{Deserialize, Serialize};

/// Points at risk in the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum StakeLevel {
    Regular = 1,
    Truco = 3,
    Six = 6,
    Nine = 9,
    Twelve = 12,
}

impl StakeLevel {
    pub const ALL: [StakeLevel; 5] = [
        StakeLevel::Regular,
        StakeLevel::Truco,
        StakeLevel::Six,
        StakeLevel::Nine,
        StakeLevel::Twelve,
    ];

    pub fn from_points(points: u8) -> Result<Self, UnknownStakeLevel> {
        StakeLevel::ALL
            .into_iter()
            .find(|level| level.points() == points)
            .ok_or(UnknownStakeLevel(points))
    }

    pub const fn points(self) -> u8 {
        self as u8
    }

    /// Level reached by accepting a raise; `None` once the stake is maxed out.
    pub const fn next(self) -> Option<Self> {
        match self {
            StakeLevel::Regular => Some(StakeLevel::Truco),
            StakeLevel::Truco => Some(StakeLevel::Six),
            StakeLevel::Six => Some(StakeLevel::Nine),
            StakeLevel::Nine => Some(StakeLevel::Twelve),
            StakeLevel::Twelve => None,
        }
    }

    pub const fn can_raise(self) -> bool {
        self.next().is_some()
    }
}

impl fmt::Display for StakeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

impl From<StakeLevel> for u8 {
    fn from(level: StakeLevel) -> Self {
        level.points()
    }
}

impl TryFrom<u8> for StakeLevel {
    type Error = UnknownStakeLevel;

    fn try_from(points: u8) -> Result<Self, Self::Error> {
        StakeLevel::from_points(points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStakeLevel(pub u8);

impl fmt::Display for UnknownStakeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a recognised stake level", self.0)
    }
}

impl std::error::Error for UnknownStakeLevel {}
