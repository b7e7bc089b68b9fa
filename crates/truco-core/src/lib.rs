#![deny(warnings)]
pub mod game;
pub mod model;

pub use game::snapshot::{GameSnapshot, SnapshotError, TRICKS_PER_HAND};
pub use model::card::{Card, CardParseError};
pub use model::hand::Hand;
pub use model::rank::Rank;
pub use model::score::ScoreBoard;
pub use model::stake::StakeLevel;
pub use model::suit::Suit;
pub use model::trick::TrickOutcome;
