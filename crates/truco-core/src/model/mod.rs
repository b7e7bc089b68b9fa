pub mod card;
pub mod hand;
pub mod rank;
pub mod score;
pub mod stake;
pub mod suit;
pub mod trick;
