mod params;
mod play;
mod round;
mod strength;

pub use params::{BotParams, ParamsError};
pub use play::PlayPlanner;
pub use round::{RoundContext, TrickNumber};
pub use strength::{HandStrength, StrengthClass};
