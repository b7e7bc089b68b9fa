pub mod bot;
pub mod error;
pub mod policy;

pub use bot::{
    BotParams, HandStrength, ParamsError, PlayPlanner, RoundContext, StrengthClass, TrickNumber,
};
pub use error::PolicyError;
pub use policy::{CautiousPolicy, HeuristicPolicy, Policy, PolicyKind, RaiseResponse};
