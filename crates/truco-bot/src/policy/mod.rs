mod cautious;
mod heuristic;

pub use cautious::CautiousPolicy;
pub use heuristic::HeuristicPolicy;

use crate::bot::{BotParams, HandStrength, RoundContext, TrickNumber};
use crate::error::PolicyError;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{Level, event};
use truco_core::{Card, GameSnapshot, StakeLevel};

/// Answer to a raise initiated by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaiseResponse {
    Decline,
    Accept,
    CounterRaise,
}

impl RaiseResponse {
    /// Numeric form used by engines that speak `-1 / 0 / 1`.
    pub const fn code(self) -> i8 {
        match self {
            RaiseResponse::Decline => -1,
            RaiseResponse::Accept => 0,
            RaiseResponse::CounterRaise => 1,
        }
    }

    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(RaiseResponse::Decline),
            0 => Some(RaiseResponse::Accept),
            1 => Some(RaiseResponse::CounterRaise),
            _ => None,
        }
    }
}

impl fmt::Display for RaiseResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RaiseResponse::Decline => "decline",
            RaiseResponse::Accept => "accept",
            RaiseResponse::CounterRaise => "counter_raise",
        };
        f.write_str(text)
    }
}

/// The four questions an engine asks a bot during a hand.
///
/// Implementations are stateless apart from construction-time thresholds, so a
/// single instance can serve concurrent callers.
pub trait Policy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether to play the forced hand when our side sits on eleven points.
    fn accept_eleven_hand(&self, snapshot: &GameSnapshot) -> Result<bool, PolicyError>;

    /// Whether to ask for a raise before playing this trick.
    fn should_raise(&self, snapshot: &GameSnapshot) -> Result<bool, PolicyError>;

    /// Card to play this trick; always one of the snapshot's hand cards.
    fn choose_card(&self, snapshot: &GameSnapshot) -> Result<Card, PolicyError>;

    /// Reply to a raise the opponent just asked for.
    fn respond_to_raise(&self, snapshot: &GameSnapshot) -> Result<RaiseResponse, PolicyError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    Heuristic,
    Cautious,
}

impl PolicyKind {
    pub fn from_env() -> Self {
        std::env::var("TRUCO_POLICY")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Heuristic => "heuristic",
            PolicyKind::Cautious => "cautious",
        }
    }

    pub fn build(self, params: BotParams) -> Box<dyn Policy> {
        match self {
            PolicyKind::Heuristic => Box::new(HeuristicPolicy::new(params)),
            PolicyKind::Cautious => Box::new(CautiousPolicy::new()),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "heuristic" | "default" | "normal" => Ok(PolicyKind::Heuristic),
            "cautious" | "easy" => Ok(PolicyKind::Cautious),
            other => Err(format!("unknown policy {other:?}")),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context for the eleven-hand question, which is only asked before the first
/// trick while our side holds exactly eleven points.
fn eleven_hand_context(snapshot: &GameSnapshot) -> Result<RoundContext, PolicyError> {
    let ctx = RoundContext::from_snapshot(snapshot)?;
    let scores = snapshot.scores();
    if !scores.is_eleven_hand() {
        return Err(PolicyError::InvalidRoundState(format!(
            "eleven hand asked with own score {}",
            scores.own
        )));
    }
    if ctx.trick() != TrickNumber::First {
        return Err(PolicyError::InvalidRoundState(format!(
            "eleven hand asked before trick {}",
            ctx.trick_number()
        )));
    }
    if snapshot.hand().is_empty() {
        return Err(PolicyError::EmptyHand);
    }
    Ok(ctx)
}

/// Context for a raise response plus the stake the opponent is asking for.
fn raise_response_context(
    snapshot: &GameSnapshot,
) -> Result<(RoundContext, StakeLevel), PolicyError> {
    let ctx = RoundContext::from_snapshot(snapshot)?;
    let proposed = ctx.stake().next().ok_or_else(|| {
        PolicyError::InvalidRoundState(format!("no raise exists above stake {}", ctx.stake()))
    })?;
    Ok((ctx, proposed))
}

/// Counter-raising is impossible once the opponent's raise reached the cap.
fn cap_response(response: RaiseResponse, proposed: StakeLevel) -> RaiseResponse {
    if response == RaiseResponse::CounterRaise && !proposed.can_raise() {
        RaiseResponse::Accept
    } else {
        response
    }
}

fn log_strength(policy: &str, strength: &HandStrength<'_>) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }
    event!(
        target: "truco_bot::strength",
        Level::DEBUG,
        policy,
        trumps = strength.trump_count(),
        strong = strength.strong_card_count(),
        total = strength.total_value(),
        class = %strength.strength_class(),
    );
}

fn log_decision(
    policy: &str,
    decision: &str,
    snapshot: &GameSnapshot,
    ctx: &RoundContext,
    choice: &dyn fmt::Display,
    reason: &str,
) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    let hand = snapshot
        .hand()
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let opponent = ctx
        .opponent_card()
        .map(|card| card.to_string())
        .unwrap_or_else(|| "-".to_string());

    event!(
        target: "truco_bot::decision",
        Level::INFO,
        policy,
        decision,
        trick = ctx.trick_number(),
        hand = %hand,
        vira = %snapshot.vira(),
        opponent = %opponent,
        stake = ctx.stake().points(),
        choice = %choice,
        reason,
    );
}

#[cfg(test)]
mod tests {
    use super::{PolicyKind, RaiseResponse, cap_response};
    use crate::bot::BotParams;
    use truco_core::StakeLevel;

    #[test]
    fn raise_codes_round_trip() {
        for response in [
            RaiseResponse::Decline,
            RaiseResponse::Accept,
            RaiseResponse::CounterRaise,
        ] {
            assert_eq!(RaiseResponse::from_code(response.code()), Some(response));
        }
        assert_eq!(RaiseResponse::from_code(2), None);
    }

    #[test]
    fn kind_parses_aliases() {
        assert_eq!("Heuristic".parse::<PolicyKind>(), Ok(PolicyKind::Heuristic));
        assert_eq!(" easy ".parse::<PolicyKind>(), Ok(PolicyKind::Cautious));
        assert!("random".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn kind_builds_named_policy() {
        let params = BotParams::default();
        assert_eq!(PolicyKind::Heuristic.build(params).name(), "heuristic");
        assert_eq!(PolicyKind::Cautious.build(params).name(), "cautious");
    }

    #[test]
    fn counter_raise_capped_at_twelve() {
        assert_eq!(
            cap_response(RaiseResponse::CounterRaise, StakeLevel::Twelve),
            RaiseResponse::Accept
        );
        assert_eq!(
            cap_response(RaiseResponse::CounterRaise, StakeLevel::Nine),
            RaiseResponse::CounterRaise
        );
        assert_eq!(
            cap_response(RaiseResponse::Decline, StakeLevel::Twelve),
            RaiseResponse::Decline
        );
    }
}
