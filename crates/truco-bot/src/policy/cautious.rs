use super::{Policy, RaiseResponse, eleven_hand_context, log_decision, raise_response_context};
use crate::bot::{PlayPlanner, RoundContext, TrickNumber};
use crate::error::PolicyError;
use truco_core::{Card, GameSnapshot, Rank};

const NAME: &str = "cautious";

/// Opponent score above which the eleven hand is always folded.
const ELEVEN_HAND_MAX_OPPONENT: u8 = 7;

/// Low-variance strategy: never asks for a raise, always takes one, and only
/// plays the eleven hand while comfortably ahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct CautiousPolicy;

impl CautiousPolicy {
    pub fn new() -> Self {
        Self
    }
}

fn holds_high_card(snapshot: &GameSnapshot) -> bool {
    let vira = snapshot.vira();
    snapshot
        .hand()
        .iter()
        .any(|card| card.is_manilha(vira) || card.rank == Rank::Three)
}

impl Policy for CautiousPolicy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn accept_eleven_hand(&self, snapshot: &GameSnapshot) -> Result<bool, PolicyError> {
        let ctx = eleven_hand_context(snapshot)?;
        let (accept, reason) = if snapshot.scores().opponent > ELEVEN_HAND_MAX_OPPONENT {
            (false, "opponent_too_close")
        } else if holds_high_card(snapshot) {
            (true, "holds_high_card")
        } else {
            (false, "no_high_card")
        };
        log_decision(NAME, "eleven_hand", snapshot, &ctx, &accept, reason);
        Ok(accept)
    }

    fn should_raise(&self, snapshot: &GameSnapshot) -> Result<bool, PolicyError> {
        let ctx = RoundContext::from_snapshot(snapshot)?;
        log_decision(NAME, "raise", snapshot, &ctx, &false, "never_raises");
        Ok(false)
    }

    fn choose_card(&self, snapshot: &GameSnapshot) -> Result<Card, PolicyError> {
        let ctx = RoundContext::from_snapshot(snapshot)?;
        let planner = PlayPlanner::new(snapshot.hand(), snapshot.vira());
        let weakest = planner.weakest().ok_or(PolicyError::EmptyHand)?;
        let strongest = planner.strongest().ok_or(PolicyError::EmptyHand)?;

        let (card, reason) = match ctx.trick() {
            TrickNumber::First => match ctx.opponent_card() {
                Some(opponent) => planner
                    .weakest_beating(opponent)
                    .map(|card| (card, "cheapest_winner"))
                    .unwrap_or((weakest, "cannot_win_dump_weakest")),
                None => (strongest, "lead_strongest"),
            },
            TrickNumber::Second { previous } if previous.is_won() => (weakest, "ahead_play_low"),
            TrickNumber::Second { .. } => (strongest, "behind_play_high"),
            TrickNumber::Third { .. } => {
                let last = snapshot.hand().first().ok_or(PolicyError::EmptyHand)?;
                (last, "last_card")
            }
        };
        log_decision(NAME, "card", snapshot, &ctx, &card, reason);
        Ok(card)
    }

    fn respond_to_raise(&self, snapshot: &GameSnapshot) -> Result<RaiseResponse, PolicyError> {
        let (ctx, _) = raise_response_context(snapshot)?;
        let response = RaiseResponse::Accept;
        log_decision(NAME, "respond", snapshot, &ctx, &response, "always_accepts");
        Ok(response)
    }
}
