use super::{
    Policy, RaiseResponse, cap_response, eleven_hand_context, log_decision, log_strength,
    raise_response_context,
};
use crate::bot::{BotParams, HandStrength, PlayPlanner, RoundContext, TrickNumber};
use crate::error::PolicyError;
use truco_core::model::score::ELEVEN_HAND_STAKE;
use truco_core::{Card, GameSnapshot};

const NAME: &str = "heuristic";

/// Threshold-driven strategy that reads manilha count, strong cards and the
/// hand total, and leans on the previous trick once one exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPolicy {
    params: BotParams,
}

impl HeuristicPolicy {
    pub fn new(params: BotParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BotParams {
        &self.params
    }

    fn strength<'a>(&'a self, snapshot: &'a GameSnapshot) -> HandStrength<'a> {
        let strength = HandStrength::of(snapshot, &self.params);
        log_strength(NAME, &strength);
        strength
    }
}

impl Policy for HeuristicPolicy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn accept_eleven_hand(&self, snapshot: &GameSnapshot) -> Result<bool, PolicyError> {
        let ctx = eleven_hand_context(snapshot)?;
        let scores = snapshot.scores();

        // Folding hands the opponent a point; if that point ends the match we
        // lose nothing by playing.
        if scores.opponent_wins_with(1) {
            log_decision(NAME, "eleven_hand", snapshot, &ctx, &true, "declining_is_fatal");
            return Ok(true);
        }

        let strength = self.strength(snapshot);
        let trumps = strength.trump_count();
        let strong = strength.strong_card_count();
        let (accept, reason) = if trumps >= 2 {
            (true, "two_manilhas")
        } else if trumps >= 1 && strong >= 1 {
            (true, "manilha_and_strong")
        } else if strong == 3 {
            (true, "all_strong")
        } else if strength.total_value() > self.params.good_hand {
            (true, "good_total")
        } else if scores.opponent_wins_with(ELEVEN_HAND_STAKE) {
            (false, "losing_is_fatal")
        } else {
            (false, "weak_total")
        };
        log_decision(NAME, "eleven_hand", snapshot, &ctx, &accept, reason);
        Ok(accept)
    }

    fn should_raise(&self, snapshot: &GameSnapshot) -> Result<bool, PolicyError> {
        let ctx = RoundContext::from_snapshot(snapshot)?;
        if !ctx.stake().can_raise() {
            log_decision(NAME, "raise", snapshot, &ctx, &false, "stake_capped");
            return Ok(false);
        }

        let strength = self.strength(snapshot);
        let (raise, reason) = match ctx.trick() {
            TrickNumber::First => (false, "never_on_first_trick"),
            TrickNumber::Second { previous } => {
                if previous.is_won() {
                    (true, "won_previous")
                } else if strength.is_trump_heavy() {
                    (true, "trump_heavy")
                } else {
                    (false, "nothing_to_press")
                }
            }
            TrickNumber::Third { .. } => {
                let last = snapshot.hand().first().ok_or(PolicyError::EmptyHand)?;
                match ctx.opponent_card() {
                    Some(opponent) => {
                        let planner = PlayPlanner::new(snapshot.hand(), snapshot.vira());
                        (planner.beats(last, opponent), "last_card_vs_opponent")
                    }
                    None => (
                        strength.has_strong_card() || strength.has_trump(),
                        "last_card_strength",
                    ),
                }
            }
        };
        log_decision(NAME, "raise", snapshot, &ctx, &raise, reason);
        Ok(raise)
    }

    fn choose_card(&self, snapshot: &GameSnapshot) -> Result<Card, PolicyError> {
        let ctx = RoundContext::from_snapshot(snapshot)?;
        let planner = PlayPlanner::new(snapshot.hand(), snapshot.vira());
        let weakest = planner.weakest().ok_or(PolicyError::EmptyHand)?;
        let strongest = planner.strongest().ok_or(PolicyError::EmptyHand)?;
        let strength = self.strength(snapshot);

        let (card, reason) = match (ctx.trick(), ctx.opponent_card()) {
            (TrickNumber::First, Some(opponent)) => match planner.weakest_beating(opponent) {
                Some(card) => (card, "cheapest_winner"),
                None => (weakest, "cannot_win_dump_weakest"),
            },
            (TrickNumber::First, None) => {
                if strength.total_value() <= self.params.bad_hand {
                    (weakest, "bad_hand_lead_weakest")
                } else {
                    (strongest, "lead_strongest")
                }
            }
            // Losing the second trick after losing the first ends the hand, so
            // the fallback spends the best card instead of dumping.
            (TrickNumber::Second { .. }, Some(opponent)) => {
                match planner.weakest_beating(opponent) {
                    Some(card) => (card, "cheapest_winner"),
                    None => (strongest, "cannot_win_play_strongest"),
                }
            }
            (TrickNumber::Second { .. }, None) => {
                if strength.total_value() <= self.params.average_hand && strength.has_trump() {
                    (weakest, "save_manilha")
                } else {
                    (strongest, "lead_strongest")
                }
            }
            (TrickNumber::Third { .. }, _) => {
                let last = snapshot.hand().first().ok_or(PolicyError::EmptyHand)?;
                (last, "last_card")
            }
        };
        log_decision(NAME, "card", snapshot, &ctx, &card, reason);
        Ok(card)
    }

    fn respond_to_raise(&self, snapshot: &GameSnapshot) -> Result<RaiseResponse, PolicyError> {
        let (ctx, proposed) = raise_response_context(snapshot)?;
        let strength = self.strength(snapshot);
        let trumps = strength.trump_count();
        let total = strength.total_value();

        let (response, reason) = match ctx.trick() {
            TrickNumber::First => {
                if strength.is_trump_heavy() {
                    (RaiseResponse::CounterRaise, "trump_heavy")
                } else if trumps >= 1 {
                    (RaiseResponse::Accept, "holds_manilha")
                } else if total > self.params.good_hand {
                    (RaiseResponse::Accept, "good_total")
                } else {
                    (RaiseResponse::Decline, "weak_hand")
                }
            }
            TrickNumber::Second { previous } => {
                if strength.is_trump_heavy() {
                    (RaiseResponse::CounterRaise, "trump_heavy")
                } else if previous.is_won() && strength.has_strong_card() {
                    (RaiseResponse::CounterRaise, "won_previous_with_strong")
                } else if trumps >= 1 {
                    (RaiseResponse::Accept, "holds_manilha")
                } else if total > self.params.average_hand {
                    (RaiseResponse::Accept, "average_total")
                } else {
                    (RaiseResponse::Decline, "weak_hand")
                }
            }
            TrickNumber::Third { previous } => {
                let playable = total >= self.params.bad_hand;
                if trumps >= 1 {
                    (RaiseResponse::CounterRaise, "holds_manilha")
                } else if previous.is_won() && playable {
                    (RaiseResponse::CounterRaise, "won_previous_playable")
                } else if playable {
                    (RaiseResponse::Accept, "playable_card")
                } else {
                    (RaiseResponse::Decline, "weak_card")
                }
            }
        };
        let response = cap_response(response, proposed);
        log_decision(NAME, "respond", snapshot, &ctx, &response, reason);
        Ok(response)
    }
}
