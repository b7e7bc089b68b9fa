use clap::ValueEnum;
use serde::Serialize;
use truco_bot::{BotParams, HandStrength, Policy, PolicyError, RaiseResponse, StrengthClass};
use truco_core::{Card, GameSnapshot};

/// Which decision(s) to compute for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Decision {
    /// Every decision that applies to the snapshot.
    #[default]
    All,
    Eleven,
    Raise,
    Card,
    Respond,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StrengthReport {
    pub trumps: usize,
    pub strong: usize,
    pub total: u32,
    pub class: StrengthClass,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Advice {
    pub policy: &'static str,
    pub trick: usize,
    pub strength: StrengthReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_eleven_hand: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raise: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raise_response: Option<RaiseResponse>,
    /// Engine wire form of `raise_response`: -1 decline, 0 accept, 1 counter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raise_response_code: Option<i8>,
}

impl Advice {
    fn record_response(&mut self, response: RaiseResponse) {
        self.raise_response = Some(response);
        self.raise_response_code = Some(response.code());
    }
}

/// Run the requested decisions against `policy`.
///
/// In [`Decision::All`] mode the eleven-hand question is only asked while it
/// applies (own score eleven, no trick played) and the raise response is
/// skipped when the stake is already capped. Explicit modes surface the
/// policy error instead.
pub fn advise(
    policy: &dyn Policy,
    params: &BotParams,
    snapshot: &GameSnapshot,
    decision: Decision,
) -> Result<Advice, PolicyError> {
    snapshot.validate()?;
    let strength = HandStrength::of(snapshot, params);
    let mut advice = Advice {
        policy: policy.name(),
        trick: snapshot.trick_number(),
        strength: StrengthReport {
            trumps: strength.trump_count(),
            strong: strength.strong_card_count(),
            total: strength.total_value(),
            class: strength.strength_class(),
        },
        accept_eleven_hand: None,
        raise: None,
        card: None,
        raise_response: None,
        raise_response_code: None,
    };

    match decision {
        Decision::All => {
            let eleven_applies =
                snapshot.scores().is_eleven_hand() && snapshot.outcomes().is_empty();
            if eleven_applies {
                advice.accept_eleven_hand = Some(policy.accept_eleven_hand(snapshot)?);
            }
            advice.raise = Some(policy.should_raise(snapshot)?);
            advice.card = Some(policy.choose_card(snapshot)?);
            if snapshot.stake()?.can_raise() {
                advice.record_response(policy.respond_to_raise(snapshot)?);
            }
        }
        Decision::Eleven => advice.accept_eleven_hand = Some(policy.accept_eleven_hand(snapshot)?),
        Decision::Raise => advice.raise = Some(policy.should_raise(snapshot)?),
        Decision::Card => advice.card = Some(policy.choose_card(snapshot)?),
        Decision::Respond => advice.record_response(policy.respond_to_raise(snapshot)?),
    }

    Ok(advice)
}

#[cfg(test)]
mod tests {
    use super::{Decision, advise};
    use truco_bot::{BotParams, PolicyError, PolicyKind, RaiseResponse};
    use truco_core::{Card, GameSnapshot, Hand, StakeLevel};

    fn card(raw: &str) -> Card {
        raw.parse().expect("valid card")
    }

    fn opening() -> GameSnapshot {
        GameSnapshot::new(
            Hand::with_cards(vec![card("3C"), card("4H"), card("5S")]),
            card("4D"),
        )
    }

    #[test]
    fn all_mode_skips_inapplicable_questions() {
        let params = BotParams::default();
        let policy = PolicyKind::Heuristic.build(params);
        let advice = advise(policy.as_ref(), &params, &opening(), Decision::All).expect("advice");
        assert_eq!(advice.trick, 1);
        assert_eq!(advice.accept_eleven_hand, None);
        assert_eq!(advice.raise, Some(false));
        assert_eq!(advice.card, Some(card("5S")));
        assert_eq!(advice.raise_response, Some(RaiseResponse::CounterRaise));
        assert_eq!(advice.raise_response_code, Some(1));
        assert_eq!(advice.strength.trumps, 1);
    }

    #[test]
    fn all_mode_includes_eleven_hand_at_eleven() {
        let params = BotParams::default();
        let policy = PolicyKind::Heuristic.build(params);
        let snapshot = opening().with_scores(11, 4).with_stake(StakeLevel::Truco);
        let advice = advise(policy.as_ref(), &params, &snapshot, Decision::All).expect("advice");
        assert_eq!(advice.accept_eleven_hand, Some(true));
    }

    #[test]
    fn explicit_mode_surfaces_errors() {
        let params = BotParams::default();
        let policy = PolicyKind::Heuristic.build(params);
        let err = advise(policy.as_ref(), &params, &opening(), Decision::Eleven)
            .expect_err("not an eleven hand");
        assert!(matches!(err, PolicyError::InvalidRoundState(_)));
    }

    #[test]
    fn capped_stake_omits_raise_response() {
        let params = BotParams::default();
        let policy = PolicyKind::Cautious.build(params);
        let snapshot = opening().with_stake(StakeLevel::Twelve);
        let advice = advise(policy.as_ref(), &params, &snapshot, Decision::All).expect("advice");
        assert_eq!(advice.raise_response, None);
        assert_eq!(advice.raise_response_code, None);
        assert_eq!(advice.raise, Some(false));
    }
}
