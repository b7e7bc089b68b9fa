use super::BotParams;
use core::fmt;
use serde::Serialize;
use truco_core::{Card, GameSnapshot, Hand};

/// Coarse bucket for a hand's total relative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthClass {
    Poor,
    Average,
    Good,
    Excellent,
}

impl fmt::Display for StrengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StrengthClass::Poor => "poor",
            StrengthClass::Average => "average",
            StrengthClass::Good => "good",
            StrengthClass::Excellent => "excellent",
        };
        f.write_str(text)
    }
}

/// Hand-level signals derived from the live hand and the vira.
///
/// Nothing is cached: every query walks the hand it borrows, so a snapshot
/// taken after a card leaves the hand sees the smaller hand.
#[derive(Debug, Clone, Copy)]
pub struct HandStrength<'a> {
    hand: &'a Hand,
    vira: Card,
    params: &'a BotParams,
}

impl<'a> HandStrength<'a> {
    pub fn new(hand: &'a Hand, vira: Card, params: &'a BotParams) -> Self {
        Self { hand, vira, params }
    }

    pub fn of(snapshot: &'a GameSnapshot, params: &'a BotParams) -> Self {
        Self::new(snapshot.hand(), snapshot.vira(), params)
    }

    pub fn trump_count(&self) -> usize {
        self.hand
            .iter()
            .filter(|card| card.is_manilha(self.vira))
            .count()
    }

    /// Cards whose relative value reaches `threshold`.
    pub fn count_at_least(&self, threshold: u8) -> usize {
        self.hand
            .iter()
            .filter(|card| card.relative_value(self.vira) >= threshold)
            .count()
    }

    pub fn strong_card_count(&self) -> usize {
        self.count_at_least(self.params.strong_card)
    }

    pub fn total_value(&self) -> u32 {
        self.hand
            .iter()
            .map(|card| u32::from(card.relative_value(self.vira)))
            .sum()
    }

    /// Each threshold opens the class above it.
    pub fn strength_class(&self) -> StrengthClass {
        let total = self.total_value();
        if total >= self.params.good_hand {
            StrengthClass::Excellent
        } else if total >= self.params.average_hand {
            StrengthClass::Good
        } else if total >= self.params.bad_hand {
            StrengthClass::Average
        } else {
            StrengthClass::Poor
        }
    }

    pub fn has_trump(&self) -> bool {
        self.trump_count() > 0
    }

    pub fn has_strong_card(&self) -> bool {
        self.strong_card_count() > 0
    }

    /// Two manilhas, or a manilha backed by a strong card.
    pub fn is_trump_heavy(&self) -> bool {
        let trumps = self.trump_count();
        trumps == 2 || (trumps >= 1 && self.strong_card_count() >= 1)
    }
}

#[cfg(test)]
mod tests {
    use super::{HandStrength, StrengthClass};
    use crate::bot::BotParams;
    use truco_core::{Card, Hand, Rank, Suit};

    fn card(raw: &str) -> Card {
        raw.parse().expect("valid card")
    }

    fn hand(raw: &[&str]) -> Hand {
        raw.iter().map(|c| card(c)).collect()
    }

    #[test]
    fn counts_trumps_and_strong_cards() {
        let params = BotParams::default();
        let cards = hand(&["3C", "4H", "5S"]);
        let strength = HandStrength::new(&cards, card("4D"), &params);
        assert_eq!(strength.trump_count(), 1);
        // 3C (35) and 5S (37) clear the strong cutoff.
        assert_eq!(strength.strong_card_count(), 2);
        assert_eq!(strength.total_value(), 35 + 2 + 37);
        assert!(strength.is_trump_heavy());
    }

    #[test]
    fn class_boundaries_belong_to_upper_class() {
        let params = BotParams {
            strong_card: 32,
            bad_hand: 10,
            average_hand: 20,
            good_hand: 30,
        };
        let vira = Card::new(Rank::Four, Suit::Diamonds);
        // 6D is tier 1 => value 4; 7D tier 2 => 8; QD tier 3 => 12.
        let cases = [
            (vec![], StrengthClass::Poor),
            (vec![Card::new(Rank::Six, Suit::Diamonds)], StrengthClass::Poor),
            (
                vec![
                    Card::new(Rank::Six, Suit::Diamonds),
                    Card::new(Rank::Six, Suit::Hearts),
                ],
                StrengthClass::Average,
            ),
            (
                vec![
                    Card::new(Rank::Seven, Suit::Diamonds),
                    Card::new(Rank::Queen, Suit::Diamonds),
                ],
                StrengthClass::Good,
            ),
            (
                vec![
                    Card::new(Rank::Six, Suit::Diamonds),
                    Card::new(Rank::Seven, Suit::Diamonds),
                    Card::new(Rank::Queen, Suit::Spades),
                ],
                StrengthClass::Good,
            ),
            (
                vec![
                    Card::new(Rank::Six, Suit::Diamonds),
                    Card::new(Rank::Queen, Suit::Diamonds),
                    Card::new(Rank::Queen, Suit::Hearts),
                ],
                StrengthClass::Excellent,
            ),
        ];
        for (cards, expected) in cases {
            let cards = Hand::with_cards(cards);
            let strength = HandStrength::new(&cards, vira, &params);
            assert_eq!(strength.strength_class(), expected, "total {}", strength.total_value());
        }
    }

    #[test]
    fn empty_hand_has_no_signals() {
        let params = BotParams::default();
        let cards = Hand::new();
        let strength = HandStrength::new(&cards, card("KH"), &params);
        assert_eq!(strength.trump_count(), 0);
        assert_eq!(strength.total_value(), 0);
        assert!(!strength.has_strong_card());
    }
}
