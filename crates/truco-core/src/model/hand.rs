use crate::model::card::Card;
use serde::{Deserialize, Serialize};

/// Cards held by one side, kept in the order the engine dealt them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub const MAX_CARDS: usize = 3;

    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::with_cards(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn add_and_remove_cards() {
        let mut hand = Hand::new();
        let card = Card::new(Rank::Three, Suit::Clubs);
        hand.add(card);
        assert!(hand.contains(card));
        assert!(hand.remove(card));
        assert!(!hand.contains(card));
        assert!(!hand.remove(card));
    }

    #[test]
    fn keeps_dealt_order() {
        let hand: Hand = [
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Diamonds),
        ]
        .into_iter()
        .collect();
        assert_eq!(hand.first(), Some(Card::new(Rank::King, Suit::Spades)));
        assert_eq!(hand.cards()[2], Card::new(Rank::Ace, Suit::Diamonds));
    }

    #[test]
    fn serializes_as_plain_list() {
        let hand = Hand::with_cards(vec![Card::new(Rank::Two, Suit::Hearts)]);
        let json = serde_json::to_string(&hand).expect("serialize");
        assert_eq!(json, "[\"2H\"]");
    }
}
