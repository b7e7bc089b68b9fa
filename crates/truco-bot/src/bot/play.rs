use truco_core::{Card, Hand};

/// Card picks by relative value. Ties keep the card that appears first in the
/// hand.
#[derive(Debug, Clone, Copy)]
pub struct PlayPlanner<'a> {
    cards: &'a [Card],
    vira: Card,
}

impl<'a> PlayPlanner<'a> {
    pub fn new(hand: &'a Hand, vira: Card) -> Self {
        Self {
            cards: hand.cards(),
            vira,
        }
    }

    pub fn weakest(&self) -> Option<Card> {
        self.pick(|_| true, |candidate, best| candidate < best)
    }

    pub fn strongest(&self) -> Option<Card> {
        self.pick(|_| true, |candidate, best| candidate > best)
    }

    /// Weakest card whose relative value exceeds `target`.
    pub fn weakest_beating(&self, target: Card) -> Option<Card> {
        let floor = target.relative_value(self.vira);
        self.pick(
            |card| card.relative_value(self.vira) > floor,
            |candidate, best| candidate < best,
        )
    }

    pub fn beats(&self, card: Card, target: Card) -> bool {
        card.relative_value(self.vira) > target.relative_value(self.vira)
    }

    fn pick<E, F>(&self, eligible: E, replaces: F) -> Option<Card>
    where
        E: Fn(Card) -> bool,
        F: Fn(u8, u8) -> bool,
    {
        self.pick_index(eligible, replaces).map(|index| self.cards[index])
    }

    /// Position of the best eligible card; a candidate only displaces the
    /// current best when `replaces` holds strictly.
    fn pick_index<E, F>(&self, eligible: E, replaces: F) -> Option<usize>
    where
        E: Fn(Card) -> bool,
        F: Fn(u8, u8) -> bool,
    {
        let mut best: Option<(usize, u8)> = None;
        for (index, &card) in self.cards.iter().enumerate() {
            if !eligible(card) {
                continue;
            }
            let value = card.relative_value(self.vira);
            match best {
                Some((_, best_value)) if !replaces(value, best_value) => {}
                _ => best = Some((index, value)),
            }
        }
        best.map(|(index, _)| index)
    }
}
