use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Relative value of the weakest manilha; every non-manilha sits below it.
pub const MANILHA_BASE: u8 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// All 40 cards in ascending rank order, suits ascending within a rank.
    pub fn deck() -> impl Iterator<Item = Card> {
        Rank::ORDERED
            .into_iter()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
    }

    /// Rank that becomes manilha when `self` is the turned-up vira.
    pub const fn manilha_rank(self) -> Rank {
        self.rank.next()
    }

    pub fn is_manilha(self, vira: Card) -> bool {
        self.rank == vira.manilha_rank()
    }

    /// Strength of this card for the hand opened by `vira`.
    ///
    /// Manilhas map to `36..=39` ordered by suit. The other nine ranks are
    /// packed into tiers `0..=8` with the manilha rank removed, and each tier
    /// spans four values so suits never collide. The result is a strict total
    /// order over the whole deck.
    pub fn relative_value(self, vira: Card) -> u8 {
        let suit = self.suit.index() as u8;
        let manilha = vira.manilha_rank();
        if self.rank == manilha {
            return MANILHA_BASE + suit;
        }
        let mut tier = self.rank.index() as u8;
        if self.rank > manilha {
            tier -= 1;
        }
        tier * 4 + suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardParseError {
    Length(String),
    Rank(char),
    Suit(char),
}

impl fmt::Display for CardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardParseError::Length(raw) => {
                write!(f, "expected rank and suit symbols (e.g. 5S) but got {raw:?}")
            }
            CardParseError::Rank(symbol) => write!(f, "unknown rank symbol {symbol:?}"),
            CardParseError::Suit(symbol) => write!(f, "unknown suit symbol {symbol:?}"),
        }
    }
}

impl std::error::Error for CardParseError {}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut chars = raw.trim().chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardParseError::Length(raw.to_string()));
        };
        let rank = Rank::from_symbol(rank).ok_or(CardParseError::Rank(rank))?;
        let suit = Suit::from_symbol(suit).ok_or(CardParseError::Suit(suit))?;
        Ok(Card::new(rank, suit))
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = CardParseError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}
