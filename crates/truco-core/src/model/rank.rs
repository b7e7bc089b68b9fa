use core::fmt;

/// Card ranks of the 40-card Truco deck, declared in ascending game order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(u8)]
pub enum Rank {
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Queen = 5,
    Jack = 6,
    King = 7,
    Ace = 8,
    Two = 9,
    Three = 10,
}

impl Rank {
    pub const ORDERED: [Rank; 10] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
    ];

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Rank::Four),
            2 => Some(Rank::Five),
            3 => Some(Rank::Six),
            4 => Some(Rank::Seven),
            5 => Some(Rank::Queen),
            6 => Some(Rank::Jack),
            7 => Some(Rank::King),
            8 => Some(Rank::Ace),
            9 => Some(Rank::Two),
            10 => Some(Rank::Three),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based position in [`Rank::ORDERED`].
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// The rank that follows this one; the highest rank wraps to the lowest.
    pub const fn next(self) -> Self {
        match self {
            Rank::Three => Rank::Four,
            other => match Rank::from_value(other.value() + 1) {
                Some(rank) => rank,
                None => Rank::Four,
            },
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        let upper = symbol.to_ascii_uppercase();
        Rank::ORDERED.into_iter().find(|rank| rank.symbol() == upper)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
