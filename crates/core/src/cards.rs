use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.symbol() == symbol)
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Single-character form; ten is `0`.
    pub fn symbol(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => '0',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.symbol() == symbol)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JokerColor {
    Black,
    Red,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum CardCode {
    Standard { rank: Rank, suit: Suit },
    Joker(JokerColor),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("invalid card code {0:?}")]
    Invalid(String),
}

impl CardCode {
    pub const JOKERS: [CardCode; 2] = [
        CardCode::Joker(JokerColor::Black),
        CardCode::Joker(JokerColor::Red),
    ];

    pub const fn standard(rank: Rank, suit: Suit) -> Self {
        CardCode::Standard { rank, suit }
    }

    /// All 52 standard codes, rank-major: `AS, AC, AH, AD, 2S, ...`.
    pub fn standard_set() -> impl Iterator<Item = CardCode> {
        Rank::ALL.into_iter().flat_map(|rank| {
            Suit::ALL
                .into_iter()
                .map(move |suit| CardCode::standard(rank, suit))
        })
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, CardCode::Joker(_))
    }

    pub fn is_red(&self) -> bool {
        match self {
            CardCode::Standard { suit, .. } => suit.is_red(),
            CardCode::Joker(color) => *color == JokerColor::Red,
        }
    }

    pub fn is_black(&self) -> bool {
        !self.is_red()
    }
}

impl fmt::Display for CardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardCode::Standard { rank, suit } => write!(f, "{}{}", rank.symbol(), suit.symbol()),
            CardCode::Joker(JokerColor::Black) => f.write_str("ZB"),
            CardCode::Joker(JokerColor::Red) => f.write_str("ZR"),
        }
    }
}

impl FromStr for CardCode {
    type Err = CodeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || CodeError::Invalid(raw.to_string());
        match raw {
            "ZB" => return Ok(CardCode::Joker(JokerColor::Black)),
            "ZR" => return Ok(CardCode::Joker(JokerColor::Red)),
            _ => {}
        }
        let chars: Vec<char> = raw.chars().collect();
        let (rank, suit) = match chars.as_slice() {
            [rank, suit] => (*rank, *suit),
            ['1', '0', suit] => ('0', *suit),
            _ => return Err(invalid()),
        };
        let rank = Rank::from_symbol(rank).ok_or_else(invalid)?;
        let suit = Suit::from_symbol(suit).ok_or_else(invalid)?;
        Ok(CardCode::standard(rank, suit))
    }
}

impl TryFrom<String> for CardCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CardCode> for String {
    fn from(code: CardCode) -> Self {
        code.to_string()
    }
}
