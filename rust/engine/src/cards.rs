use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;
use crate::normalize::is_variation_selector;

/// One of the four suits a hand line can mention.
/// Declared in report order: spades first, hearts last.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Hearts suit (♥)
    Hearts,
}

impl Suit {
    /// The glyph used both to recognise the suit in input and to print it.
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
        }
    }

    pub fn from_symbol(c: char) -> Option<Suit> {
        match c {
            '♠' => Some(Suit::Spades),
            '♦' => Some(Suit::Diamonds),
            '♣' => Some(Suit::Clubs),
            '♥' => Some(Suit::Hearts),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10, always written as the two digits `10`
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Text written before the suit glyph.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Single-character ranks. `10` is the only two-character label and is
    /// handled by the callers that scan text.
    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts]
}

pub fn all_ranks() -> [Rank; 13] {
    [
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
        Rank::Ace,
    ]
}

/// Which ranks count as cards when scanning a payload.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankUniverse {
    /// Six through Ace: 9 ranks, 36 cards.
    #[default]
    Restricted,
    /// Two through Ace: 13 ranks, 52 cards.
    Full,
}

impl RankUniverse {
    pub fn contains(self, rank: Rank) -> bool {
        match self {
            RankUniverse::Restricted => rank >= Rank::Six,
            RankUniverse::Full => true,
        }
    }

    /// Ranks of this universe, lowest first.
    pub fn ranks(self) -> Vec<Rank> {
        all_ranks()
            .into_iter()
            .filter(|&r| self.contains(r))
            .collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RankUniverse::Restricted => "restricted",
            RankUniverse::Full => "full",
        }
    }
}

impl fmt::Display for RankUniverse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankUniverse {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restricted" | "6a" | "short" => Ok(RankUniverse::Restricted),
            "full" | "2a" => Ok(RankUniverse::Full),
            other => Err(ParseError::UnknownUniverse(other.to_string())),
        }
    }
}

/// A rank and suit pair, the unit the report groups by.
///
/// Cards compare in report order: by suit (spades, diamonds, clubs, hearts),
/// then from Ace down to Two inside a suit. Both order tables are slices of
/// this order, so comparing two cards never depends on the active universe.
///
/// ```rust
/// use handsort_engine::cards::{Card, Rank, Suit};
///
/// let card: Card = "10♠\u{FE0F}".parse().unwrap();
/// assert_eq!(card, Card { rank: Rank::Ten, suit: Suit::Spades });
/// assert_eq!(card.to_string(), "10♠");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.suit
            .cmp(&other.suit)
            .then_with(|| other.rank.cmp(&self.rank))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let (rank, rest) = if let Some(rest) = s.strip_prefix("10") {
            (Rank::Ten, rest)
        } else {
            let mut chars = s.chars();
            let Some(c) = chars.next() else {
                return Err(ParseError::Empty);
            };
            let rank = Rank::from_char(c).ok_or_else(|| ParseError::UnknownRank(c.to_string()))?;
            (rank, chars.as_str())
        };
        let mut chars = rest.chars();
        let suit = match chars.next() {
            Some(c) => Suit::from_symbol(c).ok_or(ParseError::UnknownSuit(c))?,
            None => return Err(ParseError::MissingSuit),
        };
        let trailing: String = chars.filter(|&c| !is_variation_selector(c)).collect();
        if !trailing.is_empty() {
            return Err(ParseError::TrailingInput(trailing));
        }
        Ok(Card { rank, suit })
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
