use std::collections::HashSet;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Errors raised while ingesting cards from untrusted input.
///
/// The grouping engine never produces these; they belong to the boundary
/// where symbols are turned into `Card` values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Unrecognized rank: {0}")]
    UnrecognizedRank(String),
    #[error("Unrecognized suit: {0}")]
    UnrecognizedSuit(String),
    #[error("Malformed card: {0:?}")]
    MalformedCard(String),
    #[error("Duplicate card in hand: {0}")]
    DuplicateCard(Card),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl Suit {
    pub fn glyph(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Spades => "S",
                Suit::Hearts => "H",
                Suit::Diamonds => "D",
                Suit::Clubs => "C",
            }
        )
    }
}

impl TryFrom<&str> for Suit {
    type Error = CardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "s" | "♠" | "spades" => Ok(Suit::Spades),
            "h" | "♥" | "hearts" => Ok(Suit::Hearts),
            "d" | "♦" | "diamonds" => Ok(Suit::Diamonds),
            "c" | "♣" | "clubs" => Ok(Suit::Clubs),
            _ => Err(CardError::UnrecognizedSuit(s.to_string())),
        }
    }
}

/// Card rank. The discriminant is the position in the run order, with the
/// ace at the bottom (A, 2, 3, ... K).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace = 0,
    #[serde(rename = "2")]
    Two = 1,
    #[serde(rename = "3")]
    Three = 2,
    #[serde(rename = "4")]
    Four = 3,
    #[serde(rename = "5")]
    Five = 4,
    #[serde(rename = "6")]
    Six = 5,
    #[serde(rename = "7")]
    Seven = 6,
    #[serde(rename = "8")]
    Eight = 7,
    #[serde(rename = "9")]
    Nine = 8,
    #[serde(rename = "10")]
    Ten = 9,
    #[serde(rename = "J")]
    Jack = 10,
    #[serde(rename = "Q")]
    Queen = 11,
    #[serde(rename = "K")]
    King = 12,
}

impl Rank {
    /// Index of the ace when it sits above the king (Q-K-A).
    pub const ACE_HIGH_INDEX: u8 = 13;

    /// Position in the run order with the ace low.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Position in the run order with the ace above the king.
    pub fn high_index(self) -> u8 {
        match self {
            Rank::Ace => Self::ACE_HIGH_INDEX,
            other => other as u8,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Ace => "A",
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
            }
        )
    }
}

impl TryFrom<&str> for Rank {
    type Error = CardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            _ => Err(CardError::UnrecognizedRank(s.to_string())),
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.rank.cmp(&other.rank) {
            std::cmp::Ordering::Equal => self.suit.cmp(&other.suit),
            other => other,
        }
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parse a rank symbol followed by a single suit symbol, e.g. `10H`,
    /// `qs` or `A♠`.
    pub fn from_string(s: &str) -> Result<Self, CardError> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars
            .next_back()
            .ok_or_else(|| CardError::MalformedCard(s.to_string()))?;
        let rank_part = chars.as_str();
        if rank_part.is_empty() {
            return Err(CardError::MalformedCard(s.to_string()));
        }

        let rank = Rank::try_from(rank_part)?;
        let mut buf = [0; 4];
        let suit = Suit::try_from(&*suit_char.encode_utf8(&mut buf))?;

        Ok(Self::new(rank, suit))
    }

    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::new();
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parse a whitespace or comma separated list of cards, keeping input order.
pub fn parse_hand(s: &str) -> Result<Vec<Card>, CardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(Card::from_string)
        .collect()
}

/// Reject hands that could not come from a single 52-card deck.
pub fn validate_hand(cards: &[Card]) -> Result<(), CardError> {
    let mut seen = HashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(*card) {
            return Err(CardError::DuplicateCard(*card));
        }
    }
    Ok(())
}
