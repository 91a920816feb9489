use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Card ranks from Six (low) to Ace (high).
///
/// Trick strength follows this order for every suit: `A Z K O U 9 8 7 6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Six = 1,
    Seven = 2,
    Eight = 3,
    Nine = 4,
    Unter = 5,
    Ober = 6,
    King = 7,
    Ten = 8,
    Ace = 9,
}

impl Rank {
    /// All ranks, strongest first (the canonical display order).
    pub const ALL: [Rank; 9] = [
        Rank::Ace,
        Rank::Ten,
        Rank::King,
        Rank::Ober,
        Rank::Unter,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
    ];

    pub const fn to_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Ten => 'Z',
            Rank::King => 'K',
            Rank::Ober => 'O',
            Rank::Unter => 'U',
            Rank::Nine => '9',
            Rank::Eight => '8',
            Rank::Seven => '7',
            Rank::Six => '6',
        }
    }

    /// Position in [`Rank::ALL`].
    pub(crate) const fn display_index(self) -> usize {
        9 - self as usize
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(Rank::Ace),
            'Z' => Ok(Rank::Ten),
            'K' => Ok(Rank::King),
            'O' => Ok(Rank::Ober),
            'U' => Ok(Rank::Unter),
            '9' => Ok(Rank::Nine),
            '8' => Ok(Rank::Eight),
            '7' => Ok(Rank::Seven),
            '6' => Ok(Rank::Six),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c),
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

/// The four suits. Declaration order is the canonical order: r < s < e < g.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Suit {
    Red,
    Bells,
    Acorns,
    Green,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Red, Suit::Bells, Suit::Acorns, Suit::Green];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Red => 'r',
            Suit::Bells => 's',
            Suit::Acorns => 'e',
            Suit::Green => 'g',
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'r' => Ok(Suit::Red),
            's' => Ok(Suit::Bells),
            'e' => Ok(Suit::Acorns),
            'g' => Ok(Suit::Green),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::try_from(c),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl From<Suit> for String {
    fn from(suit: Suit) -> Self {
        suit.to_string()
    }
}

impl TryFrom<String> for Suit {
    type Error = SuitParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A playing card: suit + rank.
///
/// Ordering is the canonical display order (suit-major, strongest rank first)
/// and says nothing about which card wins a trick.
///
/// ```
/// use marjapussi::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Suit::Red, Rank::Ace);
/// assert_eq!(card.to_string(), "r-A");
/// assert_eq!("r-A".parse::<Card>().unwrap(), card);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Position of the card in the canonical 36-card order.
    pub const fn canonical_index(self) -> usize {
        self.suit.index() * Rank::ALL.len() + self.rank.display_index()
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_index().cmp(&other.canonical_index())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit, self.rank)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, rank) =
            s.split_once('-').ok_or_else(|| CardParseError::Invalid(s.to_string()))?;
        let mut suit_chars = suit.chars();
        let suit = match (suit_chars.next(), suit_chars.next()) {
            (Some(c), None) => Suit::try_from(c)?,
            _ => return Err(CardParseError::Invalid(s.to_string())),
        };
        Ok(Card::new(suit, rank.parse()?))
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = CardParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use marjapussi::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("r-A, g-9 e-O").unwrap();
/// assert_eq!(cards[0], Card::new(Suit::Red, Rank::Ace));
/// assert_eq!(cards[1], Card::new(Suit::Green, Rank::Nine));
/// assert_eq!(cards[2], Card::new(Suit::Acorns, Rank::Ober));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

/// All 36 cards in canonical order.
pub fn all_cards() -> Vec<Card> {
    Suit::ALL.iter().flat_map(|&s| suit_cards(s)).collect()
}

/// All cards of one suit, strongest first.
pub fn suit_cards(suit: Suit) -> Vec<Card> {
    Rank::ALL.iter().map(|&r| Card::new(suit, r)).collect()
}

/// All cards of one rank in suit order.
pub fn rank_cards(rank: Rank) -> Vec<Card> {
    Suit::ALL.iter().map(|&s| Card::new(s, rank)).collect()
}

/// Canonical display ordering with duplicates removed.
pub fn sorted_cards(cards: &[Card]) -> Vec<Card> {
    let mut out = cards.to_vec();
    out.sort_unstable();
    out.dedup();
    out
}

/// King and Ober of `suit` are both in `cards`.
pub fn contains_pair(cards: &[Card], suit: Suit) -> bool {
    cards.contains(&Card::new(suit, Rank::King)) && cards.contains(&Card::new(suit, Rank::Ober))
}

/// King or Ober of `suit` is in `cards`.
pub fn contains_half(cards: &[Card], suit: Suit) -> bool {
    cards.contains(&Card::new(suit, Rank::King)) || cards.contains(&Card::new(suit, Rank::Ober))
}
