//! Actions and their `<seat>,<TAG>,<payload>` encoding.

use crate::cards::{Card, CardParseError, Suit, SuitParseError};
use crate::game::Phase;
use crate::player::{Seat, SEATS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trump question from the player at turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    /// `my<suit>`: announce an own pair, declaring trump directly.
    MyPair(Suit),
    /// `you`: ask the partner for any pair.
    YourPair,
    /// `our<suit>`: ask the partner for a half of `suit`.
    OurHalf(Suit),
}

/// The partner's reply to a [`Question`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    /// `my<suit>`: partner holds this pair and declares it.
    MyPair(Suit),
    /// `no-pair`
    NoPair,
    /// `our<suit>`: partner holds a half of `suit`.
    OurHalf(Suit),
    /// `not<suit>`
    NoHalf(Suit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ActionKind {
    /// Auction bid; 0 drops out.
    Bid(u32),
    /// Partner hands a card to the playing player.
    PassOut(Card),
    /// Playing player hands a card back.
    PassBack(Card),
    /// Final game value; 0 keeps the current one.
    Promote(u32),
    Ask(Question),
    Answer(Answer),
    Play(Card),
}

impl ActionKind {
    /// Phase tag used in the string encoding.
    pub fn tag(&self) -> Phase {
        match self {
            ActionKind::Bid(_) => Phase::Auction,
            ActionKind::PassOut(_) => Phase::ExchangeOut,
            ActionKind::PassBack(_) => Phase::ExchangeBack,
            ActionKind::Promote(_) => Phase::Promote,
            ActionKind::Ask(_) => Phase::Ask,
            ActionKind::Answer(_) => Phase::Answer,
            ActionKind::Play(_) => Phase::Trick,
        }
    }
}

/// One player action.
///
/// ```
/// use marjapussi::action::{Action, ActionKind};
///
/// let a: Action = "0,AUCTION,120".parse().unwrap();
/// assert_eq!(a, Action::new(0, ActionKind::Bid(120)));
/// assert_eq!(a.to_string(), "0,AUCTION,120");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Action {
    pub seat: Seat,
    pub kind: ActionKind,
}

impl Action {
    pub const fn new(seat: Seat, kind: ActionKind) -> Self {
        Self { seat, kind }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Question::MyPair(s) => write!(f, "my{s}"),
            Question::YourPair => write!(f, "you"),
            Question::OurHalf(s) => write!(f, "our{s}"),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::MyPair(s) => write!(f, "my{s}"),
            Answer::NoPair => write!(f, "no-pair"),
            Answer::OurHalf(s) => write!(f, "our{s}"),
            Answer::NoHalf(s) => write!(f, "not{s}"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},", self.seat, self.kind.tag())?;
        match self.kind {
            ActionKind::Bid(v) | ActionKind::Promote(v) => write!(f, "{v}"),
            ActionKind::PassOut(c) | ActionKind::PassBack(c) | ActionKind::Play(c) => {
                write!(f, "{c}")
            }
            ActionKind::Ask(q) => write!(f, "{q}"),
            ActionKind::Answer(a) => write!(f, "{a}"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionParseError {
    #[error("expected '<seat>,<phase>,<payload>', got '{0}'")]
    Shape(String),
    #[error("invalid seat: '{0}'")]
    Seat(String),
    #[error("unknown phase tag: '{0}'")]
    Phase(String),
    #[error("no action belongs to phase {0}")]
    NoActionPhase(Phase),
    #[error("invalid value: '{0}'")]
    Value(String),
    #[error("invalid question or answer: '{0}'")]
    Token(String),
    #[error(transparent)]
    Card(#[from] CardParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Question {
    type Err = ActionParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "you" {
            return Ok(Question::YourPair);
        }
        if let Some(suit) = s.strip_prefix("my") {
            return Ok(Question::MyPair(suit.parse()?));
        }
        if let Some(suit) = s.strip_prefix("our") {
            return Ok(Question::OurHalf(suit.parse()?));
        }
        Err(ActionParseError::Token(s.to_string()))
    }
}

impl FromStr for Answer {
    type Err = ActionParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "no-pair" {
            return Ok(Answer::NoPair);
        }
        if let Some(suit) = s.strip_prefix("my") {
            return Ok(Answer::MyPair(suit.parse()?));
        }
        if let Some(suit) = s.strip_prefix("our") {
            return Ok(Answer::OurHalf(suit.parse()?));
        }
        if let Some(suit) = s.strip_prefix("not") {
            return Ok(Answer::NoHalf(suit.parse()?));
        }
        Err(ActionParseError::Token(s.to_string()))
    }
}

/// Plain decimal without sign or leading zeros, as [`Action`]'s `Display` writes it.
fn parse_canonical(s: &str) -> Option<u32> {
    let digits_only = !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || (s.len() > 1 && s.starts_with('0')) {
        return None;
    }
    s.parse().ok()
}

fn parse_value(s: &str) -> Result<u32, ActionParseError> {
    parse_canonical(s).ok_or_else(|| ActionParseError::Value(s.to_string()))
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ',');
        let (Some(seat), Some(tag), Some(payload)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ActionParseError::Shape(s.to_string()));
        };
        let seat = match parse_canonical(seat) {
            Some(n) if (n as usize) < SEATS => n as Seat,
            _ => return Err(ActionParseError::Seat(seat.to_string())),
        };
        let phase: Phase = tag.parse().map_err(|_| ActionParseError::Phase(tag.to_string()))?;
        let kind = match phase {
            Phase::Auction => ActionKind::Bid(parse_value(payload)?),
            Phase::ExchangeOut => ActionKind::PassOut(payload.parse()?),
            Phase::ExchangeBack => ActionKind::PassBack(payload.parse()?),
            Phase::Promote => ActionKind::Promote(parse_value(payload)?),
            Phase::Ask => ActionKind::Ask(payload.parse()?),
            Phase::Answer => ActionKind::Answer(payload.parse()?),
            Phase::Trick => ActionKind::Play(payload.parse()?),
            Phase::Done => return Err(ActionParseError::NoActionPhase(Phase::Done)),
        };
        Ok(Action::new(seat, kind))
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.to_string()
    }
}

impl TryFrom<String> for Action {
    type Error = ActionParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
