//! Structured domain events.
//!
//! The game records what happened as plain data; presenting it (text,
//! colours, languages) is left to whoever drains the buffer.

use crate::action::{Answer, Question};
use crate::cards::{Card, Suit};
use crate::game::Phase;
use crate::player::Seat;
use crate::scoring::HandResult;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
#[non_exhaustive]
pub enum GameEvent {
    PhaseChanged { from: Phase, to: Phase },
    BidRaised { seat: Seat, value: u32 },
    BidderDropped { seat: Seat },
    /// The auction ended; `playing` is `None` when nobody took the game.
    AuctionWon { playing: Option<Seat>, value: u32 },
    CardsPassed { from: Seat, to: Seat, cards: Vec<Card> },
    GameValueSet { seat: Seat, value: u32, raised: bool },
    QuestionAsked { seat: Seat, question: String },
    QuestionAnswered { seat: Seat, answer: String },
    TrumpDeclared { seat: Seat, suit: Suit, bonus: u32 },
    CardPlayed { seat: Seat, card: Card },
    TrickResolved { number: usize, winner: Seat, points: u32 },
    HandFinished { result: HandResult },
}

impl GameEvent {
    pub(crate) fn asked(seat: Seat, question: Question) -> Self {
        GameEvent::QuestionAsked { seat, question: question.to_string() }
    }

    pub(crate) fn answered(seat: Seat, answer: Answer) -> Self {
        GameEvent::QuestionAnswered { seat, answer: answer.to_string() }
    }
}
