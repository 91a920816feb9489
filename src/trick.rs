use crate::cards::{Card, Suit};
use crate::player::Seat;
use crate::ranking::highest_card;
use serde::Serialize;

/// Cards per trick, one from each seat.
pub const TRICK_SIZE: usize = 4;

/// One trick: the (seat, card) plays in the order they were made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Trick {
    plays: Vec<(Seat, Card)>,
}

impl Trick {
    pub fn new() -> Self {
        Self { plays: Vec::with_capacity(TRICK_SIZE) }
    }

    pub fn plays(&self) -> &[(Seat, Card)] {
        &self.plays
    }

    /// Cards in play order.
    pub fn cards(&self) -> Vec<Card> {
        self.plays.iter().map(|&(_, c)| c).collect()
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == TRICK_SIZE
    }

    pub fn leader(&self) -> Option<Seat> {
        self.plays.first().map(|&(s, _)| s)
    }

    pub fn led_suit(&self) -> Option<Suit> {
        self.plays.first().map(|&(_, c)| c.suit())
    }

    pub(crate) fn push(&mut self, seat: Seat, card: Card) {
        debug_assert!(!self.is_complete(), "trick already holds {TRICK_SIZE} cards");
        self.plays.push((seat, card));
    }

    /// Seat holding the currently winning card.
    pub fn winner(&self, trump: Option<Suit>) -> Option<Seat> {
        let best = highest_card(&self.cards(), trump)?;
        self.plays.iter().find(|&&(_, c)| c == best).map(|&(s, _)| s)
    }
}
