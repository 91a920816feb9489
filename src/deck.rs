use crate::cards::{all_cards, sorted_cards, Card};
use crate::player::SEATS;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 9;

/// Total number of cards in the game.
pub const DECK_SIZE: usize = SEATS * HAND_SIZE;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("seat {seat} holds {got} cards, expected {HAND_SIZE}")]
    HandSize { seat: usize, got: usize },
    #[error("card {0} dealt more than once")]
    Duplicate(Card),
}

/// The 36-card Marjapussi deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use marjapussi::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 36);
    /// ```
    pub fn standard() -> Self {
        Self { cards: all_cards() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal the whole deck round-robin starting at seat 0.
    ///
    /// Each hand comes back in canonical order.
    pub fn deal(mut self) -> [Vec<Card>; SEATS] {
        let mut hands: [Vec<Card>; SEATS] = Default::default();
        let mut seat = 0;
        while let Some(card) = self.draw() {
            hands[seat].push(card);
            seat = (seat + 1) % SEATS;
        }
        hands.map(|h| sorted_cards(&h))
    }
}

/// Check that `hands` is a full deal: 9 cards per seat, no card twice.
pub fn validate_deal(hands: &[Vec<Card>; SEATS]) -> Result<(), DealError> {
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for (seat, hand) in hands.iter().enumerate() {
        if hand.len() != HAND_SIZE {
            return Err(DealError::HandSize { seat, got: hand.len() });
        }
        for &card in hand {
            if !seen.insert(card) {
                return Err(DealError::Duplicate(card));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_36_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), DECK_SIZE);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn deal_partitions_the_deck() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let hands = d.deal();
        assert!(hands.iter().all(|h| h.len() == HAND_SIZE));
        assert_eq!(validate_deal(&hands), Ok(()));
        let mut all: Vec<Card> = hands.concat();
        all.sort_unstable();
        assert_eq!(all, all_cards());
    }

    #[test]
    fn validate_rejects_short_hand_and_duplicates() {
        let mut hands = Deck::standard().deal();
        let moved = hands[1].pop().expect("non-empty hand");
        assert_eq!(validate_deal(&hands), Err(DealError::HandSize { seat: 1, got: 8 }));
        let dup = hands[0][0];
        hands[1].push(dup);
        assert_eq!(validate_deal(&hands), Err(DealError::Duplicate(dup)));
        assert_ne!(moved, dup);
    }
}
