use crate::cards::{Card, Suit};
use crate::rules::PointTable;
use crate::trick::Trick;
use serde::Serialize;

/// Seat index, 0..=3.
pub type Seat = usize;

/// Number of seats at the table.
pub const SEATS: usize = 4;

/// Partner sits opposite.
pub const fn partner_of(seat: Seat) -> Seat {
    (seat + 2) % SEATS
}

/// Next seat clockwise.
pub const fn next_of(seat: Seat) -> Seat {
    (seat + 1) % SEATS
}

/// How far a player has escalated trump questions this hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AskLevel {
    /// May still announce an own pair.
    #[default]
    Own,
    /// Has asked the partner for a pair.
    Partner,
    /// Has asked the partner for a half.
    Half,
}

/// The two partnerships: seats 0 and 2, seats 1 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    First,
    Second,
}

impl Party {
    pub const fn of(seat: Seat) -> Self {
        if seat % 2 == 0 {
            Party::First
        } else {
            Party::Second
        }
    }

    pub const fn seats(self) -> [Seat; 2] {
        match self {
            Party::First => [0, 2],
            Party::Second => [1, 3],
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Party::First => Party::Second,
            Party::Second => Party::First,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Party::First => 0,
            Party::Second => 1,
        }
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) seat: Seat,
    pub(crate) hand: Vec<Card>,
    pub(crate) still_bidding: bool,
    pub(crate) bid: u32,
    pub(crate) tricks: Vec<Trick>,
    pub(crate) points_made: u32,
    pub(crate) declared: Vec<Suit>,
    pub(crate) asking: AskLevel,
}

impl Player {
    pub(crate) fn new(seat: Seat, mut hand: Vec<Card>) -> Self {
        hand.sort_unstable();
        Self {
            seat,
            hand,
            still_bidding: true,
            bid: 0,
            tricks: Vec::new(),
            points_made: 0,
            declared: Vec::new(),
            asking: AskLevel::Own,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn partner(&self) -> Seat {
        partner_of(self.seat)
    }

    pub fn next_player(&self) -> Seat {
        next_of(self.seat)
    }

    /// Cards held, in canonical order.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Still taking part in the auction
    pub fn still_bidding(&self) -> bool {
        self.still_bidding
    }

    /// Highest value this player has bid (0 if never raised)
    pub fn bid(&self) -> u32 {
        self.bid
    }

    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    pub fn points_made(&self) -> u32 {
        self.points_made
    }

    /// Trump suits this player has declared, in order.
    pub fn declared(&self) -> &[Suit] {
        &self.declared
    }

    pub fn asking(&self) -> AskLevel {
        self.asking
    }

    pub(crate) fn receive_card(&mut self, card: Card) {
        if let Err(pos) = self.hand.binary_search(&card) {
            self.hand.insert(pos, card);
        }
    }

    /// Panics if the card is not held: callers only remove cards that were
    /// offered as legal.
    pub(crate) fn remove_card(&mut self, card: Card) {
        match self.hand.binary_search(&card) {
            Ok(pos) => {
                self.hand.remove(pos);
            }
            Err(_) => panic!("seat {} does not hold {card}", self.seat),
        }
    }

    pub(crate) fn win_trick(&mut self, trick: Trick, is_last: bool, points: &PointTable) {
        let card_points: u32 = trick.plays().iter().map(|&(_, c)| points.card(c)).sum();
        self.points_made += card_points + if is_last { points.last_trick } else { 0 };
        self.tricks.push(trick);
    }

    /// Records a trump declaration and books its bonus. Returns false if this
    /// player had already declared `suit`.
    pub(crate) fn declare_trump_suit(&mut self, suit: Suit, points: &PointTable) -> bool {
        if self.declared.contains(&suit) {
            return false;
        }
        self.declared.push(suit);
        self.points_made += points.suit(suit);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn player(seat: Seat, cards: &str) -> Player {
        Player::new(seat, parse_cards(cards).expect("valid cards"))
    }

    #[test]
    fn seat_relations_form_cycles() {
        for seat in 0..SEATS {
            assert_eq!(partner_of(partner_of(seat)), seat);
            assert_ne!(partner_of(seat), seat);
        }
        let mut s = 0;
        for _ in 0..SEATS {
            s = next_of(s);
        }
        assert_eq!(s, 0);
        assert_eq!(player(3, "").partner(), 1);
        assert_eq!(player(3, "").next_player(), 0);
    }

    #[test]
    fn parties_group_opposite_seats() {
        assert_eq!(Party::of(0), Party::of(2));
        assert_eq!(Party::of(1), Party::of(3));
        assert_ne!(Party::of(0), Party::of(1));
        assert_eq!(Party::First.seats(), [0, 2]);
        assert_eq!(Party::First.other(), Party::Second);
    }

    #[test]
    fn hand_mutation_keeps_canonical_order() {
        let mut p = player(0, "g-6 r-A");
        p.receive_card("e-K".parse().unwrap());
        p.receive_card("r-A".parse().unwrap());
        assert_eq!(p.hand(), parse_cards("r-A e-K g-6").unwrap().as_slice());
        p.remove_card("r-A".parse().unwrap());
        assert_eq!(p.hand(), parse_cards("e-K g-6").unwrap().as_slice());
    }

    #[test]
    #[should_panic(expected = "does not hold")]
    fn removing_unheld_card_panics() {
        let mut p = player(1, "g-6");
        p.remove_card("r-A".parse().unwrap());
    }

    #[test]
    fn win_trick_counts_card_points_and_last_bonus() {
        let points = PointTable::default();
        let mut p = player(0, "");
        let mut t = Trick::new();
        for (seat, c) in [(0, "r-A"), (1, "r-Z"), (2, "r-K"), (3, "r-6")] {
            t.push(seat, c.parse().unwrap());
        }
        p.win_trick(t.clone(), false, &points);
        assert_eq!(p.points_made(), 25);
        p.win_trick(t, true, &points);
        assert_eq!(p.points_made(), 25 + 25 + 20);
        assert_eq!(p.tricks().len(), 2);
    }

    #[test]
    fn declaring_twice_awards_once() {
        let points = PointTable::default();
        let mut p = player(2, "");
        assert!(p.declare_trump_suit(Suit::Acorns, &points));
        assert!(!p.declare_trump_suit(Suit::Acorns, &points));
        assert!(p.declare_trump_suit(Suit::Green, &points));
        assert_eq!(p.points_made(), 100);
        assert_eq!(p.declared(), &[Suit::Acorns, Suit::Green]);
    }
}
