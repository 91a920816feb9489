//! Trick legality and card ranking.
//!
//! Everything here is a pure function over card slices; the game feeds in
//! the current trick (in play order) and the hand of the player at turn.

use crate::cards::{Card, Rank, Suit};

/// Allowed leads for the very first trick of a hand.
///
/// An ace of any suit must be led if one is held, otherwise any Green card,
/// otherwise anything.
pub fn legal_first_lead(hand: &[Card]) -> Vec<Card> {
    let aces: Vec<Card> = hand.iter().copied().filter(|c| c.rank() == Rank::Ace).collect();
    if !aces.is_empty() {
        return aces;
    }
    let greens: Vec<Card> = hand.iter().copied().filter(|c| c.suit() == Suit::Green).collect();
    if !greens.is_empty() {
        return greens;
    }
    hand.to_vec()
}

/// Cards from `hand` that may be played onto `trick`.
///
/// Follow the led suit, else play trump; within that subset a card that
/// would take the lead over the trick so far is mandatory when one exists.
/// On the first trick holding the led suit's ace forces it.
pub fn legal_follow(
    trick: &[Card],
    hand: &[Card],
    trump: Option<Suit>,
    is_first_trick: bool,
) -> Vec<Card> {
    let Some(lead) = trick.first() else {
        return if is_first_trick { legal_first_lead(hand) } else { hand.to_vec() };
    };
    let led = lead.suit();

    if is_first_trick {
        let ace = Card::new(led, Rank::Ace);
        if hand.contains(&ace) {
            return vec![ace];
        }
    }

    let mut allowed: Vec<Card> = hand.iter().copied().filter(|c| c.suit() == led).collect();
    if allowed.is_empty() {
        if let Some(t) = trump {
            allowed = hand.iter().copied().filter(|c| c.suit() == t).collect();
        }
    }
    if allowed.is_empty() {
        return hand.to_vec();
    }

    let winning: Vec<Card> =
        allowed.iter().copied().filter(|&c| would_take_lead(trick, c, trump)).collect();
    if winning.is_empty() {
        allowed
    } else {
        winning
    }
}

/// The card currently winning `trick`, or `None` for an empty trick.
///
/// The highest trump wins if any trump is present; otherwise the highest
/// card of the led suit.
pub fn highest_card(trick: &[Card], trump: Option<Suit>) -> Option<Card> {
    let led = trick.first()?.suit();
    if let Some(t) = trump {
        let best_trump = trick.iter().copied().filter(|c| c.suit() == t).max_by_key(|c| c.rank());
        if best_trump.is_some() {
            return best_trump;
        }
    }
    trick.iter().copied().filter(|c| c.suit() == led).max_by_key(|c| c.rank())
}

/// Whether `card` beats `best` given the led suit and trump.
pub fn beats(card: Card, best: Card, led: Suit, trump: Option<Suit>) -> bool {
    let is_trump = |c: Card| Some(c.suit()) == trump;
    match (is_trump(card), is_trump(best)) {
        (true, false) => true,
        (false, true) => false,
        (true, true) => card.rank() > best.rank(),
        (false, false) => {
            if best.suit() != led {
                card.suit() == led
            } else {
                card.suit() == led && card.rank() > best.rank()
            }
        }
    }
}

fn would_take_lead(trick: &[Card], card: Card, trump: Option<Suit>) -> bool {
    match (trick.first(), highest_card(trick, trump)) {
        (Some(lead), Some(best)) => beats(card, best, lead.suit(), trump),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).expect("valid cards")
    }

    fn card(s: &str) -> Card {
        s.parse().expect("valid card")
    }

    #[test]
    fn first_lead_prefers_aces() {
        let hand = cards("r-A r-K s-9 g-A g-7");
        assert_eq!(legal_first_lead(&hand), cards("r-A g-A"));
    }

    #[test]
    fn first_lead_falls_back_to_green() {
        let hand = cards("r-K s-9 g-Z g-7");
        assert_eq!(legal_first_lead(&hand), cards("g-Z g-7"));
    }

    #[test]
    fn first_lead_without_ace_or_green_allows_whole_hand() {
        let hand = cards("r-K r-O s-9 e-Z e-U e-6");
        assert_eq!(legal_first_lead(&hand), hand);
    }

    #[test]
    fn empty_trick_outside_first_trick_allows_whole_hand() {
        let hand = cards("r-A g-7 s-6");
        assert_eq!(legal_follow(&[], &hand, None, false), hand);
        assert_eq!(legal_follow(&[], &hand, None, true), cards("r-A"));
    }

    #[test]
    fn first_trick_ace_capture_is_forced() {
        let trick = cards("s-K");
        let hand = cards("s-A s-Z s-7 r-A");
        assert_eq!(legal_follow(&trick, &hand, None, true), cards("s-A"));
        // later tricks fall back to the must-beat rule
        assert_eq!(legal_follow(&trick, &hand, None, false), cards("s-A s-Z"));
    }

    #[test]
    fn must_beat_when_possible() {
        let trick = cards("e-O");
        let hand = cards("e-K e-9 e-6 g-A");
        assert_eq!(legal_follow(&trick, &hand, None, false), cards("e-K"));
    }

    #[test]
    fn follow_suit_without_beating() {
        let trick = cards("e-A");
        let hand = cards("e-K e-9 g-A");
        assert_eq!(legal_follow(&trick, &hand, None, false), cards("e-K e-9"));
    }

    #[test]
    fn void_in_suit_must_trump() {
        let trick = cards("e-A e-Z");
        let hand = cards("r-9 r-7 g-A");
        let legal = legal_follow(&trick, &hand, Some(Suit::Red), false);
        assert_eq!(legal, cards("r-9 r-7"));
    }

    #[test]
    fn overtrump_required_when_possible() {
        // led acorns, already trumped by r-9
        let trick = cards("e-A r-9");
        let hand = cards("r-Z r-7 g-A");
        assert_eq!(legal_follow(&trick, &hand, Some(Suit::Red), false), cards("r-Z"));
    }

    #[test]
    fn void_in_suit_and_trump_allows_whole_hand() {
        let trick = cards("e-A");
        let hand = cards("s-9 g-A g-7");
        assert_eq!(legal_follow(&trick, &hand, Some(Suit::Red), false), hand);
        assert_eq!(legal_follow(&trick, &hand, None, false), hand);
    }

    #[test]
    fn following_suit_cannot_beat_a_trumped_trick() {
        let trick = cards("e-9 r-6");
        let hand = cards("e-A e-7");
        assert_eq!(legal_follow(&trick, &hand, Some(Suit::Red), false), cards("e-A e-7"));
    }

    #[test]
    fn highest_card_of_led_suit_without_trump() {
        let trick = cards("s-O s-A g-A s-K");
        assert_eq!(highest_card(&trick, None), Some(card("s-A")));
    }

    #[test]
    fn highest_card_trump_overrides_led_suit() {
        let trick = cards("s-A g-6 s-Z g-9");
        assert_eq!(highest_card(&trick, Some(Suit::Green)), Some(card("g-9")));
    }

    #[test]
    fn highest_card_ignores_unrelated_suits() {
        let trick = cards("s-6 r-A e-A");
        assert_eq!(highest_card(&trick, Some(Suit::Green)), Some(card("s-6")));
        assert_eq!(highest_card(&[], None), None);
    }

    #[test]
    fn ten_outranks_king() {
        let trick = cards("r-K r-Z");
        assert_eq!(highest_card(&trick, None), Some(card("r-Z")));
    }
}
