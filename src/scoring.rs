use crate::deck::DECK_SIZE;
use crate::player::{Party, Player, Seat, SEATS};
use crate::trick::TRICK_SIZE;
use serde::Serialize;

/// Tricks in one hand.
pub const TRICKS_PER_HAND: usize = DECK_SIZE / TRICK_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Nobody took the game in the auction.
    NoOnePlayed,
    Won,
    Lost,
}

/// Final evaluation of a hand, frozen once the game reaches DONE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandResult {
    pub playing_player: Option<Seat>,
    pub game_value: u32,
    /// Points per partnership: index 0 is seats 0 and 2, index 1 is seats 1 and 3.
    pub party_points: [u32; 2],
    pub outcome: Outcome,
    /// Partnership that took all nine tricks.
    pub sweep: Option<Party>,
}

impl HandResult {
    pub fn points_of(&self, party: Party) -> u32 {
        self.party_points[party.index()]
    }

    pub fn playing_party(&self) -> Option<Party> {
        self.playing_player.map(Party::of)
    }
}

/// Sum of `points_made` for both members of `party`.
pub fn party_points(players: &[Player; SEATS], party: Party) -> u32 {
    party.seats().iter().map(|&s| players[s].points_made).sum()
}

fn party_tricks(players: &[Player; SEATS], party: Party) -> usize {
    party.seats().iter().map(|&s| players[s].tricks.len()).sum()
}

/// Evaluate a finished hand.
pub fn evaluate(players: &[Player; SEATS], playing: Option<Seat>, game_value: u32) -> HandResult {
    let party_points =
        [party_points(players, Party::First), party_points(players, Party::Second)];
    let outcome = match playing {
        None => Outcome::NoOnePlayed,
        Some(seat) if party_points[Party::of(seat).index()] >= game_value => Outcome::Won,
        Some(_) => Outcome::Lost,
    };
    let sweep = [Party::First, Party::Second]
        .into_iter()
        .find(|&p| party_tricks(players, p) == TRICKS_PER_HAND);
    HandResult { playing_player: playing, game_value, party_points, outcome, sweep }
}
