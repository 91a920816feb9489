//! Read-only views of a game for agents and frontends.

use crate::action::Action;
use crate::cards::{Card, Suit};
use crate::game::{Game, Phase};
use crate::player::{Party, Seat, SEATS};
use crate::scoring::{party_points, Outcome};
use crate::trick::Trick;
use serde::Serialize;

/// Current state of a hand, including every seat's cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub hands: [Vec<Card>; SEATS],
    pub game_value: u32,
    pub trump: Option<Suit>,
    pub player_at_turn: Seat,
    pub phase: Phase,
    pub trick_number: usize,
    pub current_trick: Trick,
    pub legal_actions: Vec<Action>,
    /// `None` while nobody is playing.
    pub points_playing_party: Option<u32>,
    pub points_other_party: Option<u32>,
    /// Set once the hand is done and someone played.
    pub won: Option<bool>,
    pub no_one_plays: bool,
}

impl StateSnapshot {
    pub(crate) fn from_game(game: &Game) -> Self {
        let playing_party = game.playing_player.map(Party::of);
        let no_one_plays = game.playing_player.is_none()
            && matches!(game.phase, Phase::Trick | Phase::Ask | Phase::Answer | Phase::Done);
        let won = game.result().and_then(|r| match r.outcome {
            Outcome::Won => Some(true),
            Outcome::Lost => Some(false),
            Outcome::NoOnePlayed => None,
        });
        Self {
            hands: std::array::from_fn(|seat| game.players[seat].hand.clone()),
            game_value: game.game_value,
            trump: game.trump,
            player_at_turn: game.current,
            phase: game.phase,
            trick_number: game.trick_number(),
            current_trick: game.current_trick.clone(),
            legal_actions: game.legal_actions(),
            points_playing_party: playing_party.map(|p| party_points(&game.players, p)),
            points_other_party: playing_party.map(|p| party_points(&game.players, p.other())),
            won,
            no_one_plays,
        }
    }
}

/// Full record of a hand, suitable for replays and training data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EndInfo {
    pub original_hands: [Vec<Card>; SEATS],
    pub passed_out: Vec<Card>,
    pub passed_back: Vec<Card>,
    pub tricks: Vec<Trick>,
    pub actions: Vec<Action>,
    pub playing_player: Option<Seat>,
    pub game_value: u32,
    pub points: [u32; SEATS],
    pub declared: [Vec<Suit>; SEATS],
    pub sweep: Option<Party>,
}

impl EndInfo {
    pub(crate) fn from_game(game: &Game) -> Self {
        Self {
            original_hands: game.original_hands.clone(),
            passed_out: game.passed_out.clone(),
            passed_back: game.passed_back.clone(),
            tricks: game.tricks.clone(),
            actions: game.history().to_vec(),
            playing_player: game.playing_player,
            game_value: game.game_value,
            points: std::array::from_fn(|seat| game.players[seat].points_made),
            declared: std::array::from_fn(|seat| game.players[seat].declared.clone()),
            sweep: game.result().and_then(|r| r.sweep),
        }
    }
}
