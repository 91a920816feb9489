mod common;

use common::{act_all, mk_game, seat0_wins_auction};
use marjapussi::game::{Game, Phase};
use marjapussi::rules::Ruleset;

#[test]
fn state_dict_tracks_exchange() {
    let mut g = mk_game();
    seat0_wins_auction(&mut g);
    act_all(&mut g, &["2,EXCHANGE_OUT,e-A", "2,EXCHANGE_OUT,e-6"]);
    let s = g.state_dict();
    assert_eq!(s.phase, Phase::ExchangeOut);
    assert_eq!(s.player_at_turn, 2);
    assert_eq!(s.hands[2].len(), 7);
    assert_eq!(s.points_playing_party, Some(0));
    assert_eq!(s.won, None);
    assert!(!s.no_one_plays);
}

#[test]
fn snapshots_serialize_for_frontends() {
    let mut g = Game::with_seed(Ruleset::default(), 5).unwrap();
    common::random_playout(&mut g, 5);
    let state = serde_json::to_value(g.state_dict()).unwrap();
    assert_eq!(state["phase"], "DONE");
    assert_eq!(state["legal_actions"].as_array().map(Vec::len), Some(0));

    let end = serde_json::to_value(g.end_info()).unwrap();
    assert_eq!(end["tricks"].as_array().map(Vec::len), Some(9));
    assert_eq!(end["original_hands"][0].as_array().map(Vec::len), Some(9));
    assert!(end["actions"][0].as_str().is_some_and(|a| a.starts_with("0,AUCTION,")));

    let events = serde_json::to_value(g.drain_events()).unwrap();
    let last = events.as_array().and_then(|e| e.last()).unwrap();
    assert_eq!(last["event"], "hand_finished");
}
