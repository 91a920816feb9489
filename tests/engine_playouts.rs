mod common;

use common::random_playout;
use marjapussi::engine::RulesEngine;
use marjapussi::game::{Game, Phase};
use marjapussi::rules::Ruleset;
use marjapussi::scoring::Outcome;

fn play<E: RulesEngine>(engine: &mut E, seed: u64) -> usize {
    random_playout(engine, seed)
}

#[test]
fn random_playouts_reach_done_through_the_trait() {
    common::init_logging();
    for seed in 0..25 {
        let mut g = Game::with_seed(Ruleset::default(), seed).unwrap();
        let steps = play(&mut g, seed ^ 0x5eed);
        assert!(g.is_finished());
        assert_eq!(g.state().phase, Phase::Done);
        assert_eq!(g.history().len(), steps);

        let result = g.result().unwrap();
        match result.playing_player {
            None => assert_eq!(result.outcome, Outcome::NoOnePlayed),
            Some(seat) => {
                let won = result.points_of(marjapussi::player::Party::of(seat)) >= result.game_value;
                assert_eq!(result.outcome == Outcome::Won, won);
            }
        }
    }
}

#[test]
fn replaying_history_reproduces_the_hand() {
    let mut g = Game::with_seed(Ruleset::default(), 99).unwrap();
    play(&mut g, 7);

    let mut replay = Game::from_hands(Ruleset::default(), g.original_hands().clone()).unwrap();
    for action in g.history() {
        replay.act_action(action).unwrap();
    }
    assert_eq!(replay.end_info(), g.end_info());
    assert_eq!(replay.result(), g.result());
}

#[test]
fn history_round_trips_through_strings() {
    let mut g = Game::with_seed(Ruleset::default(), 3).unwrap();
    play(&mut g, 11);
    let encoded: Vec<String> = g.history().iter().map(ToString::to_string).collect();

    let mut replay = Game::with_seed(Ruleset::default(), 3).unwrap();
    for a in &encoded {
        replay.act_action_str(a).unwrap();
    }
    assert_eq!(replay.state_dict(), g.state_dict());
}

#[test]
fn same_seed_same_deal() {
    let a = Game::with_seed(Ruleset::default(), 1234).unwrap();
    let b = Game::with_seed(Ruleset::default(), 1234).unwrap();
    let c = Game::with_seed(Ruleset::default(), 1235).unwrap();
    assert_eq!(a.original_hands(), b.original_hands());
    assert_ne!(a.original_hands(), c.original_hands());
    assert!(Game::new(Ruleset::default()).is_ok());
}
