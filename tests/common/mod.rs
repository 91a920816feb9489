#![allow(dead_code)]

use marjapussi::cards::{suit_cards, Card, Suit};
use marjapussi::engine::RulesEngine;
use marjapussi::game::Game;
use marjapussi::rules::Ruleset;
use once_cell::sync::OnceCell;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level: `TEST_LOG`, then `RUST_LOG`, then "warn".
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt().with_env_filter(filter).with_test_writer().without_time().try_init().ok();
    });
}

/// Seat 0 holds all of red, seat 1 bells, seat 2 acorns, seat 3 green.
pub fn suit_hands() -> [Vec<Card>; 4] {
    Suit::ALL.map(suit_cards)
}

pub fn mk_game() -> Game {
    init_logging();
    Game::from_hands(Ruleset::default(), suit_hands()).expect("valid deal")
}

pub fn act(game: &mut Game, action: &str) {
    game.act_action_str(action).unwrap_or_else(|e| panic!("{action}: {e}"));
}

pub fn act_all(game: &mut Game, actions: &[&str]) {
    for a in actions {
        act(game, a);
    }
}

/// Seat 0 bids 120 and everyone else passes.
pub fn seat0_wins_auction(game: &mut Game) {
    act_all(game, &["0,AUCTION,120", "1,AUCTION,0", "2,AUCTION,0", "3,AUCTION,0"]);
}

/// Play four cards, each by whoever is at turn.
pub fn play_trick(game: &mut Game, cards: [&str; 4]) {
    for c in cards {
        let seat = game.player_at_turn();
        act(game, &format!("{seat},TRICK,{c}"));
    }
}

/// Drive any engine to the end with uniformly random legal actions.
/// Returns the number of actions taken.
pub fn random_playout<E: RulesEngine>(engine: &mut E, seed: u64) -> usize {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut steps = 0;
    while !engine.is_finished() {
        let legal = engine.legal_actions();
        assert!(!legal.is_empty(), "no legal action in phase {}", engine.phase());
        let action = legal[rng.random_range(0..legal.len())];
        engine.act_action(&action).expect("legal action accepted");
        steps += 1;
    }
    steps
}
