//! marjapussi: rules engine for the four-player trick-taking game Marjapussi
//!
//! Goals:
//! - Deterministic, replayable hands (seeded or explicit deals)
//! - Every decision is an [`action::Action`] chosen from `legal_actions()`
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: play a hand
//! ```
//! use marjapussi::game::{Game, Phase};
//! use marjapussi::rules::Ruleset;
//!
//! let mut game = Game::with_seed(Ruleset::default(), 42).unwrap();
//! assert_eq!(game.legal_action_strings()[1], "0,AUCTION,120");
//!
//! game.act_action_str("0,AUCTION,120").unwrap();
//! assert_eq!(game.player_at_turn(), 1);
//! assert!(game.act_action_str("1,AUCTION,117").is_err());
//!
//! while let Some(action) = game.legal_actions().last().copied() {
//!     game.act_action(&action).unwrap();
//! }
//! assert_eq!(game.phase(), Phase::Done);
//! assert!(game.result().is_some());
//! ```

pub mod action;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod events;
pub mod game;
pub mod player;
pub mod ranking;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod trick;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
