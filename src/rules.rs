//! Ruleset: bid thresholds, point values and the start phase.

use crate::cards::{Card, Rank, Suit};
use crate::game::Phase;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("bid step must be positive")]
    ZeroBidStep,
    #[error("max game value {max} leaves no raise above start value {start} with step {step}")]
    NoRaisePossible { start: u32, max: u32, step: u32 },
    #[error("a hand cannot start in phase {0}")]
    StartPhase(Phase),
    #[error("invalid ruleset json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Points for card ranks, declared suits and the last trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointTable {
    /// Indexed like [`Rank::ALL`]: A Z K O U 9 8 7 6.
    pub ranks: [u32; 9],
    /// Declaration bonus indexed like [`Suit::ALL`]: r s e g.
    pub suits: [u32; 4],
    pub last_trick: u32,
}

impl Default for PointTable {
    fn default() -> Self {
        Self { ranks: [11, 10, 4, 3, 2, 0, 0, 0, 0], suits: [100, 80, 60, 40], last_trick: 20 }
    }
}

impl PointTable {
    pub fn rank(&self, rank: Rank) -> u32 {
        self.ranks[rank.display_index()]
    }

    pub fn card(&self, card: Card) -> u32 {
        self.rank(card.rank())
    }

    pub fn suit(&self, suit: Suit) -> u32 {
        self.suits[suit.index()]
    }
}

/// Immutable rules for one hand, validated when a game is created.
///
/// ```
/// use marjapussi::rules::Ruleset;
///
/// let rules = Ruleset::from_json(r#"{ "start_value": 120 }"#).unwrap();
/// assert_eq!(rules.start_value, 120);
/// assert_eq!(rules.max_value, 420);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    pub start_value: u32,
    pub max_value: u32,
    pub bid_step: u32,
    pub points: PointTable,
    pub start_phase: Phase,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            start_value: 115,
            max_value: 420,
            bid_step: 5,
            points: PointTable::default(),
            start_phase: Phase::Auction,
        }
    }
}

impl Ruleset {
    /// Parse overrides from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let rules: Ruleset = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bid_step == 0 {
            return Err(ConfigError::ZeroBidStep);
        }
        if self.max_value < self.start_value.saturating_add(self.bid_step) {
            return Err(ConfigError::NoRaisePossible {
                start: self.start_value,
                max: self.max_value,
                step: self.bid_step,
            });
        }
        if !matches!(self.start_phase, Phase::Auction | Phase::Trick) {
            return Err(ConfigError::StartPhase(self.start_phase));
        }
        Ok(())
    }

    /// Bids strictly above `current`, in steps, up to the ceiling.
    pub fn raises_above(&self, current: u32) -> impl Iterator<Item = u32> {
        let step = self.bid_step.max(1) as usize;
        (current.saturating_add(self.bid_step)..=self.max_value).step_by(step)
    }
}
