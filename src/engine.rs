// Rules engine boundary. Agents, training loops and frontends drive a hand
// through this trait without reaching into `Game` internals. It is
// implemented for the core `Game` type.

use crate::action::Action;
use crate::game::{ActionError, Game, Phase};
use crate::player::Seat;
use crate::snapshot::StateSnapshot;

pub trait RulesEngine {
    // Actions
    fn legal_actions(&self) -> Vec<Action>;
    fn act_action(&mut self, action: &Action) -> Result<(), ActionError>;

    // Queries
    fn phase(&self) -> Phase;
    fn player_at_turn(&self) -> Seat;
    fn state(&self) -> StateSnapshot;

    fn is_finished(&self) -> bool {
        self.phase() == Phase::Done
    }
}

impl RulesEngine for Game {
    fn legal_actions(&self) -> Vec<Action> {
        self.legal_actions()
    }
    fn act_action(&mut self, action: &Action) -> Result<(), ActionError> {
        self.act_action(action)
    }

    fn phase(&self) -> Phase {
        self.phase()
    }
    fn player_at_turn(&self) -> Seat {
        self.player_at_turn()
    }
    fn state(&self) -> StateSnapshot {
        self.state_dict()
    }
}
