use serde::{Deserialize, Serialize};

/// Zero-based seat index; always 0 or 1.
pub type PlayerId = usize;

/// Player input accepted by the turn state machine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll every die still in play.
    Roll,
    /// Commit the turn score to the current player's total.
    Bank,
    /// Pass the dice after a Farkle.
    EndTurn,
    /// Reset the whole match. Accepted in every phase.
    Restart,
}

impl Action {
    /// Actions that belong to a turn, in display order. Restart is excluded.
    pub const TURN_ACTIONS: [Action; 3] = [Action::Roll, Action::Bank, Action::EndTurn];

    /// Returns true for actions that only make sense during a turn.
    pub fn is_turn_action(&self) -> bool {
        !matches!(self, Action::Restart)
    }
}
