use crate::action::Action;
use crate::state::GameView;

/// Interface for anything that picks actions for a seat.
pub trait Bot {
    fn select_action(&mut self, view: &GameView, legal_actions: &[Action]) -> Action;
}
