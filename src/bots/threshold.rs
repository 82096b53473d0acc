use crate::action::Action;
use crate::bot::Bot;
use crate::die::WINNING_SCORE;
use crate::state::GameView;

pub const DEFAULT_BANK_THRESHOLD: u32 = 350;
pub const DEFAULT_MIN_DICE: usize = 3;

/// Rule-based bot that keeps rolling until the turn is worth banking.
///
/// In plain English:
/// - After a Farkle, end the turn (nothing else is allowed).
/// - Bank whenever banking wins the game outright.
/// - Bank once the turn score reaches `threshold`, or when fewer than
///   `min_dice` dice are left to throw and something is on the table.
/// - Otherwise roll.
pub struct ThresholdBot {
    threshold: u32,
    min_dice: usize,
}

impl ThresholdBot {
    pub fn new(threshold: u32, min_dice: usize) -> Self {
        Self {
            threshold,
            min_dice,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    fn wants_bank(&self, view: &GameView) -> bool {
        if view.turn_score == 0 {
            return false;
        }
        let banked = view.player_scores[view.current_player];
        banked + view.turn_score >= WINNING_SCORE
            || view.turn_score >= self.threshold
            || view.dice_remaining < self.min_dice
    }
}

impl Default for ThresholdBot {
    fn default() -> Self {
        Self::new(DEFAULT_BANK_THRESHOLD, DEFAULT_MIN_DICE)
    }
}

impl Bot for ThresholdBot {
    fn select_action(&mut self, view: &GameView, legal_actions: &[Action]) -> Action {
        let can = |action: Action| legal_actions.contains(&action);
        if can(Action::EndTurn) {
            return Action::EndTurn;
        }
        if can(Action::Bank) && self.wants_bank(view) {
            return Action::Bank;
        }
        if can(Action::Roll) {
            return Action::Roll;
        }
        legal_actions.first().copied().unwrap_or(Action::EndTurn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;

    fn view_with(turn_score: u32, dice_remaining: usize, banked: u32) -> GameView {
        let mut view = GameState::new().view();
        view.turn_score = turn_score;
        view.dice_remaining = dice_remaining;
        view.player_scores[0] = banked;
        view
    }

    #[test]
    fn rolls_below_threshold_with_plenty_of_dice() {
        let mut bot = ThresholdBot::default();
        let view = view_with(200, 4, 0);
        assert_eq!(
            bot.select_action(&view, &[Action::Roll, Action::Bank]),
            Action::Roll
        );
    }

    #[test]
    fn banks_at_threshold_or_when_short_on_dice() {
        let mut bot = ThresholdBot::default();
        let legal = [Action::Roll, Action::Bank];
        assert_eq!(bot.select_action(&view_with(350, 4, 0), &legal), Action::Bank);
        assert_eq!(bot.select_action(&view_with(100, 2, 0), &legal), Action::Bank);
    }

    #[test]
    fn banks_a_winning_turn_of_any_size() {
        let mut bot = ThresholdBot::new(10_000, 0);
        let view = view_with(50, 6, 4950);
        assert_eq!(
            bot.select_action(&view, &[Action::Roll, Action::Bank]),
            Action::Bank
        );
    }

    #[test]
    fn ends_turn_after_farkle() {
        let mut bot = ThresholdBot::default();
        let view = view_with(0, 6, 0);
        assert_eq!(bot.select_action(&view, &[Action::EndTurn]), Action::EndTurn);
    }
}
