use std::fmt::Write;

use crate::action::Action;
use crate::die::{Die, WINNING_SCORE};
use crate::state::GameView;

/// Rules summary shown before the first turn.
pub const RULES: &str = "\
Farkle rules:
  - Roll up to six dice and score based on specific combinations.
  - Scoring dice are set aside and stay visible while the rest are re-rolled.
  - If you roll no scoring dice, you Farkle and lose all points for that turn.
  - Three of a kind: 1s = 1000 points, other numbers = 100 x their value.
  - Single 1s and 5s are worth 100 and 50 points respectively.
  - If every die scores (hot dice) you may roll all six again.";

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub unicode_faces: bool,
    pub show_controls: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            unicode_faces: true,
            show_controls: true,
        }
    }
}

pub fn rules_text() -> String {
    format!("{RULES}\n  - The first player to reach {WINNING_SCORE} wins.")
}

pub fn render_view(view: &GameView) -> String {
    render_view_with_options(view, VisualOptions::default())
}

pub fn render_view_with_options(view: &GameView, options: VisualOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Current Player: {}", view.current_player + 1);
    let _ = writeln!(out, "Turn Score: {}", view.turn_score);
    for line in view.message.lines() {
        let _ = writeln!(out, "  {line}");
    }
    let _ = writeln!(
        out,
        "Scored Dice:  {}",
        format_dice(&view.scored_dice, options.unicode_faces)
    );
    let _ = writeln!(
        out,
        "Dice to Roll: {}",
        format_dice(&view.dice_to_roll, options.unicode_faces)
    );
    if options.show_controls {
        let _ = writeln!(
            out,
            "Controls: roll {}  bank {}  end turn {}",
            on_off(view.roll_enabled),
            on_off(view.bank_enabled),
            on_off(view.end_turn_enabled)
        );
    }
    let _ = writeln!(out, "Scores:");
    for (idx, score) in view.player_scores.iter().enumerate() {
        let marker = match view.winner {
            Some(winner) if winner == idx => "  <- winner",
            _ if !view.game_over && idx == view.current_player => "  <- to play",
            _ => "",
        };
        let _ = writeln!(out, "  Player {}: {score}{marker}", idx + 1);
    }
    out
}

pub fn describe_action(view: &GameView, action: &Action) -> String {
    match action {
        Action::Roll => format!("Roll dice ({} dice)", view.dice_remaining),
        Action::Bank => format!("Bank {} points", view.turn_score),
        Action::EndTurn => String::from("End turn"),
        Action::Restart => String::from("Restart game"),
    }
}

fn format_dice(dice: &[Die], unicode: bool) -> String {
    if dice.is_empty() {
        return String::from("-");
    }
    dice.iter()
        .map(|die| {
            if unicode {
                die.glyph().to_string()
            } else {
                die.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "[on]" } else { "[off]" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameBuilder;

    #[test]
    fn render_and_describe_include_expected_phrases() {
        let mut game = GameBuilder::new()
            .with_scripted_faces(&[1, 2, 3, 4, 6, 6])
            .expect("valid faces")
            .build();
        game.roll();
        let view = game.view();

        let text = render_view(&view);
        assert!(text.contains("Current Player: 1"));
        assert!(text.contains("Turn Score: 100"));
        assert!(text.contains("Scored Dice:  ⚀"));
        assert!(text.contains("Player 1: 0  <- to play"));

        let plain = render_view_with_options(
            &view,
            VisualOptions {
                unicode_faces: false,
                show_controls: false,
            },
        );
        assert!(plain.contains("Dice to Roll: 2 3 4 6 6"));
        assert!(!plain.contains("Controls:"));

        assert_eq!(describe_action(&view, &Action::Roll), "Roll dice (5 dice)");
        assert_eq!(describe_action(&view, &Action::Bank), "Bank 100 points");
    }

    #[test]
    fn rules_mention_winning_score() {
        assert!(rules_text().contains("5000"));
    }
}
