use std::cell::Cell;
use std::rc::Rc;

use farkle::{
    Action, ActionOutcome, Feedback, FeedbackError, GameBuilder, GameError, GameState, TurnPhase,
    WINNING_SCORE,
};

/// Scripted faces for a turn that banks exactly `points` in one roll of six dice.
///
/// Only a few totals are reachable in one roll; the tests below stick to them.
fn one_roll_for(points: u32) -> [u8; 6] {
    match points {
        1500 => [1, 1, 1, 5, 5, 5],
        1000 => [1, 1, 1, 2, 3, 4],
        50 => [5, 2, 3, 4, 6, 6],
        _ => panic!("no scripted roll for {points}"),
    }
}

/// Feedback device that always fails but counts how often it was asked to play.
struct BrokenSpeaker {
    calls: Rc<Cell<usize>>,
}

impl Feedback for BrokenSpeaker {
    fn roll_sound(&mut self) -> Result<(), FeedbackError> {
        self.calls.set(self.calls.get() + 1);
        Err(FeedbackError::Unavailable(String::from("no audio device")))
    }
}

#[test]
fn farkle_roll_hands_control_to_end_turn() -> Result<(), GameError> {
    let mut game = GameBuilder::new()
        .with_scripted_faces(&[2, 3, 4, 6, 6, 2])?
        .build();
    assert_eq!(game.roll(), ActionOutcome::Applied);

    let view = game.view();
    assert_eq!(view.phase, TurnPhase::Farkled);
    assert_eq!(view.dice_remaining, 6);
    assert_eq!(view.dice_to_roll.len(), 6);
    assert!(view.scored_dice.is_empty());
    assert!(!view.roll_enabled);
    assert!(!view.bank_enabled);
    assert!(view.end_turn_enabled);
    assert!(view.message.contains("Farkle!"));
    assert_eq!(game.legal_actions(), vec![Action::EndTurn]);

    assert_eq!(game.roll(), ActionOutcome::Ignored);
    assert_eq!(game.bank(), ActionOutcome::Ignored);
    assert_eq!(game.history().len(), 1);

    assert_eq!(game.end_turn(), ActionOutcome::Applied);
    let view = game.view();
    assert_eq!(view.current_player, 1);
    assert_eq!(view.turn_score, 0);
    assert_eq!(view.dice_remaining, 6);
    assert!(view.roll_enabled);
    assert!(!view.end_turn_enabled);
    assert_eq!(view.message, "It's Player 2's turn.");
    Ok(())
}

#[test]
fn hot_dice_restores_all_six_and_keeps_turn_score() -> Result<(), GameError> {
    let mut faces = one_roll_for(1500).to_vec();
    faces.extend_from_slice(&[5, 2, 3, 4, 6, 6]);
    let mut game = GameBuilder::new().with_scripted_faces(&faces)?.build();

    game.roll();
    let view = game.view();
    assert_eq!(view.turn_score, 1500);
    assert_eq!(view.dice_remaining, 6);
    assert!(view.dice_to_roll.is_empty());
    assert_eq!(view.scored_dice.len(), 6);
    assert!(view.bank_enabled);

    game.roll();
    let view = game.view();
    assert_eq!(view.turn_score, 1550);
    assert_eq!(view.dice_remaining, 5);
    assert_eq!(view.scored_dice.len(), 7);
    assert_eq!(game.history()[1].dice.len(), 6);
    Ok(())
}

#[test]
fn bank_adds_to_total_and_passes_the_dice() -> Result<(), GameError> {
    let mut game = GameBuilder::new()
        .with_scripted_faces(&one_roll_for(1000))?
        .build();
    assert_eq!(game.bank(), ActionOutcome::Ignored, "nothing to bank yet");
    game.roll();
    assert_eq!(game.bank(), ActionOutcome::Applied);

    let view = game.view();
    assert_eq!(view.player_scores, [1000, 0]);
    assert_eq!(view.current_player, 1);
    assert_eq!(view.turn_score, 0);
    assert!(view.scored_dice.is_empty());
    assert_eq!(view.phase, TurnPhase::AwaitingRoll);
    Ok(())
}

#[test]
fn end_turn_alternates_players_however_it_is_reached() -> Result<(), GameError> {
    // Player 1 banks, player 2 farkles, player 1 farkles, player 2 banks.
    let mut faces = Vec::new();
    faces.extend_from_slice(&one_roll_for(1000));
    faces.extend_from_slice(&[2, 3, 4, 6, 6, 2]);
    faces.extend_from_slice(&[2, 3, 4, 6, 6, 2]);
    faces.extend_from_slice(&one_roll_for(50));
    let mut game = GameBuilder::new().with_scripted_faces(&faces)?.build();

    let mut seen = Vec::new();
    game.roll();
    game.bank();
    seen.push(game.current_player());
    game.roll();
    game.end_turn();
    seen.push(game.current_player());
    game.roll();
    game.end_turn();
    seen.push(game.current_player());
    game.roll();
    game.bank();
    seen.push(game.current_player());

    assert_eq!(seen, vec![1, 0, 1, 0]);
    assert_eq!(game.view().player_scores, [1000, 50]);
    assert!(game.view().scored_dice.is_empty());
    Ok(())
}

#[test]
fn reaching_exactly_the_winning_score_ends_the_game() -> Result<(), GameError> {
    // Player 1 banks 1500 three times and 500 once: 1500 * 3 + 500 = 5000.
    // Player 2 farkles in between.
    let farkle = [2, 3, 4, 6, 6, 2];
    let mut faces = Vec::new();
    for _ in 0..3 {
        faces.extend_from_slice(&one_roll_for(1500));
        faces.extend_from_slice(&farkle);
    }
    faces.extend_from_slice(&[5, 5, 5, 2, 3, 4]);
    let mut game = GameBuilder::new().with_scripted_faces(&faces)?.build();

    for _ in 0..3 {
        game.roll();
        game.bank();
        game.roll();
        game.end_turn();
    }
    game.roll();
    assert_eq!(game.view().turn_score, 500);
    game.bank();

    let view = game.view();
    assert_eq!(view.player_scores[0], WINNING_SCORE);
    assert!(view.game_over);
    assert_eq!(view.winner, Some(0));
    assert_eq!(view.phase, TurnPhase::GameOver);
    assert_eq!(view.message, "Player 1 wins with 5000 points!");
    assert!(!view.roll_enabled && !view.bank_enabled && !view.end_turn_enabled);
    assert!(game.legal_actions().is_empty());

    assert_eq!(game.roll(), ActionOutcome::Ignored);
    assert_eq!(game.bank(), ActionOutcome::Ignored);
    assert_eq!(game.end_turn(), ActionOutcome::Ignored);
    assert!(game.is_finished());

    assert_eq!(game.restart(), ActionOutcome::Applied);
    let view = game.view();
    assert_eq!(view.player_scores, [0, 0]);
    assert_eq!(view.current_player, 0);
    assert!(!view.game_over);
    assert!(view.roll_enabled);
    assert_eq!(*game.state(), GameState::new());
    assert!(game.history().is_empty());
    Ok(())
}

#[test]
fn failing_roll_sound_never_blocks_a_roll() -> Result<(), GameError> {
    let calls = Rc::new(Cell::new(0));
    let mut game = GameBuilder::new()
        .with_scripted_faces(&[2, 3, 4, 6, 6, 2])?
        .with_feedback(BrokenSpeaker {
            calls: Rc::clone(&calls),
        })
        .build();

    assert_eq!(game.roll(), ActionOutcome::Applied);
    assert_eq!(game.turn_phase(), TurnPhase::Farkled);
    // Ignored rolls do not play a sound.
    assert_eq!(game.roll(), ActionOutcome::Ignored);
    assert_eq!(calls.get(), 1);
    Ok(())
}

#[test]
fn seeded_sessions_are_reproducible() {
    let mut a = GameBuilder::new().with_seed(99).build();
    let mut b = GameBuilder::new().with_seed(99).build();
    for _ in 0..20 {
        let action = a.legal_actions()[0];
        a.apply_action(action);
        b.apply_action(action);
    }
    assert_eq!(a.state(), b.state());
    assert_eq!(a.history(), b.history());
}
