//! Two-player Farkle rules engine: roll scoring, turn state machine and pluggable seats.

pub mod action;
pub mod bot;
pub mod bots;
pub mod die;
pub mod error;
pub mod feedback;
pub mod game;
pub mod roll;
pub mod score;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, PlayerId};
pub use crate::bot::Bot;
pub use crate::bots::registry::{create_bot_from_spec, label_for_spec};
pub use crate::bots::{HumanBot, RandomBot, ThresholdBot};
pub use crate::die::{DICE_COUNT, Die, PLAYER_COUNT, WINNING_SCORE};
pub use crate::error::{FeedbackError, GameError};
pub use crate::feedback::{Feedback, SilentFeedback, TerminalBell};
pub use crate::game::{ActionOutcome, Game, GameBuilder, GameConfig};
pub use crate::roll::{FaceSource, RngFaces, ScriptedFaces};
pub use crate::score::{ScoreComponent, ScoringResult, evaluate, evaluate_faces};
pub use crate::state::{GameState, GameView, MatchState, RollRecord, TurnPhase, TurnState};
pub use crate::visualize::{RULES, VisualOptions, describe_action, render_view, rules_text};
