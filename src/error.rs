use std::io;

use thiserror::Error;

/// Errors raised while constructing dice, rolls or game sessions.
///
/// Rule-level misuse (rolling after a Farkle, banking nothing) is never an
/// error: the state machine ignores disabled actions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("die face {0} is outside 1..=6")]
    InvalidFace(u8),
    #[error("a roll holds between 1 and 6 dice, received {0}")]
    InvalidRollLength(usize),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Failure reported by a feedback device such as a roll sound.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback device unavailable: {0}")]
    Unavailable(String),
    #[error("feedback output failed: {0}")]
    Io(#[from] io::Error),
}
