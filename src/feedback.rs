use std::io::{self, Write};

use crate::error::FeedbackError;

/// Fire-and-forget notifications emitted by a session.
///
/// Errors are logged by the caller and otherwise dropped; they never affect
/// the outcome of an action.
pub trait Feedback {
    fn roll_sound(&mut self) -> Result<(), FeedbackError>;
}

/// Emits nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentFeedback;

impl Feedback for SilentFeedback {
    fn roll_sound(&mut self) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// Rings the terminal bell on every roll.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl TerminalBell<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Feedback for TerminalBell<W> {
    fn roll_sound(&mut self) -> Result<(), FeedbackError> {
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_writes_bel_byte() -> Result<(), FeedbackError> {
        let mut bell = TerminalBell::new(Vec::new());
        bell.roll_sound()?;
        bell.roll_sound()?;
        assert_eq!(bell.out, vec![0x07, 0x07]);
        Ok(())
    }
}
