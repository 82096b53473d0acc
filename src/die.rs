use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const MIN_FACE: u8 = 1;
pub const MAX_FACE: u8 = 6;
pub const DICE_COUNT: usize = 6;
pub const PLAYER_COUNT: usize = 2;
pub const WINNING_SCORE: u32 = 5000;

/// A single six-sided die showing one face.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Die(u8);

impl Die {
    /// Every face in ascending order; `Die::ALL[f - 1]` shows face `f`.
    pub const ALL: [Die; 6] = [Die(1), Die(2), Die(3), Die(4), Die(5), Die(6)];

    pub fn new(face: u8) -> Result<Self, GameError> {
        if (MIN_FACE..=MAX_FACE).contains(&face) {
            Ok(Self(face))
        } else {
            Err(GameError::InvalidFace(face))
        }
    }

    #[inline]
    pub const fn face(self) -> u8 {
        self.0
    }

    /// Unicode die glyph (U+2680..U+2685).
    pub fn glyph(self) -> char {
        match self.0 {
            1 => '⚀',
            2 => '⚁',
            3 => '⚂',
            4 => '⚃',
            5 => '⚄',
            _ => '⚅',
        }
    }

    #[inline]
    pub(crate) fn of_face(face: u8) -> Self {
        debug_assert!((MIN_FACE..=MAX_FACE).contains(&face));
        Self::ALL[usize::from(face - 1)]
    }
}

impl TryFrom<u8> for Die {
    type Error = GameError;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        Die::new(face)
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> Self {
        die.0
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Converts raw faces into dice, rejecting anything outside 1..=6.
pub fn dice_from_faces(faces: &[u8]) -> Result<Vec<Die>, GameError> {
    faces.iter().map(|&face| Die::new(face)).collect()
}

/// Comma separated faces, e.g. `2, 3, 5`.
pub fn join_faces(dice: &[Die]) -> String {
    dice.iter()
        .map(|die| die.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_faces_outside_range() {
        assert_eq!(Die::new(0), Err(GameError::InvalidFace(0)));
        assert_eq!(Die::new(7), Err(GameError::InvalidFace(7)));
        assert_eq!(Die::new(6).map(Die::face), Ok(6));
    }

    #[test]
    fn all_lists_faces_in_order() {
        for (idx, die) in Die::ALL.iter().enumerate() {
            assert_eq!(usize::from(die.face()), idx + 1);
        }
        assert_eq!(Die::of_face(4), Die::ALL[3]);
    }

    #[test]
    fn join_and_glyphs() -> Result<(), GameError> {
        let dice = dice_from_faces(&[2, 3, 5])?;
        assert_eq!(join_faces(&dice), "2, 3, 5");
        assert_eq!(Die::new(1)?.glyph(), '⚀');
        assert_eq!(Die::new(6)?.glyph(), '⚅');
        Ok(())
    }
}
