//! Farkle scoring table.
//!
//! Per roll:
//!   three of a kind = 1000 for 1s, otherwise 100 * face
//!   each remaining 1 = 100, each remaining 5 = 50
//! Faces 2, 3, 4 and 6 only score as part of a triple. A roll scoring zero is a
//! Farkle.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::die::{DICE_COUNT, Die, MAX_FACE, MIN_FACE, dice_from_faces};
use crate::error::GameError;

pub const TRIPLE_ONES_POINTS: u32 = 1000;
pub const TRIPLE_FACE_MULTIPLIER: u32 = 100;
pub const SINGLE_ONE_POINTS: u32 = 100;
pub const SINGLE_FIVE_POINTS: u32 = 50;

/// One line of a roll's breakdown.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ScoreComponent {
    Triple { face: u8, points: u32 },
    Ones { count: usize, points: u32 },
    Fives { count: usize, points: u32 },
}

impl ScoreComponent {
    pub fn points(&self) -> u32 {
        match self {
            ScoreComponent::Triple { points, .. }
            | ScoreComponent::Ones { points, .. }
            | ScoreComponent::Fives { points, .. } => *points,
        }
    }
}

impl fmt::Display for ScoreComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreComponent::Triple { face, points } => write!(f, "Three {face}'s = {points}"),
            ScoreComponent::Ones { count, points } => write!(f, "{count} one(s) = {points}"),
            ScoreComponent::Fives { count, points } => write!(f, "{count} five(s) = {points}"),
        }
    }
}

/// Outcome of evaluating a single roll.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub score: u32,
    pub scoring_dice: Vec<Die>,
    pub non_scoring_dice: Vec<Die>,
    pub breakdown: Vec<ScoreComponent>,
}

impl ScoringResult {
    #[inline]
    pub fn is_farkle(&self) -> bool {
        self.score == 0
    }

    /// Every rolled die scored.
    #[inline]
    pub fn is_hot_dice(&self) -> bool {
        self.score > 0 && self.non_scoring_dice.is_empty()
    }

    /// Breakdown phrases joined with ` + `.
    pub fn breakdown_text(&self) -> String {
        self.breakdown
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// Points for three dice showing `face`.
#[inline]
pub fn triple_points(face: u8) -> u32 {
    if face == 1 {
        TRIPLE_ONES_POINTS
    } else {
        u32::from(face) * TRIPLE_FACE_MULTIPLIER
    }
}

/// Scores a roll. Pure and deterministic.
pub fn evaluate(roll: &[Die]) -> ScoringResult {
    let mut counts = face_counts(roll);
    let mut score = 0u32;
    let mut scoring_dice = Vec::with_capacity(roll.len());

    for face in MIN_FACE..=MAX_FACE {
        let count = &mut counts[usize::from(face)];
        if *count >= 3 {
            score += triple_points(face);
            scoring_dice.extend(std::iter::repeat(Die::of_face(face)).take(3));
            *count -= 3;
        }
    }

    for (face, points) in [(1u8, SINGLE_ONE_POINTS), (5u8, SINGLE_FIVE_POINTS)] {
        let count = std::mem::take(&mut counts[usize::from(face)]);
        score += count as u32 * points;
        scoring_dice.extend(std::iter::repeat(Die::of_face(face)).take(count));
    }

    let mut non_scoring_dice = Vec::with_capacity(roll.len() - scoring_dice.len());
    for face in MIN_FACE..=MAX_FACE {
        let count = counts[usize::from(face)];
        non_scoring_dice.extend(std::iter::repeat(Die::of_face(face)).take(count));
    }

    ScoringResult {
        score,
        scoring_dice,
        non_scoring_dice,
        breakdown: breakdown(roll),
    }
}

/// Validates raw faces as a 1..=6 die roll, then scores it.
pub fn evaluate_faces(faces: &[u8]) -> Result<ScoringResult, GameError> {
    if faces.is_empty() || faces.len() > DICE_COUNT {
        return Err(GameError::InvalidRollLength(faces.len()));
    }
    let roll = dice_from_faces(faces)?;
    Ok(evaluate(&roll))
}

// Built from the original roll rather than the consumption pass; leftover 1s
// and 5s are counted modulo three.
fn breakdown(roll: &[Die]) -> Vec<ScoreComponent> {
    let counts = face_counts(roll);
    let mut parts = Vec::new();
    for face in MIN_FACE..=MAX_FACE {
        if counts[usize::from(face)] >= 3 {
            parts.push(ScoreComponent::Triple {
                face,
                points: triple_points(face),
            });
        }
    }
    let ones = counts[1] % 3;
    if ones > 0 {
        parts.push(ScoreComponent::Ones {
            count: ones,
            points: ones as u32 * SINGLE_ONE_POINTS,
        });
    }
    let fives = counts[5] % 3;
    if fives > 0 {
        parts.push(ScoreComponent::Fives {
            count: fives,
            points: fives as u32 * SINGLE_FIVE_POINTS,
        });
    }
    parts
}

/// Occurrences per face, indexed by face value (slot 0 unused).
fn face_counts(roll: &[Die]) -> [usize; 7] {
    let mut counts = [0usize; 7];
    for die in roll {
        counts[usize::from(die.face())] += 1;
    }
    counts
}
