use rand::Rng;

use crate::die::{Die, MAX_FACE, MIN_FACE, dice_from_faces};
use crate::error::GameError;

/// Source of die faces. Each call yields one independent face.
pub trait FaceSource {
    fn next_face(&mut self) -> Die;
}

/// Draws `count` faces, one per die.
pub fn roll_dice(faces: &mut dyn FaceSource, count: usize) -> Vec<Die> {
    (0..count).map(|_| faces.next_face()).collect()
}

/// Uniform faces sampled from any `rand` generator.
pub struct RngFaces<R: Rng> {
    rng: R,
}

impl<R: Rng> RngFaces<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FaceSource for RngFaces<R> {
    fn next_face(&mut self) -> Die {
        Die::of_face(self.rng.gen_range(MIN_FACE..=MAX_FACE))
    }
}

/// Replays a fixed face sequence, wrapping around when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedFaces {
    faces: Vec<Die>,
    cursor: usize,
}

impl ScriptedFaces {
    pub fn new(faces: Vec<Die>) -> Result<Self, GameError> {
        if faces.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "scripted face sequence must not be empty",
            ));
        }
        Ok(Self { faces, cursor: 0 })
    }

    pub fn from_faces(faces: &[u8]) -> Result<Self, GameError> {
        Self::new(dice_from_faces(faces)?)
    }

    /// Number of faces handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl FaceSource for ScriptedFaces {
    fn next_face(&mut self) -> Die {
        let die = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        die
    }
}
