use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::die::{DICE_COUNT, Die, PLAYER_COUNT};
use crate::error::GameError;
use crate::score::ScoringResult;

/// Phase of the active turn.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    /// Fresh turn, nothing rolled yet.
    AwaitingRoll,
    /// At least one scoring roll this turn; roll again or bank.
    TurnScored,
    /// Last roll scored nothing; only End Turn is accepted.
    Farkled,
    /// A player reached the winning score. Only Restart is accepted.
    GameOver,
}

/// Per-turn state. Reset whenever the dice pass.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "TurnStateRepr")]
pub struct TurnState {
    pub current_player: PlayerId,
    pub turn_score: u32,
    /// Dice the next roll will throw.
    pub dice_remaining: usize,
    /// Scoring dice set aside so far this turn.
    pub scored_dice: Vec<Die>,
    /// Dice left on the table from the previous roll, shown as awaiting roll.
    pub dice_to_roll: Vec<Die>,
}

impl TurnState {
    pub fn new(current_player: PlayerId) -> Self {
        Self {
            current_player,
            turn_score: 0,
            dice_remaining: DICE_COUNT,
            scored_dice: Vec::new(),
            dice_to_roll: Vec::new(),
        }
    }

    /// Checks the seat index and that no more than six dice are in play.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.current_player >= PLAYER_COUNT {
            return Err(GameError::InvalidConfiguration(
                "current player must be 0 or 1",
            ));
        }
        if self.dice_remaining > DICE_COUNT || self.dice_to_roll.len() > DICE_COUNT {
            return Err(GameError::InvalidConfiguration(
                "at most six dice can be in play",
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct TurnStateRepr {
    current_player: PlayerId,
    turn_score: u32,
    dice_remaining: usize,
    scored_dice: Vec<Die>,
    dice_to_roll: Vec<Die>,
}

impl TryFrom<TurnStateRepr> for TurnState {
    type Error = GameError;

    fn try_from(repr: TurnStateRepr) -> Result<Self, Self::Error> {
        let turn = TurnState {
            current_player: repr.current_player,
            turn_score: repr.turn_score,
            dice_remaining: repr.dice_remaining,
            scored_dice: repr.scored_dice,
            dice_to_roll: repr.dice_to_roll,
        };
        turn.validate()?;
        Ok(turn)
    }
}

/// Banked totals. Survive turn changes; cleared only by restart.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "MatchStateRepr")]
pub struct MatchState {
    pub player_scores: [u32; PLAYER_COUNT],
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}

impl MatchState {
    pub fn validate(&self) -> Result<(), GameError> {
        match self.winner {
            Some(winner) if winner >= PLAYER_COUNT => Err(GameError::InvalidConfiguration(
                "winner must be 0 or 1",
            )),
            Some(_) if !self.game_over => Err(GameError::InvalidConfiguration(
                "a winner requires a finished game",
            )),
            _ => Ok(()),
        }
    }
}

#[derive(Deserialize)]
struct MatchStateRepr {
    player_scores: [u32; PLAYER_COUNT],
    game_over: bool,
    winner: Option<PlayerId>,
}

impl TryFrom<MatchStateRepr> for MatchState {
    type Error = GameError;

    fn try_from(repr: MatchStateRepr) -> Result<Self, Self::Error> {
        let scores = MatchState {
            player_scores: repr.player_scores,
            game_over: repr.game_over,
            winner: repr.winner,
        };
        scores.validate()?;
        Ok(scores)
    }
}

/// A roll accepted by the state machine.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollRecord {
    pub player: PlayerId,
    pub dice: Vec<Die>,
    pub result: ScoringResult,
}

/// Complete game state. Transitions produce a new value (see `GameState::apply`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub turn: TurnState,
    pub scores: MatchState,
    pub phase: TurnPhase,
    pub message: String,
    /// Most recent accepted roll, if any since the last restart.
    pub last_roll: Option<RollRecord>,
}

/// Everything a front-end needs to draw one frame.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameView {
    pub phase: TurnPhase,
    pub current_player: PlayerId,
    pub turn_score: u32,
    pub message: String,
    pub scored_dice: Vec<Die>,
    pub dice_to_roll: Vec<Die>,
    pub dice_remaining: usize,
    pub player_scores: [u32; PLAYER_COUNT],
    pub roll_enabled: bool,
    pub bank_enabled: bool,
    pub end_turn_enabled: bool,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}
