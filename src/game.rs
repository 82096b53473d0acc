use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::action::{Action, PlayerId};
use crate::die::{DICE_COUNT, PLAYER_COUNT, WINNING_SCORE, join_faces};
use crate::error::GameError;
use crate::feedback::{Feedback, SilentFeedback};
use crate::roll::{FaceSource, RngFaces, ScriptedFaces, roll_dice};
use crate::score::evaluate;
use crate::state::{GameState, GameView, MatchState, RollRecord, TurnPhase, TurnState};

const DEFAULT_SEED: u64 = 0xFA4C_1E00_5EED_D1CE;

fn turn_message(player: PlayerId) -> String {
    format!("It's Player {}'s turn.", player + 1)
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Player 0 to move, both totals at zero.
    pub fn new() -> Self {
        Self {
            turn: TurnState::new(0),
            scores: MatchState::default(),
            phase: TurnPhase::AwaitingRoll,
            message: turn_message(0),
            last_roll: None,
        }
    }

    pub fn roll_enabled(&self) -> bool {
        matches!(self.phase, TurnPhase::AwaitingRoll | TurnPhase::TurnScored)
    }

    pub fn bank_enabled(&self) -> bool {
        self.roll_enabled() && self.turn.turn_score > 0
    }

    pub fn end_turn_enabled(&self) -> bool {
        matches!(self.phase, TurnPhase::Farkled)
    }

    pub fn is_enabled(&self, action: Action) -> bool {
        match action {
            Action::Roll => self.roll_enabled(),
            Action::Bank => self.bank_enabled(),
            Action::EndTurn => self.end_turn_enabled(),
            Action::Restart => true,
        }
    }

    /// Enabled turn actions. Restart is always accepted and never listed.
    pub fn legal_actions(&self) -> Vec<Action> {
        Action::TURN_ACTIONS
            .into_iter()
            .filter(|action| self.is_enabled(*action))
            .collect()
    }

    pub fn is_finished(&self) -> bool {
        self.scores.game_over
    }

    /// Transition function. A disabled action yields an identical state.
    pub fn apply(&self, action: Action, faces: &mut dyn FaceSource) -> GameState {
        let mut next = self.clone();
        next.apply_in_place(action, faces);
        next
    }

    pub fn view(&self) -> GameView {
        GameView {
            phase: self.phase,
            current_player: self.turn.current_player,
            turn_score: self.turn.turn_score,
            message: self.message.clone(),
            scored_dice: self.turn.scored_dice.clone(),
            dice_to_roll: self.turn.dice_to_roll.clone(),
            dice_remaining: self.turn.dice_remaining,
            player_scores: self.scores.player_scores,
            roll_enabled: self.roll_enabled(),
            bank_enabled: self.bank_enabled(),
            end_turn_enabled: self.end_turn_enabled(),
            game_over: self.scores.game_over,
            winner: self.scores.winner,
        }
    }

    /// Range checks on the turn and match parts.
    pub fn validate(&self) -> Result<(), GameError> {
        self.turn.validate()?;
        self.scores.validate()
    }

    // Restart recovers any state; every other action needs a valid one.
    fn apply_in_place(&mut self, action: Action, faces: &mut dyn FaceSource) {
        if !self.is_enabled(action) {
            return;
        }
        if action != Action::Restart && self.validate().is_err() {
            return;
        }
        match action {
            Action::Roll => self.roll(faces),
            Action::Bank => self.bank(),
            Action::EndTurn => self.end_turn(),
            Action::Restart => *self = GameState::new(),
        }
    }

    fn roll(&mut self, faces: &mut dyn FaceSource) {
        let dice = roll_dice(faces, self.turn.dice_remaining);
        let result = evaluate(&dice);
        let rolled = join_faces(&dice);

        if result.is_farkle() {
            self.turn.dice_remaining = result.non_scoring_dice.len();
            self.turn.dice_to_roll = result.non_scoring_dice.clone();
            self.phase = TurnPhase::Farkled;
            self.message = format!(
                "Rolled {rolled} - Farkle! No scoring dice. Turn lost.\nPress \"End Turn\" to continue."
            );
        } else {
            self.turn.turn_score = self.turn.turn_score.saturating_add(result.score);
            self.turn
                .scored_dice
                .extend_from_slice(&result.scoring_dice);
            if result.non_scoring_dice.is_empty() {
                self.turn.dice_remaining = DICE_COUNT;
                self.turn.dice_to_roll.clear();
            } else {
                self.turn.dice_remaining = result.non_scoring_dice.len();
                self.turn.dice_to_roll = result.non_scoring_dice.clone();
            }
            self.phase = TurnPhase::TurnScored;
            self.message = format!(
                "Rolled {rolled}: Scored {} points ({}).\nTurn score: {}.",
                result.score,
                result.breakdown_text(),
                self.turn.turn_score
            );
        }

        self.last_roll = Some(RollRecord {
            player: self.turn.current_player,
            dice,
            result,
        });
    }

    fn bank(&mut self) {
        let player = self.turn.current_player;
        let total = &mut self.scores.player_scores[player];
        *total = total.saturating_add(self.turn.turn_score);
        if *total >= WINNING_SCORE {
            let total = *total;
            self.scores.game_over = true;
            self.scores.winner = Some(player);
            self.turn.turn_score = 0;
            self.phase = TurnPhase::GameOver;
            self.message = format!("Player {} wins with {total} points!", player + 1);
        } else {
            self.end_turn();
        }
    }

    fn end_turn(&mut self) {
        let next = (self.turn.current_player + 1) % PLAYER_COUNT;
        self.turn = TurnState::new(next);
        self.phase = TurnPhase::AwaitingRoll;
        self.message = turn_message(next);
    }
}

/// Whether a session accepted an action.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActionOutcome {
    Applied,
    Ignored,
}

/// Configuration required to bootstrap a session.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

/// Builder that enables deterministic face injection for tests and simulations.
pub struct GameBuilder {
    config: GameConfig,
    faces: Option<Box<dyn FaceSource>>,
    feedback: Option<Box<dyn Feedback>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            faces: None,
            feedback: None,
        }
    }

    /// Seed for the default uniform face source. Ignored once faces are injected.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_faces(mut self, faces: impl FaceSource + 'static) -> Self {
        self.faces = Some(Box::new(faces));
        self
    }

    /// Replay `faces` in order for every die rolled.
    pub fn with_scripted_faces(self, faces: &[u8]) -> Result<Self, GameError> {
        Ok(self.with_faces(ScriptedFaces::from_faces(faces)?))
    }

    pub fn with_feedback(mut self, feedback: impl Feedback + 'static) -> Self {
        self.feedback = Some(Box::new(feedback));
        self
    }

    pub fn build(self) -> Game {
        let GameBuilder {
            config,
            faces,
            feedback,
        } = self;
        let faces = faces
            .unwrap_or_else(|| Box::new(RngFaces::new(StdRng::seed_from_u64(config.seed))));
        let feedback = feedback.unwrap_or_else(|| Box::new(SilentFeedback));
        Game {
            state: GameState::new(),
            faces,
            feedback,
            history: Vec::new(),
        }
    }
}

/// A running two-player session: state plus its face source and feedback device.
pub struct Game {
    state: GameState,
    faces: Box<dyn FaceSource>,
    feedback: Box<dyn Feedback>,
    history: Vec<RollRecord>,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn new(config: GameConfig) -> Self {
        GameBuilder::new().with_seed(config.seed).build()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> GameView {
        self.state.view()
    }

    pub fn current_player(&self) -> PlayerId {
        self.state.turn.current_player
    }

    pub fn turn_phase(&self) -> TurnPhase {
        self.state.phase
    }

    pub fn legal_actions(&self) -> Vec<Action> {
        self.state.legal_actions()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.state.scores.winner
    }

    /// Every roll accepted since the last restart, oldest first.
    pub fn history(&self) -> &[RollRecord] {
        &self.history
    }

    pub fn apply_action(&mut self, action: Action) -> ActionOutcome {
        if !self.state.is_enabled(action) {
            debug!(?action, phase = ?self.state.phase, "ignoring disabled action");
            return ActionOutcome::Ignored;
        }

        if matches!(action, Action::Roll) {
            if let Err(err) = self.feedback.roll_sound() {
                debug!(%err, "roll sound failed");
            }
        }

        let player = self.state.turn.current_player;
        self.state = self.state.apply(action, &mut *self.faces);

        match action {
            Action::Roll => {
                if let Some(record) = &self.state.last_roll {
                    debug!(
                        player,
                        dice = %join_faces(&record.dice),
                        score = record.result.score,
                        turn_score = self.state.turn.turn_score,
                        "rolled"
                    );
                    self.history.push(record.clone());
                }
            }
            Action::Restart => {
                self.history.clear();
                info!("game restarted");
            }
            Action::Bank | Action::EndTurn => {
                debug!(player, ?action, scores = ?self.state.scores.player_scores, "turn over");
            }
        }

        if let Some(winner) = self.state.scores.winner.filter(|_| action == Action::Bank) {
            info!(
                winner,
                score = self.state.scores.player_scores[winner],
                "game won"
            );
        }

        ActionOutcome::Applied
    }

    pub fn roll(&mut self) -> ActionOutcome {
        self.apply_action(Action::Roll)
    }

    pub fn bank(&mut self) -> ActionOutcome {
        self.apply_action(Action::Bank)
    }

    pub fn end_turn(&mut self) -> ActionOutcome {
        self.apply_action(Action::EndTurn)
    }

    pub fn restart(&mut self) -> ActionOutcome {
        self.apply_action(Action::Restart)
    }
}
