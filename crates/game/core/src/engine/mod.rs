//! Turn controller.
//!
//! [`GameEngine`] owns the player, the current [`Turn`] and the reroll
//! selection, and is the only thing that mutates them. Frontends feed it one
//! [`GameAction`] at a time through [`GameEngine::dispatch`] and read the
//! result back through [`GameEngine::snapshot`].
//!
//! Dispatch looks at the phase on top of the turn's stack and runs the
//! handler for that `(phase, action)` pair. Pairs with no handler are no-ops,
//! so a frontend may forward every key press without checking the phase
//! first.

mod errors;
mod events;
mod handlers;
pub mod messages;
mod snapshot;

pub use errors::EngineError;
pub use events::{GameEvent, RoundOutcome};
pub use snapshot::{AilmentStatus, GameSnapshot, Viewport};

use crate::config::GameConfig;
use crate::dice::DieRoller;
use crate::player::Player;
use crate::state::{RerollSelection, Turn, TurnPhase};

/// Discrete inbound event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameAction {
    Roll,
    MoveSelectionLeft,
    MoveSelectionRight,
    ToggleSelection,
    Confirm,
    SubmitExpression(String),
    ContinueRound,
    RestartGame,
    Resize { width: u16, height: u16 },
    Quit,
}

/// Whether the session should keep going after a dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Result of one [`GameEngine::dispatch`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Dispatch {
    pub flow: Flow,
    pub events: Vec<GameEvent>,
}

impl Dispatch {
    fn proceed(events: Vec<GameEvent>) -> Self {
        Self {
            flow: Flow::Continue,
            events,
        }
    }

    fn quit() -> Self {
        Self {
            flow: Flow::Quit,
            events: Vec::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.flow == Flow::Quit
    }
}

/// Single-player game state machine.
pub struct GameEngine<R> {
    config: GameConfig,
    roller: R,
    player: Player,
    turn: Turn,
    selection: RerollSelection,
    message: String,
    debug: String,
    viewport: Option<Viewport>,
}

impl<R: DieRoller> GameEngine<R> {
    /// Starts a new game at round 1. Fails if `config` is out of bounds.
    pub fn new(config: GameConfig, roller: R) -> Result<Self, EngineError> {
        config.validate()?;
        let player = Player::new(config.max_lives, config.num_ailments);
        let turn = Turn::new(1, config.phase_stack_capacity)?;
        let mut engine = Self {
            selection: RerollSelection::new(config.num_dice),
            config,
            roller,
            player,
            turn,
            message: String::new(),
            debug: String::new(),
            viewport: None,
        };
        engine.refresh_message()?;
        Ok(engine)
    }

    /// Processes one action to completion.
    ///
    /// `Quit` and `Resize` are honored in every phase. Everything else only
    /// acts in the phase it belongs to. An error here is fatal: the phase
    /// stack is in a state normal play can't produce.
    pub fn dispatch(&mut self, action: GameAction) -> Result<Dispatch, EngineError> {
        if action == GameAction::Quit {
            tracing::info!(round = self.turn.round, "quit requested");
            return Ok(Dispatch::quit());
        }

        let mut events = Vec::new();
        self.apply(action, &mut events)
            .and_then(|()| self.refresh_message())
            .inspect_err(|error| tracing::error!(%error, "engine failure"))?;
        Ok(Dispatch::proceed(events))
    }

    fn apply(&mut self, action: GameAction, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
        let phase = self.turn.phase()?;
        tracing::debug!(%phase, ?action, "dispatch");

        match (phase, action) {
            (_, GameAction::Resize { width, height }) => {
                self.viewport = Some(Viewport { width, height });
            }
            (TurnPhase::TurnStart, GameAction::Roll) => self.roll_dice(events),
            (TurnPhase::RollPhase, GameAction::MoveSelectionLeft) => self.selection.move_left(),
            (TurnPhase::RollPhase, GameAction::MoveSelectionRight) => self.selection.move_right(),
            (TurnPhase::RollPhase, GameAction::ToggleSelection) => self.selection.toggle(),
            (TurnPhase::RollPhase, GameAction::Confirm) => self.confirm_rerolls(events),
            (TurnPhase::ExpressionPhase, GameAction::SubmitExpression(text)) => {
                self.submit_expression(text, events)?;
            }
            (TurnPhase::ResultsPhase, GameAction::ContinueRound) => self.continue_round(events)?,
            (TurnPhase::GameOver, GameAction::RestartGame) => self.restart(events)?,
            (phase, action) => tracing::trace!(%phase, ?action, "ignored"),
        }
        Ok(())
    }

    fn refresh_message(&mut self) -> Result<(), EngineError> {
        let phase = self.turn.phase()?;
        self.message = messages::status_message(phase, &self.turn, &self.player);
        Ok(())
    }

    pub fn phase(&self) -> Result<TurnPhase, EngineError> {
        Ok(self.turn.phase()?)
    }

    pub fn is_over(&self) -> bool {
        self.turn.phase().is_ok_and(TurnPhase::is_terminal)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn selection(&self) -> &RerollSelection {
        &self.selection
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Reason the last expression was rejected, empty otherwise.
    pub fn debug(&self) -> &str {
        &self.debug
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn snapshot(&self) -> Result<GameSnapshot, EngineError> {
        let phase = self.turn.phase()?;
        Ok(GameSnapshot {
            phase,
            round: self.turn.round,
            message: self.message.clone(),
            debug: self.debug.clone(),
            instructions: messages::instructions(phase).to_string(),
            dice: self.turn.dice_values(),
            cursor: self.selection.cursor(),
            selected: self.selection.selected().collect(),
            lives: self.player.lives,
            max_lives: self.config.max_lives,
            ailments: AilmentStatus::from_slots(self.player.ailments.slots()),
            expression: self.turn.expression.clone(),
            result: self.turn.result,
            viewport: self.viewport,
        })
    }
}
