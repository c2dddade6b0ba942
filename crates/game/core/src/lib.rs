//! Rules of the dice-and-ailments game, free of any I/O.
//!
//! Each round the player rolls a fixed set of dice, may reroll some of them,
//! then types an arithmetic expression that uses every die value exactly
//! once. A result matching a still-active ailment clears it; anything else
//! costs a life. Clearing every ailment wins, running out of lives loses.
//!
//! All state mutation flows through [`engine::GameEngine`]; frontends send
//! [`GameAction`]s and render [`GameSnapshot`]s.
pub mod ailments;
pub mod config;
pub mod dice;
pub mod engine;
pub mod expression;
pub mod player;
pub mod stack;
pub mod state;

pub use ailments::{AilmentRegistry, AilmentSlot};
pub use config::{ConfigError, GameConfig};
pub use dice::{DiceSet, Die, DieRoller, PcgRoller, ScriptedRoller};
pub use engine::{
    AilmentStatus, Dispatch, EngineError, Flow, GameAction, GameEngine, GameEvent, GameSnapshot,
    RoundOutcome, Viewport,
};
pub use expression::{
    EvalError, ExpressionError, ExpressionValidator, Postfix, ValidationError, evaluate,
    evaluate_infix, to_postfix,
};
pub use player::Player;
pub use stack::{BoundedStack, StackError};
pub use state::{PhaseStack, RerollSelection, Turn, TurnPhase};
