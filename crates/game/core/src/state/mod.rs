//! Per-round state: the phase tags and the [`Turn`] that carries them.
//!
//! A [`Turn`] is created at the start of every round and replaced when the
//! round ends. Everything the round produces (dice, the submitted expression,
//! its result and the outcome flags) lives on the turn, so starting a new
//! round is just constructing a new value.

mod selection;
mod turn;

pub use selection::RerollSelection;
pub use turn::{PhaseStack, Turn};

/// Named step of a round, held on the [`PhaseStack`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    /// Waiting for the roll action.
    TurnStart,
    /// Dice are rolled; the player picks which ones to reroll.
    RollPhase,
    /// Waiting for a submitted expression.
    ExpressionPhase,
    /// Outcome of the round is shown; waiting for continue.
    ResultsPhase,
    /// Terminal. Only restart leaves it.
    GameOver,
}

impl TurnPhase {
    /// Phases loaded at turn creation, bottom of the stack first.
    pub const INITIAL_LOAD: [TurnPhase; 4] = [
        TurnPhase::ResultsPhase,
        TurnPhase::ExpressionPhase,
        TurnPhase::RollPhase,
        TurnPhase::TurnStart,
    ];

    pub fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::GameOver)
    }
}
