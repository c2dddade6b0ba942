/// How an accepted expression resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    AilmentRemoved { ailment: i64 },
    LifeLost { lives_remaining: i32 },
}

/// Something that happened while dispatching an action.
///
/// Frontends turn these into history entries; the engine never reads them
/// back.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    DiceRolled {
        values: Vec<u8>,
    },
    DiceRerolled {
        indices: Vec<usize>,
        values: Vec<u8>,
    },
    ExpressionRejected {
        expression: String,
        reason: String,
    },
    ResultApplied {
        expression: String,
        value: i64,
        outcome: RoundOutcome,
    },
    RoundStarted {
        round: u32,
    },
    GameOver {
        won: bool,
    },
    GameRestarted,
}
