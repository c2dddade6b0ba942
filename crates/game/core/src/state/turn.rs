use super::TurnPhase;
use crate::dice::DiceSet;
use crate::stack::{BoundedStack, StackError};

/// Phase sequence of one round.
pub type PhaseStack = BoundedStack<TurnPhase>;

/// State of the round in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    /// 1-based round counter.
    pub round: u32,

    /// `None` until the roll action; afterwards exactly `num_dice` dice.
    pub dice: Option<DiceSet>,

    /// Last submitted expression text, valid or not.
    pub expression: String,

    /// Value of the last accepted expression.
    pub result: Option<i64>,

    pub removed_ailment: bool,
    pub lost_life: bool,

    phases: PhaseStack,
}

impl Turn {
    /// Creates round `round` with the initial phases loaded so that
    /// [`TurnPhase::TurnStart`] is on top.
    pub fn new(round: u32, phase_capacity: usize) -> Result<Self, StackError> {
        let mut phases = PhaseStack::with_capacity(phase_capacity);
        for phase in TurnPhase::INITIAL_LOAD {
            phases.push(phase)?;
        }
        Ok(Self {
            round,
            dice: None,
            expression: String::new(),
            result: None,
            removed_ailment: false,
            lost_life: false,
            phases,
        })
    }

    /// Phase currently on top of the stack.
    pub fn phase(&self) -> Result<TurnPhase, StackError> {
        self.phases.top().copied()
    }

    pub fn push_phase(&mut self, phase: TurnPhase) -> Result<(), StackError> {
        self.phases.push(phase)
    }

    pub fn pop_phase(&mut self) {
        self.phases.pop();
    }

    pub fn phases(&self) -> &PhaseStack {
        &self.phases
    }

    /// Current die faces, empty before the roll.
    pub fn dice_values(&self) -> Vec<u8> {
        self.dice.as_ref().map(DiceSet::values).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_turn_starts_on_turn_start() {
        let turn = Turn::new(1, 20).unwrap();
        assert_eq!(turn.phase(), Ok(TurnPhase::TurnStart));
        assert_eq!(turn.phases().len(), 4);
        assert!(turn.dice.is_none());
        assert!(!turn.removed_ailment && !turn.lost_life);
    }

    #[test]
    fn phases_pop_in_execution_order() {
        let mut turn = Turn::new(1, 20).unwrap();
        let mut order = Vec::new();
        while let Ok(phase) = turn.phase() {
            order.push(phase);
            turn.pop_phase();
        }
        assert_eq!(
            order,
            vec![
                TurnPhase::TurnStart,
                TurnPhase::RollPhase,
                TurnPhase::ExpressionPhase,
                TurnPhase::ResultsPhase,
            ]
        );
        assert_eq!(turn.phase(), Err(StackError::Empty));
    }

    #[test]
    fn tiny_capacity_cannot_hold_initial_load() {
        assert_eq!(Turn::new(1, 3), Err(StackError::Full { capacity: 3 }));
    }
}
