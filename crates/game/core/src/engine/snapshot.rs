use crate::ailments::AilmentSlot;
use crate::state::TurnPhase;

/// Terminal size reported by the frontend. Stored, never read by the rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// One ailment as rendered: its number and whether it is still active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AilmentStatus {
    pub number: u32,
    pub active: bool,
}

impl AilmentStatus {
    /// Expands registry slots into numbered statuses. Slot `i` is ailment `i + 1`.
    pub fn from_slots(slots: &[AilmentSlot]) -> Vec<Self> {
        (1u32..)
            .zip(slots)
            .map(|(number, slot)| Self {
                number,
                active: matches!(slot, AilmentSlot::Active(_)),
            })
            .collect()
    }
}

/// Read-only copy of everything a renderer needs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub phase: TurnPhase,
    pub round: u32,
    pub message: String,
    pub debug: String,
    pub instructions: String,
    /// Empty until the first roll of the round.
    pub dice: Vec<u8>,
    pub cursor: usize,
    pub selected: Vec<usize>,
    pub lives: i32,
    pub max_lives: u32,
    pub ailments: Vec<AilmentStatus>,
    pub expression: String,
    pub result: Option<i64>,
    pub viewport: Option<Viewport>,
}

impl GameSnapshot {
    pub fn remaining_ailments(&self) -> usize {
        self.ailments.iter().filter(|ailment| ailment.active).count()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_become_numbered_statuses() {
        let statuses = AilmentStatus::from_slots(&[
            AilmentSlot::Active(1),
            AilmentSlot::Cleared,
            AilmentSlot::Active(3),
        ]);
        assert_eq!(
            statuses,
            vec![
                AilmentStatus { number: 1, active: true },
                AilmentStatus { number: 2, active: false },
                AilmentStatus { number: 3, active: true },
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_serializes_phase_by_name() {
        let snapshot = GameSnapshot {
            phase: TurnPhase::RollPhase,
            round: 2,
            message: String::new(),
            debug: String::new(),
            instructions: String::new(),
            dice: vec![4, 2, 6],
            cursor: 1,
            selected: vec![1],
            lives: 3,
            max_lives: 3,
            ailments: Vec::new(),
            expression: String::new(),
            result: None,
            viewport: None,
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["phase"], "RollPhase");
        assert_eq!(json["dice"], serde_json::json!([4, 2, 6]));

        let back: GameSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }
}
