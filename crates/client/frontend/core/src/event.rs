//! Utilities for reacting to game events inside UI layers.
use game_core::{GameEvent, RoundOutcome};

use crate::message::{MessageEntry, MessageLevel, MessageLog};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &GameEvent) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}

/// History line for `event`, tagged with the round it happened in.
pub fn history_entry(event: &GameEvent, round: u32) -> MessageEntry {
    let (text, level) = match event {
        GameEvent::DiceRolled { values } => (format!("Rolled {}", join(values)), MessageLevel::Info),
        GameEvent::DiceRerolled { indices, values } if indices.is_empty() => {
            (format!("Kept {}", join(values)), MessageLevel::Info)
        }
        GameEvent::DiceRerolled { indices, values } => (
            format!("Rerolled {} die(s): {}", indices.len(), join(values)),
            MessageLevel::Info,
        ),
        GameEvent::ExpressionRejected { expression, reason } => (
            format!("Rejected \"{expression}\": {reason}"),
            MessageLevel::Warning,
        ),
        GameEvent::ResultApplied {
            expression,
            value,
            outcome: RoundOutcome::AilmentRemoved { ailment },
        } => (
            format!("{expression} = {value}, cleared ailment {ailment}"),
            MessageLevel::Success,
        ),
        GameEvent::ResultApplied {
            expression,
            value,
            outcome: RoundOutcome::LifeLost { lives_remaining },
        } => (
            format!("{expression} = {value}, missed ({lives_remaining} lives left)"),
            MessageLevel::Error,
        ),
        GameEvent::RoundStarted { round } => (format!("Round {round}"), MessageLevel::Info),
        GameEvent::GameOver { won: true } => ("All ailments cleared".to_string(), MessageLevel::Success),
        GameEvent::GameOver { won: false } => ("Out of lives".to_string(), MessageLevel::Error),
        GameEvent::GameRestarted => ("New game".to_string(), MessageLevel::Info),
    };
    MessageEntry::new(text, Some(round), level)
}

fn join(values: &[u8]) -> String {
    values
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impacts_combine() {
        assert!(EventImpact::none().combine(EventImpact::redraw()).requires_redraw);
        assert!(!EventImpact::none().combine(EventImpact::none()).requires_redraw);
    }

    #[test]
    fn hit_is_a_success_entry() {
        let entry = history_entry(
            &GameEvent::ResultApplied {
                expression: "4 + 2 + 1".into(),
                value: 7,
                outcome: RoundOutcome::AilmentRemoved { ailment: 7 },
            },
            3,
        );
        assert_eq!(entry.text, "4 + 2 + 1 = 7, cleared ailment 7");
        assert_eq!(entry.round, Some(3));
        assert_eq!(entry.level, MessageLevel::Success);
    }

    #[test]
    fn rejection_carries_reason() {
        let entry = history_entry(
            &GameEvent::ExpressionRejected {
                expression: "5+1".into(),
                reason: "Every character must be separated by a space".into(),
            },
            1,
        );
        assert_eq!(
            entry.text,
            "Rejected \"5+1\": Every character must be separated by a space"
        );
        assert_eq!(entry.level, MessageLevel::Warning);
    }

    #[test]
    fn rolls_list_faces() {
        let entry = history_entry(&GameEvent::DiceRolled { values: vec![4, 2, 6] }, 1);
        assert_eq!(entry.text, "Rolled 4 2 6");
    }
}
