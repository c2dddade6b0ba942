//! View-model snapshots derived from [`game_core::GameSnapshot`].
mod presentation;

pub use presentation::PresentationMapper;

use game_core::{AilmentStatus, GameSnapshot, TurnPhase};

use crate::message::{MessageEntry, MessageLog};

/// Everything a presentation layer draws for one frame.
#[derive(Clone, Debug)]
pub struct ViewModel {
    pub phase: TurnPhase,
    pub round: u32,
    pub status: StatusView,
    pub dice: Vec<DieView>,
    pub lives: LivesView,
    pub ailments: Vec<AilmentStatus>,
    pub messages: Vec<MessageEntry>,
}

impl ViewModel {
    pub fn from_snapshot(snapshot: &GameSnapshot, messages: &MessageLog, message_limit: usize) -> Self {
        Self {
            phase: snapshot.phase,
            round: snapshot.round,
            status: StatusView::from_snapshot(snapshot),
            dice: DieView::collect(snapshot),
            lives: LivesView {
                current: snapshot.lives,
                maximum: snapshot.max_lives,
            },
            ailments: snapshot.ailments.clone(),
            messages: collect_messages(messages, message_limit),
        }
    }

    pub fn remaining_ailments(&self) -> usize {
        self.ailments.iter().filter(|ailment| ailment.active).count()
    }

    /// The cursor and selection only mean something while rerolls are chosen.
    pub fn shows_selection(&self) -> bool {
        self.phase == TurnPhase::RollPhase
    }
}

/// Status panel text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusView {
    /// May span several lines.
    pub message: String,
    /// Why the last expression was rejected; empty when nothing failed.
    pub debug: String,
    pub instructions: String,
}

impl StatusView {
    fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        Self {
            message: snapshot.message.clone(),
            debug: snapshot.debug.clone(),
            instructions: snapshot.instructions.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DieView {
    pub value: u8,
    pub selected: bool,
    pub under_cursor: bool,
}

impl DieView {
    fn collect(snapshot: &GameSnapshot) -> Vec<Self> {
        snapshot
            .dice
            .iter()
            .enumerate()
            .map(|(index, &value)| Self {
                value,
                selected: snapshot.is_selected(index),
                under_cursor: snapshot.cursor == index,
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LivesView {
    pub current: i32,
    pub maximum: u32,
}

fn collect_messages(messages: &MessageLog, limit: usize) -> Vec<MessageEntry> {
    let mut recent: Vec<_> = messages.recent(limit).cloned().collect();
    recent.reverse();
    recent
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameAction, GameConfig, GameEngine, ScriptedRoller};

    #[test]
    fn dice_carry_selection_and_cursor() {
        let mut engine =
            GameEngine::new(GameConfig::default(), ScriptedRoller::new([4, 2, 6])).unwrap();
        engine.dispatch(GameAction::Roll).unwrap();
        engine.dispatch(GameAction::MoveSelectionRight).unwrap();
        engine.dispatch(GameAction::ToggleSelection).unwrap();

        let mut log = MessageLog::new(4);
        log.push_text("first");
        log.push_text("second");
        let view = ViewModel::from_snapshot(&engine.snapshot().unwrap(), &log, 8);

        assert!(view.shows_selection());
        assert_eq!(
            view.dice,
            vec![
                DieView { value: 4, selected: false, under_cursor: false },
                DieView { value: 2, selected: true, under_cursor: true },
                DieView { value: 6, selected: false, under_cursor: false },
            ]
        );
        assert_eq!(view.lives, LivesView { current: 3, maximum: 3 });
        assert_eq!(view.remaining_ailments(), 9);
        let texts: Vec<_> = view.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }
}
