//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::{GameAction, TurnPhase};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Dispatch the action to the engine.
    Submit(GameAction),
    /// Append a character to the expression buffer.
    Insert(char),
    /// Delete the last character of the expression buffer.
    DeleteBackward,
    /// Send the expression buffer to the engine.
    SubmitExpression,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands for the current phase.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// While an expression is being typed every printable key goes to the
    /// buffer, so only `esc` and `ctrl+c` quit there.
    pub fn handle_key(&self, key: KeyEvent, phase: TurnPhase) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if phase == TurnPhase::ExpressionPhase {
            return Self::expression_key(key.code);
        }

        match key.code {
            KeyCode::Char(ch) => Self::handle_char(ch, phase),
            KeyCode::Left => Self::in_roll_phase(phase, GameAction::MoveSelectionLeft),
            KeyCode::Right => Self::in_roll_phase(phase, GameAction::MoveSelectionRight),
            KeyCode::Enter => match phase {
                TurnPhase::RollPhase => KeyAction::Submit(GameAction::Confirm),
                TurnPhase::GameOver => KeyAction::Submit(GameAction::RestartGame),
                _ => KeyAction::None,
            },
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn expression_key(code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char(ch) => KeyAction::Insert(ch),
            KeyCode::Backspace => KeyAction::DeleteBackward,
            KeyCode::Enter => KeyAction::SubmitExpression,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(raw: char, phase: TurnPhase) -> KeyAction {
        match (raw.to_ascii_lowercase(), phase) {
            ('q', _) => KeyAction::Quit,
            ('r', TurnPhase::TurnStart) => KeyAction::Submit(GameAction::Roll),
            ('h', _) => Self::in_roll_phase(phase, GameAction::MoveSelectionLeft),
            ('l', _) => Self::in_roll_phase(phase, GameAction::MoveSelectionRight),
            (' ', TurnPhase::RollPhase) => KeyAction::Submit(GameAction::ToggleSelection),
            (' ', TurnPhase::ResultsPhase) => KeyAction::Submit(GameAction::ContinueRound),
            _ => KeyAction::None,
        }
    }

    fn in_roll_phase(phase: TurnPhase, action: GameAction) -> KeyAction {
        if phase == TurnPhase::RollPhase {
            KeyAction::Submit(action)
        } else {
            KeyAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(ch))
        }
    }

    #[test]
    fn maps_roll_only_at_turn_start() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('r')), TurnPhase::TurnStart),
            KeyAction::Submit(GameAction::Roll)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('R')), TurnPhase::TurnStart),
            KeyAction::Submit(GameAction::Roll)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('r')), TurnPhase::RollPhase),
            KeyAction::None
        );
    }

    #[test]
    fn maps_selection_keys_in_roll_phase() {
        let handler = InputHandler::new();
        let phase = TurnPhase::RollPhase;
        assert_eq!(
            handler.handle_key(key(KeyCode::Left), phase),
            KeyAction::Submit(GameAction::MoveSelectionLeft)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('l')), phase),
            KeyAction::Submit(GameAction::MoveSelectionRight)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' ')), phase),
            KeyAction::Submit(GameAction::ToggleSelection)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), phase),
            KeyAction::Submit(GameAction::Confirm)
        );
    }

    #[test]
    fn space_continues_and_enter_restarts() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' ')), TurnPhase::ResultsPhase),
            KeyAction::Submit(GameAction::ContinueRound)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), TurnPhase::GameOver),
            KeyAction::Submit(GameAction::RestartGame)
        );
    }

    #[test]
    fn expression_phase_edits_buffer() {
        let handler = InputHandler::new();
        let phase = TurnPhase::ExpressionPhase;
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), phase),
            KeyAction::Insert('q')
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' ')), phase),
            KeyAction::Insert(' ')
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace), phase),
            KeyAction::DeleteBackward
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), phase),
            KeyAction::SubmitExpression
        );
        assert_eq!(handler.handle_key(key(KeyCode::Esc), phase), KeyAction::Quit);
    }

    #[test]
    fn quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), TurnPhase::RollPhase),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(ctrl('c'), TurnPhase::ExpressionPhase),
            KeyAction::Quit
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), TurnPhase::TurnStart),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Tab), TurnPhase::ExpressionPhase),
            KeyAction::None
        );
    }
}
