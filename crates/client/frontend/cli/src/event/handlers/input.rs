//! Input handling and engine dispatch.

use anyhow::{Context, Result};
use client_frontend_core::{EventConsumer, EventImpact};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use game_core::GameAction;
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Poll for one terminal event. Returns `true` when the loop should stop.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal)
            }
            TermEvent::Resize(width, height) => {
                self.dispatch(GameAction::Resize { width, height })?;
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        let phase = self.engine.phase()?;
        match self.input.handle_key(key, phase) {
            KeyAction::Quit => {
                self.app_state.quitting = true;
                self.consumer.message_log_mut().push_text("Quitting...");
                self.render(terminal)?;
                self.dispatch(GameAction::Quit)
            }
            KeyAction::Submit(action) => self.dispatch_and_render(action, terminal),
            KeyAction::SubmitExpression => {
                let expression = self.app_state.input.take();
                self.dispatch_and_render(GameAction::SubmitExpression(expression), terminal)
            }
            KeyAction::Insert(ch) => {
                if self.app_state.input.insert(ch) {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            KeyAction::DeleteBackward => {
                if self.app_state.input.backspace() {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            KeyAction::None => Ok(false),
        }
    }

    fn dispatch_and_render(&mut self, action: GameAction, terminal: &mut Tui) -> Result<bool> {
        let quit = self.dispatch(action)?;
        self.render(terminal)?;
        Ok(quit)
    }

    /// Sends `action` to the engine and feeds the produced events to the
    /// consumer. Returns `true` when the engine asked to quit.
    pub(in crate::event) fn dispatch(&mut self, action: GameAction) -> Result<bool> {
        let dispatch = self
            .engine
            .dispatch(action)
            .context("game engine failed")?;

        let impact = dispatch
            .events
            .iter()
            .fold(EventImpact::none(), |impact, event| {
                impact.combine(self.consumer.on_event(event))
            });
        if impact.requires_redraw {
            tracing::trace!(events = dispatch.events.len(), "history updated");
        }

        Ok(dispatch.should_quit())
    }
}
