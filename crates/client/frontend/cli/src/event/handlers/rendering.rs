//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::{EventConsumer, view_model::ViewModel};

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Render the current engine snapshot.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let snapshot = self.engine.snapshot()?;
        let message_limit = usize::from(self.cli_config.ui.message_panel_height);
        let view_model = ViewModel::from_snapshot(&snapshot, self.consumer.message_log(), message_limit);

        let ctx = ui::RenderContext {
            view_model: &view_model,
            app_state: &self.app_state,
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        ui::render_with_view_model(terminal, &ctx)
    }
}
