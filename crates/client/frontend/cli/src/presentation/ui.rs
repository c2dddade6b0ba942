//! UI rendering with ViewModel.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::AppState,
};
use client_frontend_core::view_model::ViewModel;

const SIDEBAR_WIDTH: u16 = 26;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

/// Render one frame.
///
/// ```text
/// +--------------------- header ---------------------+
/// | dice                          | player stats     |
/// | expression input              | ailments         |
/// | status                        |                  |
/// +-------------------- history ---------------------+
/// footer (key hints)
/// ```
pub fn render_with_view_model(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(11),                          // Play area
                Constraint::Length(ctx.message_panel_height), // History
                Constraint::Length(2),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, rows[0], ctx.view_model);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(SIDEBAR_WIDTH)])
            .split(rows[1]);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Dice
                Constraint::Length(3), // Expression input
                Constraint::Min(3),    // Status
            ])
            .split(columns[0]);

        widgets::dice::render(frame, main[0], ctx.view_model, &theme);
        widgets::expression_input::render(frame, main[1], ctx.view_model, &ctx.app_state.input);
        widgets::status::render(frame, main[2], ctx.view_model, &theme);

        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(3)])
            .split(columns[1]);

        widgets::player_stats::render(frame, sidebar[0], ctx.view_model, &theme);
        widgets::ailments::render(frame, sidebar[1], ctx.view_model, &theme);

        widgets::messages::render(frame, rows[2], &ctx.view_model.messages, &theme);
        widgets::footer::render(frame, rows[3], ctx.view_model, ctx.app_state);
    })?;

    Ok(())
}
