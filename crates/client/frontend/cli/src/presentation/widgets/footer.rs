//! Footer with the key bindings for the current phase.

use client_frontend_core::view_model::ViewModel;
use game_core::TurnPhase;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, app_state: &AppState) {
    let quit_hint = if view_model.phase == TurnPhase::ExpressionPhase {
        "[ esc ] to quit"
    } else {
        "[ q ] to quit"
    };

    let line = if app_state.quitting {
        Line::styled("Goodbye!", Style::default().fg(Color::Yellow))
    } else {
        Line::from(vec![
            Span::styled(
                view_model.status.instructions.clone(),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("  "),
            Span::styled(quit_hint, Style::default().fg(Color::DarkGray)),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}
