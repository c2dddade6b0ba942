//! Header widget displaying the title, round and phase.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const LOGO: &str = "⚀ DICER ⚅";

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel) {
    let text = vec![Line::from(vec![
        Span::styled(
            LOGO,
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Round: "),
        Span::styled(
            view_model.round.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | Phase: "),
        Span::styled(
            view_model.phase.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Game"));

    frame.render_widget(paragraph, area);
}
