//! Single-line expression input.

use client_frontend_core::view_model::ViewModel;
use game_core::TurnPhase;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::InputBuffer;

const PLACEHOLDER: &str = "( 1 + 2 ) * 3";

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, input: &InputBuffer) {
    let active = view_model.phase == TurnPhase::ExpressionPhase;
    let border = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled("> ", border)];
    if input.is_empty() && active {
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::raw(input.as_str()));
    }
    if active {
        spans.push(Span::styled(
            "_",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let title = format!(
        "Expression ({}/{})",
        input.as_str().chars().count(),
        input.limit()
    );
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    frame.render_widget(paragraph, area);
}
