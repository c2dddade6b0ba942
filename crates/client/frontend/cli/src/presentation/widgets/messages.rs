//! History panel, oldest entry on top.

use client_frontend_core::{message::MessageEntry, view_model::PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    messages: &[MessageEntry],
    theme: &T,
) {
    // Borders take two lines.
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = messages.len().saturating_sub(visible);

    let lines: Vec<Line> = messages
        .iter()
        .skip(skip)
        .map(|entry| {
            let prefix = entry
                .round
                .map(|round| format!("[{round}] "))
                .unwrap_or_default();
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::DarkGray)),
                Span::styled(entry.text.clone(), theme.style_message(entry.level)),
            ])
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("History"));
    frame.render_widget(paragraph, area);
}
