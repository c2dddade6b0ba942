//! Status message and the reason the last expression was rejected.

use client_frontend_core::view_model::{PresentationMapper, ViewModel};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    theme: &T,
) {
    let status = &view_model.status;
    let mut lines: Vec<Line> = status.message.lines().map(Line::raw).collect();
    if !status.debug.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(status.debug.clone(), theme.style_debug()));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(paragraph, area);
}
