//! Dice row with reroll selection and cursor.

use client_frontend_core::view_model::{DieView, PresentationMapper, ViewModel};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    theme: &T,
) {
    let block = Block::default().borders(Borders::ALL).title("Dice");

    if view_model.dice.is_empty() {
        let hint = Paragraph::new(Line::styled(
            "Press r to roll",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let show_selection = view_model.shows_selection();
    let mut faces = Vec::with_capacity(view_model.dice.len() * 2);
    let mut markers = Vec::with_capacity(view_model.dice.len() * 2);
    for die in &view_model.dice {
        let shown = if show_selection {
            *die
        } else {
            DieView {
                selected: false,
                under_cursor: false,
                ..*die
            }
        };
        faces.push(Span::styled(format!("[ {} ]", die.value), theme.style_die(&shown)));
        faces.push(Span::raw("  "));
        markers.push(Span::raw(if shown.under_cursor { "  ^  " } else { "     " }));
        markers.push(Span::raw("  "));
    }

    let paragraph = Paragraph::new(vec![Line::from(faces), Line::from(markers)])
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
