//! Player stats widget displaying lives and progress.

use client_frontend_core::view_model::{PresentationMapper, ViewModel};
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
    view_model: &ViewModel,
    theme: &T,
) {
    let lives = view_model.lives;
    let hearts: String = (0..lives.maximum)
        .map(|index| if i64::from(index) < i64::from(lives.current) { '♥' } else { '♡' })
        .collect();

    let lines = vec![
        Line::from(vec![
            Span::styled("Lives: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{hearts} {}/{}", lives.current, lives.maximum),
                theme.style_lives(lives.current, lives.maximum),
            ),
        ]),
        Line::from(vec![
            Span::styled("Round: ", Style::default().fg(Color::White)),
            Span::raw(view_model.round.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Ailments: ", Style::default().fg(Color::White)),
            Span::raw(format!(
                "{}/{}",
                view_model.remaining_ailments(),
                view_model.ailments.len()
            )),
        ]),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Player"));

    frame.render_widget(paragraph, area);
}
