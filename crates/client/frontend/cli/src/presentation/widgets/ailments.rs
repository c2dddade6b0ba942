//! Ailment grid: active numbers in color, cleared ones struck out.

use client_frontend_core::view_model::{PresentationMapper, ViewModel};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const PER_ROW: usize = 6;

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    theme: &T,
) {
    let lines: Vec<Line> = view_model
        .ailments
        .chunks(PER_ROW)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|ailment| {
                    [
                        Span::styled(
                            format!("{:>2}", ailment.number),
                            theme.style_ailment(ailment.active),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Ailments"));
    frame.render_widget(paragraph, area);
}
