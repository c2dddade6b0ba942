//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from frontend-core.

use client_frontend_core::{
    message::MessageLevel,
    view_model::{DieView, PresentationMapper},
};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_die(&self, die: &DieView) -> Self::Style {
        let mut style = if die.selected {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        if die.under_cursor {
            style = self.emphasize(style).add_modifier(Modifier::UNDERLINED);
        }
        style
    }

    fn style_ailment(&self, active: bool) -> Self::Style {
        if active {
            Style::default().fg(Color::LightRed)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        }
    }

    fn style_lives(&self, current: i32, maximum: u32) -> Self::Style {
        let color = match (current, maximum) {
            (current, _) if current <= 0 => Color::Red,
            (1, max) if max > 1 => Color::LightRed,
            (current, max) if u32::try_from(current).unwrap_or(0) * 2 <= max => Color::Yellow,
            _ => Color::Green,
        };
        Style::default().fg(color)
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::LightGreen),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    fn style_debug(&self) -> Self::Style {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::ITALIC)
    }

    fn emphasize(&self, base_style: Self::Style) -> Self::Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_die_under_cursor_is_highlighted_and_bold() {
        let theme = RatatuiTheme;
        let style = theme.style_die(&DieView {
            value: 3,
            selected: true,
            under_cursor: true,
        });
        assert_eq!(style.bg, Some(Color::Yellow));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn lives_color_tracks_remaining() {
        let theme = RatatuiTheme;
        assert_eq!(theme.style_lives(3, 3).fg, Some(Color::Green));
        assert_eq!(theme.style_lives(1, 3).fg, Some(Color::LightRed));
        assert_eq!(theme.style_lives(0, 3).fg, Some(Color::Red));
    }
}
