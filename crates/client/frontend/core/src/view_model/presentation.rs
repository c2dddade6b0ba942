//! Framework-agnostic presentation mapping traits.
//!
//! Each frontend (TUI, GUI, Web) implements [`PresentationMapper`] with its
//! own styling system while sharing the same view model.

use super::DieView;
use crate::message::MessageLevel;

/// Maps game elements to a frontend's style type.
///
/// # Example
///
/// ```ignore
/// impl PresentationMapper for RatatuiTheme {
///     type Style = ratatui::style::Style;
///
///     fn style_die(&self, die: &DieView) -> Self::Style {
///         let style = Style::default().fg(Color::White);
///         if die.selected { style.add_modifier(Modifier::REVERSED) } else { style }
///     }
///     // ...
/// }
/// ```
pub trait PresentationMapper {
    /// Style type for this frontend (e.g., `ratatui::style::Style`).
    type Style: Clone;

    /// Style for a die face, reflecting selection and cursor.
    fn style_die(&self, die: &DieView) -> Self::Style;

    /// Style for an ailment number.
    fn style_ailment(&self, active: bool) -> Self::Style;

    /// Style for the lives counter.
    fn style_lives(&self, current: i32, maximum: u32) -> Self::Style;

    /// Style for history entries based on level.
    fn style_message(&self, level: MessageLevel) -> Self::Style;

    /// Style for the rejection reason under the status message.
    fn style_debug(&self) -> Self::Style;

    /// Emphasize an element (adds bold, glow, etc).
    fn emphasize(&self, base_style: Self::Style) -> Self::Style;
}
