//! Widgets composing the terminal UI. Each exposes a `render` function.
pub mod ailments;
pub mod dice;
pub mod expression_input;
pub mod footer;
pub mod header;
pub mod messages;
pub mod player_stats;
pub mod status;
