//! Terminal layout and input limits.
use std::env;

/// Settings that only the terminal frontend reads. Game rules live in
/// `SessionConfig`.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Reads `CLI_*` variables, clamping each to its minimum.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - History panel height in lines (default: 8)
    /// - `CLI_INPUT_CHAR_LIMIT` - Maximum expression length (default: 24)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(UiConfig::MIN_MESSAGE_PANEL_HEIGHT);
        }
        if let Some(limit) = read_env::<usize>("CLI_INPUT_CHAR_LIMIT") {
            config.ui.input_char_limit = limit.max(UiConfig::MIN_INPUT_CHAR_LIMIT);
        }

        config
    }
}

/// Panel sizes and the expression input limit.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of the history panel in lines (including borders).
    pub message_panel_height: u16,
    /// Characters accepted by the expression input.
    pub input_char_limit: usize,
}

impl UiConfig {
    pub const MIN_MESSAGE_PANEL_HEIGHT: u16 = 3;
    pub const MIN_INPUT_CHAR_LIMIT: usize = 8;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            input_char_limit: 24,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
