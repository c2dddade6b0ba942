//! Frontend configuration structures and loaders.
//!
//! [`SessionConfig`] carries the game rules a frontend starts the engine
//! with; [`FrontendConfig`] holds UI settings shared by every frontend.

use std::env;

use game_core::GameConfig;

/// Settings for one play session.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    pub game: GameConfig,
    /// Fixed dice seed; a random one is drawn when absent.
    pub seed: Option<u64>,
    /// Name of the log directory for this session.
    pub session_id: Option<String>,
}

impl SessionConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DICER_NUM_DICE` - Dice per round (default: 3)
    /// - `DICER_MAX_LIVES` - Starting lives (default: 3)
    /// - `DICER_NUM_AILMENTS` - Ailments to clear (default: 9)
    /// - `DICER_SEED` - Dice seed for a reproducible game
    /// - `DICER_SESSION_ID` - Log directory name (default: timestamp)
    ///
    /// Values are not range-checked here; [`GameConfig::validate`] does that
    /// when the engine is built.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(num_dice) = read_env::<usize>("DICER_NUM_DICE") {
            config.game = config.game.with_num_dice(num_dice);
        }
        if let Some(max_lives) = read_env::<u32>("DICER_MAX_LIVES") {
            config.game = config.game.with_max_lives(max_lives);
        }
        if let Some(num_ailments) = read_env::<u32>("DICER_NUM_AILMENTS") {
            config.game = config.game.with_num_ailments(num_ailments);
        }
        config.seed = read_env::<u64>("DICER_SEED");
        config.session_id = env::var("DICER_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        config
    }
}

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - History log capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
