//! Cross-frontend primitives for presenting the game.
//!
//! Houses configuration, message logging, event handling, and view-model
//! types that both the CLI and future graphical clients can reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig, SessionConfig};
pub use event::{EventConsumer, EventImpact, history_entry};
pub use frontend::{Frontend, SessionEngine};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{DieView, LivesView, PresentationMapper, StatusView, ViewModel};
