//! Terminal UI frontend for the dice game.
//!
//! [`CliFrontend`] implements [`client_frontend_core::Frontend`]: it takes
//! ownership of the engine, reads keys through crossterm, dispatches one
//! action at a time and draws the resulting snapshot with ratatui.

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use logging::setup_logging;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
