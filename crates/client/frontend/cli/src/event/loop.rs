//! Event loop orchestrating user input, engine dispatch, and rendering.
//!
//! The loop is the single owner of the engine. Each key press becomes at most
//! one [`GameAction`](game_core::GameAction), dispatched to completion before
//! the next key is read.

use anyhow::Result;
use tokio::time::{self, Duration};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};
use client_frontend_core::{EventConsumer, SessionEngine};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the engine and the UI state around it.
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) engine: SessionEngine,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) app_state: AppState,
    /// CLI UI configuration
    pub(crate) cli_config: CliConfig,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(engine: SessionEngine, consumer: C, cli_config: CliConfig) -> Self {
        Self {
            engine,
            input: InputHandler::new(),
            consumer,
            app_state: AppState::new(cli_config.ui.input_char_limit),
            cli_config,
        }
    }

    /// Runs until the player quits. Returns the consumer so the caller can
    /// inspect the history.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        let size = terminal.size()?;
        self.dispatch(game_core::GameAction::Resize {
            width: size.width,
            height: size.height,
        })?;
        self.render(terminal)?;

        loop {
            tokio::select! {
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("interrupt received");
                    break;
                }
            }
        }

        Ok(self.consumer)
    }
}
