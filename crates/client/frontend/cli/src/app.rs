//! Glue code tying the engine and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{
    EventConsumer, FrontendConfig, SessionEngine, frontend::Frontend, message::MessageLog,
};

/// Terminal frontend. Owns the engine only for the duration of [`Frontend::run`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }

    fn initial_log(&self, engine: &SessionEngine) -> MessageLog {
        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        let config = engine.config();
        messages.push_text(format!(
            "Welcome! Clear ailments 1..={} using {} dice and {} lives.",
            config.num_ailments, config.num_dice, config.max_lives
        ));
        messages
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, engine: SessionEngine) -> Result<()> {
        tracing::info!("CLI frontend starting");

        let consumer = CliEventConsumer::new(self.initial_log(&engine));
        let event_loop = EventLoop::new(engine, consumer, self.cli_config.clone());

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let consumer = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            history = consumer.message_log().len(),
            "CLI frontend exiting"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::MessageConfig;
    use game_core::{DieRoller, GameConfig, GameEngine, ScriptedRoller};

    #[test]
    fn history_starts_with_welcome_line() {
        let config = GameConfig::default().with_num_dice(4);
        let roller: Box<dyn DieRoller + Send> = Box::new(ScriptedRoller::new([1]));
        let engine = GameEngine::new(config, roller).unwrap();
        let frontend = CliFrontend::new(
            FrontendConfig::new(MessageConfig { capacity: 4 }),
            CliConfig::default(),
        );

        let consumer = CliEventConsumer::new(frontend.initial_log(&engine));
        let log = consumer.message_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log.capacity(), 4);
        assert_eq!(
            log.iter().next().map(|entry| entry.text.as_str()),
            Some("Welcome! Clear ailments 1..=9 using 4 dice and 3 lives.")
        );
    }
}
