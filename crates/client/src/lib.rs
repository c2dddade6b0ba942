//! Top-level client wiring the game engine to a frontend.
//!
//! ```text
//! Client (composition root)
//!   ├─→ GameEngine (rules, phase stack, dice)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The engine is plain synchronous state. The frontend takes ownership of it
//! for the session and drives it one [`game_core::GameAction`] at a time, so
//! no background worker or channel sits between the two.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::{Frontend, SessionEngine};

use anyhow::Result;
use client_frontend_core::SessionConfig;
use game_core::{DieRoller, GameEngine, PcgRoller};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects the engine and the frontend
/// 2. `Client::run()` hands the engine to the frontend
/// 3. The frontend returns when the player quits
pub struct Client {
    engine: SessionEngine,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the player quits.
    ///
    /// # Errors
    ///
    /// Returns whatever the frontend reports: terminal failures or a fatal
    /// engine error.
    pub async fn run(self) -> Result<()> {
        let Client {
            engine,
            mut frontend,
        } = self;

        tracing::info!(round = engine.turn().round, "handing engine to frontend");
        let result = frontend.run(engine).await;

        if let Err(error) = &result {
            tracing::error!("Frontend error: {error:#}");
        }
        result
    }
}

/// Builds the session engine with a seeded roller.
///
/// The seed is taken from `config.seed` or drawn at random, and is logged
/// either way so a game can be replayed.
///
/// # Errors
///
/// Fails when the game configuration is out of range.
pub fn build_engine(config: &SessionConfig) -> Result<SessionEngine> {
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "dice seed");

    let roller: Box<dyn DieRoller + Send> = Box::new(PcgRoller::from_seed(seed));
    Ok(GameEngine::new(config.game.clone(), roller)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use game_core::{GameAction, GameConfig, ScriptedRoller, TurnPhase};
    use std::sync::{Arc, Mutex};

    /// Plays a fixed action list and records the phase after each step.
    struct ScriptedFrontend {
        actions: Vec<GameAction>,
        phases: Arc<Mutex<Vec<TurnPhase>>>,
    }

    #[async_trait]
    impl Frontend for ScriptedFrontend {
        async fn run(&mut self, mut engine: SessionEngine) -> Result<()> {
            for action in self.actions.drain(..) {
                let dispatch = engine.dispatch(action)?;
                self.phases.lock().unwrap().push(engine.phase()?);
                if dispatch.should_quit() {
                    break;
                }
            }
            Ok(())
        }
    }

    fn scripted_engine(faces: &[u8]) -> SessionEngine {
        let roller: Box<dyn DieRoller + Send> = Box::new(ScriptedRoller::new(faces.to_vec()));
        GameEngine::new(GameConfig::default(), roller).unwrap()
    }

    #[tokio::test]
    async fn client_hands_engine_to_frontend() {
        let phases = Arc::new(Mutex::new(Vec::new()));
        let frontend = ScriptedFrontend {
            actions: vec![
                GameAction::Roll,
                GameAction::Confirm,
                GameAction::SubmitExpression("1 + 2 - 3".into()),
                GameAction::Quit,
                GameAction::Roll,
            ],
            phases: Arc::clone(&phases),
        };

        Client::builder()
            .engine(scripted_engine(&[1, 2, 3]))
            .frontend(frontend)
            .build()
            .unwrap()
            .run()
            .await
            .unwrap();

        // "1 + 2 - 3" is 0, which is not an ailment, so the round is lost
        // but the game goes on. The action after Quit never runs.
        assert_eq!(
            *phases.lock().unwrap(),
            vec![
                TurnPhase::RollPhase,
                TurnPhase::ExpressionPhase,
                TurnPhase::ResultsPhase,
                TurnPhase::ResultsPhase,
            ]
        );
    }

    #[test]
    fn build_engine_respects_seed() {
        let config = SessionConfig {
            seed: Some(7),
            ..SessionConfig::default()
        };
        let mut first = build_engine(&config).unwrap();
        let mut second = build_engine(&config).unwrap();
        first.dispatch(GameAction::Roll).unwrap();
        second.dispatch(GameAction::Roll).unwrap();
        assert_eq!(first.turn().dice_values(), second.turn().dice_values());
    }

    #[test]
    fn build_engine_rejects_bad_config() {
        let config = SessionConfig {
            game: GameConfig::default().with_num_dice(0),
            ..SessionConfig::default()
        };
        assert!(build_engine(&config).is_err());
    }
}
