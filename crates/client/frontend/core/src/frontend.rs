//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use game_core::{DieRoller, GameEngine};

/// Engine type handed to frontends. The roller is boxed so the binary can
/// pick seeded or scripted dice at runtime.
pub type SessionEngine = GameEngine<Box<dyn DieRoller + Send>>;

/// Frontend abstraction for UI layers.
///
/// The frontend owns the engine for the whole session: it turns input into
/// [`game_core::GameAction`]s, dispatches them one at a time and renders the
/// resulting snapshot.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::{Frontend, SessionEngine};
/// use game_core::GameAction;
/// use anyhow::Result;
///
/// struct Scripted(Vec<GameAction>);
///
/// #[async_trait]
/// impl Frontend for Scripted {
///     async fn run(&mut self, mut engine: SessionEngine) -> Result<()> {
///         for action in self.0.drain(..) {
///             if engine.dispatch(action)?.should_quit() {
///                 break;
///             }
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the player quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or the engine reports a fatal
    /// phase-stack error.
    async fn run(&mut self, engine: SessionEngine) -> Result<()>;
}
