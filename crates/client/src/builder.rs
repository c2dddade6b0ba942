//! Client builder with dependency injection pattern.

use crate::{Client, Frontend, SessionEngine};
use anyhow::{Context, Result};

/// Builder for constructing a Client with proper validation.
///
/// Both the engine and the frontend are required; `build()` fails fast when
/// either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    engine: Option<SessionEngine>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine (required).
    ///
    /// Usually built with [`crate::build_engine`] from a
    /// [`SessionConfig`](client_frontend_core::SessionConfig).
    pub fn engine(mut self, engine: SessionEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let engine = self
            .engine
            .context("Engine is required. Use .engine() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { engine, frontend })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_engine_is_reported() {
        let error = ClientBuilder::new().build().err().unwrap();
        assert!(error.to_string().contains("Engine is required"));
    }
}
