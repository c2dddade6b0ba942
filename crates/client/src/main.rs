//! Dice game client binary.
//!
//! This binary is the composition root: it loads configuration, sets up
//! logging, builds the engine and runs it inside the selected frontend.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Default game
//! cargo run -p dicer-client
//!
//! # Reproducible game with four dice
//! DICER_SEED=42 DICER_NUM_DICE=4 cargo run -p dicer-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use client_frontend_core::SessionConfig;
    use dicer_client::{Client, build_engine};

    // 1. Load configuration from environment
    let session_config = SessionConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(session_config.session_id.as_deref())?;

    tracing::info!("Starting dice client");
    tracing::info!(
        dice = session_config.game.num_dice,
        lives = session_config.game.max_lives,
        ailments = session_config.game.num_ailments,
        "game configuration"
    );

    // 3. Build the engine
    let engine = build_engine(&session_config)?;

    // 4. Build Frontend
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder().engine(engine).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
