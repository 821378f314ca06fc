//! Fatewheel client binary.
//!
//! Composition root that assembles:
//! 1. Configuration from the environment (and `.env`)
//! 2. File logging for the session
//! 3. Content (data directory or the embedded defaults)
//! 4. Save repository, terminal host and RNG
//!
//! and hands them to the main menu.

use anyhow::Result;
use client_frontend_cli::{CliConfig, TerminalIo, logging};
use fatewheel_client::App;
use game_content::ContentFactory;
use game_core::GameRng;
use runtime::{FileSaveRepository, RuntimeConfig, default_log_dir};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&runtime_config.session_id, &default_log_dir())?;

    tracing::info!("Starting Fatewheel client");
    tracing::info!("Save directory: {}", runtime_config.save_dir.display());

    // 3. Load content
    let factory = match &runtime_config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::embedded(),
    };
    let content = factory.load()?;
    tracing::info!(
        skills = content.skills.len(),
        gates = content.gates.gates.len(),
        "content loaded"
    );

    // 4. Build collaborators and run
    let saves = FileSaveRepository::new(&runtime_config.save_dir)?;
    let mut io = TerminalIo::stdio(cli_config);
    App::new(&content, &saves, GameRng::from_entropy()).run(&mut io)?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
