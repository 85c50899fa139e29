//! genrelay server - headless daemon
//!
//! - `POST /callGemini` authenticated relay to the generation API
//! - `GET /health`, `GET /healthz` liveness probes
//!
//! The `encode-wav` subcommand wraps raw PCM files in a WAVE container.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod router;
mod server_utils;
mod state;

use cli::{Cli, Commands};
use genrelay_core::RelayConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    match cli.command {
        Some(Commands::EncodeWav { input, output, sample_rate, channels, frames }) => {
            commands::handle_encode_wav(&input, &output, sample_rate, channels, frames)?;
            Ok(())
        },
        Some(Commands::Serve) | None => run_server(&cli).await,
    }
}

async fn run_server(cli: &Cli) -> Result<()> {
    let config = RelayConfig::from_file_and_env(cli.config.as_deref())?;
    info!("🚀 genrelay starting with {:?}", config);

    let relay_state = state::build_relay_state(&config)?;
    let app = router::build_router(relay_state, config.body_limit_bytes);

    let listener = server_utils::create_listener(&cli.host, cli.port).await?;
    info!("🌐 Relay endpoint at http://{}:{}/callGemini", cli.host, cli.port);

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("✅ Server stopped");
    Ok(())
}
