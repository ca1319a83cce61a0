mod app_state;
mod cli;
mod config;
mod consts;
mod errors;
mod server;
mod tokens;

use anyhow::Context as _;
use app_state::AppState;
use clap::Parser as _;
use cli::args::Args;
use errors::{ToolboxError, init_error};
use log::info;
use server::create_server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ToolboxError> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(args.color.use_colors()))
        .try_init()
        .context("Failed to initialise tracing")
        .map_err(init_error)?;

    info!(
        "Starting toolbox server version {}",
        env!("CARGO_PKG_VERSION")
    );

    let app_state = AppState::try_new(args.config_path)
        .await
        .context("Failed to initialise app state")
        .map_err(init_error)?;

    create_server(app_state)
        .await
        .context("Failed to start server")
        .map_err(init_error)
}
