use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use idea_config::IdeaConfig;
use idea_server::{AppState, serve};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("ideabox error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = IdeaConfig::load_with_dotenv().context("failed to load configuration")?;
    init_tracing();

    for warning in config.insecure_defaults() {
        warn!("{warning}; set it before deploying");
    }
    info!(environment = %config.server.environment, "starting ideabox");

    let state = AppState::from_config(&config)
        .await
        .with_context(|| format!("failed to open database at {}", config.database.path))?;
    info!(path = %config.database.path, "database ready");

    serve(
        Arc::new(state),
        &config.server.bind_address(),
        shutdown_signal(),
    )
    .await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("IDEABOX_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                warn!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown signal received");
}
