//! Pokédex CLI - A command-line explorer for the Pokémon catalog API
//!
//! Runs the interactive REPL on stdin/stdout.

use std::io;

use anyhow::Context;
use tokio::io::BufReader;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::{repl, Config, Session};

/// Main entry point for the Pokédex explorer.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, quiet by default)
/// 2. Load configuration from environment variables
/// 3. Create the API client and its response cache
/// 4. Run the REPL until `exit`, end of input, or a shutdown signal
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs don't interleave with the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api={}, cache_ttl={}s, timeout={}s, page_size={}",
        config.api_base_url, config.cache_ttl, config.request_timeout, config.page_size
    );

    let mut session = Session::new(&config).context("failed to create API client")?;
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();

    let interrupted = tokio::select! {
        result = repl::run(&mut session, stdin, &mut stdout) => {
            result.context("REPL terminated")?;
            false
        }
        _ = shutdown_signal() => true,
    };

    if interrupted {
        println!();
        repl::commands::exit(&session, &mut io::stdout())?;
    }

    session.client().cache().stop();
    info!("Shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
