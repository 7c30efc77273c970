//! Health server entry point.

use std::process::ExitCode;

use health_server::config::Config;
use health_server::error::Result;
use tokio::signal;

/// Process signal that ends the serve loop.
#[derive(Debug, Clone, Copy)]
enum Signal {
    Interrupt,
    Terminate,
}

#[cfg(unix)]
async fn terminate() -> std::io::Result<()> {
    signal::unix::signal(signal::unix::SignalKind::terminate())?
        .recv()
        .await;
    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> std::io::Result<()> {
    std::future::pending().await
}

/// Resolves with the first of SIGINT or SIGTERM. A handler that cannot be
/// installed is logged and never fires.
async fn wait_for_signal() -> Signal {
    let sigint = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "SIGINT handler unavailable");
            std::future::pending::<()>().await;
        }
        Signal::Interrupt
    };
    let sigterm = async {
        if let Err(err) = terminate().await {
            tracing::error!(error = %err, "SIGTERM handler unavailable");
            std::future::pending::<()>().await;
        }
        Signal::Terminate
    };

    tokio::select! {
        received = sigint => received,
        received = sigterm => received,
    }
}

async fn shutdown_signal() {
    let received = wait_for_signal().await;
    tracing::info!(signal = ?received, "starting graceful shutdown");
}

async fn run(config: Config) -> Result<()> {
    let listener = health_server::bind(&config).await?;
    health_server::serve(listener, shutdown_signal()).await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            // No subscriber yet; the log format itself may be what failed.
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    health_server::telemetry::init(&config);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server exited with error");
            ExitCode::FAILURE
        }
    }
}
