//! userhub gateway binary.
//!
//! - Config from `USERHUB_CONFIG` (default `userhub.yaml`, built-in defaults if absent)
//! - `/api/users` CRUD behind token-bucket admission control
//! - Graceful shutdown on Ctrl-C / SIGTERM with a bounded drain window

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tracing_subscriber::{fmt, EnvFilter};

use userhub_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "userhub-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_from_env()?;
    let listen: SocketAddr = cfg.server.listen.parse()?;
    let grace = Duration::from_millis(cfg.server.shutdown_grace_ms);

    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen).await?;
    tracing::info!(
        %listen,
        capacity = state.limiter().capacity(),
        refill_per_sec = state.limiter().refill_per_sec(),
        "userhub-gateway starting"
    );

    let stop = Arc::new(Notify::new());
    let server = {
        let stop = Arc::clone(&stop);
        axum::serve(listener, app).with_graceful_shutdown(async move { stop.notified().await })
    };
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        res = &mut server => {
            res??;
            return Ok(());
        }
        _ = shutdown_signal() => {}
    }

    state.set_draining();
    stop.notify_one();
    tracing::info!(grace_ms = grace.as_millis() as u64, "draining in-flight requests");

    match tokio::time::timeout(grace, server).await {
        Ok(res) => res??,
        Err(_) => tracing::warn!("drain window elapsed, forcing shutdown"),
    }
    tracing::info!("userhub-gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
