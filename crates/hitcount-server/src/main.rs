//! hitcount server binary.
//!
//! - `GET /`        : greeting JSON
//! - `GET /healthz` : liveness JSON
//! - `GET /metrics` : per-endpoint hit counters (Prometheus text)
//!
//! Exits non-zero when config is invalid or the listen address cannot be bound.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use hitcount_core::error::Result;
use hitcount_server::{app_state::AppState, config, router, server};

#[tokio::main]
async fn main() -> ExitCode {
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            // RUST_LOG is ignored here so the failure is always printed.
            init_tracing(EnvFilter::new("error"));
            tracing::error!(error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log.level)),
    );

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if tracing::enabled!(tracing::Level::ERROR) {
                tracing::error!(error = %e, "hitcount-server exiting");
            } else {
                eprintln!("hitcount-server exiting: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: EnvFilter) {
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cfg: config::ServerConfig) -> Result<()> {
    let listen = cfg.service.listen_addr()?;
    let name = cfg.service.name.clone();

    let app = router::build_router(AppState::new(cfg));
    let listener = server::bind(listen).await?;

    tracing::info!(
        %listen,
        service = %name,
        version = env!("CARGO_PKG_VERSION"),
        "hitcount-server starting"
    );

    server::serve(listener, app).await?;

    tracing::info!("hitcount-server stopped");
    Ok(())
}
