//! Order Accumulator Binary
//!
//! Starts the order accumulator: the exposure ledger, the FIX order-entry
//! gateway over it, and the HTTP control surface.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-accumulator
//! ```
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HTTP_PORT`: HTTP server port (default: 50061)
//! - `MAX_EXPOSURE`: Initial exposure limit (default: 100000000)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use order_accumulator::domain::ledger::ExposureLedger;
use order_accumulator::infrastructure::fix::{ChannelFixSender, OrderEntryGateway};
use order_accumulator::infrastructure::http::{AppState, create_router};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::net::TcpListener;
use tokio::signal;

/// Default HTTP server port.
const DEFAULT_HTTP_PORT: u16 = 50061;

/// Default exposure limit when `MAX_EXPOSURE` is unset.
const DEFAULT_MAX_EXPOSURE: Decimal = dec!(100_000_000);

/// Parsed configuration from environment variables.
struct AccumulatorConfig {
    http_port: u16,
    max_exposure: Decimal,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting Order Accumulator");

    let config = parse_config()?;
    log_config(&config);

    let ledger = Arc::new(ExposureLedger::new(config.max_exposure)?);

    // The session engine attaches its inbound callback to this gateway; it
    // is constructed here so both surfaces share one ledger.
    let (sender, mut outbound_rx) = ChannelFixSender::new();
    let _gateway = Arc::new(OrderEntryGateway::new(Arc::clone(&ledger), sender));

    // The session engine attaches here; until it does, outbound reports are
    // drained and logged so the channel never backs up.
    tokio::spawn(async move {
        while let Some(outbound) = outbound_rx.recv().await {
            tracing::info!(
                session_id = %outbound.session_id,
                cl_ord_id = %outbound.report.cl_ord_id,
                exec_type = %outbound.report.exec_type,
                "Execution report ready for delivery"
            );
        }
    });

    let http_state = AppState {
        ledger: Arc::clone(&ledger),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(http_state);

    let http_addr: SocketAddr = format!("0.0.0.0:{}", config.http_port).parse()?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET    /health");
    tracing::info!("  GET    /exposure/symbol/all");
    tracing::info!("  GET    /exposure/symbol/{{symbol}}");
    tracing::info!("  GET    /exposure/default-max-exposure");
    tracing::info!("  PUT    /exposure/default-max-exposure");
    tracing::info!("  GET    /orders/symbol/all");
    tracing::info!("  GET    /orders/symbol/{{symbol}}");
    tracing::info!("  DELETE /orders/symbol/all");
    tracing::info!("  DELETE /orders/symbol/{{symbol}}");

    let listener = TcpListener::bind(http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Order accumulator stopped");
    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "order_accumulator=info"
                    .parse()
                    .expect("static directive 'order_accumulator=info' is valid"),
            ),
        )
        .init();
}

/// Parse configuration from environment variables.
fn parse_config() -> Result<AccumulatorConfig, Box<dyn std::error::Error>> {
    let http_port: u16 = std::env::var("HTTP_PORT")
        .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string())
        .parse()
        .unwrap_or(DEFAULT_HTTP_PORT);

    let max_exposure = match std::env::var("MAX_EXPOSURE") {
        Ok(raw) => raw
            .parse::<Decimal>()
            .map_err(|e| format!("MAX_EXPOSURE is not a valid decimal: {e}"))?,
        Err(_) => DEFAULT_MAX_EXPOSURE,
    };

    Ok(AccumulatorConfig {
        http_port,
        max_exposure,
    })
}

/// Log the parsed configuration.
fn log_config(config: &AccumulatorConfig) {
    tracing::info!(
        http_port = config.http_port,
        max_exposure = %config.max_exposure,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed. Failure to install
/// handlers means the process cannot respond to termination signals, so it
/// is better to fail fast during startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
