//! HTTP surface of the family directory.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, patch},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod payloads;
pub mod routes;
pub mod state;

use crate::config::Config;
use crate::db::fixtures::Fixtures;
use crate::error::CareResult;
use routes::{
    add_member_handler, contract_handler, contracts_handler, family_handler, member_handler,
    toggle_star_handler,
};
use state::AppState;

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG`.
pub fn init_tracing() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/family", get(family_handler).post(add_member_handler))
        .route("/family/:id", get(member_handler))
        .route("/family/:id/star", patch(toggle_star_handler))
        .route("/contracts", get(contracts_handler))
        .route("/contracts/:id", get(contract_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn start_server(config: Config) -> CareResult<()> {
    let fixtures = match &config.fixtures_path {
        Some(path) => {
            info!("Loading fixtures from {}", path.display());
            Fixtures::from_json_file(path)?
        }
        None => Fixtures::builtin()?,
    };

    info!("Initializing state...");
    let state = AppState::new(config, &fixtures)?;

    let address = state.config.address();
    let app = router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
