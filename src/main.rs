use std::sync::Arc;

use food_rescue::api;
use food_rescue::config::{Config, LogFormat};
use food_rescue::error::AppError;
use food_rescue::state::AppState;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false);
    match config.log_format {
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let shared_state = Arc::new(AppState::from_config(&config));
    tracing::info!(
        donations = shared_state.donations.len(),
        volunteers = shared_state.volunteers.len(),
        policy = ?shared_state.donations.policy(),
        "stores ready"
    );

    let app = api::rest::router(shared_state)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(api::cors::build_cors_layer(config.cors_origins.clone()));

    let bind_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| AppError::Internal(format!("failed to bind {bind_addr}: {err}")))?;

    tracing::info!(http_port = config.http_port, "http server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::Internal(format!("server error: {err}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
