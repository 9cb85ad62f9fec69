use anyhow::Context;
use axum::{Router, http::HeaderValue};
use parcel_service::{
    domain::ports::ParcelService,
    inbound::{ParcelRouterState, parcel_router},
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;

mod health;
pub mod swagger;

/// browser origins of the map frontends
const ORIGINS: [HeaderValue; 2] = [
    HeaderValue::from_static("http://localhost:3000"),
    HeaderValue::from_static("http://localhost:5173"),
];

pub async fn setup_and_serve<T: ParcelService>(config: &Config, service: T) -> anyhow::Result<()> {
    let app = app_router(service);

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind to address {}", bind_address))?;

    tracing::info!(
        "parcel service is up and running with environment {} on port {}",
        config.environment,
        config.port
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error running axum server")
}

fn app_router<T: ParcelService>(service: T) -> Router {
    parcel_router(ParcelRouterState::new(service))
        .layer(TraceLayer::new_for_http())
        .merge(health::router())
        .merge(swagger::router())
        .layer(cors_layer())
}

/// credentialed requests cannot use wildcards, so methods and headers are mirrored back
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_credentials(true)
        .allow_origin(AllowOrigin::list(ORIGINS))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
