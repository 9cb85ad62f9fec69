use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

/// Identifies the api and where its documentation lives
#[derive(Debug, Serialize, ToSchema)]
pub struct Banner {
    message: &'static str,
    version: &'static str,
    docs: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    status: &'static str,
}

/// Api banner
#[utoipa::path(
        get,
        path = "/",
        responses(
            (status = 200, description = "banner", body = Banner),
        )
    )]
#[tracing::instrument]
pub async fn root_handler() -> Json<Banner> {
    Json(Banner {
        message: "IOS Zoning Intelligence Platform API",
        version: env!("CARGO_PKG_VERSION"),
        docs: "/docs",
    })
}

/// Health check
#[utoipa::path(
        get,
        path = "/health",
        responses(
            (status = 200, description = "health", body = HealthStatus),
        )
    )]
#[tracing::instrument]
pub async fn health_handler() -> Json<HealthStatus> {
    tracing::debug!("health check requested");
    Json(HealthStatus { status: "healthy" })
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}
