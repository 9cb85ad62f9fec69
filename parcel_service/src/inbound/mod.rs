//! Inbound adapters - HTTP handlers and other entry points

pub mod axum_router;

pub use axum_router::{ParcelRouterState, parcel_router};
