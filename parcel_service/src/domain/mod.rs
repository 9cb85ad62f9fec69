//! Domain layer - core business logic, models, and port definitions

pub mod geometry;
pub mod models;
pub mod ports;
pub mod service;
pub mod views;
