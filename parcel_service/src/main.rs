use anyhow::Context;
use config::Config;
use parcel_entrypoint::Entrypoint;
use parcel_service::{domain::service::ParcelServiceImpl, outbound::PgParcelRepo};
use sqlx::postgres::PgPoolOptions;

mod api;
mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Entrypoint::default().init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::info!("initialized config");

    let (min_connections, max_connections) = config.environment.pool_bounds();

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to parcel db")?;

    tracing::info!(
        min_connections,
        max_connections,
        "initialized parcel db connection"
    );

    let service = ParcelServiceImpl::new(PgParcelRepo::new(db));

    api::setup_and_serve(&config, service).await
}
