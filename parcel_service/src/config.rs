use anyhow::Context;
pub use parcel_entrypoint::Environment;

/// database used when `DATABASE_URL` is unset, matching the docker compose service name
pub const DEFAULT_DATABASE_URL: &str = "postgresql://postgres:postgres@db:5432/ios_zoning";

pub const DEFAULT_PORT: u16 = 8000;

/// Configuration parameters for the application.
#[derive(Debug)]
pub struct Config {
    /// The connection URL for the parcel Postgres database
    pub database_url: String,
    /// The port to listen for HTTP requests on.
    pub port: u16,
    /// The environment we are in
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {port}"))?,
            None => DEFAULT_PORT,
        };

        let environment = match lookup("ENVIRONMENT") {
            Some(env) => env.parse::<Environment>()?,
            None => Environment::Production,
        };

        Ok(Config {
            database_url,
            port,
            environment,
        })
    }
}
