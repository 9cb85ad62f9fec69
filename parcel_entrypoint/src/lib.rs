#![deny(missing_docs)]
//! Process setup shared by the parcel binaries: `.env` loading, the panic hook and the
//! tracing subscriber for the current [Environment].

use tracing_subscriber::{EnvFilter, fmt};

mod environment;

pub use environment::{Environment, EnvironmentErr, UnknownValue};

/// Initializes a parcel binary for the [Environment] named by `ENVIRONMENT`
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
}

impl Default for Entrypoint {
    fn default() -> Self {
        Entrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

impl Entrypoint {
    /// Load `.env`, route panics through tracing and install the subscriber.
    /// Must be called once, before anything logs.
    pub fn init(self) {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));
        install_subscriber(self.env);
        tracing::debug!(environment = %self.env, "initialized entrypoint");
    }
}

/// pretty, colored output on a developer machine; one flat json object per event elsewhere
fn install_subscriber(env: Environment) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true);

    match env {
        Environment::Local => builder.with_ansi(true).pretty().init(),
        Environment::Production | Environment::Develop => builder
            .with_ansi(false)
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .flatten_event(true)
            .init(),
    }
}
