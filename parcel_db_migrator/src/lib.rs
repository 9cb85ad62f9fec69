//! The sole responsibility of this crate is to expose the statically imported sql migrations for the parcel db.
//!
//! Binaries and tests share one [sqlx::migrate::Migrator] so the schema is defined in exactly one place.
pub static PARCEL_DB_MIGRATIONS: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
