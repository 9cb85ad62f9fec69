//! Writes the fixed [SAMPLE_PARCELS] into the parcel table

use crate::sample::{SAMPLE_DATA_SOURCE, SAMPLE_PARCELS};
use anyhow::Context;
use sqlx::PgPool;

static INSERT_SAMPLE_PARCEL: &str = r#"
    INSERT INTO parcel (
        parcel_id, address, zone_code, lot_size_sqft,
        owner_name, owner_type, ios_eligible,
        total_value, land_value, improvement_value, year_built,
        geom, centroid, data_source, last_updated, created_at
    ) VALUES (
        $1, $2, $3, $4,
        $5, $6, $7,
        $8, $9, $10, $11,
        ST_SetSRID(ST_GeomFromGeoJSON($12), 4326),
        ST_Centroid(ST_SetSRID(ST_GeomFromGeoJSON($12), 4326)),
        $13,
        CURRENT_TIMESTAMP,
        CURRENT_TIMESTAMP
    )
"#;

/// Insert every sample parcel in a single transaction.
/// Nothing is written if any insert fails. Returns the number of rows inserted.
#[tracing::instrument(skip(pool), err)]
pub async fn load_sample_parcels(pool: &PgPool) -> anyhow::Result<usize> {
    let mut transaction = pool.begin().await.context("could not begin transaction")?;

    for sample in SAMPLE_PARCELS.iter() {
        let geojson = sample
            .geometry()
            .to_geojson()
            .context("could not encode sample geometry")?;

        sqlx::query(INSERT_SAMPLE_PARCEL)
            .bind(sample.parcel_id)
            .bind(sample.address)
            .bind(sample.zone_code)
            .bind(sample.lot_size_sqft)
            .bind(sample.owner_name)
            .bind(sample.owner_type)
            .bind(sample.ios_eligible)
            .bind(sample.total_value)
            .bind(sample.land_value)
            .bind(sample.improvement_value)
            .bind(sample.year_built)
            .bind(geojson)
            .bind(SAMPLE_DATA_SOURCE)
            .execute(&mut *transaction)
            .await
            .with_context(|| format!("could not insert sample parcel {}", sample.parcel_id))?;

        tracing::debug!(parcel_id = sample.parcel_id, "inserted sample parcel");
    }

    transaction.commit().await.context("could not commit sample parcels")?;

    Ok(SAMPLE_PARCELS.len())
}

/// total number of rows in the parcel table
#[tracing::instrument(skip(pool), err)]
pub async fn count_parcels(pool: &PgPool) -> anyhow::Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM parcel")
        .fetch_one(pool)
        .await
        .context("could not count parcels")?;
    Ok(count)
}
