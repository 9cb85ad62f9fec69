//! PostgreSQL (PostGIS) implementation of [ParcelRepo]
//! Decimal columns are cast to float8 and geometries are rendered with `ST_AsGeoJSON` in sql

use crate::domain::{
    models::{ListParcelsRequest, MapParcelsRequest, Parcel, ParcelMapRow},
    ports::ParcelRepo,
};
use sqlx::{PgPool, Postgres, QueryBuilder};

pub mod seed;


static PARCEL_COLUMNS: &str = r#"
    id,
    parcel_id,
    jurisdiction_id,
    zone_code,
    ios_ruleset_id,
    address,
    lot_size_sqft::float8 AS lot_size_sqft,
    land_value::float8 AS land_value,
    improvement_value::float8 AS improvement_value,
    total_value::float8 AS total_value,
    year_built,
    market,
    owner_name,
    owner_type,
    ios_eligible,
    max_buildable_units,
    max_buildable_units_with_ios,
    bonus_units,
    required_affordable_units,
    data_source,
    last_updated,
    created_at
"#;

static MAP_COLUMNS: &str = r#"
    id,
    parcel_id,
    address,
    zone_code,
    lot_size_sqft::float8 AS lot_size_sqft,
    owner_name,
    owner_type,
    ios_eligible,
    total_value::float8 AS total_value,
    year_built,
    market,
    ST_AsGeoJSON(geom) AS geojson
"#;

/// The PgParcelRepo struct is a wrapper around a [PgPool] connected to the parcel db.
/// Each query checks a connection out of the pool and returns it when the query completes or fails.
#[derive(Debug, Clone)]
pub struct PgParcelRepo {
    pool: PgPool,
}

impl PgParcelRepo {
    pub fn new(pool: PgPool) -> Self {
        PgParcelRepo { pool }
    }
}

fn list_query(req: ListParcelsRequest) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT");
    builder.push(PARCEL_COLUMNS).push("FROM parcel");

    if req.ios_only {
        builder.push(" WHERE ios_eligible = TRUE");
    }

    builder
        .push(" ORDER BY id LIMIT ")
        .push_bind(i64::from(req.limit))
        .push(" OFFSET ")
        .push_bind(i64::from(req.skip));
    builder
}

fn map_query(req: MapParcelsRequest) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT");
    builder.push(MAP_COLUMNS).push("FROM parcel");

    if req.ios_only || req.market.is_some() {
        builder.push(" WHERE ");
        let mut conditions = builder.separated(" AND ");
        if req.ios_only {
            conditions.push("ios_eligible = TRUE");
        }
        if let Some(market) = req.market {
            conditions.push("market = ").push_bind_unseparated(market);
        }
    }

    builder
        .push(" ORDER BY id LIMIT ")
        .push_bind(i64::from(req.limit));
    builder
}

fn get_query(id: i32) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT");
    builder
        .push(PARCEL_COLUMNS)
        .push("FROM parcel WHERE id = ")
        .push_bind(id);
    builder
}

impl ParcelRepo for PgParcelRepo {
    type Err = sqlx::Error;

    #[tracing::instrument(skip(self), err)]
    async fn list_parcels(&self, req: ListParcelsRequest) -> Result<Vec<Parcel>, Self::Err> {
        let mut query = list_query(req);
        query
            .build_query_as::<Parcel>()
            .fetch_all(&self.pool)
            .await
    }

    #[tracing::instrument(skip(self), err)]
    async fn map_parcels(&self, req: MapParcelsRequest) -> Result<Vec<ParcelMapRow>, Self::Err> {
        let mut query = map_query(req);
        query
            .build_query_as::<ParcelMapRow>()
            .fetch_all(&self.pool)
            .await
    }

    #[tracing::instrument(skip(self), err)]
    async fn get_parcel(&self, id: i32) -> Result<Option<Parcel>, Self::Err> {
        let mut query = get_query(id);
        query
            .build_query_as::<Parcel>()
            .fetch_optional(&self.pool)
            .await
    }
}
