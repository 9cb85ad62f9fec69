//! Storage-facing parcel records, request types and the domain error

use chrono::NaiveDateTime;
use thiserror::Error;

/// Number of rows returned by a list request when the client does not specify a limit
pub const DEFAULT_LIST_LIMIT: u32 = 100;
/// Upper bound applied to list request limits
pub const MAX_LIST_LIMIT: u32 = 1_000;
/// Number of features returned by a GeoJSON request when the client does not specify a limit
pub const DEFAULT_MAP_LIMIT: u32 = 500;
/// Upper bound applied to GeoJSON request limits
pub const MAX_MAP_LIMIT: u32 = 5_000;

/// A tax parcel as persisted, without its geometry columns.
///
/// Decimal columns are read as `f64`. No relationship between `total_value`,
/// `land_value` and `improvement_value` is assumed.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Parcel {
    pub id: i32,
    /// external business identifier, unique across the table
    pub parcel_id: String,
    pub jurisdiction_id: Option<i32>,
    pub zone_code: Option<String>,
    pub ios_ruleset_id: Option<i32>,
    pub address: Option<String>,
    pub lot_size_sqft: Option<f64>,
    pub land_value: Option<f64>,
    pub improvement_value: Option<f64>,
    pub total_value: Option<f64>,
    pub year_built: Option<i32>,
    pub market: Option<String>,
    pub owner_name: Option<String>,
    pub owner_type: Option<String>,
    pub ios_eligible: bool,
    pub max_buildable_units: Option<i32>,
    pub max_buildable_units_with_ios: Option<i32>,
    pub bonus_units: Option<i32>,
    pub required_affordable_units: Option<i32>,
    pub data_source: Option<String>,
    pub last_updated: Option<NaiveDateTime>,
    pub created_at: Option<NaiveDateTime>,
}

impl Parcel {
    /// the map projection row of this parcel given its geometry as GeoJSON text
    pub fn to_map_row(&self, geojson: Option<String>) -> ParcelMapRow {
        ParcelMapRow {
            id: self.id,
            parcel_id: self.parcel_id.clone(),
            address: self.address.clone(),
            zone_code: self.zone_code.clone(),
            lot_size_sqft: self.lot_size_sqft,
            owner_name: self.owner_name.clone(),
            owner_type: self.owner_type.clone(),
            ios_eligible: self.ios_eligible,
            total_value: self.total_value,
            year_built: self.year_built,
            market: self.market.clone(),
            geojson,
        }
    }
}

/// The subset of a [Parcel] needed to draw it on a map, with its geometry rendered as GeoJSON text
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ParcelMapRow {
    pub id: i32,
    pub parcel_id: String,
    pub address: Option<String>,
    pub zone_code: Option<String>,
    pub lot_size_sqft: Option<f64>,
    pub owner_name: Option<String>,
    pub owner_type: Option<String>,
    pub ios_eligible: bool,
    pub total_value: Option<f64>,
    pub year_built: Option<i32>,
    pub market: Option<String>,
    /// output of `ST_AsGeoJSON(geom)`
    pub geojson: Option<String>,
}

/// Offset/limit request over the whole parcel table in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParcelsRequest {
    pub skip: u32,
    pub limit: u32,
    pub ios_only: bool,
}

impl Default for ListParcelsRequest {
    fn default() -> Self {
        ListParcelsRequest {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
            ios_only: false,
        }
    }
}

impl ListParcelsRequest {
    /// returns a copy of this request with the limit bounded by [MAX_LIST_LIMIT]
    pub fn clamped(self) -> Self {
        ListParcelsRequest {
            limit: self.limit.min(MAX_LIST_LIMIT),
            ..self
        }
    }
}

/// Filters for the map projection. All present filters must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapParcelsRequest {
    /// exact, case sensitive match on the market label
    pub market: Option<String>,
    pub ios_only: bool,
    pub limit: u32,
}

impl Default for MapParcelsRequest {
    fn default() -> Self {
        MapParcelsRequest {
            market: None,
            ios_only: false,
            limit: DEFAULT_MAP_LIMIT,
        }
    }
}

impl MapParcelsRequest {
    /// returns this request with the limit bounded by [MAX_MAP_LIMIT]
    pub fn clamped(self) -> Self {
        MapParcelsRequest {
            limit: self.limit.min(MAX_MAP_LIMIT),
            ..self
        }
    }
}

/// Errors which can occur while reading parcels
#[derive(Debug, Error)]
pub enum ParcelErr {
    /// No parcel has the requested id
    #[error("Parcel not found")]
    NotFound(i32),
    /// A stored geometry could not be read back as a GeoJSON geometry
    #[error("stored geometry is not valid GeoJSON: {0}")]
    MalformedGeometry(#[from] serde_json::Error),
    /// The backing store failed
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
