//! Output shapes of the parcel api.
//!
//! Optional numbers are always written as `null` when absent. Map clients treat `0` as a
//! known value, so absent values must never collapse to zero.

use crate::domain::{
    geometry::{Geometry, project_geometry},
    models::{Parcel, ParcelErr, ParcelMapRow},
};
use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

/// A GeoJSON FeatureCollection of parcels
#[derive(Debug, Serialize, ToSchema)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "FeatureCollection")]
    kind: &'static str,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection {
            kind: "FeatureCollection",
            features,
        }
    }

    /// project every row, failing the whole collection on the first unreadable geometry
    pub fn from_rows(rows: impl IntoIterator<Item = ParcelMapRow>) -> Result<Self, ParcelErr> {
        let features = rows
            .into_iter()
            .map(Feature::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(features))
    }
}

/// A single parcel drawn on a map
#[derive(Debug, Serialize, ToSchema)]
pub struct Feature {
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "Feature")]
    kind: &'static str,
    pub id: i32,
    #[schema(value_type = Option<Object>)]
    pub geometry: Option<Geometry>,
    pub properties: FeatureProperties,
}

impl Feature {
    pub fn from_row(row: ParcelMapRow) -> Result<Self, ParcelErr> {
        let geometry = project_geometry(row.geojson.as_deref())?;
        Ok(Feature {
            kind: "Feature",
            id: row.id,
            geometry,
            properties: FeatureProperties {
                id: row.id,
                parcel_id: row.parcel_id,
                address: row.address,
                zone_code: row.zone_code,
                lot_size_sqft: row.lot_size_sqft,
                area_sqft: row.lot_size_sqft,
                owner_name: row.owner_name,
                owner_type: row.owner_type,
                ios_flag: row.ios_eligible,
                total_value: row.total_value,
                year_built: row.year_built,
                market: row.market,
            },
        })
    }
}

/// Properties attached to each [Feature]
#[derive(Debug, Serialize, ToSchema)]
pub struct FeatureProperties {
    pub id: i32,
    pub parcel_id: String,
    pub address: Option<String>,
    pub zone_code: Option<String>,
    pub lot_size_sqft: Option<f64>,
    /// Same value as `lot_size_sqft`. Kept for older map clients.
    pub area_sqft: Option<f64>,
    pub owner_name: Option<String>,
    pub owner_type: Option<String>,
    /// whether the parcel qualifies for Industrial Outdoor Storage
    pub ios_flag: bool,
    pub total_value: Option<f64>,
    pub year_built: Option<i32>,
    pub market: Option<String>,
}

/// Every attribute of a parcel except its geometry
#[derive(Debug, Serialize, ToSchema)]
pub struct ParcelDetail {
    pub id: i32,
    pub parcel_id: String,
    pub jurisdiction_id: Option<i32>,
    pub address: Option<String>,
    pub zone_code: Option<String>,
    pub ios_ruleset_id: Option<i32>,
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

impl From<Parcel> for ParcelDetail {
    fn from(parcel: Parcel) -> Self {
        let Parcel {
            id,
            parcel_id,
            jurisdiction_id,
            zone_code,
            ios_ruleset_id,
            address,
            lot_size_sqft,
            land_value,
            improvement_value,
            total_value,
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
            created_at,
        } = parcel;

        ParcelDetail {
            id,
            parcel_id,
            jurisdiction_id,
            address,
            zone_code,
            ios_ruleset_id,
            lot_size_sqft,
            land_value,
            improvement_value,
            total_value,
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
            created_at,
        }
    }
}

/// Tabular view of a parcel, without geometry
#[derive(Debug, Serialize, ToSchema)]
pub struct ParcelSummary {
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
}

impl From<Parcel> for ParcelSummary {
    fn from(parcel: Parcel) -> Self {
        ParcelSummary {
            id: parcel.id,
            parcel_id: parcel.parcel_id,
            address: parcel.address,
            zone_code: parcel.zone_code,
            lot_size_sqft: parcel.lot_size_sqft,
            owner_name: parcel.owner_name,
            owner_type: parcel.owner_type,
            ios_eligible: parcel.ios_eligible,
            total_value: parcel.total_value,
            year_built: parcel.year_built,
        }
    }
}
