//! Fixed sample parcels in the downtown Los Angeles industrial district.
//!
//! These rows are written by the `load_sample_parcels` binary and back the in-memory repository
//! used in tests, so both see identical data.

use crate::domain::{geometry::Geometry, models::Parcel};

/// Axis aligned extent of a sample lot, in degrees
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub west: f64,
    pub east: f64,
    pub north: f64,
    pub south: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct SampleParcel {
    pub parcel_id: &'static str,
    pub address: &'static str,
    pub zone_code: &'static str,
    pub lot_size_sqft: f64,
    pub owner_name: &'static str,
    pub owner_type: &'static str,
    pub ios_eligible: bool,
    pub total_value: f64,
    pub land_value: f64,
    pub improvement_value: f64,
    pub year_built: i32,
    pub bounds: Bounds,
}

/// provenance label written alongside every sample row
pub const SAMPLE_DATA_SOURCE: &str = "sample_data";

pub const SAMPLE_PARCELS: [SampleParcel; 10] = [
    SampleParcel {
        parcel_id: "LA-001-2024",
        address: "123 Industrial Blvd, Los Angeles, CA 90021",
        zone_code: "M2",
        lot_size_sqft: 217_800.0,
        owner_name: "ABC Industrial Properties LLC",
        owner_type: "corporate",
        ios_eligible: true,
        total_value: 8_500_000.0,
        land_value: 6_000_000.0,
        improvement_value: 2_500_000.0,
        year_built: 1995,
        bounds: Bounds {
            west: -118.245,
            east: -118.244,
            north: 34.035,
            south: 34.034,
        },
    },
    SampleParcel {
        parcel_id: "LA-002-2024",
        address: "456 Manufacturing Way, Los Angeles, CA 90021",
        zone_code: "M1",
        lot_size_sqft: 130_680.0,
        owner_name: "XYZ Logistics Inc",
        owner_type: "corporate",
        ios_eligible: true,
        total_value: 5_200_000.0,
        land_value: 3_900_000.0,
        improvement_value: 1_300_000.0,
        year_built: 2005,
        bounds: Bounds {
            west: -118.243,
            east: -118.242,
            north: 34.035,
            south: 34.034,
        },
    },
    SampleParcel {
        parcel_id: "LA-003-2024",
        address: "789 Commerce St, Los Angeles, CA 90058",
        zone_code: "M3",
        lot_size_sqft: 261_360.0,
        owner_name: "Smith Family Trust",
        owner_type: "individual",
        ios_eligible: false,
        total_value: 9_800_000.0,
        land_value: 7_500_000.0,
        improvement_value: 2_300_000.0,
        year_built: 1988,
        bounds: Bounds {
            west: -118.241,
            east: -118.240,
            north: 34.035,
            south: 34.034,
        },
    },
    SampleParcel {
        parcel_id: "LA-004-2024",
        address: "321 Storage Ave, Los Angeles, CA 90058",
        zone_code: "M2",
        lot_size_sqft: 174_240.0,
        owner_name: "Pacific Storage Holdings",
        owner_type: "corporate",
        ios_eligible: true,
        total_value: 6_700_000.0,
        land_value: 5_000_000.0,
        improvement_value: 1_700_000.0,
        year_built: 2010,
        bounds: Bounds {
            west: -118.245,
            east: -118.244,
            north: 34.033,
            south: 34.032,
        },
    },
    SampleParcel {
        parcel_id: "LA-005-2024",
        address: "555 Warehouse Rd, Los Angeles, CA 90021",
        zone_code: "M1",
        lot_size_sqft: 87_120.0,
        owner_name: "Green Valley Properties",
        owner_type: "corporate",
        ios_eligible: false,
        total_value: 3_400_000.0,
        land_value: 2_600_000.0,
        improvement_value: 800_000.0,
        year_built: 2015,
        bounds: Bounds {
            west: -118.243,
            east: -118.242,
            north: 34.033,
            south: 34.032,
        },
    },
    SampleParcel {
        parcel_id: "LA-006-2024",
        address: "888 Distribution Dr, Los Angeles, CA 90058",
        zone_code: "M3",
        lot_size_sqft: 304_920.0,
        owner_name: "Johnson Enterprises",
        owner_type: "corporate",
        ios_eligible: true,
        total_value: 11_500_000.0,
        land_value: 8_500_000.0,
        improvement_value: 3_000_000.0,
        year_built: 2000,
        bounds: Bounds {
            west: -118.241,
            east: -118.240,
            north: 34.033,
            south: 34.032,
        },
    },
    SampleParcel {
        parcel_id: "LA-007-2024",
        address: "999 Freight Ln, Los Angeles, CA 90021",
        zone_code: "M2",
        lot_size_sqft: 152_460.0,
        owner_name: "Metro Industrial Fund",
        owner_type: "corporate",
        ios_eligible: true,
        total_value: 5_900_000.0,
        land_value: 4_500_000.0,
        improvement_value: 1_400_000.0,
        year_built: 2008,
        bounds: Bounds {
            west: -118.245,
            east: -118.244,
            north: 34.031,
            south: 34.030,
        },
    },
    SampleParcel {
        parcel_id: "LA-008-2024",
        address: "111 Terminal Way, Los Angeles, CA 90058",
        zone_code: "M1",
        lot_size_sqft: 196_020.0,
        owner_name: "Coastal Development Corp",
        owner_type: "corporate",
        ios_eligible: false,
        total_value: 7_200_000.0,
        land_value: 5_500_000.0,
        improvement_value: 1_700_000.0,
        year_built: 1998,
        bounds: Bounds {
            west: -118.243,
            east: -118.242,
            north: 34.031,
            south: 34.030,
        },
    },
    SampleParcel {
        parcel_id: "LA-009-2024",
        address: "222 Container St, Los Angeles, CA 90021",
        zone_code: "M3",
        lot_size_sqft: 239_580.0,
        owner_name: "Williams Industrial Partners",
        owner_type: "corporate",
        ios_eligible: true,
        total_value: 9_100_000.0,
        land_value: 7_000_000.0,
        improvement_value: 2_100_000.0,
        year_built: 2012,
        bounds: Bounds {
            west: -118.241,
            east: -118.240,
            north: 34.031,
            south: 34.030,
        },
    },
    SampleParcel {
        parcel_id: "LA-010-2024",
        address: "333 Loading Dock Blvd, Los Angeles, CA 90058",
        zone_code: "M2",
        lot_size_sqft: 108_900.0,
        owner_name: "Harbor View Holdings",
        owner_type: "corporate",
        ios_eligible: true,
        total_value: 4_300_000.0,
        land_value: 3_300_000.0,
        improvement_value: 1_000_000.0,
        year_built: 2018,
        bounds: Bounds {
            west: -118.245,
            east: -118.244,
            north: 34.029,
            south: 34.028,
        },
    },
];

impl SampleParcel {
    /// the lot as a single ring multipolygon, starting at the north west corner
    pub fn geometry(&self) -> Geometry {
        let Bounds {
            west,
            east,
            north,
            south,
        } = self.bounds;
        Geometry::single_ring(vec![
            [west, north],
            [east, north],
            [east, south],
            [west, south],
            [west, north],
        ])
    }

    /// the record this sample becomes once stored under `id`
    pub fn to_parcel(&self, id: i32) -> Parcel {
        Parcel {
            id,
            parcel_id: self.parcel_id.to_string(),
            jurisdiction_id: None,
            zone_code: Some(self.zone_code.to_string()),
            ios_ruleset_id: None,
            address: Some(self.address.to_string()),
            lot_size_sqft: Some(self.lot_size_sqft),
            land_value: Some(self.land_value),
            improvement_value: Some(self.improvement_value),
            total_value: Some(self.total_value),
            year_built: Some(self.year_built),
            market: None,
            owner_name: Some(self.owner_name.to_string()),
            owner_type: Some(self.owner_type.to_string()),
            ios_eligible: self.ios_eligible,
            max_buildable_units: None,
            max_buildable_units_with_ios: None,
            bonus_units: None,
            required_affordable_units: None,
            data_source: Some(SAMPLE_DATA_SOURCE.to_string()),
            last_updated: None,
            created_at: None,
        }
    }
}
