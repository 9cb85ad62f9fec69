//! GeoJSON geometry objects and the projection from stored GeoJSON text.
//!
//! Coordinates are passed through in the stored reference system (EPSG:4326). Ring closure,
//! winding order and self intersection are not checked.

use serde::{Deserialize, Serialize};

/// A `[longitude, latitude]` pair
pub type Position = [f64; 2];

/// A GeoJSON geometry object, discriminated by its `type` member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Position,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
}

impl Geometry {
    /// the GeoJSON `type` discriminator of this geometry
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
        }
    }

    /// a multipolygon made of a single polygon with a single (outer) ring
    pub fn single_ring(ring: Vec<Position>) -> Self {
        Geometry::MultiPolygon {
            coordinates: vec![vec![ring]],
        }
    }

    /// serialize into GeoJSON text, the format accepted by `ST_GeomFromGeoJSON`
    pub fn to_geojson(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Render the stored GeoJSON text of a geometry column.
///
/// An absent geometry projects to `None` rather than failing the whole response.
pub fn project_geometry(raw: Option<&str>) -> Result<Option<Geometry>, serde_json::Error> {
    raw.map(serde_json::from_str).transpose()
}
