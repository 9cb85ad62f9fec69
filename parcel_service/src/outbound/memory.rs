//! This module provides [InMemoryParcelRepo], a [ParcelRepo] over a fixed vector of records
//! which mirrors the filtering and ordering of the postgres adapter.

use crate::{
    domain::{
        geometry::Geometry,
        models::{ListParcelsRequest, MapParcelsRequest, Parcel, ParcelMapRow},
        ports::ParcelRepo,
    },
    sample::SAMPLE_PARCELS,
};
use std::sync::Arc;

/// A parcel along with its geometry, rendered to GeoJSON text when read
#[derive(Debug, Clone)]
pub struct StoredParcel {
    pub parcel: Parcel,
    pub geometry: Option<Geometry>,
}

impl StoredParcel {
    pub fn new(parcel: Parcel, geometry: &Geometry) -> Self {
        StoredParcel {
            parcel,
            geometry: Some(geometry.clone()),
        }
    }

    fn map_row(&self) -> Result<ParcelMapRow, serde_json::Error> {
        let geojson = self
            .geometry
            .as_ref()
            .map(Geometry::to_geojson)
            .transpose()?;
        Ok(self.parcel.to_map_row(geojson))
    }
}

/// Records are kept sorted by id, which stands in for insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryParcelRepo {
    records: Arc<Vec<StoredParcel>>,
}

impl InMemoryParcelRepo {
    pub fn new(mut records: Vec<StoredParcel>) -> Self {
        records.sort_by_key(|r| r.parcel.id);
        InMemoryParcelRepo {
            records: Arc::new(records),
        }
    }

    /// a repo holding the ten sample parcels with ids 1 through 10
    pub fn with_sample_parcels() -> Self {
        Self::new(
            SAMPLE_PARCELS
                .iter()
                .zip(1..)
                .map(|(sample, id)| StoredParcel::new(sample.to_parcel(id), &sample.geometry()))
                .collect(),
        )
    }
}

impl ParcelRepo for InMemoryParcelRepo {
    type Err = serde_json::Error;

    async fn list_parcels(&self, req: ListParcelsRequest) -> Result<Vec<Parcel>, Self::Err> {
        Ok(self
            .records
            .iter()
            .filter(|r| !req.ios_only || r.parcel.ios_eligible)
            .skip(req.skip as usize)
            .take(req.limit as usize)
            .map(|r| r.parcel.clone())
            .collect())
    }

    async fn map_parcels(&self, req: MapParcelsRequest) -> Result<Vec<ParcelMapRow>, Self::Err> {
        self.records
            .iter()
            .filter(|r| !req.ios_only || r.parcel.ios_eligible)
            .filter(|r| match &req.market {
                Some(market) => r.parcel.market.as_ref() == Some(market),
                None => true,
            })
            .take(req.limit as usize)
            .map(StoredParcel::map_row)
            .collect()
    }

    async fn get_parcel(&self, id: i32) -> Result<Option<Parcel>, Self::Err> {
        Ok(self
            .records
            .iter()
            .find(|r| r.parcel.id == id)
            .map(|r| r.parcel.clone()))
    }
}
