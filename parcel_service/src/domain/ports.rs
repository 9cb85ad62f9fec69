//! Ports required and provided by the parcel domain

use crate::domain::{
    models::{ListParcelsRequest, MapParcelsRequest, Parcel, ParcelErr, ParcelMapRow},
    views::{FeatureCollection, ParcelDetail, ParcelSummary},
};

/// Read access to the parcel store
#[cfg_attr(test, mockall::automock(type Err = anyhow::Error;))]
pub trait ParcelRepo: Send + Sync + 'static {
    type Err;

    /// parcels in insertion order after applying the request's offset and limit
    fn list_parcels(
        &self,
        req: ListParcelsRequest,
    ) -> impl Future<Output = Result<Vec<Parcel>, Self::Err>> + Send;

    /// map rows matching every filter of the request, in insertion order
    fn map_parcels(
        &self,
        req: MapParcelsRequest,
    ) -> impl Future<Output = Result<Vec<ParcelMapRow>, Self::Err>> + Send;

    fn get_parcel(&self, id: i32)
    -> impl Future<Output = Result<Option<Parcel>, Self::Err>> + Send;
}

/// The service level interface for reading parcels
pub trait ParcelService: Send + Sync + 'static {
    fn list_parcels(
        &self,
        req: ListParcelsRequest,
    ) -> impl Future<Output = Result<Vec<ParcelSummary>, ParcelErr>> + Send;

    /// fails with [ParcelErr::NotFound] if the id does not resolve
    fn parcel_detail(&self, id: i32)
    -> impl Future<Output = Result<ParcelDetail, ParcelErr>> + Send;

    fn parcels_geojson(
        &self,
        req: MapParcelsRequest,
    ) -> impl Future<Output = Result<FeatureCollection, ParcelErr>> + Send;
}
