use crate::domain::{
    models::{ListParcelsRequest, MapParcelsRequest, ParcelErr},
    ports::{ParcelRepo, ParcelService},
    views::{FeatureCollection, ParcelDetail, ParcelSummary},
};


/// struct which implements [ParcelService] over an abstract [ParcelRepo]
pub struct ParcelServiceImpl<T> {
    repo: T,
}

impl<T> ParcelServiceImpl<T>
where
    T: ParcelRepo,
    anyhow::Error: From<T::Err>,
{
    pub fn new(repo: T) -> Self {
        ParcelServiceImpl { repo }
    }
}

impl<T> ParcelService for ParcelServiceImpl<T>
where
    T: ParcelRepo,
    anyhow::Error: From<T::Err>,
{
    #[tracing::instrument(skip(self), err)]
    async fn list_parcels(
        &self,
        req: ListParcelsRequest,
    ) -> Result<Vec<ParcelSummary>, ParcelErr> {
        let parcels = self
            .repo
            .list_parcels(req.clamped())
            .await
            .map_err(anyhow::Error::from)?;

        tracing::debug!(count = parcels.len(), "listed parcels");

        Ok(parcels.into_iter().map(ParcelSummary::from).collect())
    }

    #[tracing::instrument(skip(self), err)]
    async fn parcel_detail(&self, id: i32) -> Result<ParcelDetail, ParcelErr> {
        self.repo
            .get_parcel(id)
            .await
            .map_err(anyhow::Error::from)?
            .map(ParcelDetail::from)
            .ok_or(ParcelErr::NotFound(id))
    }

    #[tracing::instrument(skip(self), err)]
    async fn parcels_geojson(
        &self,
        req: MapParcelsRequest,
    ) -> Result<FeatureCollection, ParcelErr> {
        let rows = self
            .repo
            .map_parcels(req.clamped())
            .await
            .map_err(anyhow::Error::from)?;

        tracing::debug!(count = rows.len(), "projecting parcel geometries");

        FeatureCollection::from_rows(rows)
    }
}
