use crate::domain::{
    models::{
        DEFAULT_LIST_LIMIT, DEFAULT_MAP_LIMIT, ListParcelsRequest, MapParcelsRequest, ParcelErr,
    },
    ports::ParcelService,
    views::{FeatureCollection, ParcelDetail, ParcelSummary},
};
use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::sync::Arc;
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

#[cfg(test)]
mod tests;

/// A plain old json error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse<'a> {
    /// Message to explain failure
    pub message: &'a str,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GeoJsonParams {
    /// Only return parcels in this market. Exact, case sensitive match.
    #[serde(default)]
    market: Option<String>,
    /// Only return IOS eligible parcels. Defaults to false.
    #[serde(default, deserialize_with = "deserialize_flag")]
    ios_only: bool,
    /// Maximum number of features. Defaults to 500, capped at 5000.
    #[serde(default)]
    limit: Option<u32>,
}

/// Reads a query flag, accepting the usual spellings (`true`/`false`, `1`/`0`, `yes`/`no`,
/// `on`/`off`, `t`/`f`, `y`/`n`) in any case.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(de::Error::invalid_value(
            de::Unexpected::Str(&raw),
            &"a boolean flag",
        )),
    }
}

impl From<GeoJsonParams> for MapParcelsRequest {
    fn from(params: GeoJsonParams) -> Self {
        MapParcelsRequest {
            // an empty market means no market filter
            market: params.market.filter(|m| !m.is_empty()),
            ios_only: params.ios_only,
            limit: params.limit.unwrap_or(DEFAULT_MAP_LIMIT),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of parcels to skip. Defaults to 0.
    #[serde(default)]
    skip: Option<u32>,
    /// Maximum number of parcels. Defaults to 100, capped at 1000.
    #[serde(default)]
    limit: Option<u32>,
    /// Only return IOS eligible parcels. Defaults to false.
    #[serde(default, deserialize_with = "deserialize_flag")]
    ios_only: bool,
}

impl From<ListParams> for ListParcelsRequest {
    fn from(params: ListParams) -> Self {
        ListParcelsRequest {
            skip: params.skip.unwrap_or_default(),
            limit: params.limit.unwrap_or(DEFAULT_LIST_LIMIT),
            ios_only: params.ios_only,
        }
    }
}

pub struct ParcelRouterState<T> {
    service: Arc<T>,
}

impl<T> Clone for ParcelRouterState<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<T> ParcelRouterState<T>
where
    T: ParcelService,
{
    pub fn new(service: T) -> Self {
        ParcelRouterState {
            service: Arc::new(service),
        }
    }
}

pub fn parcel_router<T, S>(state: ParcelRouterState<T>) -> Router<S>
where
    T: ParcelService,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/parcels", get(list_parcels_handler::<T>))
        .route("/parcels/", get(list_parcels_handler::<T>))
        .route("/parcels/geojson", get(parcels_geojson_handler::<T>))
        .route("/parcels/:parcel_id", get(parcel_detail_handler::<T>))
        .with_state(state)
}

#[derive(Debug, Error)]
pub enum ParcelHandlerErr {
    #[error("{}", .0.body_text())]
    BadQuery(#[from] QueryRejection),
    #[error("{}", .0.body_text())]
    BadPath(#[from] PathRejection),
    #[error("Parcel not found")]
    NotFound,
    #[error("An internal server error has occurred")]
    Internal(#[source] ParcelErr),
}

impl From<ParcelErr> for ParcelHandlerErr {
    fn from(err: ParcelErr) -> Self {
        match err {
            ParcelErr::NotFound(_) => ParcelHandlerErr::NotFound,
            err => ParcelHandlerErr::Internal(err),
        }
    }
}

impl IntoResponse for ParcelHandlerErr {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            ParcelHandlerErr::BadQuery(rejection) => rejection.status(),
            ParcelHandlerErr::BadPath(rejection) => rejection.status(),
            ParcelHandlerErr::NotFound => StatusCode::NOT_FOUND,
            ParcelHandlerErr::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let ParcelHandlerErr::Internal(err) = &self {
            tracing::error!(
                error = ?err,
                error_type = "ParcelHandlerErr",
                "Internal server error"
            );
        }

        (
            status_code,
            Json(ErrorResponse {
                message: &self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Get parcels as a GeoJSON FeatureCollection
#[utoipa::path(
    get,
    operation_id = "get_parcels_geojson",
    path = "/parcels/geojson",
    params(GeoJsonParams),
    responses(
            (status = 200, body = FeatureCollection),
            (status = 400, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
    ),
    tag = "parcels"
)]
#[tracing::instrument(skip(state))]
pub async fn parcels_geojson_handler<T>(
    State(state): State<ParcelRouterState<T>>,
    params: Result<Query<GeoJsonParams>, QueryRejection>,
) -> Result<Json<FeatureCollection>, ParcelHandlerErr>
where
    T: ParcelService,
{
    let Query(params) = params?;
    let collection = state.service.parcels_geojson(params.into()).await?;

    tracing::info!(
        features = collection.features.len(),
        "returning parcel feature collection"
    );

    Ok(Json(collection))
}

/// Get detailed information for a single parcel
#[utoipa::path(
    get,
    operation_id = "get_parcel_detail",
    path = "/parcels/{parcel_id}",
    params(
        ("parcel_id" = i64, Path, description = "Numeric id of the parcel record"),
    ),
    responses(
            (status = 200, body = ParcelDetail),
            (status = 400, body = ErrorResponse),
            (status = 404, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
    ),
    tag = "parcels"
)]
#[tracing::instrument(skip(state))]
pub async fn parcel_detail_handler<T>(
    State(state): State<ParcelRouterState<T>>,
    parcel_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ParcelDetail>, ParcelHandlerErr>
where
    T: ParcelService,
{
    let Path(parcel_id) = parcel_id?;
    // ids are stored as int4, so anything wider cannot exist
    let parcel_id = i32::try_from(parcel_id).map_err(|_| ParcelHandlerErr::NotFound)?;

    Ok(Json(state.service.parcel_detail(parcel_id).await?))
}

/// List parcels with pagination
#[utoipa::path(
    get,
    operation_id = "list_parcels",
    path = "/parcels/",
    params(ListParams),
    responses(
            (status = 200, body = Vec<ParcelSummary>),
            (status = 400, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
    ),
    tag = "parcels"
)]
#[tracing::instrument(skip(state))]
pub async fn list_parcels_handler<T>(
    State(state): State<ParcelRouterState<T>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<ParcelSummary>>, ParcelHandlerErr>
where
    T: ParcelService,
{
    let Query(params) = params?;
    let parcels = state.service.list_parcels(params.into()).await?;

    tracing::info!(count = parcels.len(), "returning parcel page");

    Ok(Json(parcels))
}
