use crate::api::health::{Banner, HealthStatus};
use axum::{Json, Router, routing::get};
use parcel_service::{
    domain::views::{Feature, FeatureCollection, FeatureProperties, ParcelDetail, ParcelSummary},
    inbound::axum_router::ErrorResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "IOS Zoning Intelligence Platform API",
        description = "Read-only access to tax parcels and their Industrial Outdoor Storage eligibility",
    ),
    paths(
        crate::api::health::root_handler,
        crate::api::health::health_handler,
        parcel_service::inbound::axum_router::list_parcels_handler,
        parcel_service::inbound::axum_router::parcels_geojson_handler,
        parcel_service::inbound::axum_router::parcel_detail_handler,
    ),
    components(
        schemas(
            Banner,
            HealthStatus,
            ErrorResponse,
            FeatureCollection,
            Feature,
            FeatureProperties,
            ParcelDetail,
            ParcelSummary,
        )
    ),
    tags(
        (name = "parcels", description = "Parcel records and map features")
    )
)]
pub struct ApiDoc;

/// The generated document, served as json under `/docs`
pub fn router() -> Router {
    Router::new().route("/docs", get(|| async { Json(ApiDoc::openapi()) }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    #[tokio::test]
    async fn docs_list_every_parcel_route() {
        let response = router()
            .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        for path in ["/", "/health", "/parcels/", "/parcels/geojson", "/parcels/{parcel_id}"] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }
}
