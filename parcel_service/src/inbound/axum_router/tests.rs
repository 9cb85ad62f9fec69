use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;

use crate::{
    domain::{
        models::{ListParcelsRequest, MapParcelsRequest, ParcelErr},
        ports::ParcelService,
        service::ParcelServiceImpl,
        views::{FeatureCollection, ParcelDetail, ParcelSummary},
    },
    inbound::axum_router::{ParcelRouterState, parcel_router},
    outbound::{InMemoryParcelRepo, memory::StoredParcel},
    sample::SAMPLE_PARCELS,
};

fn sample_router() -> Router {
    parcel_router(ParcelRouterState::new(ParcelServiceImpl::new(
        InMemoryParcelRepo::with_sample_parcels(),
    )))
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let res = router.oneshot(request).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(bytes.as_ref()).unwrap_or(Value::Null);
    (status, json)
}

fn parcel_ids(features: &Value) -> Vec<&str> {
    features
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["properties"]["parcel_id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn geojson_ios_only_returns_the_seven_eligible_parcels() {
    let (status, body) = get_json(sample_router(), "/parcels/geojson?ios_only=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "FeatureCollection");
    assert_eq!(
        parcel_ids(&body["features"]),
        [
            "LA-001-2024",
            "LA-002-2024",
            "LA-004-2024",
            "LA-006-2024",
            "LA-007-2024",
            "LA-009-2024",
            "LA-010-2024",
        ]
    );
    for feature in body["features"].as_array().unwrap() {
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["properties"]["ios_flag"], true);
        assert_eq!(feature["id"], feature["properties"]["id"]);
    }
}

#[tokio::test]
async fn geojson_defaults_return_everything() {
    let (status, body) = get_json(sample_router(), "/parcels/geojson").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["features"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn geojson_round_trips_the_stored_rings() {
    let (_, body) = get_json(sample_router(), "/parcels/geojson?limit=1").await;

    let features = body["features"].as_array().unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(
        features[0]["geometry"],
        json!({
            "type": "MultiPolygon",
            "coordinates": [[[
                [-118.245, 34.035],
                [-118.244, 34.035],
                [-118.244, 34.034],
                [-118.245, 34.034],
                [-118.245, 34.035],
            ]]]
        })
    );
    let properties = &features[0]["properties"];
    assert_eq!(properties["area_sqft"], properties["lot_size_sqft"]);
    assert_eq!(properties["market"], Value::Null);
}

#[tokio::test]
async fn geojson_filters_by_market() {
    let mut inland = SAMPLE_PARCELS[3].to_parcel(4);
    inland.market = Some("Inland Empire".to_string());
    let mut la = SAMPLE_PARCELS[4].to_parcel(5);
    la.market = Some("Los Angeles".to_string());

    let repo = InMemoryParcelRepo::new(vec![
        StoredParcel::new(inland, &SAMPLE_PARCELS[3].geometry()),
        StoredParcel::new(la, &SAMPLE_PARCELS[4].geometry()),
    ]);
    let router = parcel_router(ParcelRouterState::new(ParcelServiceImpl::new(repo)));

    let (status, body) = get_json(router.clone(), "/parcels/geojson?market=Los%20Angeles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parcel_ids(&body["features"]), ["LA-005-2024"]);

    let (_, body) = get_json(router.clone(), "/parcels/geojson?market=los%20angeles").await;
    assert!(body["features"].as_array().unwrap().is_empty());

    // a market that is present but empty does not filter
    let (_, body) = get_json(router, "/parcels/geojson?market=").await;
    assert_eq!(body["features"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn detail_returns_the_requested_parcel() {
    let (status, body) = get_json(sample_router(), "/parcels/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);
    assert_eq!(body["parcel_id"], "LA-003-2024");
    assert_eq!(body["owner_type"], "individual");
    assert_eq!(body["ios_eligible"], false);
    assert_eq!(body["land_value"], json!(7_500_000.0));
    assert_eq!(body["max_buildable_units"], Value::Null);
    assert!(body.get("geom").is_none());
    assert!(body.get("geometry").is_none());
}

#[tokio::test]
async fn detail_of_unknown_parcel_is_not_found() {
    let (status, body) = get_json(sample_router(), "/parcels/999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Parcel not found"}));
}

#[tokio::test]
async fn detail_rejects_non_numeric_ids() {
    let (status, body) = get_json(sample_router(), "/parcels/LA-001-2024").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()), "{body}");
}

#[tokio::test]
async fn detail_of_an_id_wider_than_storage_is_not_found() {
    for uri in ["/parcels/3000000000", "/parcels/-3000000000"] {
        let (status, body) = get_json(sample_router(), uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"message": "Parcel not found"}), "{uri}");
    }
}

#[tokio::test]
async fn list_returns_the_first_page_in_insertion_order() {
    let (status, body) = get_json(sample_router(), "/parcels/?skip=0&limit=3").await;

    assert_eq!(status, StatusCode::OK);
    let parcels = body.as_array().unwrap();
    let ids: Vec<_> = parcels
        .iter()
        .map(|p| p["parcel_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["LA-001-2024", "LA-002-2024", "LA-003-2024"]);

    for parcel in parcels {
        let object = parcel.as_object().unwrap();
        assert_eq!(object.len(), 10);
        assert!(!object.contains_key("geometry"));
        assert!(!object.contains_key("land_value"));
    }
}

#[tokio::test]
async fn list_skip_never_repeats_earlier_rows() {
    let (_, first) = get_json(sample_router(), "/parcels/?limit=4").await;
    let (_, rest) = get_json(sample_router(), "/parcels?skip=4").await;

    let ids = |page: &Value| -> Vec<Value> {
        page.as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].clone())
            .collect()
    };
    let (first, rest) = (ids(&first), ids(&rest));

    assert_eq!(first.len(), 4);
    assert_eq!(rest.len(), 6);
    assert!(rest.iter().all(|id| !first.contains(id)));
}

#[tokio::test]
async fn list_ios_only_is_always_eligible() {
    let (status, body) = get_json(sample_router(), "/parcels/?ios_only=true&limit=5").await;

    assert_eq!(status, StatusCode::OK);
    let parcels = body.as_array().unwrap();
    assert_eq!(parcels.len(), 5);
    assert!(parcels.iter().all(|p| p["ios_eligible"] == true));
}

#[tokio::test]
async fn list_rejects_negative_pagination() {
    let (status, body) = get_json(sample_router(), "/parcels/?skip=-1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()), "{body}");
}

#[tokio::test]
async fn ios_only_accepts_common_flag_spellings() {
    for flag in ["true", "1", "yes", "on", "TRUE", "Y"] {
        let uri = format!("/parcels/?ios_only={flag}");
        let (status, body) = get_json(sample_router(), &uri).await;

        assert_eq!(status, StatusCode::OK, "{flag}");
        assert_eq!(body.as_array().unwrap().len(), 7, "{flag}");
    }

    for flag in ["false", "0", "no", "off"] {
        let uri = format!("/parcels/geojson?ios_only={flag}");
        let (status, body) = get_json(sample_router(), &uri).await;

        assert_eq!(status, StatusCode::OK, "{flag}");
        assert_eq!(body["features"].as_array().unwrap().len(), 10, "{flag}");
    }
}

#[tokio::test]
async fn ios_only_rejects_unknown_spellings() {
    let (status, body) = get_json(sample_router(), "/parcels/geojson?ios_only=maybe").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("maybe"), "{body}");
}

struct BrokenStore;

impl ParcelService for BrokenStore {
    async fn list_parcels(
        &self,
        _req: ListParcelsRequest,
    ) -> Result<Vec<ParcelSummary>, ParcelErr> {
        Err(ParcelErr::Storage(anyhow::anyhow!("connection refused")))
    }

    async fn parcel_detail(&self, _id: i32) -> Result<ParcelDetail, ParcelErr> {
        Err(ParcelErr::Storage(anyhow::anyhow!("connection refused")))
    }

    async fn parcels_geojson(
        &self,
        _req: MapParcelsRequest,
    ) -> Result<FeatureCollection, ParcelErr> {
        let err = serde_json::from_str::<Value>("{").unwrap_err();
        Err(ParcelErr::MalformedGeometry(err))
    }
}

#[tokio::test]
async fn failures_are_generic_server_errors() {
    let router: Router = parcel_router(ParcelRouterState::new(BrokenStore));

    for uri in ["/parcels/", "/parcels/1", "/parcels/geojson"] {
        let (status, body) = get_json(router.clone(), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(
            body,
            json!({"message": "An internal server error has occurred"}),
            "{uri}"
        );
    }
}
