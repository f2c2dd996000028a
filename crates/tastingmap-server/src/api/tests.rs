use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use tastingmap_core::{BeverageType, Venue};
use tower::ServiceExt;

use super::*;

fn venue(
    id: &str,
    name: &str,
    city: &str,
    region: &str,
    categories: &[BeverageType],
    coords: Option<(f64, f64)>,
) -> Venue {
    Venue {
        id: id.to_string(),
        name: name.to_string(),
        street: String::new(),
        city: city.to_string(),
        state: "VA".to_string(),
        zip: String::new(),
        phone: String::new(),
        website: String::new(),
        region: region.to_string(),
        categories: categories.to_vec(),
        lat: coords.map(|c| c.0),
        lng: coords.map(|c| c.1),
    }
}

fn test_state() -> AppState {
    use BeverageType::{Brewery, Cidery, Winery};
    let catalog = Catalog::new(vec![
        venue("A", "Alpha Vineyards", "Crozet", "Blue Ridge", &[Winery], Some((38.0, -78.0))),
        venue("B", "Beta Brewing", "Crozet", "Blue Ridge", &[Brewery], None),
        venue(
            "C",
            "Gamma Cider Works",
            "Afton",
            "Shenandoah Valley",
            &[Cidery, Winery],
            Some((38.05, -78.0)),
        ),
        venue("D", "Delta Winery", "Leesburg", "Northern Virginia", &[Winery], Some((39.1, -77.5))),
    ])
    .expect("valid catalog");

    AppState {
        catalog: Arc::new(catalog),
        default_radius_miles: 25.0,
    }
}

fn app() -> Router {
    build_app(test_state())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json parse");
    (status, json)
}

fn ids(values: &serde_json::Value) -> Vec<String> {
    values
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v["id"].as_str().expect("id").to_string())
        .collect()
}

#[test]
fn api_error_validation_error_maps_to_bad_request() {
    let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn api_error_not_found_maps_to_404() {
    let response = ApiError::new("req-1", "not_found", "missing").into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_catalog_size() {
    let (status, json) = get_json(app(), "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["venues"], 4);
    assert!(json["meta"]["request_id"].is_string());
}

#[tokio::test]
async fn request_id_header_is_propagated() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .header("x-request-id", "trace-123")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(
        response.headers().get("x-request-id").map(|v| v.as_bytes()),
        Some(b"trace-123".as_slice())
    );
}

#[tokio::test]
async fn nearby_returns_sorted_results_with_origin_and_radius() {
    let (status, json) = get_json(app(), "/api/v1/venues/nearby?lat=38.0&lng=-78.0&radius=5").await;
    assert_eq!(status, StatusCode::OK);

    let data = &json["data"];
    assert_eq!(data["origin"]["lat"], 38.0);
    assert_eq!(data["origin"]["lng"], -78.0);
    assert_eq!(data["radius_miles"], 5.0);

    let results = data["results"].as_array().expect("results");
    let ids: Vec<_> = results
        .iter()
        .map(|r| r["venue"]["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["A", "C"]);
    assert_eq!(results[0]["distance_miles"], 0.0);
    assert_eq!(results[1]["distance_miles"], 3.5);
}

#[tokio::test]
async fn nearby_defaults_radius_when_absent_or_invalid() {
    for uri in [
        "/api/v1/venues/nearby?lat=38.0&lng=-78.0",
        "/api/v1/venues/nearby?lat=38.0&lng=-78.0&radius=wide",
    ] {
        let (status, json) = get_json(app(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["radius_miles"], 25.0);
        assert_eq!(json["data"]["results"].as_array().unwrap().len(), 2);
    }
}

#[tokio::test]
async fn nearby_rejects_missing_or_non_numeric_coordinates() {
    for uri in [
        "/api/v1/venues/nearby",
        "/api/v1/venues/nearby?lat=38.0",
        "/api/v1/venues/nearby?lat=abc&lng=-78.0",
        "/api/v1/venues/nearby?lat=NaN&lng=-78.0",
    ] {
        let (status, json) = get_json(app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri}");
        assert_eq!(json["error"]["code"], "validation_error");
    }
}

#[tokio::test]
async fn nearby_applies_limit_and_filters() {
    let (_, limited) = get_json(app(), "/api/v1/venues/nearby?lat=38.0&lng=-78.0&limit=1").await;
    assert_eq!(limited["data"]["results"].as_array().unwrap().len(), 1);

    let (_, zero) = get_json(app(), "/api/v1/venues/nearby?lat=38.0&lng=-78.0&limit=-2").await;
    assert!(zero["data"]["results"].as_array().unwrap().is_empty());

    let (_, ciders) = get_json(
        app(),
        "/api/v1/venues/nearby?lat=38.0&lng=-78.0&categories=cidery",
    )
    .await;
    let results = ciders["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["venue"]["id"], "C");
}

#[tokio::test]
async fn nearby_limit_counts_only_filtered_venues() {
    let (status, json) = get_json(
        app(),
        "/api/v1/venues/nearby?lat=38.0&lng=-78.0&limit=1&categories=cidery",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let results = json["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["venue"]["id"], "C");
    assert_eq!(results[0]["distance_miles"], 3.5);
}

#[tokio::test]
async fn search_blank_query_returns_empty_list() {
    for uri in [
        "/api/v1/venues/search",
        "/api/v1/venues/search?q=",
        "/api/v1/venues/search?q=%20%20%20",
    ] {
        let (status, json) = get_json(app(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["data"].as_array().unwrap().is_empty(), "uri {uri}");
    }
}

#[tokio::test]
async fn search_matches_name_and_city_case_insensitively() {
    let (_, upper) = get_json(app(), "/api/v1/venues/search?q=CROZET").await;
    let (_, lower) = get_json(app(), "/api/v1/venues/search?q=crozet").await;
    assert_eq!(ids(&upper["data"]), ["A", "B"]);
    assert_eq!(ids(&upper["data"]), ids(&lower["data"]));

    let (_, narrowed) = get_json(app(), "/api/v1/venues/search?q=crozet&categories=brewery").await;
    assert_eq!(ids(&narrowed["data"]), ["B"]);
}

#[tokio::test]
async fn search_rejects_unknown_category() {
    let (status, json) = get_json(app(), "/api/v1/venues/search?q=a&categories=meadery").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn list_venues_filters_by_region_and_category() {
    let (_, all) = get_json(app(), "/api/v1/venues").await;
    assert_eq!(ids(&all["data"]), ["A", "B", "C", "D"]);

    let (_, blue_ridge) = get_json(app(), "/api/v1/venues?region=Blue%20Ridge").await;
    assert_eq!(ids(&blue_ridge["data"]), ["A", "B"]);

    let (_, wineries) = get_json(app(), "/api/v1/venues?categories=winery").await;
    assert_eq!(ids(&wineries["data"]), ["A", "C", "D"]);
}

#[tokio::test]
async fn get_venue_by_id() {
    let (status, json) = get_json(app(), "/api/v1/venues/D").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "Delta Winery");

    let (status, json) = get_json(app(), "/api/v1/venues/ZZ").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn regions_are_listed_with_counts() {
    let (status, json) = get_json(app(), "/api/v1/regions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"],
        serde_json::json!([
            { "name": "Blue Ridge", "count": 2 },
            { "name": "Northern Virginia", "count": 1 },
            { "name": "Shenandoah Valley", "count": 1 },
        ])
    );
}

#[tokio::test]
async fn repeated_queries_are_not_throttled() {
    let app = app();
    for _ in 0..200 {
        let (status, _) = get_json(app.clone(), "/api/v1/regions").await;
        assert_eq!(status, StatusCode::OK);
    }
}
