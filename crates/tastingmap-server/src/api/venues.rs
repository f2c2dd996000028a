use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Serialize;
use tastingmap_core::{parse_coordinate, Coordinate, Venue};
use tastingmap_search::{find_nearby_matching, search, NearbyQuery};

use crate::middleware::RequestId;

use super::params::{
    build_filter, parse_limit, parse_radius, ListParams, NearbyParams, SearchParams,
};
use super::{map_input_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct NearbyItem {
    pub venue: Venue,
    pub distance_miles: f64,
}

#[derive(Debug, Serialize)]
pub(super) struct NearbyData {
    pub origin: Coordinate,
    pub radius_miles: f64,
    pub results: Vec<NearbyItem>,
}

pub(super) async fn list_nearby_venues(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<ApiResponse<NearbyData>>, ApiError> {
    let origin = parse_coordinate(params.lat.as_deref(), params.lng.as_deref())
        .map_err(|e| map_input_error(req_id.0.clone(), &e))?;
    let filter = build_filter(params.categories.as_deref(), params.region.as_deref())
        .map_err(|e| map_input_error(req_id.0.clone(), &e))?;

    let radius_miles = parse_radius(params.radius.as_deref(), state.default_radius_miles);
    let query = NearbyQuery::new(origin)
        .with_radius(radius_miles)
        .with_limit(parse_limit(params.limit.as_deref()));

    let results = find_nearby_matching(&state.catalog, &query, &filter)
        .into_iter()
        .map(|r| NearbyItem {
            venue: r.venue.clone(),
            distance_miles: r.distance_miles,
        })
        .collect();

    Ok(Json(ApiResponse {
        data: NearbyData {
            origin,
            radius_miles,
            results,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn search_venues(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<Venue>>>, ApiError> {
    let filter = build_filter(params.categories.as_deref(), params.region.as_deref())
        .map_err(|e| map_input_error(req_id.0.clone(), &e))?;

    let q = params.q.as_deref().unwrap_or_default();
    let data = filter
        .apply(search(&state.catalog, q))
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn list_venues(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Vec<Venue>>>, ApiError> {
    let filter = build_filter(params.categories.as_deref(), params.region.as_deref())
        .map_err(|e| map_input_error(req_id.0.clone(), &e))?;

    let data = filter
        .apply(state.catalog.venues().iter().collect::<Vec<_>>())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_venue(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Venue>>, ApiError> {
    let venue = state.catalog.get(&id).cloned().ok_or_else(|| {
        ApiError::new(
            req_id.0.clone(),
            "not_found",
            format!("venue '{id}' not found"),
        )
    })?;

    Ok(Json(ApiResponse {
        data: venue,
        meta: ResponseMeta::new(req_id.0),
    }))
}
