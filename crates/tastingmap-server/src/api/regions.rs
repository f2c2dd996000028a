use axum::{extract::State, Extension, Json};
use tastingmap_core::RegionCount;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

pub(super) async fn list_regions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<RegionCount>>> {
    Json(ApiResponse {
        data: state.catalog.regions().to_vec(),
        meta: ResponseMeta::new(req_id.0),
    })
}
