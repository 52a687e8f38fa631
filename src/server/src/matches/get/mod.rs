pub mod routes;

use crate::matches::MatchDto;
use crate::{ApiError, ApiResult, GameAppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct MatchGetRequest {
    pub match_id: u32,
}

pub async fn match_get_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<MatchGetRequest>,
) -> ApiResult<Response> {
    let store = state.data.read().await;

    let match_record = store.match_by_id(route_params.match_id).ok_or_else(|| {
        ApiError::NotFound(format!("match with id {} not found", route_params.match_id))
    })?;

    Ok(Json(MatchDto::from(match_record)).into_response())
}
