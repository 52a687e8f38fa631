pub mod routes;

use crate::matches::{MatchDto, parse_match_status, parse_match_type};
use crate::{ApiResult, GameAppData};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use core::r#match::MatchQueries;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct MatchListRequest {
    pub league_id: u32,
}

#[derive(Deserialize)]
pub struct MatchListQuery {
    #[serde(rename = "type")]
    pub match_type: Option<String>,
    pub status: Option<String>,
}

pub async fn match_list_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<MatchListRequest>,
    Query(query): Query<MatchListQuery>,
) -> ApiResult<Response> {
    let match_type = query
        .match_type
        .as_deref()
        .map(parse_match_type)
        .transpose()?;

    let status = query.status.as_deref().map(parse_match_status).transpose()?;

    let store = state.data.read().await;

    let matches = MatchQueries::for_league(&store, route_params.league_id, match_type, status)?;

    let models: Vec<MatchDto> = matches.iter().map(MatchDto::from).collect();

    Ok(Json(models).into_response())
}
