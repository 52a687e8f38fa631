pub mod routes;

use crate::matches::MatchDto;
use crate::{ApiResult, GameAppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use core::league::ScheduleGenerator;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct GenerateScheduleRequest {
    pub league_id: u32,
}

pub async fn match_generate_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<GenerateScheduleRequest>,
) -> ApiResult<Response> {
    // Write guard held across the whole operation: match creation and
    // standings bootstrap commit as one unit.
    let mut store = state.data.write().await;

    let matches = ScheduleGenerator::generate(&mut store, route_params.league_id)?;

    let models: Vec<MatchDto> = matches.iter().map(MatchDto::from).collect();

    Ok((StatusCode::CREATED, Json(models)).into_response())
}
