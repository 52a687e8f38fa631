pub mod routes;

use crate::matches::MatchDto;
use crate::{ApiResult, GameAppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use core::r#match::ResultRecorder;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RecordResultRequest {
    pub match_id: u32,
}

#[derive(Deserialize)]
pub struct RecordResultBody {
    pub winner_id: u32,
    pub trainer1_score: Option<i32>,
    pub trainer2_score: Option<i32>,
    #[serde(default)]
    pub replay_links: Vec<String>,
}

pub async fn match_record_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<RecordResultRequest>,
    Json(body): Json<RecordResultBody>,
) -> ApiResult<Response> {
    // Write guard held across the whole operation: the completed-status
    // check, standings increments and match update commit as one unit, so
    // two concurrent recordings cannot both pass the check.
    let mut store = state.data.write().await;

    let recorded = ResultRecorder::record(
        &mut store,
        route_params.match_id,
        body.winner_id,
        body.trainer1_score,
        body.trainer2_score,
        body.replay_links,
        Utc::now().naive_utc(),
    )?;

    Ok(Json(MatchDto::from(&recorded)).into_response())
}
