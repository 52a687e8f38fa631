pub mod routes;

use crate::{ApiResult, GameAppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use core::league::StandingsAggregator;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct StandingsGetRequest {
    pub league_id: u32,
}

#[derive(Serialize)]
pub struct StandingRow {
    pub trainer_id: u32,
    pub trainer_name: String,
    pub wins: u32,
    pub losses: u32,
}

pub async fn standings_get_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<StandingsGetRequest>,
) -> ApiResult<Response> {
    let store = state.data.read().await;

    let standings = StandingsAggregator::standings(&store, route_params.league_id)?;

    let rows: Vec<StandingRow> = standings
        .iter()
        .map(|standing| StandingRow {
            trainer_id: standing.trainer_id,
            trainer_name: store
                .trainer(standing.trainer_id)
                .map(|t| t.name.clone())
                .unwrap_or_default(),
            wins: standing.wins,
            losses: standing.losses,
        })
        .collect();

    Ok(Json(rows).into_response())
}
