pub mod routes;

use crate::{ApiError, ApiResult, GameAppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use core::league::LeagueStatus;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LeagueGetRequest {
    pub league_id: u32,
}

#[derive(Serialize)]
pub struct LeagueGetViewModel {
    pub id: u32,
    pub name: String,
    pub status: LeagueStatus,
    pub roster_capacity: u8,
    pub trainer_count: usize,
    pub match_count: usize,
}

pub async fn league_get_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<LeagueGetRequest>,
) -> ApiResult<Response> {
    let store = state.data.read().await;

    let league = store.league(route_params.league_id).ok_or_else(|| {
        ApiError::NotFound(format!(
            "league with id {} not found",
            route_params.league_id
        ))
    })?;

    let model = LeagueGetViewModel {
        id: league.id,
        name: league.name.clone(),
        status: league.status,
        roster_capacity: league.roster_capacity,
        trainer_count: store.trainers_by_league(league.id).len(),
        match_count: store.matches_by_league(league.id).len(),
    };

    Ok(Json(model).into_response())
}
