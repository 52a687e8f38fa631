pub mod routes;

use crate::{ApiError, ApiResult, GameAppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LeagueTrainersRequest {
    pub league_id: u32,
}

#[derive(Serialize)]
pub struct TrainerDto {
    pub id: u32,
    pub name: String,
    pub discord_id: Option<String>,
}

pub async fn league_trainers_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<LeagueTrainersRequest>,
) -> ApiResult<Response> {
    let store = state.data.read().await;

    if store.league(route_params.league_id).is_none() {
        return Err(ApiError::NotFound(format!(
            "league with id {} not found",
            route_params.league_id
        )));
    }

    let trainers: Vec<TrainerDto> = store
        .trainers_by_league(route_params.league_id)
        .iter()
        .map(|trainer| TrainerDto {
            id: trainer.id,
            name: trainer.name.clone(),
            discord_id: trainer.discord_id.clone(),
        })
        .collect();

    Ok(Json(trainers).into_response())
}
