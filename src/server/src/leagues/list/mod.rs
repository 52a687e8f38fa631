pub mod routes;

use crate::{ApiResult, GameAppData};
use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use core::league::LeagueStatus;
use serde::Serialize;

#[derive(Serialize)]
pub struct LeagueListItem {
    pub id: u32,
    pub name: String,
    pub status: LeagueStatus,
    pub roster_capacity: u8,
    pub trainer_count: usize,
}

pub async fn league_list_action(State(state): State<GameAppData>) -> ApiResult<Response> {
    let store = state.data.read().await;

    let leagues: Vec<LeagueListItem> = store
        .leagues()
        .iter()
        .map(|league| LeagueListItem {
            id: league.id,
            name: league.name.clone(),
            status: league.status,
            roster_capacity: league.roster_capacity,
            trainer_count: store.trainers_by_league(league.id).len(),
        })
        .collect();

    Ok(Json(leagues).into_response())
}
