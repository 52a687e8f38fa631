pub mod routes;

use crate::{ApiResult, GameAppData};
use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

/// The draftable Pokémon pool with seeded draft costs.
pub async fn pokemon_list_action(State(state): State<GameAppData>) -> ApiResult<Response> {
    Ok(Json(&state.database.pokemon).into_response())
}
