use crate::GameAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<GameAppData> {
    Router::new().route(
        "/api/matches/generate-round-robin/{league_id}",
        post(super::match_generate_action),
    )
}
