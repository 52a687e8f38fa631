use crate::GameAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<GameAppData> {
    Router::new().route(
        "/api/leagues/{league_id}/trainers",
        get(super::league_trainers_action),
    )
}
