use crate::GameAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<GameAppData> {
    Router::new().route(
        "/api/standings/{league_id}",
        get(super::standings_get_action),
    )
}
