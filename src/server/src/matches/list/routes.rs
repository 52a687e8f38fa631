use crate::GameAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<GameAppData> {
    Router::new().route(
        "/api/matches/by-league/{league_id}",
        get(super::match_list_action),
    )
}
