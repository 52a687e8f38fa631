use crate::GameAppData;
use axum::Router;
use axum::routing::put;

pub fn routes() -> Router<GameAppData> {
    Router::new().route(
        "/api/matches/{match_id}/record-result",
        put(super::match_record_action),
    )
}
