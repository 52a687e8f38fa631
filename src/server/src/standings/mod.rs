pub mod get;

use crate::GameAppData;
use axum::Router;

pub fn standing_routes() -> Router<GameAppData> {
    get::routes::routes()
}
