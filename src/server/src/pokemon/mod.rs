pub mod list;

use crate::GameAppData;
use axum::Router;

pub fn pokemon_routes() -> Router<GameAppData> {
    list::routes::routes()
}
