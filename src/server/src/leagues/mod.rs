pub mod get;
pub mod list;
pub mod trainers;

use crate::GameAppData;
use axum::Router;

pub fn league_routes() -> Router<GameAppData> {
    list::routes::routes()
        .merge(get::routes::routes())
        .merge(trainers::routes::routes())
}
