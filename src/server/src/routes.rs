use crate::GameAppData;
use crate::leagues::league_routes;
use crate::matches::match_routes;
use crate::pokemon::pokemon_routes;
use crate::standings::standing_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<GameAppData> {
        Router::<GameAppData>::new()
            .merge(league_routes())
            .merge(match_routes())
            .merge(standing_routes())
            .merge(pokemon_routes())
    }
}
