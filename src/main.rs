use league_core::utils::TimeEstimation;
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::info;
use server::{DraftLeagueServer, GameAppData};
use std::env;
use std::sync::Arc;
use tokio::sync::RwLock;

const DEFAULT_SEED: u64 = 151;

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let seed = env::var("SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    let (database, estimated) = TimeEstimation::estimate(|| DatabaseLoader::load(seed));

    info!("database loaded: {} ms (seed {})", estimated, seed);

    let store = DatabaseGenerator::generate(&database);

    let data = GameAppData {
        database: Arc::new(database),
        data: Arc::new(RwLock::new(store)),
    };

    DraftLeagueServer::new(data).run().await;
}
