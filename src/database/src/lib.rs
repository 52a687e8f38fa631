mod generators;
mod loaders;

pub use generators::*;
pub use loaders::*;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seed data loaded from the embedded files: league definitions with their
/// trainer rosters, plus the Pokémon pool with draft costs assigned.
pub struct DatabaseEntity {
    pub leagues: Vec<LeagueEntity>,
    pub pokemon: Vec<PokemonEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Loads all embedded seed data. Draft costs are produced by an
    /// explicitly seeded generator, so a fixed `seed` yields identical data
    /// on every run.
    pub fn load(seed: u64) -> DatabaseEntity {
        let mut rng = StdRng::seed_from_u64(seed);

        DatabaseEntity {
            leagues: LeagueLoader::load(),
            pokemon: PokemonLoader::load(&mut rng),
        }
    }
}
