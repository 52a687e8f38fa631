use core::league::LeagueStatus;
use serde::Deserialize;

const STATIC_LEAGUES_JSON: &str = include_str!("../data/leagues.json");

#[derive(Deserialize)]
pub struct LeagueEntity {
    pub name: String,
    pub status: LeagueStatus,
    pub roster_capacity: u8,
    pub trainers: Vec<TrainerEntity>,
}

#[derive(Deserialize)]
pub struct TrainerEntity {
    pub name: String,
    pub discord_id: Option<String>,
}

pub struct LeagueLoader;

impl LeagueLoader {
    pub fn load() -> Vec<LeagueEntity> {
        serde_json::from_str(STATIC_LEAGUES_JSON).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_leagues_parse() {
        let leagues = LeagueLoader::load();

        assert!(!leagues.is_empty());
        // The active seed league must be schedulable.
        assert!(leagues
            .iter()
            .any(|l| l.status == LeagueStatus::Active && l.trainers.len() >= 2));
    }
}
