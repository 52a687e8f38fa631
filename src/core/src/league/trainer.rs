use serde::{Deserialize, Serialize};

/// A participant in a league. Belongs to exactly one league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainer {
    pub id: u32,
    pub name: String,
    pub league_id: u32,
    pub discord_id: Option<String>,
}

impl Trainer {
    pub fn new(id: u32, name: String, league_id: u32, discord_id: Option<String>) -> Self {
        Trainer {
            id,
            name,
            league_id,
            discord_id,
        }
    }
}
