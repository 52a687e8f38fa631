use serde::{Deserialize, Serialize};

/// A competitive season grouping trainers and their matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub status: LeagueStatus,
    /// Maximum roster size per trainer. Carried as data only: draft-budget
    /// enforcement lives outside this engine.
    pub roster_capacity: u8,
}

impl League {
    pub fn new(id: u32, name: String, status: LeagueStatus, roster_capacity: u8) -> Self {
        League {
            id,
            name,
            status,
            roster_capacity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeagueStatus {
    #[serde(rename = "SETUP")]
    Setup,
    #[serde(rename = "DRAFTING")]
    Drafting,
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "COMPLETED")]
    Completed,
}
