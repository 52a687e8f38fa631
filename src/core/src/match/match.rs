use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A scheduled or completed contest between two trainers of one league.
///
/// Participants are distinct and both belong to `league_id`. Once `winner_id`
/// is set it equals one of the two participants, and the match is immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: u32,
    pub league_id: u32,
    pub trainer1_id: u32,
    pub trainer2_id: u32,
    pub winner_id: Option<u32>,
    /// Flat 1-based pairing index in generation order. Scheduling metadata
    /// only: pairs that could be played concurrently are not grouped into
    /// round-robin days.
    pub round_number: u32,
    pub match_type: MatchType,
    pub status: MatchStatus,
    pub trainer1_score: Option<i32>,
    pub trainer2_score: Option<i32>,
    /// Showdown replay links, in the order they were submitted. May be empty.
    pub replay_links: Vec<String>,
    pub completed_at: Option<NaiveDateTime>,
}

impl Match {
    pub fn scheduled(
        league_id: u32,
        trainer1_id: u32,
        trainer2_id: u32,
        round_number: u32,
        match_type: MatchType,
    ) -> Self {
        Match {
            id: 0,
            league_id,
            trainer1_id,
            trainer2_id,
            winner_id: None,
            round_number,
            match_type,
            status: MatchStatus::Scheduled,
            trainer1_score: None,
            trainer2_score: None,
            replay_links: Vec::new(),
            completed_at: None,
        }
    }

    pub fn is_participant(&self, trainer_id: u32) -> bool {
        self.trainer1_id == trainer_id || self.trainer2_id == trainer_id
    }

    /// The participant that is not `trainer_id`. Caller must pass a participant.
    pub fn opponent_of(&self, trainer_id: u32) -> u32 {
        if self.trainer1_id == trainer_id {
            self.trainer2_id
        } else {
            self.trainer1_id
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    #[serde(rename = "REGULAR_SEASON")]
    RegularSeason,
    /// Label only: no bracket generator exists for playoff matches.
    #[serde(rename = "PLAYOFF")]
    Playoff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    #[serde(rename = "SCHEDULED")]
    Scheduled,
    #[serde(rename = "COMPLETED")]
    Completed,
}
