pub mod generate;
pub mod get;
pub mod list;
pub mod record;

use crate::{ApiError, GameAppData};
use axum::Router;
use chrono::NaiveDateTime;
use core::r#match::{Match, MatchStatus, MatchType};
use serde::Serialize;

pub fn match_routes() -> Router<GameAppData> {
    get::routes::routes()
        .merge(list::routes::routes())
        .merge(generate::routes::routes())
        .merge(record::routes::routes())
}

#[derive(Serialize)]
pub struct MatchDto {
    pub id: u32,
    pub league_id: u32,
    pub trainer1_id: u32,
    pub trainer2_id: u32,
    pub winner_id: Option<u32>,
    pub round_number: u32,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub status: MatchStatus,
    pub trainer1_score: Option<i32>,
    pub trainer2_score: Option<i32>,
    pub replay_links: Vec<String>,
    pub completed_at: Option<NaiveDateTime>,
}

impl From<&Match> for MatchDto {
    fn from(m: &Match) -> Self {
        MatchDto {
            id: m.id,
            league_id: m.league_id,
            trainer1_id: m.trainer1_id,
            trainer2_id: m.trainer2_id,
            winner_id: m.winner_id,
            round_number: m.round_number,
            match_type: m.match_type,
            status: m.status,
            trainer1_score: m.trainer1_score,
            trainer2_score: m.trainer2_score,
            replay_links: m.replay_links.clone(),
            completed_at: m.completed_at,
        }
    }
}

pub fn parse_match_type(value: &str) -> Result<MatchType, ApiError> {
    match value {
        "REGULAR_SEASON" => Ok(MatchType::RegularSeason),
        "PLAYOFF" => Ok(MatchType::Playoff),
        other => Err(ApiError::BadRequest(format!(
            "unknown match type '{}'",
            other
        ))),
    }
}

pub fn parse_match_status(value: &str) -> Result<MatchStatus, ApiError> {
    match value {
        "SCHEDULED" => Ok(MatchStatus::Scheduled),
        "COMPLETED" => Ok(MatchStatus::Completed),
        other => Err(ApiError::BadRequest(format!(
            "unknown match status '{}'",
            other
        ))),
    }
}
