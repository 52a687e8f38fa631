pub mod error;
pub mod league;
pub mod r#match;
pub mod store;
pub mod utils;

pub use error::LeagueError;
pub use league::{
    League, LeagueStatus, ScheduleGenerator, Standing, StandingsAggregator, Trainer,
};
pub use r#match::{Match, MatchQueries, MatchStatus, MatchType, ResultRecorder};
pub use store::LeagueStore;
