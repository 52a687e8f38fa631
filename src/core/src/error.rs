use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure kinds for league engine operations.
///
/// All three are local, synchronous failures returned to the immediate
/// caller: an operation either fully commits against the store or leaves
/// it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    /// Referenced league or match does not exist.
    NotFound(String),
    /// Structurally invalid request (too few trainers, winner not a
    /// participant, referenced trainer missing).
    InvalidArgument(String),
    /// Operation not legal in the current entity state
    /// (re-recording a completed match).
    InvalidState(String),
}

impl Display for LeagueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::NotFound(msg) => write!(f, "not found: {}", msg),
            LeagueError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            LeagueError::InvalidState(msg) => write!(f, "invalid state: {}", msg),
        }
    }
}

impl Error for LeagueError {}
