use crate::league::{League, LeagueStatus, Standing, Trainer};
use crate::r#match::{Match, MatchStatus, MatchType};
use std::collections::HashMap;

/// In-memory arena for league entities, addressed by opaque `u32` ids.
///
/// Every relation between entities is a foreign key resolved through this
/// store, never an owning pointer. Mutating engine operations take
/// `&mut LeagueStore`, so a whole operation commits under one exclusive
/// borrow (the caller decides how that borrow is scoped, e.g. behind an
/// `RwLock` write guard).
#[derive(Debug, Default)]
pub struct LeagueStore {
    leagues: HashMap<u32, League>,
    trainers: HashMap<u32, Trainer>,
    matches: HashMap<u32, Match>,
    standings: HashMap<u32, Standing>,

    next_league_id: u32,
    next_trainer_id: u32,
    next_match_id: u32,
    next_standing_id: u32,
}

impl LeagueStore {
    pub fn new() -> Self {
        LeagueStore::default()
    }

    // ========== LEAGUES ==========

    pub fn add_league(&mut self, name: &str, status: LeagueStatus, roster_capacity: u8) -> u32 {
        self.next_league_id += 1;
        let id = self.next_league_id;

        self.leagues
            .insert(id, League::new(id, String::from(name), status, roster_capacity));

        id
    }

    pub fn league(&self, id: u32) -> Option<&League> {
        self.leagues.get(&id)
    }

    pub fn leagues(&self) -> Vec<&League> {
        let mut leagues: Vec<&League> = self.leagues.values().collect();
        leagues.sort_by_key(|l| l.id);
        leagues
    }

    // ========== TRAINERS ==========

    pub fn add_trainer(&mut self, name: &str, league_id: u32, discord_id: Option<String>) -> u32 {
        self.next_trainer_id += 1;
        let id = self.next_trainer_id;

        self.trainers
            .insert(id, Trainer::new(id, String::from(name), league_id, discord_id));

        id
    }

    pub fn trainer(&self, id: u32) -> Option<&Trainer> {
        self.trainers.get(&id)
    }

    /// Listing order is ascending trainer id.
    pub fn trainers_by_league(&self, league_id: u32) -> Vec<&Trainer> {
        let mut trainers: Vec<&Trainer> = self
            .trainers
            .values()
            .filter(|t| t.league_id == league_id)
            .collect();

        trainers.sort_by_key(|t| t.id);
        trainers
    }

    // ========== MATCHES ==========

    /// Persists a single match, assigning its id.
    pub fn add_match(&mut self, mut match_to_add: Match) -> Match {
        self.next_match_id += 1;
        match_to_add.id = self.next_match_id;

        let stored = match_to_add.clone();
        self.matches.insert(match_to_add.id, match_to_add);

        stored
    }

    /// Persists matches in bulk, in order, assigning sequential ids.
    pub fn add_matches(&mut self, matches: Vec<Match>) -> Vec<Match> {
        matches.into_iter().map(|m| self.add_match(m)).collect()
    }

    pub fn match_by_id(&self, id: u32) -> Option<&Match> {
        self.matches.get(&id)
    }

    /// Replaces a stored match with `updated` (matched by id).
    pub fn update_match(&mut self, updated: Match) {
        self.matches.insert(updated.id, updated);
    }

    /// All matches of a league, in pairing order.
    pub fn matches_by_league(&self, league_id: u32) -> Vec<&Match> {
        let mut matches: Vec<&Match> = self
            .matches
            .values()
            .filter(|m| m.league_id == league_id)
            .collect();

        matches.sort_by_key(|m| (m.round_number, m.id));
        matches
    }

    pub fn matches_by_league_and_type(&self, league_id: u32, match_type: MatchType) -> Vec<&Match> {
        self.matches_by_league(league_id)
            .into_iter()
            .filter(|m| m.match_type == match_type)
            .collect()
    }

    pub fn matches_by_league_and_status(&self, league_id: u32, status: MatchStatus) -> Vec<&Match> {
        self.matches_by_league(league_id)
            .into_iter()
            .filter(|m| m.status == status)
            .collect()
    }

    pub fn matches_by_league_and_type_and_status(
        &self,
        league_id: u32,
        match_type: MatchType,
        status: MatchStatus,
    ) -> Vec<&Match> {
        self.matches_by_league(league_id)
            .into_iter()
            .filter(|m| m.match_type == match_type && m.status == status)
            .collect()
    }

    // ========== STANDINGS ==========

    /// Creates a zeroed standing row. At most one row may exist per
    /// (league, trainer); callers check `standing_by_league_and_trainer`
    /// first.
    pub fn add_standing(&mut self, league_id: u32, trainer_id: u32) -> u32 {
        self.next_standing_id += 1;
        let id = self.next_standing_id;

        self.standings
            .insert(id, Standing::zeroed(id, league_id, trainer_id));

        id
    }

    pub fn standing_by_league_and_trainer(
        &self,
        league_id: u32,
        trainer_id: u32,
    ) -> Option<&Standing> {
        self.standings
            .values()
            .find(|s| s.league_id == league_id && s.trainer_id == trainer_id)
    }

    pub fn standing_mut(&mut self, league_id: u32, trainer_id: u32) -> Option<&mut Standing> {
        self.standings
            .values_mut()
            .find(|s| s.league_id == league_id && s.trainer_id == trainer_id)
    }

    /// All standings of a league, in row-creation order.
    pub fn standings_by_league(&self, league_id: u32) -> Vec<&Standing> {
        let mut standings: Vec<&Standing> = self
            .standings
            .values()
            .filter(|s| s.league_id == league_id)
            .collect();

        standings.sort_by_key(|s| s.id);
        standings
    }

    /// Standings sorted by wins descending. Tie order beyond wins is
    /// undefined (stable sort over row-creation order).
    pub fn standings_by_league_by_wins_desc(&self, league_id: u32) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .standings_by_league(league_id)
            .into_iter()
            .cloned()
            .collect();

        standings.sort_by(|a, b| b.wins.cmp(&a.wins));
        standings
    }
}
