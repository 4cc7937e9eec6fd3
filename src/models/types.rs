use serde::{Deserialize, Serialize};

// One entry from the OpenDota `publicMatches` feed. Everything except the
// match id is optional in practice.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicMatch {
    pub match_id: u64,
    pub start_time: Option<i64>,
    pub radiant_win: Option<bool>,
    pub radiant_team: Option<i64>,
    pub dire_team: Option<i64>,
    pub avg_rank_tier: Option<u32>,
}

impl PublicMatch {
    pub fn rank_tier(&self) -> u32 {
        self.avg_rank_tier.unwrap_or(0)
    }
}

// The persisted shape of an accepted match. Field order is the CSV header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRow {
    pub match_id: u64,
    pub start_time: i64,
    pub radiant_win: Option<bool>,
    pub radiant_team: Option<i64>,
    pub dire_team: Option<i64>,
    pub avg_rank_tier: u32,
}

impl MatchRow {
    // Only valid for a match that passed the recency filter.
    pub fn from_match(m: &PublicMatch, start_time: i64) -> Self {
        Self {
            match_id: m.match_id,
            start_time,
            radiant_win: m.radiant_win,
            radiant_team: m.radiant_team,
            dire_team: m.dire_team,
            avg_rank_tier: m.rank_tier(),
        }
    }
}
