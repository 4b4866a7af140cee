use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home_team_id: String,
    pub away_team_id: String,
}

impl Fixture {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self { home_team_id: home.into(), away_team_id: away.into() }
    }
}

/// Final score of one simulated game. Never a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub home_score: u32,
    pub away_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team_id: String,
    pub away_team_id: String,
    pub home_score: u32,
    pub away_score: u32,
    pub week: u32,
}

impl MatchResult {
    pub fn from_fixture(fixture: &Fixture, score: MatchScore, week: u32) -> Self {
        Self {
            home_team_id: fixture.home_team_id.clone(),
            away_team_id: fixture.away_team_id.clone(),
            home_score: score.home_score,
            away_score: score.away_score,
            week,
        }
    }

    pub fn winner_id(&self) -> &str {
        if self.home_score > self.away_score {
            &self.home_team_id
        } else {
            &self.away_team_id
        }
    }
}
