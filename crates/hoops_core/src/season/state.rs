use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::playoffs::PlayoffMatchup;
use crate::engine::schedule::generate_balanced_schedule;
use crate::engine::standings::{Standings, StandingsEntry};
use crate::generator::IdGenerator;
use crate::models::{
    Division, FinanceRecord, Fixture, MatchResult, Phase, SeasonBonus, SeasonModifier, Team,
    LINEUP_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    TooFewPlayers,
    SevereDebt,
}

impl GameOverReason {
    pub fn message(&self) -> &'static str {
        match self {
            GameOverReason::TooFewPlayers => {
                "You started the off-season with fewer than 5 players under contract. Your career is over!"
            }
            GameOverReason::SevereDebt => {
                "Your club has been in severe debt for consecutive seasons. The board has terminated your contract!"
            }
        }
    }
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Whole-league state as seen from one viewer's club.
///
/// Every transition takes `&GameState` and returns a new value; nothing
/// mutates a state in place once it has been handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    // ========== Viewer ==========
    pub selected_team_id: String,

    // ========== Calendar ==========
    /// 1-based
    pub season: u32,
    /// 0 = preseason, otherwise the last simulated week
    pub week: u32,
    pub phase: Phase,
    pub season_modifier: SeasonModifier,

    // ========== League ==========
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub standings: Standings,
    /// Results of the viewer's division, in play order.
    #[serde(default)]
    pub schedule: Vec<MatchResult>,
    #[serde(default)]
    pub playoff_bracket: Vec<PlayoffMatchup>,

    // ========== Viewer club ==========
    pub finances: FinanceRecord,
    #[serde(default)]
    pub declined_player_ids: Vec<String>,
    #[serde(default)]
    pub youth_intake_used: bool,
    #[serde(default)]
    pub season_bonus: Option<SeasonBonus>,
    #[serde(default)]
    pub consecutive_negative_seasons: u32,

    // ========== Termination ==========
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub game_over_reason: Option<GameOverReason>,

    #[serde(default)]
    pub id_generator: IdGenerator,
}

impl GameState {
    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn team_mut(&mut self, team_id: &str) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == team_id)
    }

    pub fn selected_team(&self) -> Option<&Team> {
        self.team(&self.selected_team_id)
    }

    pub fn selected_team_mut(&mut self) -> Option<&mut Team> {
        let id = self.selected_team_id.clone();
        self.team_mut(&id)
    }

    pub fn division_team_ids(&self, division: Division) -> Vec<&str> {
        self.teams.iter().filter(|t| t.division == division).map(|t| t.id.as_str()).collect()
    }

    /// Fixture rounds of a division, derived from the team order.
    pub fn division_schedule(&self, division: Division) -> Vec<Vec<Fixture>> {
        generate_balanced_schedule(&self.division_team_ids(division))
    }

    /// Regular-season weeks of a division: `2 * (n - 1)` for `n` teams
    /// (an odd field plays one more round per half).
    pub fn season_length(&self, division: Division) -> u32 {
        self.division_schedule(division).len() as u32
    }

    pub fn division_standings(&self, division: Division) -> &[StandingsEntry] {
        self.standings.get(&division).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Standings-consistency and roster checks. Returns the first violation.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for team in &self.teams {
            if team.starter_count() > LINEUP_SIZE {
                return Err(format!("{} has {} starters", team.id, team.starter_count()));
            }
            for player in &team.players {
                if !seen.insert(player.id.as_str()) {
                    return Err(format!("duplicate player id {}", player.id));
                }
                if player.overall != player.attributes.overall() {
                    return Err(format!("stale overall for {}", player.id));
                }
            }
        }

        for division in Division::ALL {
            let expected: HashSet<&str> = self.division_team_ids(division).into_iter().collect();
            let entries = self.division_standings(division);
            let actual: HashSet<&str> = entries.iter().map(|e| e.team_id.as_str()).collect();
            if expected != actual || entries.len() != actual.len() {
                return Err(format!("{division} standings do not match its teams"));
            }
            let wins: u32 = entries.iter().map(|e| e.wins).sum();
            let losses: u32 = entries.iter().map(|e| e.losses).sum();
            if wins != losses {
                return Err(format!("{division} standings: {wins} wins vs {losses} losses"));
            }
        }

        for m in &self.playoff_bracket {
            if let Some(winner) = &m.winner_id {
                if winner != &m.team1_id && winner != &m.team2_id {
                    return Err(format!("playoff winner {winner} did not play"));
                }
            }
        }

        if self.game_over != self.game_over_reason.is_some() {
            return Err("game_over flag and reason disagree".to_string());
        }
        Ok(())
    }

    /// Panics on a violated invariant when `strict_invariants` is enabled.
    #[cfg(feature = "strict_invariants")]
    pub(crate) fn enforce_invariants(&self) {
        if let Err(violation) = self.check_invariants() {
            panic!("invariant violated: {violation}");
        }
    }

    #[cfg(not(feature = "strict_invariants"))]
    #[inline]
    pub(crate) fn enforce_invariants(&self) {}
}
