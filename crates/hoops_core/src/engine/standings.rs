//! Standings Engine

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{Division, MatchResult, Team};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub team_id: String,
    pub wins: u32,
    pub losses: u32,
    pub points_for: u32,
    pub points_against: u32,
    /// Positive = winning streak, negative = losing streak.
    pub streak: i32,
}

impl StandingsEntry {
    pub fn new(team_id: impl Into<String>) -> Self {
        Self { team_id: team_id.into(), ..Self::default() }
    }

    pub fn point_differential(&self) -> i64 {
        self.points_for as i64 - self.points_against as i64
    }

    fn record(&mut self, scored: u32, conceded: u32) {
        self.points_for += scored;
        self.points_against += conceded;
        if scored > conceded {
            self.wins += 1;
            self.streak = if self.streak > 0 { self.streak + 1 } else { 1 };
        } else {
            self.losses += 1;
            self.streak = if self.streak < 0 { self.streak - 1 } else { -1 };
        }
    }
}

pub type Standings = BTreeMap<Division, Vec<StandingsEntry>>;

/// Wins desc, then point differential desc.
pub fn compare_entries(a: &StandingsEntry, b: &StandingsEntry) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| b.point_differential().cmp(&a.point_differential()))
}

/// Fold one result into a division's entries. Teams missing from the list
/// are ignored.
pub fn apply_result(entries: &mut [StandingsEntry], result: &MatchResult) {
    for entry in entries.iter_mut() {
        if entry.team_id == result.home_team_id {
            entry.record(result.home_score, result.away_score);
        } else if entry.team_id == result.away_team_id {
            entry.record(result.away_score, result.home_score);
        }
    }
}

/// Entries in table order. Stable, so full ties keep insertion order.
pub fn sorted(entries: &[StandingsEntry]) -> Vec<StandingsEntry> {
    let mut out = entries.to_vec();
    out.sort_by(compare_entries);
    out
}

/// 1-based table position.
pub fn rank_of(entries: &[StandingsEntry], team_id: &str) -> Option<usize> {
    sorted(entries).iter().position(|e| e.team_id == team_id).map(|i| i + 1)
}

/// Zeroed table for every division, teams in universe order.
pub fn create_initial_standings(teams: &[Team]) -> Standings {
    Division::ALL
        .iter()
        .map(|division| {
            let entries = teams
                .iter()
                .filter(|t| t.division == *division)
                .map(|t| StandingsEntry::new(t.id.clone()))
                .collect();
            (*division, entries)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(home: &str, away: &str, hs: u32, aws: u32) -> MatchResult {
        MatchResult {
            home_team_id: home.into(),
            away_team_id: away.into(),
            home_score: hs,
            away_score: aws,
            week: 1,
        }
    }

    #[test]
    fn test_apply_result_and_streaks() {
        let mut entries = vec![StandingsEntry::new("a"), StandingsEntry::new("b")];
        apply_result(&mut entries, &result("a", "b", 80, 70));
        apply_result(&mut entries, &result("b", "a", 60, 75));
        assert_eq!(entries[0].wins, 2);
        assert_eq!(entries[0].streak, 2);
        assert_eq!(entries[0].points_for, 155);
        assert_eq!(entries[1].losses, 2);
        assert_eq!(entries[1].streak, -2);

        apply_result(&mut entries, &result("b", "a", 90, 60));
        assert_eq!(entries[0].streak, -1);
        assert_eq!(entries[1].streak, 1);
    }

    #[test]
    fn test_order_by_wins_then_differential() {
        let mut a = StandingsEntry::new("a");
        a.wins = 5;
        a.points_for = 500;
        a.points_against = 520;
        let mut b = StandingsEntry::new("b");
        b.wins = 5;
        b.points_for = 510;
        b.points_against = 480;
        let mut c = StandingsEntry::new("c");
        c.wins = 6;

        let order: Vec<String> = sorted(&[a.clone(), b.clone(), c.clone()])
            .into_iter()
            .map(|e| e.team_id)
            .collect();
        assert_eq!(order, vec!["c", "b", "a"]);
        assert_eq!(rank_of(&[a, b, c], "a"), Some(3));
    }

    #[test]
    fn test_rank_of_unknown() {
        assert_eq!(rank_of(&[StandingsEntry::new("a")], "z"), None);
    }
}
