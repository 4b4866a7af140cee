use serde::{Deserialize, Serialize};
use std::fmt;

use super::Player;

/// Players on court at once. Strategy and strength read this many.
pub const LINEUP_SIZE: usize = 5;

/// Upper sorts before Lower, so division maps iterate Upper first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Division {
    Upper,
    Lower,
}

impl Division {
    pub const ALL: [Division; 2] = [Division::Upper, Division::Lower];
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Division::Upper => write!(f, "Upper Division"),
            Division::Lower => write!(f, "Lower Division"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub division: Division,
    /// 1..=5
    pub prestige: u8,
    pub color: String,
    pub budget: i64,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn starter_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_starter).count()
    }

    /// Explicit starters, then the best bench players until five are on court.
    ///
    /// Does not touch `is_starter`.
    pub fn lineup(&self) -> Vec<&Player> {
        let mut lineup: Vec<&Player> =
            self.players.iter().filter(|p| p.is_starter).take(LINEUP_SIZE).collect();
        if lineup.len() < LINEUP_SIZE {
            let mut bench: Vec<&Player> = self.players.iter().filter(|p| !p.is_starter).collect();
            // stable: equal overall keeps roster order
            bench.sort_by(|a, b| b.overall.cmp(&a.overall));
            let missing = LINEUP_SIZE - lineup.len();
            lineup.extend(bench.into_iter().take(missing));
        }
        lineup
    }

    /// Mean overall of the whole roster; `None` for an empty roster.
    pub fn average_overall(&self) -> Option<f64> {
        if self.players.is_empty() {
            return None;
        }
        let sum: u32 = self.players.iter().map(|p| p.overall).sum();
        Some(sum as f64 / self.players.len() as f64)
    }

    pub fn total_wages(&self) -> i64 {
        self.players.iter().map(|p| p.salary).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerAttributes, PlayerRarity, PlayerRole};

    fn player(id: &str, overall: u32, starter: bool) -> Player {
        Player {
            id: id.to_string(),
            name: id.to_string(),
            age: 25,
            role: PlayerRole::Defender,
            attributes: PlayerAttributes {
                height: 200,
                shooting: overall,
                defending: overall,
                dribbling: overall,
                passing: overall,
            },
            overall,
            salary: 1_000,
            contract_years: 2,
            is_youth: false,
            is_starter: starter,
            seasons_without_play: 0,
            joined_this_offseason: false,
            rarity: PlayerRarity::from_overall(overall),
        }
    }

    fn team(players: Vec<Player>) -> Team {
        Team {
            id: "t".into(),
            name: "T".into(),
            short_name: "T".into(),
            division: Division::Upper,
            prestige: 3,
            color: "#000000".into(),
            budget: 0,
            players,
        }
    }

    #[test]
    fn test_division_order_upper_first() {
        assert!(Division::Upper < Division::Lower);
    }

    #[test]
    fn test_lineup_fills_with_best_bench() {
        let t = team(vec![
            player("a", 40, true),
            player("b", 60, false),
            player("c", 70, false),
            player("d", 50, true),
            player("e", 30, false),
            player("f", 65, false),
            player("g", 55, false),
        ]);
        let ids: Vec<&str> = t.lineup().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d", "c", "f", "b"]);
    }

    #[test]
    fn test_lineup_short_roster() {
        let t = team(vec![player("a", 40, false), player("b", 60, false)]);
        assert_eq!(t.lineup().len(), 2);
    }

    #[test]
    fn test_average_and_wages() {
        let t = team(vec![player("a", 40, true), player("b", 61, false)]);
        assert_eq!(t.average_overall(), Some(50.5));
        assert_eq!(t.total_wages(), 2_000);
        assert_eq!(team(vec![]).average_overall(), None);
    }
}
