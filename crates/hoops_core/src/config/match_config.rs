//! Match Simulator tuning

use serde::{Deserialize, Serialize};

/// Score model parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === Strength ===
    /// Strength added per prestige level (기본: 3.0)
    pub prestige_strength: f64,
    /// Lower bound for a non-empty roster's strength (기본: 20.0)
    pub strength_floor: f64,
    /// Strength of a team without players (기본: 30.0)
    pub empty_roster_strength: f64,
    /// Max rating penalty drawn per match under InjuryCrisis (기본: 8)
    pub injury_penalty_max: i32,
    /// Max home-court edge added to the home side (기본: 6)
    pub home_edge_max: i32,
    /// Multiplier bonus for the winning side of a strategy matchup (기본: 0.10)
    pub strategy_bonus: f64,

    // === Score ===
    /// Score of a 50-strength team before noise (기본: 60.0)
    pub base_score: f64,
    /// Points per strength point above/below 50 (기본: 0.5)
    pub strength_scale: f64,
    /// Symmetric score noise amplitude (기본: 8)
    pub score_noise: i32,
    /// Lowest possible score (기본: 40)
    pub min_score: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            prestige_strength: 3.0,
            strength_floor: 20.0,
            empty_roster_strength: 30.0,
            injury_penalty_max: 8,
            home_edge_max: 6,
            strategy_bonus: 0.10,

            base_score: 60.0,
            strength_scale: 0.5,
            score_noise: 8,
            min_score: 40,
        }
    }
}
