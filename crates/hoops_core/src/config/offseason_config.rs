//! Offseason rollover parameters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffseasonConfig {
    /// Age from which players may retire (기본: 32)
    pub retirement_age: u32,
    /// Retirement chance per year above `retirement_age` (기본: 0.12)
    pub retirement_chance_per_year: f64,

    /// Viewer players younger than this may develop (기본: 23)
    pub development_age_limit: u32,
    /// Chance a young viewer player develops (기본: 0.7)
    pub development_chance: f64,
    /// Skill points granted on development, inclusive range
    pub development_points: (u32, u32),

    /// AI rosters are refilled up to this size (기본: 10)
    pub ai_roster_floor: usize,
    /// Viewer roster below this ends the game (기본: 5)
    pub min_roster: usize,

    /// Prestige gained by the viewer after a FanBoom season (기본: 1)
    pub fan_boom_prestige: u8,
}

impl Default for OffseasonConfig {
    fn default() -> Self {
        Self {
            retirement_age: 32,
            retirement_chance_per_year: 0.12,
            development_age_limit: 23,
            development_chance: 0.7,
            development_points: (1, 3),
            ai_roster_floor: 10,
            min_roster: 5,
            fan_boom_prestige: 1,
        }
    }
}
