//! Transfer market and squad rules

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    // === Squad ===
    pub max_squad_size: usize,
    pub max_starters: usize,
    /// Youth players added per intake (기본: 2)
    pub youth_intake_size: usize,

    // === Offer acceptance ===
    pub base_chance: f64,
    /// Offer at or above the asking salary
    pub at_asking_bonus: f64,
    /// Offer at or above `premium_ratio` × asking
    pub premium_bonus: f64,
    pub premium_ratio: f64,
    /// Offer below `lowball_ratio` × asking
    pub lowball_penalty: f64,
    pub lowball_ratio: f64,
    pub two_year_bonus: f64,
    pub prestige_bonus: f64,
    pub min_chance: f64,
    pub max_chance: f64,

    // === Listings ===
    /// Upper-division asking salary markup upper bound (기본: 0.3)
    pub asking_markup_max: f64,
    /// Range uncertainty of Lower-division listings, inclusive
    pub range_uncertainty: (u32, u32),
    /// Chance the legendary player is listed on a refresh (기본: 0.08)
    pub legend_chance: f64,

    // === Contract renewal ===
    /// Salary growth on renewal before the prestige factor (기본: 1.15)
    pub renewal_raise: f64,
    /// Renewal salary per overall point for players on a free contract (기본: 100.0)
    pub renewal_free_rate: f64,
    pub renewal_prestige_factor: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            max_squad_size: 12,
            max_starters: 5,
            youth_intake_size: 2,

            base_chance: 0.5,
            at_asking_bonus: 0.25,
            premium_bonus: 0.15,
            premium_ratio: 1.2,
            lowball_penalty: 0.3,
            lowball_ratio: 0.8,
            two_year_bonus: 0.1,
            prestige_bonus: 0.05,
            min_chance: 0.05,
            max_chance: 0.95,

            asking_markup_max: 0.3,
            range_uncertainty: (5, 15),
            legend_chance: 0.08,

            renewal_raise: 1.15,
            renewal_free_rate: 100.0,
            renewal_prestige_factor: 0.10,
        }
    }
}
