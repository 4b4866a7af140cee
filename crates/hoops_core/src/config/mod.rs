//! # Engine Configuration
//!
//! 리그 시뮬레이션의 모든 튜닝 상수를 한 곳에서 관리한다.
//!
//! ## 사용법
//! ```rust
//! use hoops_core::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let harsh = EngineConfig::harsh_economy();
//! assert!(harsh.validate().is_ok());
//! ```

mod finance_config;
mod market_config;
mod match_config;
mod offseason_config;

pub use finance_config::FinanceConfig;
pub use market_config::MarketConfig;
pub use match_config::MatchConfig;
pub use offseason_config::OffseasonConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue { field: field.to_string(), reason: reason.into() }
    }
}

/// Playoff bracket rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayoffConfig {
    /// Wins needed to take a series (기본: 2)
    pub wins_to_advance: u32,
    /// Safety cap for `simulate_all_playoffs` (기본: 50)
    pub max_iterations: usize,
}

impl Default for PlayoffConfig {
    fn default() -> Self {
        Self { wins_to_advance: 2, max_iterations: 50 }
    }
}

/// Full engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub matches: MatchConfig,
    #[serde(default)]
    pub finance: FinanceConfig,
    #[serde(default)]
    pub offseason: OffseasonConfig,
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub playoffs: PlayoffConfig,
}

impl EngineConfig {
    /// 기본 밸런스
    pub fn standard() -> Self {
        Self::default()
    }

    /// 점수가 높고 변동이 큰 경기
    pub fn high_scoring() -> Self {
        let mut cfg = Self::default();
        cfg.matches.base_score = 78.0;
        cfg.matches.strength_scale = 0.7;
        cfg.matches.score_noise = 12;
        cfg.matches.min_score = 55;
        cfg
    }

    /// 수입이 적고 빚에 엄격한 경제
    pub fn harsh_economy() -> Self {
        let mut cfg = Self::default();
        cfg.finance.ticket_per_prestige = 22_000.0;
        cfg.finance.sponsor_per_prestige = 18_000.0;
        cfg.finance.crisis_income_factor = 0.55;
        cfg.finance.severe_debt_threshold = -25_000;
        cfg.market.base_chance = 0.4;
        cfg
    }

    /// Parse a JSON document; absent sections and fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.matches;
        if m.score_noise < 0 {
            return Err(ConfigError::invalid("matches.score_noise", "must be >= 0"));
        }
        if m.home_edge_max < 0 || m.injury_penalty_max < 0 {
            return Err(ConfigError::invalid("matches", "random ranges must be >= 0"));
        }
        if m.strength_floor < 0.0 {
            return Err(ConfigError::invalid("matches.strength_floor", "must be >= 0"));
        }

        let f = &self.finance;
        if f.income_divisor <= 0.0 {
            return Err(ConfigError::invalid("finance.income_divisor", "must be > 0"));
        }
        if f.severe_debt_seasons == 0 {
            return Err(ConfigError::invalid("finance.severe_debt_seasons", "must be >= 1"));
        }

        let o = &self.offseason;
        if !(0.0..=1.0).contains(&o.development_chance) {
            return Err(ConfigError::invalid("offseason.development_chance", "must be in [0, 1]"));
        }
        if o.development_points.0 > o.development_points.1 {
            return Err(ConfigError::invalid("offseason.development_points", "min > max"));
        }

        let mk = &self.market;
        if mk.max_starters == 0 || mk.max_starters > mk.max_squad_size {
            return Err(ConfigError::invalid(
                "market.max_starters",
                "must be in 1..=max_squad_size",
            ));
        }
        if mk.min_chance > mk.max_chance {
            return Err(ConfigError::invalid("market.min_chance", "greater than max_chance"));
        }
        if mk.range_uncertainty.0 > mk.range_uncertainty.1 {
            return Err(ConfigError::invalid("market.range_uncertainty", "min > max"));
        }
        if !(0.0..=1.0).contains(&mk.legend_chance) {
            return Err(ConfigError::invalid("market.legend_chance", "must be in [0, 1]"));
        }

        if self.playoffs.wins_to_advance == 0 {
            return Err(ConfigError::invalid("playoffs.wins_to_advance", "must be >= 1"));
        }
        Ok(())
    }
}

// ========== Tests ==========
