//! # hoops_core - Deterministic Basketball League Season Engine
//!
//! Two divisions of eight clubs, a double round-robin regular season,
//! best-of-three playoffs for the Upper division and an offseason that ages
//! rosters, settles money and swaps the top Lower club with the bottom
//! Upper one.
//!
//! ## Features
//! - Pure state transitions: every operation takes `&GameState` and returns
//!   a new state (or an [`ActionOutcome`] for actions that can be refused)
//! - 100% deterministic under a seeded RNG ([`seeded_rng`])
//! - Two-viewer play over a shared store, with no host/guest distinction
//! - JSON and compact binary snapshots for state transfer

// Game engine APIs often require many parameters for state, config and RNG
#![allow(clippy::too_many_arguments)]
// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod league;
pub mod market;
pub mod models;
pub mod outcome;
pub mod rng;
pub mod season;
pub mod snapshot;
pub mod squad;

pub use config::{
    ConfigError, EngineConfig, FinanceConfig, MarketConfig, MatchConfig, OffseasonConfig,
    PlayoffConfig,
};
pub use error::{CoreError, Rejection, Result};
pub use league::LeagueEngine;
pub use market::ContractLength;
pub use models::{
    Division, FinanceRecord, FreeAgent, MatchResult, MatchScore, Phase, Player, PlayerRole,
    SeasonBonus, SeasonModifier, Team,
};
pub use outcome::ActionOutcome;
pub use rng::seeded_rng;
pub use season::{GameOverReason, GameState, PlayoffMatchup};
pub use snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
