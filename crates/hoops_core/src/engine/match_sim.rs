//! # Match Simulator
//!
//! One game is a strength comparison with noise:
//!
//! 1. each side's strategy comes from its lineup's role mix
//! 2. the strategy matchup gives the winning side a multiplier bonus
//! 3. strength = mean roster overall + prestige bonus, then the bonus and
//!    the home edge are applied
//! 4. score = `base + (strength - 50) * scale + noise`, floored
//!
//! RNG draw order is fixed (home injury, home edge, away injury, home
//! noise, away noise) so a seed reproduces the same scores.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::models::{round_half_up, MatchScore, PlayerRole, SeasonModifier, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Defensive,
    Offensive,
    Playmaking,
    Balanced,
}

impl Strategy {
    /// Rock-paper-scissors: Defensive > Playmaking > Offensive > Defensive.
    pub fn beats(self, other: Strategy) -> bool {
        matches!(
            (self, other),
            (Strategy::Defensive, Strategy::Playmaking)
                | (Strategy::Playmaking, Strategy::Offensive)
                | (Strategy::Offensive, Strategy::Defensive)
        )
    }
}

/// Strategy of the team's lineup.
///
/// The dominant role needs at least two players; on a tie the first of
/// Defender, Sharpshooter, Playmaker wins.
pub fn team_strategy(team: &Team) -> Strategy {
    let lineup = team.lineup();
    let count = |role: PlayerRole| lineup.iter().filter(|p| p.role == role).count();
    let defenders = count(PlayerRole::Defender);
    let sharpshooters = count(PlayerRole::Sharpshooter);
    let playmakers = count(PlayerRole::Playmaker);

    let max = defenders.max(sharpshooters).max(playmakers);
    if max < 2 {
        Strategy::Balanced
    } else if defenders == max {
        Strategy::Defensive
    } else if sharpshooters == max {
        Strategy::Offensive
    } else {
        Strategy::Playmaking
    }
}

pub fn strategy_bonus(own: Strategy, opponent: Strategy, cfg: &MatchConfig) -> f64 {
    if own.beats(opponent) {
        cfg.strategy_bonus
    } else {
        0.0
    }
}

/// Base strength before strategy and home edge.
pub fn team_strength<R: Rng + ?Sized>(
    team: &Team,
    modifier: SeasonModifier,
    cfg: &MatchConfig,
    rng: &mut R,
) -> f64 {
    let Some(mut avg) = team.average_overall() else {
        return cfg.empty_roster_strength;
    };
    if modifier == SeasonModifier::InjuryCrisis {
        avg -= rng.gen_range(0..=cfg.injury_penalty_max) as f64;
    }
    (avg + team.prestige as f64 * cfg.prestige_strength).max(cfg.strength_floor)
}

fn score_from_strength<R: Rng + ?Sized>(strength: f64, cfg: &MatchConfig, rng: &mut R) -> u32 {
    let base = cfg.base_score + (strength - 50.0) * cfg.strength_scale;
    let noise = rng.gen_range(-cfg.score_noise..=cfg.score_noise) as f64;
    round_half_up(base + noise).max(cfg.min_score as i64) as u32
}

/// Simulate one game. Never ties: equal scores go to the home side by one.
pub fn simulate_match<R: Rng + ?Sized>(
    home: &Team,
    away: &Team,
    modifier: SeasonModifier,
    cfg: &MatchConfig,
    rng: &mut R,
) -> MatchScore {
    let home_strategy = team_strategy(home);
    let away_strategy = team_strategy(away);
    let home_bonus = strategy_bonus(home_strategy, away_strategy, cfg);
    let away_bonus = strategy_bonus(away_strategy, home_strategy, cfg);

    let home_strength = team_strength(home, modifier, cfg, rng) * (1.0 + home_bonus)
        + rng.gen_range(0..=cfg.home_edge_max) as f64;
    let away_strength = team_strength(away, modifier, cfg, rng) * (1.0 + away_bonus);

    let home_score = score_from_strength(home_strength, cfg, rng);
    let away_score = score_from_strength(away_strength, cfg, rng);

    if home_score == away_score {
        MatchScore { home_score: home_score + 1, away_score }
    } else {
        MatchScore { home_score, away_score }
    }
}
