//! # Playoff Engine
//!
//! Top four of the Upper division, best-of-three series: semifinals 1v4
//! and 2v3, then a final between the semifinal winners. The higher seed
//! (`team1`) always hosts.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::state::GameState;
use crate::config::{MatchConfig, PlayoffConfig};
use crate::engine::match_sim::simulate_match;
use crate::engine::standings::StandingsEntry;
use crate::models::Phase;

pub const SEMIFINAL: u32 = 1;
pub const FINAL: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoffMatchup {
    /// 1 = semifinal, 2 = final
    pub round: u32,
    pub team1_id: String,
    pub team2_id: String,
    #[serde(default)]
    pub team1_wins: u32,
    #[serde(default)]
    pub team2_wins: u32,
    #[serde(default)]
    pub winner_id: Option<String>,
}

impl PlayoffMatchup {
    pub fn new(round: u32, team1_id: impl Into<String>, team2_id: impl Into<String>) -> Self {
        Self {
            round,
            team1_id: team1_id.into(),
            team2_id: team2_id.into(),
            team1_wins: 0,
            team2_wins: 0,
            winner_id: None,
        }
    }

    pub fn is_decided(&self) -> bool {
        self.winner_id.is_some()
    }
}

/// Semifinals from sorted standings; `None` with fewer than four teams.
pub fn seed_bracket(sorted: &[StandingsEntry]) -> Option<Vec<PlayoffMatchup>> {
    if sorted.len() < 4 {
        return None;
    }
    Some(vec![
        PlayoffMatchup::new(SEMIFINAL, sorted[0].team_id.clone(), sorted[3].team_id.clone()),
        PlayoffMatchup::new(SEMIFINAL, sorted[1].team_id.clone(), sorted[2].team_id.clone()),
    ])
}

/// Play the next game of the series at `index`.
///
/// Out-of-range or decided series, or a state outside the playoffs, are
/// left untouched.
pub fn simulate_playoff_game<R: Rng + ?Sized>(
    state: &GameState,
    index: usize,
    match_cfg: &MatchConfig,
    playoff_cfg: &PlayoffConfig,
    rng: &mut R,
) -> GameState {
    if state.game_over || state.phase != Phase::Playoffs {
        return state.clone();
    }
    let Some(matchup) = state.playoff_bracket.get(index) else {
        warn!(index, "no playoff matchup at index");
        return state.clone();
    };
    if matchup.is_decided() {
        return state.clone();
    }
    let (Some(team1), Some(team2)) = (state.team(&matchup.team1_id), state.team(&matchup.team2_id))
    else {
        warn!(team1 = %matchup.team1_id, team2 = %matchup.team2_id, "playoff team missing");
        return state.clone();
    };

    let score = simulate_match(team1, team2, state.season_modifier, match_cfg, rng);

    let mut next = state.clone();
    let m = &mut next.playoff_bracket[index];
    if score.home_score > score.away_score {
        m.team1_wins += 1;
    } else {
        m.team2_wins += 1;
    }
    debug!(
        round = m.round,
        team1 = %m.team1_id,
        team2 = %m.team2_id,
        home_score = score.home_score,
        away_score = score.away_score,
        "playoff game"
    );
    if m.team1_wins >= playoff_cfg.wins_to_advance {
        m.winner_id = Some(m.team1_id.clone());
    } else if m.team2_wins >= playoff_cfg.wins_to_advance {
        m.winner_id = Some(m.team2_id.clone());
    }

    let semis: Vec<&PlayoffMatchup> =
        next.playoff_bracket.iter().filter(|m| m.round == SEMIFINAL).collect();
    if next.playoff_bracket.len() == 2 && semis.iter().all(|m| m.is_decided()) {
        let winners: Vec<String> = semis.iter().filter_map(|m| m.winner_id.clone()).collect();
        if let [a, b] = winners.as_slice() {
            info!(finalist_a = %a, finalist_b = %b, "playoff final set");
            next.playoff_bracket.push(PlayoffMatchup::new(FINAL, a.clone(), b.clone()));
        }
    }

    if let Some(champ) = champion(&next) {
        info!(champion = %champ, season = next.season, "playoffs decided");
        next.phase = Phase::Offseason;
    }

    next.enforce_invariants();
    next
}

/// Resolve every remaining game, stopping silently at the iteration cap.
pub fn simulate_all_playoffs<R: Rng + ?Sized>(
    state: &GameState,
    match_cfg: &MatchConfig,
    playoff_cfg: &PlayoffConfig,
    rng: &mut R,
) -> GameState {
    let mut current = state.clone();
    let mut iterations = 0;
    while current.phase == Phase::Playoffs
        && !current.game_over
        && iterations < playoff_cfg.max_iterations
    {
        iterations += 1;
        let Some(index) = current.playoff_bracket.iter().position(|m| !m.is_decided()) else {
            break;
        };
        current = simulate_playoff_game(&current, index, match_cfg, playoff_cfg, rng);
    }
    current
}

/// Winner of the final, once decided.
pub fn champion(state: &GameState) -> Option<&str> {
    state
        .playoff_bracket
        .iter()
        .find(|m| m.round == FINAL)
        .and_then(|m| m.winner_id.as_deref())
}
