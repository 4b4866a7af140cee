//! # Season Controller
//!
//! Preseason → Regular → Playoffs (Upper) or Offseason (Lower) → next
//! Preseason. Each week plays one round in every division (Upper first),
//! folds the results into the standings and settles the viewer's money.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use super::offseason::process_offseason;
use super::playoffs::seed_bracket;
use super::state::GameState;
use crate::config::{EngineConfig, FinanceConfig};
use crate::engine::match_sim::simulate_match;
use crate::engine::standings::{apply_result, create_initial_standings, rank_of, sorted};
use crate::error::{CoreError, Rejection, Result};
use crate::generator::{create_initial_teams, IdGenerator};
use crate::models::{
    round_half_up, Division, FinanceRecord, MatchResult, Phase, SeasonBonus, SeasonModifier, Team,
};
use crate::outcome::ActionOutcome;

pub fn random_modifier<R: Rng + ?Sized>(rng: &mut R) -> SeasonModifier {
    *SeasonModifier::ALL.choose(rng).unwrap_or(&SeasonModifier::FanBoom)
}

/// Fresh game for `team_id`: season 1, preseason, new league.
pub fn initialize_game<R: Rng + ?Sized>(
    team_id: &str,
    cfg: &FinanceConfig,
    rng: &mut R,
) -> Result<GameState> {
    let mut ids = IdGenerator::new();
    let teams = create_initial_teams(&mut ids, rng);
    let modifier = random_modifier(rng);

    let team = teams
        .iter()
        .find(|t| t.id == team_id)
        .ok_or_else(|| CoreError::TeamNotFound(team_id.to_string()))?;
    let finances = calculate_initial_finances(team, modifier, cfg);

    info!(team = team_id, modifier = ?modifier, "new game");
    let state = GameState {
        selected_team_id: team_id.to_string(),
        season: 1,
        week: 0,
        phase: Phase::Preseason,
        season_modifier: modifier,
        standings: create_initial_standings(&teams),
        teams,
        schedule: Vec::new(),
        playoff_bracket: Vec::new(),
        finances,
        declined_player_ids: Vec::new(),
        youth_intake_used: false,
        season_bonus: None,
        consecutive_negative_seasons: 0,
        game_over: false,
        game_over_reason: None,
        id_generator: ids,
    };
    state.enforce_invariants();
    Ok(state)
}

/// Season-opening budget lines. Balance is the club budget; callers that
/// carry a balance over overwrite it.
pub fn calculate_initial_finances(
    team: &Team,
    modifier: SeasonModifier,
    cfg: &FinanceConfig,
) -> FinanceRecord {
    let prestige = team.prestige as f64 * 0.5;
    let mut ticket_income =
        round_half_up((cfg.ticket_base + prestige * cfg.ticket_per_prestige) / cfg.income_divisor);
    let mut sponsor_income = round_half_up(
        (cfg.sponsor_base + prestige * cfg.sponsor_per_prestige) / cfg.income_divisor,
    );
    if modifier == SeasonModifier::FinancialCrisis {
        ticket_income = round_half_up(ticket_income as f64 * cfg.crisis_income_factor);
        sponsor_income = round_half_up(sponsor_income as f64 * cfg.crisis_income_factor);
    }

    FinanceRecord {
        ticket_income,
        sponsor_income,
        prize_income: 0,
        total_wages: team.total_wages(),
        transfer_spending: 0,
        balance: team.budget,
    }
}

/// The three bonuses in random order.
pub fn roll_season_bonus_choices<R: Rng + ?Sized>(rng: &mut R) -> Vec<SeasonBonus> {
    let mut choices = SeasonBonus::ALL.to_vec();
    choices.shuffle(rng);
    choices
}

pub fn choose_season_bonus(
    state: &GameState,
    bonus: SeasonBonus,
    cfg: &FinanceConfig,
) -> ActionOutcome {
    if state.game_over {
        return ActionOutcome::rejected(state.clone(), Rejection::GameOver);
    }
    if state.phase != Phase::Preseason {
        return ActionOutcome::rejected(state.clone(), Rejection::WrongPhase(state.phase));
    }
    if state.season_bonus.is_some() {
        return ActionOutcome::rejected(state.clone(), Rejection::BonusAlreadyChosen);
    }

    let mut next = state.clone();
    match bonus {
        SeasonBonus::Sponsor10 => {
            next.finances.sponsor_income =
                round_half_up(next.finances.sponsor_income as f64 * cfg.bonus_income_factor);
        }
        SeasonBonus::WageMinus10 => {
            next.finances.total_wages =
                round_half_up(next.finances.total_wages as f64 * cfg.bonus_wage_factor);
        }
        // applied per home game
        SeasonBonus::Ticket10 => {}
    }
    next.season_bonus = Some(bonus);
    info!(bonus = ?bonus, season = next.season, "season bonus chosen");
    ActionOutcome::accepted(next)
}

pub fn start_regular_season(state: &GameState) -> GameState {
    if state.game_over {
        return state.clone();
    }
    if state.phase != Phase::Preseason {
        warn!(phase = %state.phase, "regular season can only start from preseason");
        return state.clone();
    }
    let mut next = state.clone();
    next.phase = Phase::Regular;
    info!(season = next.season, "regular season started");
    next
}

/// Prize money for finishing at 1-based `rank`.
pub fn prize_for_rank(division: Division, rank: usize, cfg: &FinanceConfig) -> i64 {
    let table = match division {
        Division::Upper => &cfg.upper_prizes,
        Division::Lower => &cfg.lower_prizes,
    };
    rank.checked_sub(1).and_then(|i| table.get(i)).copied().unwrap_or(0)
}

/// One club's income for the week just played (`state.week`).
///
/// Prize money lands the week the club's own division finishes; gate
/// receipts on weeks the club hosts a game in its own division.
pub fn settle_viewpoint_week(
    state: &GameState,
    team_id: &str,
    finances: &FinanceRecord,
    ticket_bonus: bool,
    cfg: &FinanceConfig,
) -> FinanceRecord {
    let mut settled = finances.clone();
    let Some(team) = state.team(team_id) else {
        return settled;
    };
    let schedule = state.division_schedule(team.division);

    if state.week as usize == schedule.len() {
        if let Some(rank) = rank_of(state.division_standings(team.division), team_id) {
            let prize = prize_for_rank(team.division, rank, cfg);
            settled.prize_income += prize;
            info!(team = team_id, rank, prize, "division season finished");
        }
    }

    let hosts_this_week = state
        .week
        .checked_sub(1)
        .and_then(|w| schedule.get(w as usize))
        .is_some_and(|round| round.iter().any(|f| f.home_team_id == team_id));
    if hosts_this_week {
        let multiplier = if ticket_bonus { cfg.bonus_income_factor } else { 1.0 };
        settled.ticket_income += round_half_up(
            team.prestige as f64 * cfg.home_gate_per_prestige / cfg.income_divisor * multiplier,
        );
    }
    settled
}

/// Play the next week. `co_viewer` is the other club in a two-viewer game;
/// the phase only changes once both clubs' divisions are done.
pub fn simulate_week<R: Rng + ?Sized>(
    state: &GameState,
    co_viewer: Option<&str>,
    cfg: &EngineConfig,
    rng: &mut R,
) -> GameState {
    if state.game_over {
        return state.clone();
    }
    if state.phase != Phase::Regular {
        warn!(phase = %state.phase, "simulate_week outside the regular season");
        return state.clone();
    }
    let Some(viewer_division) = state.selected_team().map(|t| t.division) else {
        warn!(team = %state.selected_team_id, "viewer team missing");
        return state.clone();
    };

    let mut next = state.clone();
    next.week += 1;
    let round_index = (next.week - 1) as usize;

    for division in Division::ALL {
        let schedule = state.division_schedule(division);
        let Some(round) = schedule.get(round_index) else {
            continue;
        };
        for fixture in round {
            let (Some(home), Some(away)) =
                (state.team(&fixture.home_team_id), state.team(&fixture.away_team_id))
            else {
                continue;
            };
            let score = simulate_match(home, away, state.season_modifier, &cfg.matches, rng);
            let result = MatchResult::from_fixture(fixture, score, next.week);
            if let Some(entries) = next.standings.get_mut(&division) {
                apply_result(entries, &result);
            }
            if division == viewer_division {
                next.schedule.push(result);
            }
        }
    }
    debug!(season = next.season, week = next.week, "week simulated");

    let ticket_bonus = next.season_bonus == Some(SeasonBonus::Ticket10);
    let viewer_id = next.selected_team_id.clone();
    next.finances =
        settle_viewpoint_week(&next, &viewer_id, &next.finances, ticket_bonus, &cfg.finance);

    let co_division = co_viewer.and_then(|id| next.team(id)).map(|t| t.division);
    let effective_length = std::iter::once(viewer_division)
        .chain(co_division)
        .map(|d| next.season_length(d))
        .max()
        .unwrap_or(0);

    if next.week >= effective_length {
        let upper_in_view = viewer_division == Division::Upper || co_division == Some(Division::Upper);
        let bracket = if upper_in_view {
            seed_bracket(&sorted(next.division_standings(Division::Upper)))
        } else {
            None
        };
        match bracket {
            Some(bracket) => {
                next.playoff_bracket = bracket;
                next.phase = Phase::Playoffs;
                info!(season = next.season, "regular season over, playoffs begin");
            }
            None => {
                if upper_in_view {
                    warn!("upper division too small for playoffs, skipping to offseason");
                }
                next.phase = Phase::Offseason;
                info!(season = next.season, "regular season over, offseason begins");
            }
        }
    }

    next.enforce_invariants();
    next
}

/// Two-viewer week: advance the shared league and settle both clubs.
///
/// The co-viewer's finances live outside `GameState`, so they are passed in
/// and returned alongside.
pub fn simulate_peer_week<R: Rng + ?Sized>(
    state: &GameState,
    co_viewer_id: &str,
    co_finances: &FinanceRecord,
    co_bonus: Option<SeasonBonus>,
    cfg: &EngineConfig,
    rng: &mut R,
) -> (GameState, FinanceRecord) {
    let next = simulate_week(state, Some(co_viewer_id), cfg, rng);
    if next.week == state.week {
        return (next, co_finances.clone());
    }
    let co_settled = settle_viewpoint_week(
        &next,
        co_viewer_id,
        co_finances,
        co_bonus == Some(SeasonBonus::Ticket10),
        &cfg.finance,
    );
    (next, co_settled)
}

pub fn start_new_season<R: Rng + ?Sized>(
    state: &GameState,
    cfg: &EngineConfig,
    rng: &mut R,
) -> GameState {
    if state.game_over {
        return state.clone();
    }
    if state.phase != Phase::Offseason {
        warn!(phase = %state.phase, "new season can only start from the offseason");
        return state.clone();
    }
    process_offseason(state, &cfg.offseason, &cfg.finance, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;

    fn new_game(team: &str, seed: u64) -> (GameState, EngineConfig) {
        let cfg = EngineConfig::default();
        let mut rng = seeded_rng(seed);
        let state = initialize_game(team, &cfg.finance, &mut rng).unwrap();
        (state, cfg)
    }

    #[test]
    fn test_unknown_team() {
        let cfg = EngineConfig::default();
        let err = initialize_game("nobody", &cfg.finance, &mut seeded_rng(1)).unwrap_err();
        assert_eq!(err, CoreError::TeamNotFound("nobody".into()));
    }

    #[test]
    fn test_initial_state() {
        let (state, _) = new_game("kaunas_kings", 1);
        assert_eq!(state.season, 1);
        assert_eq!(state.week, 0);
        assert_eq!(state.phase, Phase::Preseason);
        assert_eq!(state.finances.balance, 190_000);
        assert_eq!(state.season_length(Division::Upper), 14);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_initial_finances() {
        let (state, cfg) = new_game("kaunas_kings", 1);
        let team = state.selected_team().unwrap();
        let normal = calculate_initial_finances(team, SeasonModifier::FanBoom, &cfg.finance);
        // (20000 + 2 * 30000) / 2, (15000 + 2 * 25000) / 2
        assert_eq!(normal.ticket_income, 40_000);
        assert_eq!(normal.sponsor_income, 32_500);
        assert_eq!(normal.total_wages, team.total_wages());

        let crisis = calculate_initial_finances(team, SeasonModifier::FinancialCrisis, &cfg.finance);
        assert_eq!(crisis.ticket_income, 28_000);
        assert_eq!(crisis.sponsor_income, 22_750);
    }

    #[test]
    fn test_bonus_choices_distinct() {
        let choices = roll_season_bonus_choices(&mut seeded_rng(3));
        assert_eq!(choices.len(), 3);
        for bonus in SeasonBonus::ALL {
            assert!(choices.contains(&bonus));
        }
    }

    #[test]
    fn test_choose_bonus_once_in_preseason() {
        let (state, cfg) = new_game("kaunas_kings", 2);
        let wages = state.finances.total_wages;
        let out = choose_season_bonus(&state, SeasonBonus::WageMinus10, &cfg.finance);
        assert!(out.success());
        assert_eq!(out.state.finances.total_wages, round_half_up(wages as f64 * 0.9));

        let again = choose_season_bonus(&out.state, SeasonBonus::Sponsor10, &cfg.finance);
        assert_eq!(again.rejection, Some(Rejection::BonusAlreadyChosen));

        let regular = start_regular_season(&state);
        let late = choose_season_bonus(&regular, SeasonBonus::Ticket10, &cfg.finance);
        assert_eq!(late.rejection, Some(Rejection::WrongPhase(Phase::Regular)));
    }

    #[test]
    fn test_week_outside_regular_is_noop() {
        let (state, cfg) = new_game("kaunas_kings", 3);
        let next = simulate_week(&state, None, &cfg, &mut seeded_rng(3));
        assert_eq!(next, state);
    }

    #[test]
    fn test_week_updates_standings_and_log() {
        let (state, cfg) = new_game("kaunas_kings", 4);
        let state = start_regular_season(&state);
        let next = simulate_week(&state, None, &cfg, &mut seeded_rng(4));
        assert_eq!(next.week, 1);
        assert_eq!(next.schedule.len(), 4);
        assert!(next.schedule.iter().all(|r| r.week == 1 && r.home_score != r.away_score));
        for division in Division::ALL {
            let games: u32 = next.division_standings(division).iter().map(|e| e.wins).sum();
            assert_eq!(games, 4);
        }
    }

    #[test]
    fn test_home_week_ticket_income() {
        let (state, cfg) = new_game("kaunas_kings", 5);
        let state = start_regular_season(&state);
        let next = simulate_week(&state, None, &cfg, &mut seeded_rng(5));
        // kaunas_kings is first in the universe, so it hosts round one
        assert_eq!(next.finances.ticket_income, state.finances.ticket_income + 3_000);
    }

    #[test]
    fn test_prize_table() {
        let cfg = FinanceConfig::default();
        assert_eq!(prize_for_rank(Division::Upper, 1, &cfg), 230_000);
        assert_eq!(prize_for_rank(Division::Lower, 8, &cfg), 7_000);
        assert_eq!(prize_for_rank(Division::Lower, 9, &cfg), 0);
        assert_eq!(prize_for_rank(Division::Upper, 0, &cfg), 0);
    }

    #[test]
    fn test_start_new_season_requires_offseason() {
        let (state, cfg) = new_game("kaunas_kings", 6);
        assert_eq!(start_new_season(&state, &cfg, &mut seeded_rng(6)), state);
    }
}
