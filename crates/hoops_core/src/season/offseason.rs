//! # Offseason Processor
//!
//! Turns a finished season into the next preseason:
//! contracts and ages advance, veterans may retire, the viewer's youngsters
//! develop, AI rosters are refilled, the viewer's club is checked for game
//! over, then promotion/relegation and the finance rollover run.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use super::controller::{calculate_initial_finances, random_modifier};
use super::state::{GameOverReason, GameState};
use crate::config::{FinanceConfig, OffseasonConfig};
use crate::engine::standings::{create_initial_standings, sorted};
use crate::generator::{generate_player, IdGenerator};
use crate::models::{
    round_half_up, Division, FinanceRecord, Phase, Player, SeasonModifier, Skill, Team, LINEUP_SIZE,
};

/// Age, contract and development pass for one player. Returns `false` when
/// the player leaves (contract run out or retired).
fn advance_player<R: Rng + ?Sized>(
    player: &mut Player,
    is_viewer: bool,
    cfg: &OffseasonConfig,
    rng: &mut R,
) -> bool {
    if !player.joined_this_offseason {
        player.contract_years = player.contract_years.saturating_sub(1);
    }
    player.age += 1;
    player.joined_this_offseason = false;

    if player.age >= cfg.retirement_age {
        let chance = (player.age - cfg.retirement_age) as f64 * cfg.retirement_chance_per_year;
        if rng.gen::<f64>() < chance {
            debug!(player = %player.id, age = player.age, "retired");
            player.contract_years = 0;
        }
    }

    if is_viewer {
        if player.age < cfg.development_age_limit && rng.gen::<f64>() < cfg.development_chance {
            let (lo, hi) = cfg.development_points;
            let points = rng.gen_range(lo..=hi);
            for _ in 0..points {
                let skill = *Skill::ALL.choose(rng).unwrap_or(&Skill::Shooting);
                player.attributes.improve(skill, 1);
            }
            player.recompute_overall();
        }
        if player.is_starter {
            player.seasons_without_play = 0;
        } else {
            player.seasons_without_play += 1;
        }
    }

    player.contract_years > 0
}

/// Refill an AI roster to `floor` players with freshly generated hires.
fn backfill_roster<R: Rng + ?Sized>(
    team: &mut Team,
    floor: usize,
    ids: &mut IdGenerator,
    rng: &mut R,
) {
    let needed = floor.saturating_sub(team.players.len());
    for _ in 0..needed {
        let mut hire = generate_player(team.prestige, None, ids, rng);
        hire.is_starter = team.starter_count() < LINEUP_SIZE;
        team.players.push(hire);
    }
    if needed > 0 {
        debug!(team = %team.id, hired = needed, "roster backfilled");
    }
}

/// Swap the Lower champion and the Upper last place.
fn promote_and_relegate(state: &mut GameState) {
    let upper = sorted(state.division_standings(Division::Upper));
    let lower = sorted(state.division_standings(Division::Lower));
    let (Some(relegated), Some(promoted)) = (upper.last(), lower.first()) else {
        return;
    };
    let (relegated, promoted) = (relegated.team_id.clone(), promoted.team_id.clone());
    for team in state.teams.iter_mut() {
        if team.id == promoted {
            team.division = Division::Upper;
        } else if team.id == relegated {
            team.division = Division::Lower;
        }
    }
    info!(promoted = %promoted, relegated = %relegated, "promotion and relegation");
}

/// Run the offseason and open the next season.
///
/// On game over the state is returned as processed so far, with no
/// rollover.
pub fn process_offseason<R: Rng + ?Sized>(
    state: &GameState,
    cfg: &OffseasonConfig,
    finance_cfg: &FinanceConfig,
    rng: &mut R,
) -> GameState {
    if state.game_over {
        return state.clone();
    }
    let mut next = state.clone();
    next.youth_intake_used = false;

    let viewer_id = state.selected_team_id.clone();
    for team in next.teams.iter_mut() {
        let is_viewer = team.id == viewer_id;
        let mut kept = Vec::with_capacity(team.players.len());
        for mut player in std::mem::take(&mut team.players) {
            if advance_player(&mut player, is_viewer, cfg, rng) {
                kept.push(player);
            }
        }
        team.players = kept;
    }

    let mut ids = std::mem::take(&mut next.id_generator);
    for team in next.teams.iter_mut().filter(|t| t.id != viewer_id) {
        backfill_roster(team, cfg.ai_roster_floor, &mut ids, rng);
    }
    next.id_generator = ids;

    let roster_size = next.selected_team().map_or(0, |t| t.players.len());
    if roster_size < cfg.min_roster {
        warn!(roster_size, "game over: too few players");
        next.game_over = true;
        next.game_over_reason = Some(GameOverReason::TooFewPlayers);
        return next;
    }

    let final_balance = state.finances.season_end_balance();
    if final_balance < finance_cfg.severe_debt_threshold {
        next.consecutive_negative_seasons = state.consecutive_negative_seasons + 1;
        if next.consecutive_negative_seasons >= finance_cfg.severe_debt_seasons {
            warn!(final_balance, seasons = next.consecutive_negative_seasons, "game over: severe debt");
            next.game_over = true;
            next.game_over_reason = Some(GameOverReason::SevereDebt);
            return next;
        }
    } else {
        next.consecutive_negative_seasons = 0;
    }

    promote_and_relegate(&mut next);

    next.season += 1;
    next.week = 0;
    next.phase = Phase::Preseason;
    next.season_modifier = random_modifier(rng);
    next.declined_player_ids.clear();
    next.standings = create_initial_standings(&next.teams);
    next.schedule.clear();
    next.playoff_bracket.clear();
    next.season_bonus = None;

    if state.season_modifier == SeasonModifier::FanBoom {
        if let Some(team) = next.selected_team_mut() {
            team.prestige = (team.prestige + cfg.fan_boom_prestige).min(5);
        }
    }

    let fresh = next
        .selected_team()
        .map(|team| calculate_initial_finances(team, next.season_modifier, finance_cfg));
    if let Some(fresh) = fresh {
        next.finances = FinanceRecord { balance: final_balance, ..fresh };
    }
    if next.season_modifier == SeasonModifier::ForeignInvestment {
        next.finances.balance =
            round_half_up(next.finances.balance as f64 * finance_cfg.foreign_investment_factor);
    }

    info!(
        season = next.season,
        modifier = ?next.season_modifier,
        balance = next.finances.balance,
        "new season"
    );
    next.enforce_invariants();
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::rng::seeded_rng;
    use crate::season::controller::initialize_game;

    fn offseason_state(team: &str, seed: u64) -> (GameState, EngineConfig) {
        let cfg = EngineConfig::default();
        let mut state = initialize_game(team, &cfg.finance, &mut seeded_rng(seed)).unwrap();
        state.phase = Phase::Offseason;
        // keep the viewer's roster intact unless a test says otherwise
        for p in state.selected_team_mut().unwrap().players.iter_mut() {
            p.age = 24;
            p.contract_years = 3;
        }
        (state, cfg)
    }

    fn skill_sum(p: &Player) -> u32 {
        Skill::ALL.iter().map(|s| p.attributes.get(*s)).sum()
    }

    #[test]
    fn test_last_contract_year_leaves() {
        let (mut state, cfg) = offseason_state("kaunas_kings", 1);
        let team = state.selected_team_mut().unwrap();
        team.players[0].contract_years = 1;
        team.players[0].age = 20;
        let leaving = team.players[0].id.clone();
        team.players[1].contract_years = 1;
        team.players[1].joined_this_offseason = true;
        team.players[1].age = 20;
        let staying = team.players[1].id.clone();

        let next = process_offseason(&state, &cfg.offseason, &cfg.finance, &mut seeded_rng(1));
        let team = next.selected_team().unwrap();
        assert!(team.player(&leaving).is_none());
        let kept = team.player(&staying).unwrap();
        assert_eq!(kept.contract_years, 1);
        assert!(!kept.joined_this_offseason);
    }

    #[test]
    fn test_ai_rosters_refilled() {
        let (mut state, cfg) = offseason_state("kaunas_kings", 2);
        for team in state.teams.iter_mut().filter(|t| t.id != "kaunas_kings") {
            for p in team.players.iter_mut() {
                p.contract_years = 1;
                p.age = 20;
            }
        }
        let next = process_offseason(&state, &cfg.offseason, &cfg.finance, &mut seeded_rng(2));
        for team in next.teams.iter().filter(|t| t.id != "kaunas_kings") {
            assert_eq!(team.players.len(), 10);
            assert_eq!(team.starter_count(), LINEUP_SIZE);
        }
        assert!(next.check_invariants().is_ok());
    }

    #[test]
    fn test_promotion_and_relegation_unconditional() {
        let (mut state, cfg) = offseason_state("kaunas_kings", 3);
        let upper_last = "utena_bears";
        let lower_first = "visaginas_atoms";
        for e in state.standings.get_mut(&Division::Upper).unwrap() {
            e.wins = if e.team_id == upper_last { 0 } else { 10 };
            e.losses = 14 - e.wins;
        }
        for e in state.standings.get_mut(&Division::Lower).unwrap() {
            e.wins = if e.team_id == lower_first { 14 } else { 1 };
            e.losses = 14 - e.wins;
        }
        let next = process_offseason(&state, &cfg.offseason, &cfg.finance, &mut seeded_rng(3));
        assert_eq!(next.team(upper_last).unwrap().division, Division::Lower);
        assert_eq!(next.team(lower_first).unwrap().division, Division::Upper);
        assert_eq!(next.division_team_ids(Division::Upper).len(), 8);
        assert!(next.division_standings(Division::Upper).iter().all(|e| e.wins == 0));
    }

    #[test]
    fn test_rollover_resets_season() {
        let (mut state, cfg) = offseason_state("kaunas_kings", 4);
        state.week = 14;
        state.declined_player_ids.push("p_999".into());
        state.season_bonus = Some(crate::models::SeasonBonus::Ticket10);
        state.youth_intake_used = true;
        let expected_balance = state.finances.season_end_balance();

        let next = process_offseason(&state, &cfg.offseason, &cfg.finance, &mut seeded_rng(4));
        assert_eq!(next.season, 2);
        assert_eq!(next.week, 0);
        assert_eq!(next.phase, Phase::Preseason);
        assert!(next.declined_player_ids.is_empty());
        assert!(next.season_bonus.is_none());
        assert!(!next.youth_intake_used);
        assert!(next.schedule.is_empty());
        assert!(next.playoff_bracket.is_empty());
        let expected = if next.season_modifier == SeasonModifier::ForeignInvestment {
            round_half_up(expected_balance as f64 * 1.15)
        } else {
            expected_balance
        };
        assert_eq!(next.finances.balance, expected);
        assert_eq!(next.finances.prize_income, 0);
    }

    #[test]
    fn test_fan_boom_raises_prestige() {
        let (mut state, cfg) = offseason_state("klaipeda_sailors", 5);
        state.season_modifier = SeasonModifier::FanBoom;
        let next = process_offseason(&state, &cfg.offseason, &cfg.finance, &mut seeded_rng(5));
        assert_eq!(next.team("klaipeda_sailors").unwrap().prestige, 4);

        let (mut state, _) = offseason_state("kaunas_kings", 5);
        state.season_modifier = SeasonModifier::FanBoom;
        state.selected_team_mut().unwrap().prestige = 5;
        let next = process_offseason(&state, &cfg.offseason, &cfg.finance, &mut seeded_rng(5));
        assert_eq!(next.team("kaunas_kings").unwrap().prestige, 5);
    }

    #[test]
    fn test_too_few_players_ends_game() {
        let (mut state, cfg) = offseason_state("kaunas_kings", 6);
        state.selected_team_mut().unwrap().players.truncate(4);
        let next = process_offseason(&state, &cfg.offseason, &cfg.finance, &mut seeded_rng(6));
        assert!(next.game_over);
        assert_eq!(next.game_over_reason, Some(GameOverReason::TooFewPlayers));
        assert_eq!(next.season, 1);

        let again = process_offseason(&next, &cfg.offseason, &cfg.finance, &mut seeded_rng(7));
        assert_eq!(again, next);
    }

    #[test]
    fn test_severe_debt_needs_two_seasons() {
        let (mut state, cfg) = offseason_state("kaunas_kings", 7);
        for p in state.selected_team_mut().unwrap().players.iter_mut() {
            p.age = 20;
            p.contract_years = 3;
        }
        state.finances.balance = -500_000;

        let first = process_offseason(&state, &cfg.offseason, &cfg.finance, &mut seeded_rng(7));
        assert!(!first.game_over);
        assert_eq!(first.consecutive_negative_seasons, 1);

        let mut second_in = first.clone();
        second_in.phase = Phase::Offseason;
        second_in.finances.balance = -500_000;
        let second = process_offseason(&second_in, &cfg.offseason, &cfg.finance, &mut seeded_rng(8));
        assert!(second.game_over);
        assert_eq!(second.game_over_reason, Some(GameOverReason::SevereDebt));
    }

    #[test]
    fn test_viewer_development_and_bench_tracking() {
        let (mut state, mut cfg) = offseason_state("kaunas_kings", 9);
        cfg.offseason.development_chance = 1.0;
        let team = state.selected_team_mut().unwrap();
        for p in team.players.iter_mut() {
            p.age = 19;
            p.contract_years = 2;
        }
        let before: Vec<(String, u32, bool)> =
            team.players.iter().map(|p| (p.id.clone(), skill_sum(p), p.is_starter)).collect();

        let next = process_offseason(&state, &cfg.offseason, &cfg.finance, &mut seeded_rng(9));
        let team = next.selected_team().unwrap();
        for (id, sum_before, starter) in before {
            let p = team.player(&id).unwrap();
            let sum_after = skill_sum(p);
            assert!(sum_after >= sum_before && sum_after <= sum_before + 3);
            assert_eq!(p.overall, p.attributes.overall());
            assert_eq!(p.seasons_without_play, if starter { 0 } else { 1 });
        }
    }
}
