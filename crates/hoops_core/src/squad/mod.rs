//! Squad management for the viewer's club: youth intake, lineup, releases
//! and contract renewals.

use rand::Rng;
use tracing::info;

use crate::config::MarketConfig;
use crate::error::Rejection;
use crate::generator::generate_youth_player;
use crate::models::{round_half_up, Phase, Player, Team};
use crate::outcome::ActionOutcome;
use crate::season::GameState;

/// Refuse on game over, otherwise hand back the viewer's team.
fn viewer_team(state: &GameState) -> Result<&Team, Rejection> {
    if state.game_over {
        return Err(Rejection::GameOver);
    }
    state.selected_team().ok_or(Rejection::PlayerNotFound)
}

/// Sign up to `youth_intake_size` academy players, once per season.
pub fn intake_youth<R: Rng + ?Sized>(
    state: &GameState,
    cfg: &MarketConfig,
    rng: &mut R,
) -> ActionOutcome {
    let team = match viewer_team(state) {
        Ok(team) => team,
        Err(rejection) => return ActionOutcome::rejected(state.clone(), rejection),
    };
    if state.youth_intake_used {
        return ActionOutcome::rejected(state.clone(), Rejection::YouthIntakeUsed);
    }
    let free_slots = cfg.max_squad_size.saturating_sub(team.players.len());
    if free_slots == 0 {
        return ActionOutcome::rejected(state.clone(), Rejection::NoFreeSlots);
    }
    let prestige = team.prestige;

    let mut next = state.clone();
    let count = free_slots.min(cfg.youth_intake_size);
    let youth: Vec<Player> = (0..count)
        .map(|_| generate_youth_player(prestige, &mut next.id_generator, rng))
        .collect();
    let wages: i64 = youth.iter().map(|p| p.salary).sum();

    info!(count, "youth intake");
    if let Some(team) = next.selected_team_mut() {
        team.players.extend(youth);
    }
    next.finances.total_wages += wages;
    next.youth_intake_used = true;
    next.enforce_invariants();
    ActionOutcome::accepted(next)
}

/// Flip a player in or out of the starting five.
pub fn toggle_starter(state: &GameState, player_id: &str, cfg: &MarketConfig) -> ActionOutcome {
    let team = match viewer_team(state) {
        Ok(team) => team,
        Err(rejection) => return ActionOutcome::rejected(state.clone(), rejection),
    };
    let Some(player) = team.player(player_id) else {
        return ActionOutcome::rejected(state.clone(), Rejection::PlayerNotFound);
    };
    if !player.is_starter && team.starter_count() >= cfg.max_starters {
        return ActionOutcome::rejected(
            state.clone(),
            Rejection::StarterLimit { max: cfg.max_starters },
        );
    }

    let mut next = state.clone();
    if let Some(player) = next.selected_team_mut().and_then(|t| t.player_mut(player_id)) {
        player.is_starter = !player.is_starter;
    }
    ActionOutcome::accepted(next)
}

pub fn release_player(state: &GameState, player_id: &str) -> ActionOutcome {
    let team = match viewer_team(state) {
        Ok(team) => team,
        Err(rejection) => return ActionOutcome::rejected(state.clone(), rejection),
    };
    let Some(salary) = team.player(player_id).map(|p| p.salary) else {
        return ActionOutcome::rejected(state.clone(), Rejection::PlayerNotFound);
    };

    let mut next = state.clone();
    if let Some(team) = next.selected_team_mut() {
        team.players.retain(|p| p.id != player_id);
    }
    next.finances.total_wages -= salary;
    info!(player = player_id, salary, "player released");
    ActionOutcome::accepted(next)
}

/// Salary after renewal. Players on a free contract are priced from their
/// rating; everyone else gets a raise on their current salary.
pub fn renewal_salary(player: &Player, prestige: u8, cfg: &MarketConfig) -> i64 {
    let prestige_factor = 1.0 + prestige as f64 * cfg.renewal_prestige_factor;
    if player.salary == 0 {
        round_half_up(player.overall as f64 * cfg.renewal_free_rate * prestige_factor)
    } else {
        round_half_up(player.salary as f64 * cfg.renewal_raise * prestige_factor)
    }
}

/// Extend a contract in its final year. The salary increase is paid from
/// the balance straight away.
pub fn renew_contract(state: &GameState, player_id: &str, cfg: &MarketConfig) -> ActionOutcome {
    let team = match viewer_team(state) {
        Ok(team) => team,
        Err(rejection) => return ActionOutcome::rejected(state.clone(), rejection),
    };
    let Some(player) = team.player(player_id) else {
        return ActionOutcome::rejected(state.clone(), Rejection::PlayerNotFound);
    };
    if player.contract_years > 1 {
        return ActionOutcome::rejected(state.clone(), Rejection::RenewalTooEarly);
    }
    let new_salary = renewal_salary(player, team.prestige, cfg);
    let additional_cost = new_salary - player.salary;
    if state.finances.balance < additional_cost {
        return ActionOutcome::rejected(state.clone(), Rejection::InsufficientFunds);
    }
    let extra_years = if state.phase == Phase::Offseason { 2 } else { 1 };

    let mut next = state.clone();
    if let Some(player) = next.selected_team_mut().and_then(|t| t.player_mut(player_id)) {
        player.contract_years += extra_years;
        player.salary = new_salary;
        player.is_youth = false;
    }
    next.finances.total_wages += additional_cost;
    next.finances.balance -= additional_cost;
    info!(player = player_id, new_salary, extra_years, "contract renewed");
    ActionOutcome::accepted(next)
}
