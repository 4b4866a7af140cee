//! # Transfer Market
//!
//! Offers are judged by a clamped acceptance probability; signing pays the
//! offered salary up front out of the club budget and balance.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::MarketConfig;
use crate::error::Rejection;
use crate::generator::{generate_free_agents, try_generate_legend, LEGEND_ID};
use crate::models::{FreeAgent, Phase};
use crate::outcome::ActionOutcome;
use crate::season::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractLength {
    OneYear,
    TwoYears,
}

impl ContractLength {
    pub fn years(self) -> u32 {
        match self {
            ContractLength::OneYear => 1,
            ContractLength::TwoYears => 2,
        }
    }
}

pub fn acceptance_probability(
    offer: i64,
    asking: i64,
    length: ContractLength,
    prestige: u8,
    cfg: &MarketConfig,
) -> f64 {
    let (offer, asking) = (offer as f64, asking as f64);
    let mut chance = cfg.base_chance;
    if offer >= asking {
        chance += cfg.at_asking_bonus;
    }
    if offer >= asking * cfg.premium_ratio {
        chance += cfg.premium_bonus;
    }
    if offer < asking * cfg.lowball_ratio {
        chance -= cfg.lowball_penalty;
    }
    if length == ContractLength::TwoYears {
        chance += cfg.two_year_bonus;
    }
    chance += prestige as f64 * cfg.prestige_bonus;
    chance.clamp(cfg.min_chance, cfg.max_chance)
}

/// Make an offer to a listed player.
///
/// A listing already on a roster, a full squad, an earlier refusal and an
/// unaffordable offer are refused without a roll. A failed roll remembers the player as declined.
pub fn attempt_transfer<R: Rng + ?Sized>(
    state: &GameState,
    agent: &FreeAgent,
    length: ContractLength,
    offered_salary: i64,
    cfg: &MarketConfig,
    rng: &mut R,
) -> ActionOutcome {
    if state.game_over {
        return ActionOutcome::rejected(state.clone(), Rejection::GameOver);
    }
    let Some(team) = state.selected_team() else {
        return ActionOutcome::rejected(state.clone(), Rejection::PlayerNotFound);
    };
    if state.teams.iter().any(|t| t.player(agent.id()).is_some()) {
        return ActionOutcome::rejected(state.clone(), Rejection::AlreadySigned);
    }
    if team.players.len() >= cfg.max_squad_size {
        return ActionOutcome::rejected(
            state.clone(),
            Rejection::SquadFull { max: cfg.max_squad_size },
        );
    }
    if state.declined_player_ids.iter().any(|id| id == agent.id()) {
        return ActionOutcome::rejected(state.clone(), Rejection::AlreadyDeclined);
    }
    if offered_salary > team.budget + state.finances.balance {
        return ActionOutcome::rejected(state.clone(), Rejection::InsufficientBudget);
    }

    let chance =
        acceptance_probability(offered_salary, agent.asking_salary, length, team.prestige, cfg);
    let accepted = rng.gen::<f64>() < chance;

    let mut next = state.clone();
    if !accepted {
        next.declined_player_ids.push(agent.id().to_string());
        return ActionOutcome::rejected(next, Rejection::OfferDeclined);
    }

    let mut player = agent.resolve(rng);
    player.salary = offered_salary;
    player.contract_years = length.years();
    player.is_starter = false;
    player.seasons_without_play = 0;
    player.joined_this_offseason = state.phase == Phase::Offseason;

    info!(
        player = %player.id,
        overall = player.overall,
        salary = offered_salary,
        years = length.years(),
        "transfer completed"
    );
    if let Some(team) = next.selected_team_mut() {
        team.budget -= offered_salary;
        team.players.push(player);
    }
    next.finances.transfer_spending += offered_salary;
    next.finances.total_wages += offered_salary;
    next.finances.balance -= offered_salary;

    next.enforce_invariants();
    ActionOutcome::accepted(next)
}

/// New market listings for the viewer's division.
///
/// Ids come from the state's generator, so the returned state must be kept
/// for later listings not to reuse them.
pub fn refresh_market<R: Rng + ?Sized>(
    state: &GameState,
    is_offseason: bool,
    cfg: &MarketConfig,
    rng: &mut R,
) -> (GameState, Vec<FreeAgent>) {
    let Some(team) = state.selected_team() else {
        return (state.clone(), Vec::new());
    };
    let (division, prestige) = (team.division, team.prestige);

    let mut next = state.clone();
    let mut agents =
        generate_free_agents(division, is_offseason, prestige, cfg, &mut next.id_generator, rng);

    let legend_taken = next.teams.iter().any(|t| t.player(LEGEND_ID).is_some());
    if let Some(legend) = try_generate_legend(legend_taken, cfg.legend_chance, rng) {
        info!("legendary player listed");
        agents.push(legend);
    }
    (next, agents)
}
