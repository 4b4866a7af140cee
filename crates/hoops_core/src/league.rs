//! # League Engine
//!
//! Facade over the free-function transitions. Holds an [`EngineConfig`] and
//! hands each operation the section it needs, so callers only thread the
//! state and an RNG.
//!
//! ```rust
//! use hoops_core::{seeded_rng, LeagueEngine};
//!
//! let engine = LeagueEngine::new();
//! let mut rng = seeded_rng(7);
//! let state = engine.initialize_game("kaunas_kings", &mut rng).unwrap();
//! let state = engine.start_regular_season(&state);
//! let state = engine.simulate_week(&state, None, &mut rng);
//! assert_eq!(state.week, 1);
//! ```

use rand::Rng;

use crate::config::EngineConfig;
use crate::engine::match_sim;
use crate::error::Result;
use crate::market::{self, ContractLength};
use crate::models::{FinanceRecord, FreeAgent, MatchScore, SeasonBonus, Team};
use crate::outcome::ActionOutcome;
use crate::season::{controller, offseason, playoffs, GameState};
use crate::squad;

#[derive(Debug, Clone, Default)]
pub struct LeagueEngine {
    config: EngineConfig,
}

impl LeagueEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom configuration, validated up front.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========== Season ==========

    pub fn initialize_game<R: Rng + ?Sized>(&self, team_id: &str, rng: &mut R) -> Result<GameState> {
        controller::initialize_game(team_id, &self.config.finance, rng)
    }

    pub fn roll_season_bonus_choices<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<SeasonBonus> {
        controller::roll_season_bonus_choices(rng)
    }

    pub fn choose_season_bonus(&self, state: &GameState, bonus: SeasonBonus) -> ActionOutcome {
        controller::choose_season_bonus(state, bonus, &self.config.finance)
    }

    pub fn start_regular_season(&self, state: &GameState) -> GameState {
        controller::start_regular_season(state)
    }

    pub fn simulate_week<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        co_viewer: Option<&str>,
        rng: &mut R,
    ) -> GameState {
        controller::simulate_week(state, co_viewer, &self.config, rng)
    }

    pub fn simulate_peer_week<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        co_viewer_id: &str,
        co_finances: &FinanceRecord,
        co_bonus: Option<SeasonBonus>,
        rng: &mut R,
    ) -> (GameState, FinanceRecord) {
        controller::simulate_peer_week(state, co_viewer_id, co_finances, co_bonus, &self.config, rng)
    }

    pub fn settle_viewpoint_week(
        &self,
        state: &GameState,
        team_id: &str,
        finances: &FinanceRecord,
        ticket_bonus: bool,
    ) -> FinanceRecord {
        controller::settle_viewpoint_week(state, team_id, finances, ticket_bonus, &self.config.finance)
    }

    pub fn simulate_playoff_game<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        index: usize,
        rng: &mut R,
    ) -> GameState {
        playoffs::simulate_playoff_game(state, index, &self.config.matches, &self.config.playoffs, rng)
    }

    pub fn simulate_all_playoffs<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> GameState {
        playoffs::simulate_all_playoffs(state, &self.config.matches, &self.config.playoffs, rng)
    }

    pub fn start_new_season<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> GameState {
        controller::start_new_season(state, &self.config, rng)
    }

    /// Offseason rollover without the phase check of [`Self::start_new_season`].
    pub fn process_offseason<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> GameState {
        offseason::process_offseason(state, &self.config.offseason, &self.config.finance, rng)
    }

    pub fn simulate_match<R: Rng + ?Sized>(
        &self,
        home: &Team,
        away: &Team,
        state: &GameState,
        rng: &mut R,
    ) -> MatchScore {
        match_sim::simulate_match(home, away, state.season_modifier, &self.config.matches, rng)
    }

    // ========== Market ==========

    pub fn acceptance_probability(
        &self,
        offer: i64,
        asking: i64,
        length: ContractLength,
        prestige: u8,
    ) -> f64 {
        market::acceptance_probability(offer, asking, length, prestige, &self.config.market)
    }

    pub fn attempt_transfer<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        agent: &FreeAgent,
        length: ContractLength,
        offered_salary: i64,
        rng: &mut R,
    ) -> ActionOutcome {
        market::attempt_transfer(state, agent, length, offered_salary, &self.config.market, rng)
    }

    pub fn refresh_market<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        is_offseason: bool,
        rng: &mut R,
    ) -> (GameState, Vec<FreeAgent>) {
        market::refresh_market(state, is_offseason, &self.config.market, rng)
    }

    // ========== Squad ==========

    pub fn intake_youth<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> ActionOutcome {
        squad::intake_youth(state, &self.config.market, rng)
    }

    pub fn toggle_starter(&self, state: &GameState, player_id: &str) -> ActionOutcome {
        squad::toggle_starter(state, player_id, &self.config.market)
    }

    pub fn release_player(&self, state: &GameState, player_id: &str) -> ActionOutcome {
        squad::release_player(state, player_id)
    }

    pub fn renew_contract(&self, state: &GameState, player_id: &str) -> ActionOutcome {
        squad::renew_contract(state, player_id, &self.config.market)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::models::Phase;
    use crate::rng::seeded_rng;

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = EngineConfig::default();
        config.playoffs.wins_to_advance = 0;
        assert!(matches!(LeagueEngine::with_config(config), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_facade_matches_free_functions() {
        let engine = LeagueEngine::new();
        let cfg = EngineConfig::default();

        let state = engine.initialize_game("kaunas_kings", &mut seeded_rng(3)).unwrap();
        let direct = controller::initialize_game("kaunas_kings", &cfg.finance, &mut seeded_rng(3)).unwrap();
        assert_eq!(state, direct);

        let state = engine.start_regular_season(&state);
        let a = engine.simulate_week(&state, None, &mut seeded_rng(4));
        let b = controller::simulate_week(&state, None, &cfg, &mut seeded_rng(4));
        assert_eq!(a, b);
    }

    #[test]
    fn test_season_through_facade() {
        let engine = LeagueEngine::with_config(EngineConfig::high_scoring()).unwrap();
        let mut rng = seeded_rng(8);
        let mut state = engine.initialize_game("klaipeda_sailors", &mut rng).unwrap();
        let bonus = engine.roll_season_bonus_choices(&mut rng)[0];
        state = engine.choose_season_bonus(&state, bonus).into_state();
        state = engine.start_regular_season(&state);
        while state.phase == Phase::Regular {
            state = engine.simulate_week(&state, None, &mut rng);
        }
        state = engine.simulate_all_playoffs(&state, &mut rng);
        assert_eq!(state.phase, Phase::Offseason);
        assert!(playoffs::champion(&state).is_some());

        let next = engine.start_new_season(&state, &mut rng);
        assert!(next.game_over || next.season == 2);
    }

    #[test]
    fn test_market_through_facade() {
        let engine = LeagueEngine::new();
        let mut rng = seeded_rng(9);
        let state = engine.initialize_game("kaunas_kings", &mut rng).unwrap();
        let (state, agents) = engine.refresh_market(&state, true, &mut rng);
        assert!(!agents.is_empty());
        let p = engine.acceptance_probability(100, 100, ContractLength::OneYear, 0);
        assert!((p - 0.75).abs() < 1e-9);

        let agent = &agents[0];
        let out = engine.attempt_transfer(&state, agent, ContractLength::OneYear, agent.asking_salary, &mut rng);
        // accepted or declined, never both
        assert_eq!(out.success(), out.state.selected_team().unwrap().player(agent.id()).is_some());
    }
}
