//! # Season
//!
//! The league state and its calendar: weekly simulation, playoffs and the
//! offseason rollover into the next season.

pub mod controller;
pub mod offseason;
pub mod playoffs;
pub mod state;

#[cfg(test)]
mod scenario_tests;

pub use controller::{
    calculate_initial_finances, choose_season_bonus, initialize_game, prize_for_rank,
    random_modifier, roll_season_bonus_choices, settle_viewpoint_week, simulate_peer_week,
    simulate_week, start_new_season, start_regular_season,
};
pub use offseason::process_offseason;
pub use playoffs::{
    champion, seed_bracket, simulate_all_playoffs, simulate_playoff_game, PlayoffMatchup, FINAL,
    SEMIFINAL,
};
pub use state::{GameOverReason, GameState};
