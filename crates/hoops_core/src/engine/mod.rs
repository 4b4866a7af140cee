//! Match, schedule and standings primitives used by the season controller.

pub mod match_sim;
pub mod schedule;
pub mod standings;

pub use match_sim::{simulate_match, strategy_bonus, team_strategy, team_strength, Strategy};
pub use schedule::generate_balanced_schedule;
pub use standings::{
    apply_result, create_initial_standings, rank_of, sorted, Standings, StandingsEntry,
};
