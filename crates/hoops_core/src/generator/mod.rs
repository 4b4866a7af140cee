//! Player/Team Generator
//!
//! All randomness comes from the caller's RNG and all ids from an
//! [`IdGenerator`], so generation is reproducible from a seed.

pub mod free_agents;
pub mod ids;
pub mod names;
pub mod players;
pub mod teams;

pub use free_agents::{generate_free_agents, listing_count, prestige_multiplier};
pub use ids::IdGenerator;
pub use players::{
    estimate_fair_salary, generate_attributes, generate_player, generate_roster,
    generate_youth_player, try_generate_legend, LEGEND_ID,
};
pub use teams::{create_initial_teams, find_template, TeamTemplate, TEAM_TEMPLATES};
