//! Transfer market listings.

use rand::Rng;

use super::ids::IdGenerator;
use super::players::generate_player;
use crate::config::MarketConfig;
use crate::models::{round_half_up, AttributeRanges, Division, FreeAgent, StatRange};

/// Market depth factor by the viewing club's prestige.
pub fn prestige_multiplier(prestige: u8) -> f64 {
    match prestige {
        4.. => 1.5,
        3 => 1.2,
        2 => 1.0,
        _ => 0.7,
    }
}

pub fn listing_count(division: Division, is_offseason: bool, prestige: u8) -> usize {
    let base = match (division, is_offseason) {
        (Division::Lower, false) => 5.0,
        (Division::Lower, true) => 10.0,
        (Division::Upper, false) => 7.0,
        (Division::Upper, true) => 18.0,
    };
    round_half_up(base * prestige_multiplier(prestige)).max(0) as usize
}

/// Generate the listings a club of `team_prestige` sees in `division`.
///
/// Lower-division agents are unscouted: they come free and show each skill
/// as a range starting at the true floor. Upper-division agents show exact
/// ratings and ask for a markup on their fair salary.
pub fn generate_free_agents<R: Rng + ?Sized>(
    division: Division,
    is_offseason: bool,
    team_prestige: u8,
    cfg: &MarketConfig,
    ids: &mut IdGenerator,
    rng: &mut R,
) -> Vec<FreeAgent> {
    let count = listing_count(division, is_offseason, team_prestige);
    let min_quality = team_prestige.saturating_sub(1).max(1);
    let max_quality = team_prestige.saturating_add(1).min(5);

    let mut agents = Vec::with_capacity(count);
    for _ in 0..count {
        let prestige = rng.gen_range(min_quality..=max_quality.max(min_quality));
        let mut player = generate_player(prestige, None, ids, rng);
        player.contract_years = 0;

        let agent = match division {
            Division::Lower => {
                let (lo, hi) = cfg.range_uncertainty;
                let u = rng.gen_range(lo..=hi);
                let span = |min: u32| StatRange { min, max: (min + u).min(99) };
                let a = &player.attributes;
                let ranges = AttributeRanges {
                    shooting: span(a.shooting),
                    defending: span(a.defending),
                    dribbling: span(a.dribbling),
                    passing: span(a.passing),
                    overall: span(player.overall),
                };
                player.salary = 0;
                FreeAgent { player, asking_salary: 0, attribute_ranges: Some(ranges) }
            }
            Division::Upper => {
                let markup = rng.gen::<f64>() * cfg.asking_markup_max;
                let asking_salary = round_half_up(player.salary as f64 * (1.0 + markup));
                FreeAgent { player, asking_salary, attribute_ranges: None }
            }
        };
        agents.push(agent);
    }
    agents
}
