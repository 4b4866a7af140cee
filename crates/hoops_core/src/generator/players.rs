//! Player generation: attributes by role and prestige, salaries, youth
//! prospects and the one legendary market player.

use rand::seq::SliceRandom;
use rand::Rng;

use super::ids::IdGenerator;
use super::names::random_name;
use crate::models::{
    round_half_up, FreeAgent, Player, PlayerAttributes, PlayerRarity, PlayerRole, MAX_SKILL,
    MIN_SKILL,
};

/// First six roster spots guarantee two of each role.
const ROSTER_CORE_ROLES: [PlayerRole; 6] = [
    PlayerRole::Sharpshooter,
    PlayerRole::Sharpshooter,
    PlayerRole::Defender,
    PlayerRole::Defender,
    PlayerRole::Playmaker,
    PlayerRole::Playmaker,
];

/// Fixed id of the legendary market player. At most one copy exists.
pub const LEGEND_ID: &str = "legend_market_star";
pub const LEGEND_NAME: &str = "Kęstutis Legenda";

pub fn estimate_fair_salary(overall: u32, prestige: u8) -> i64 {
    round_half_up(overall as f64 * 120.0 * (1.0 + prestige as f64 * 0.06))
}

/// Attribute roll: baseline `30 + prestige*10`, spread ±12 from prestige 3
/// up (±10 below), then the role boost.
pub fn generate_attributes<R: Rng + ?Sized>(
    role: PlayerRole,
    prestige: u8,
    rng: &mut R,
) -> PlayerAttributes {
    let base = 30 + prestige as i32 * 10;
    let variance = if prestige >= 3 { 12 } else { 10 };

    let mut height: u32 = match role {
        PlayerRole::Defender => rng.gen_range(195..=212),
        PlayerRole::Sharpshooter => rng.gen_range(185..=205),
        PlayerRole::Playmaker => rng.gen_range(178..=195),
    };
    let mut roll = || rng.gen_range(base - variance..=base + variance);
    let mut shooting = roll();
    let mut defending = roll();
    let mut dribbling = roll();
    let mut passing = roll();

    match role {
        PlayerRole::Sharpshooter => shooting = (shooting + 15).min(99),
        PlayerRole::Defender => {
            defending = (defending + 15).min(99);
            height = height.max(198);
        }
        PlayerRole::Playmaker => {
            passing = (passing + 12).min(99);
            dribbling = (dribbling + 10).min(99);
        }
    }

    let clamp = |v: i32| v.clamp(MIN_SKILL as i32, MAX_SKILL as i32) as u32;
    PlayerAttributes {
        height,
        shooting: clamp(shooting),
        defending: clamp(defending),
        dribbling: clamp(dribbling),
        passing: clamp(passing),
    }
}

fn random_role<R: Rng + ?Sized>(rng: &mut R) -> PlayerRole {
    *PlayerRole::ALL.choose(rng).unwrap_or(&PlayerRole::Sharpshooter)
}

/// One senior player; a random role unless `role` is given.
pub fn generate_player<R: Rng + ?Sized>(
    prestige: u8,
    role: Option<PlayerRole>,
    ids: &mut IdGenerator,
    rng: &mut R,
) -> Player {
    let role = role.unwrap_or_else(|| random_role(rng));
    let attributes = generate_attributes(role, prestige, rng);
    let overall = attributes.overall();
    let id = ids.next_id();
    let name = random_name(rng);
    let age = rng.gen_range(19..=34);
    let contract_years = rng.gen_range(1..=3);

    Player {
        id,
        name,
        age,
        role,
        attributes,
        overall,
        salary: estimate_fair_salary(overall, prestige),
        contract_years,
        is_youth: false,
        is_starter: false,
        seasons_without_play: 0,
        joined_this_offseason: false,
        rarity: PlayerRarity::from_overall(overall),
    }
}

pub fn generate_roster<R: Rng + ?Sized>(
    count: usize,
    prestige: u8,
    ids: &mut IdGenerator,
    rng: &mut R,
) -> Vec<Player> {
    (0..count)
        .map(|i| generate_player(prestige, ROSTER_CORE_ROLES.get(i).copied(), ids, rng))
        .collect()
}

/// Academy prospect: rated one prestige level below the club, free contract
/// for two seasons.
pub fn generate_youth_player<R: Rng + ?Sized>(
    prestige: u8,
    ids: &mut IdGenerator,
    rng: &mut R,
) -> Player {
    let role = random_role(rng);
    let attributes = generate_attributes(role, prestige.saturating_sub(1).max(1), rng);
    let overall = attributes.overall();
    let id = ids.next_id();
    let name = random_name(rng);
    let age = rng.gen_range(17..=20);

    Player {
        id,
        name,
        age,
        role,
        attributes,
        overall,
        salary: 0,
        contract_years: 2,
        is_youth: true,
        is_starter: false,
        seasons_without_play: 0,
        joined_this_offseason: false,
        rarity: PlayerRarity::from_overall(overall),
    }
}

/// Rare market listing of the league's legendary sharpshooter.
///
/// Returns `None` when he is already listed or signed, or when the
/// `chance` roll fails.
pub fn try_generate_legend<R: Rng + ?Sized>(
    already_exists: bool,
    chance: f64,
    rng: &mut R,
) -> Option<FreeAgent> {
    if already_exists || rng.gen::<f64>() >= chance {
        return None;
    }
    let attributes = PlayerAttributes {
        height: 196,
        shooting: rng.gen_range(68..=78),
        defending: rng.gen_range(55..=68),
        dribbling: rng.gen_range(60..=72),
        passing: rng.gen_range(62..=74),
    };
    let overall = attributes.overall();
    let age = rng.gen_range(26..=31);

    Some(FreeAgent {
        player: Player {
            id: LEGEND_ID.to_string(),
            name: LEGEND_NAME.to_string(),
            age,
            role: PlayerRole::Sharpshooter,
            attributes,
            overall,
            salary: overall as i64 * 180,
            contract_years: 0,
            is_youth: false,
            is_starter: false,
            seasons_without_play: 0,
            joined_this_offseason: false,
            rarity: PlayerRarity::Epic,
        },
        asking_salary: overall as i64 * 200,
        attribute_ranges: None,
    })
}
