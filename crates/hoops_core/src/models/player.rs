use serde::{Deserialize, Serialize};

use super::round_half_up;

pub const MIN_SKILL: u32 = 1;
pub const MAX_SKILL: u32 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Sharpshooter,
    Defender,
    Playmaker,
}

impl PlayerRole {
    pub const ALL: [PlayerRole; 3] =
        [PlayerRole::Sharpshooter, PlayerRole::Defender, PlayerRole::Playmaker];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl PlayerRarity {
    pub fn from_overall(overall: u32) -> Self {
        match overall {
            80.. => PlayerRarity::Legendary,
            70..=79 => PlayerRarity::Epic,
            60..=69 => PlayerRarity::Rare,
            _ => PlayerRarity::Common,
        }
    }
}

/// The four rated skills (height is not a skill).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Shooting,
    Defending,
    Dribbling,
    Passing,
}

impl Skill {
    pub const ALL: [Skill; 4] = [Skill::Shooting, Skill::Defending, Skill::Dribbling, Skill::Passing];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    /// cm
    pub height: u32,
    pub shooting: u32,
    pub defending: u32,
    pub dribbling: u32,
    pub passing: u32,
}

impl PlayerAttributes {
    pub fn get(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Shooting => self.shooting,
            Skill::Defending => self.defending,
            Skill::Dribbling => self.dribbling,
            Skill::Passing => self.passing,
        }
    }

    pub fn set(&mut self, skill: Skill, value: u32) {
        let value = value.clamp(MIN_SKILL, MAX_SKILL);
        match skill {
            Skill::Shooting => self.shooting = value,
            Skill::Defending => self.defending = value,
            Skill::Dribbling => self.dribbling = value,
            Skill::Passing => self.passing = value,
        }
    }

    /// Add points to a skill, capped at 99.
    pub fn improve(&mut self, skill: Skill, points: u32) {
        self.set(skill, self.get(skill).saturating_add(points));
    }

    /// Rounded mean of the four skills.
    pub fn overall(&self) -> u32 {
        let sum: u32 = Skill::ALL.iter().map(|s| self.get(*s)).sum();
        round_half_up(sum as f64 / 4.0).max(0) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub role: PlayerRole,
    pub attributes: PlayerAttributes,
    pub overall: u32,
    pub salary: i64,
    pub contract_years: u32,
    #[serde(default)]
    pub is_youth: bool,
    #[serde(default)]
    pub is_starter: bool,
    #[serde(default)]
    pub seasons_without_play: u32,
    #[serde(default)]
    pub joined_this_offseason: bool,
    pub rarity: PlayerRarity,
}

impl Player {
    /// Refresh `overall` and `rarity` after attributes changed.
    pub fn recompute_overall(&mut self) {
        self.overall = self.attributes.overall();
        self.rarity = PlayerRarity::from_overall(self.overall);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(s: u32, d: u32, dr: u32, p: u32) -> PlayerAttributes {
        PlayerAttributes { height: 200, shooting: s, defending: d, dribbling: dr, passing: p }
    }

    #[test]
    fn test_overall_rounds_half_up() {
        assert_eq!(attrs(50, 50, 50, 52).overall(), 51); // 50.5
        assert_eq!(attrs(50, 50, 50, 51).overall(), 50); // 50.25
        assert_eq!(attrs(99, 99, 99, 99).overall(), 99);
    }

    #[test]
    fn test_rarity_thresholds() {
        assert_eq!(PlayerRarity::from_overall(80), PlayerRarity::Legendary);
        assert_eq!(PlayerRarity::from_overall(79), PlayerRarity::Epic);
        assert_eq!(PlayerRarity::from_overall(60), PlayerRarity::Rare);
        assert_eq!(PlayerRarity::from_overall(59), PlayerRarity::Common);
    }

    #[test]
    fn test_improve_caps_at_99() {
        let mut a = attrs(97, 40, 40, 40);
        a.improve(Skill::Shooting, 3);
        assert_eq!(a.shooting, 99);
        a.improve(Skill::Passing, 2);
        assert_eq!(a.passing, 42);
    }
}
