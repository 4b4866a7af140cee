use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Player, Skill};

/// Inclusive range shown instead of an exact rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRanges {
    pub shooting: StatRange,
    pub defending: StatRange,
    pub dribbling: StatRange,
    pub passing: StatRange,
    pub overall: StatRange,
}

impl AttributeRanges {
    pub fn get(&self, skill: Skill) -> StatRange {
        match skill {
            Skill::Shooting => self.shooting,
            Skill::Defending => self.defending,
            Skill::Dribbling => self.dribbling,
            Skill::Passing => self.passing,
        }
    }
}

/// A market listing: the player plus what they ask for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeAgent {
    pub player: Player,
    pub asking_salary: i64,
    /// Present on Lower-division listings, whose exact ratings are hidden.
    #[serde(default)]
    pub attribute_ranges: Option<AttributeRanges>,
}

impl FreeAgent {
    pub fn id(&self) -> &str {
        &self.player.id
    }

    /// The player as they turn out on signing. Ranged skills are drawn
    /// uniformly within their range.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Player {
        let mut player = self.player.clone();
        if let Some(ranges) = &self.attribute_ranges {
            for skill in Skill::ALL {
                let range = ranges.get(skill);
                let value = if range.max > range.min {
                    rng.gen_range(range.min..=range.max)
                } else {
                    range.min
                };
                player.attributes.set(skill, value);
            }
            player.recompute_overall();
        }
        player
    }
}
