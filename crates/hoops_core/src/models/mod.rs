pub mod finance;
pub mod free_agent;
pub mod match_result;
pub mod player;
pub mod season;
pub mod team;

pub use finance::FinanceRecord;
pub use free_agent::{AttributeRanges, FreeAgent, StatRange};
pub use match_result::{Fixture, MatchResult, MatchScore};
pub use player::{Player, PlayerAttributes, PlayerRarity, PlayerRole, Skill, MAX_SKILL, MIN_SKILL};
pub use season::{Phase, SeasonBonus, SeasonModifier};
pub use team::{Division, Team, LINEUP_SIZE};

/// Round to the nearest integer with halves going up (toward +inf).
///
/// Money can be negative, so `f64::round` (halves away from zero) would
/// disagree on values like `-2.5`.
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.4), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(0.0), 0);
    }
}
