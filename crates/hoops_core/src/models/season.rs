use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Preseason,
    Regular,
    Playoffs,
    Offseason,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Preseason => "preseason",
            Phase::Regular => "regular season",
            Phase::Playoffs => "playoffs",
            Phase::Offseason => "offseason",
        };
        f.write_str(name)
    }
}

/// League-wide condition drawn at each season start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonModifier {
    ForeignInvestment,
    FinancialCrisis,
    InjuryCrisis,
    FanBoom,
}

impl SeasonModifier {
    pub const ALL: [SeasonModifier; 4] = [
        SeasonModifier::ForeignInvestment,
        SeasonModifier::FinancialCrisis,
        SeasonModifier::InjuryCrisis,
        SeasonModifier::FanBoom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SeasonModifier::ForeignInvestment => "Foreign Investment",
            SeasonModifier::FinancialCrisis => "Financial Crisis",
            SeasonModifier::InjuryCrisis => "Injury Crisis",
            SeasonModifier::FanBoom => "Fan Boom",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SeasonModifier::ForeignInvestment => "+15% transfer budget",
            SeasonModifier::FinancialCrisis => "-30% income",
            SeasonModifier::InjuryCrisis => "Random rating penalties during matches",
            SeasonModifier::FanBoom => "Bonus prestige growth",
        }
    }
}

/// One-per-season perk picked from three offered choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonBonus {
    Ticket10,
    Sponsor10,
    WageMinus10,
}

impl SeasonBonus {
    pub const ALL: [SeasonBonus; 3] =
        [SeasonBonus::Ticket10, SeasonBonus::Sponsor10, SeasonBonus::WageMinus10];

    pub fn name(&self) -> &'static str {
        match self {
            SeasonBonus::Ticket10 => "Packed Arena",
            SeasonBonus::Sponsor10 => "New Sponsor Deal",
            SeasonBonus::WageMinus10 => "Salary Restructure",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SeasonBonus::Ticket10 => "+10% ticket income this season",
            SeasonBonus::Sponsor10 => "+10% sponsor income this season",
            SeasonBonus::WageMinus10 => "Player wage bill -10% this season",
        }
    }
}
