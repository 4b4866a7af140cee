//! Club economy parameters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceConfig {
    // === Season income ===
    pub ticket_base: f64,
    /// Ticket income per half prestige level
    pub ticket_per_prestige: f64,
    pub sponsor_base: f64,
    pub sponsor_per_prestige: f64,
    /// Season income is split across two halves of the calendar (기본: 2.0)
    pub income_divisor: f64,
    /// Income multiplier under FinancialCrisis (기본: 0.7)
    pub crisis_income_factor: f64,
    /// Gate receipts per prestige level for a home week, before the divisor
    pub home_gate_per_prestige: f64,

    // === Bonuses and modifiers ===
    /// Ticket/sponsor season bonus multiplier (기본: 1.1)
    pub bonus_income_factor: f64,
    /// Wage bill multiplier of the salary restructure bonus (기본: 0.9)
    pub bonus_wage_factor: f64,
    /// Balance multiplier when a season opens with ForeignInvestment (기본: 1.15)
    pub foreign_investment_factor: f64,

    // === Prize money by final rank (index 0 = champion) ===
    pub upper_prizes: Vec<i64>,
    pub lower_prizes: Vec<i64>,

    // === Debt ===
    /// Season-end balance below this counts as a debt season (기본: -50000)
    pub severe_debt_threshold: i64,
    /// Consecutive debt seasons that end the game (기본: 2)
    pub severe_debt_seasons: u32,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            ticket_base: 20_000.0,
            ticket_per_prestige: 30_000.0,
            sponsor_base: 15_000.0,
            sponsor_per_prestige: 25_000.0,
            income_divisor: 2.0,
            crisis_income_factor: 0.7,
            home_gate_per_prestige: 1_500.0,

            bonus_income_factor: 1.1,
            bonus_wage_factor: 0.9,
            foreign_investment_factor: 1.15,

            upper_prizes: vec![230_000, 200_000, 190_000, 160_000, 150_000, 125_000, 100_000, 75_000],
            lower_prizes: vec![50_000, 38_000, 30_000, 24_000, 18_000, 14_000, 10_000, 7_000],

            severe_debt_threshold: -50_000,
            severe_debt_seasons: 2,
        }
    }
}
