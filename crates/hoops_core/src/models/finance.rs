use serde::{Deserialize, Serialize};

/// Per-season money accumulators. Only `balance` carries over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceRecord {
    pub ticket_income: i64,
    pub sponsor_income: i64,
    pub prize_income: i64,
    pub total_wages: i64,
    pub transfer_spending: i64,
    pub balance: i64,
}

impl FinanceRecord {
    pub fn season_end_balance(&self) -> i64 {
        self.balance + self.ticket_income + self.sponsor_income + self.prize_income
            - self.total_wages
            - self.transfer_spending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_end_balance() {
        let f = FinanceRecord {
            ticket_income: 50_000,
            sponsor_income: 40_000,
            prize_income: 10_000,
            total_wages: 120_000,
            transfer_spending: 5_000,
            balance: 30_000,
        };
        assert_eq!(f.season_end_balance(), 5_000);
    }
}
