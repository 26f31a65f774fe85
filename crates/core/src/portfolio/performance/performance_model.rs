use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-level return metrics.
///
/// Both fields are `None` (not zero) when there is no transaction history
/// to chain, or when the portfolio never held positive value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPerformance {
    /// Cumulative time-weighted return, in percent.
    pub cumulative_twr: Option<Decimal>,
    /// Annualized time-weighted return, in percent. `None` when the
    /// simulated span is under one day.
    pub annualized_twr: Option<Decimal>,
}

impl PortfolioPerformance {
    pub fn empty() -> Self {
        Self {
            cumulative_twr: None,
            annualized_twr: None,
        }
    }
}
