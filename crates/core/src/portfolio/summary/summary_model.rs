//! Portfolio summary result models.
//!
//! All monetary figures are expressed in the user's reporting currency;
//! percentages are plain numbers (not fractions).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::allocation::AllocationEntry;
use crate::portfolio::holdings::ValuedHolding;

/// Valued holdings of one holdings-capable account, with the account's cash
/// leg and net-invested capital.
///
/// For a brokerage account the cash balance comes from its linked cash
/// account; a standalone account carries its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHoldingsGroup {
    pub account_id: String,
    pub account_name: String,
    pub account_currency: String,
    pub cash_balance: Decimal,
    /// External capital contributed: `cash + buys - sells - income`.
    pub net_invested: Decimal,
    pub total_cost_basis: Decimal,
    pub total_market_value: Decimal,
    pub total_gain_loss: Decimal,
    /// Cash plus holdings market value.
    pub total_value: Decimal,
    pub holdings: Vec<ValuedHolding>,
}

/// The complete portfolio summary handed to the API layer verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub base_currency: String,
    pub as_of: NaiveDate,
    pub total_cash_value: Decimal,
    pub total_holdings_value: Decimal,
    pub total_cost_basis: Decimal,
    pub total_net_invested: Decimal,
    pub total_portfolio_value: Decimal,
    pub total_gain_loss: Decimal,
    /// `None` when total cost basis is zero.
    pub total_gain_loss_percent: Option<Decimal>,
    /// Cumulative time-weighted return, percent. `None` without history.
    pub time_weighted_return: Option<Decimal>,
    /// Annualized time-weighted return, percent.
    pub annualized_twr: Option<Decimal>,
    /// Compound annual growth rate, percent. `None` without history.
    pub cagr: Option<Decimal>,
    pub holdings: Vec<ValuedHolding>,
    pub accounts: Vec<AccountHoldingsGroup>,
    pub allocation: Vec<AllocationEntry>,
}
