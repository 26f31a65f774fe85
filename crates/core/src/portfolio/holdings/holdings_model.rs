//! Holding domain models and valuation results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::market_data::Security;

/// A raw holding row: a signed position in one security within one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub account_id: String,
    pub security: Security,
    pub quantity: Decimal,
    /// Average cost per unit, in the security's currency.
    pub average_cost: Decimal,
}

/// An amount in the security's own currency (`local`) and in the reporting
/// currency (`base`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonetaryValue {
    pub local: Decimal,
    pub base: Decimal,
}

impl MonetaryValue {
    pub fn zero() -> Self {
        MonetaryValue {
            local: Decimal::ZERO,
            base: Decimal::ZERO,
        }
    }
}

/// A holding joined to its latest price, with derived valuation figures.
///
/// A holding whose price is missing keeps its cost basis but has no market
/// value or gain/loss; it must not silently vanish from the valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuedHolding {
    pub id: String,
    pub account_id: String,
    pub security: Security,
    pub quantity: Decimal,
    pub average_cost: Decimal,
    /// Latest known price, in the security's currency.
    pub price: Option<Decimal>,
    pub cost_basis: MonetaryValue,
    pub market_value: Option<MonetaryValue>,
    pub gain_loss: Option<MonetaryValue>,
    /// `gain_loss / cost_basis * 100`, rounded to 4 decimals.
    pub gain_loss_percent: Option<Decimal>,
    /// Share of total holdings value (percent, 2 decimals).
    pub weight: Decimal,
}

/// Portfolio-wide valuation totals, in the reporting currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsValuation {
    pub holdings: Vec<ValuedHolding>,
    pub total_cost_basis: Decimal,
    pub total_holdings_value: Decimal,
}

impl HoldingsValuation {
    pub fn empty() -> Self {
        Self {
            holdings: Vec::new(),
            total_cost_basis: Decimal::ZERO,
            total_holdings_value: Decimal::ZERO,
        }
    }
}
