//! Security and price domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityType {
    Stock,
    Etf,
    Fund,
    Bond,
    Crypto,
    Other,
}

/// A tradable security referenced by holdings and transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub currency: String,
    pub security_type: SecurityType,
    pub is_active: bool,
}

/// One daily close for a security. At most one price exists per security
/// per calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: Decimal,
}
