use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of the portfolio allocation breakdown: either the aggregate
/// cash entry or a single holding with positive market value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    /// Security id, or `CASH` for the aggregate cash entry.
    pub id: String,
    /// Display name (security symbol, or "Cash").
    pub name: String,
    /// Value in the reporting currency.
    pub value: Decimal,
    /// Percentage of total portfolio value (0-100, 2 decimals).
    pub percentage: Decimal,
    /// Deterministic chart color (hex code).
    pub color: String,
}
