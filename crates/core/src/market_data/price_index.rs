//! Immutable, per-computation index over sorted price histories.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::market_data_model::PricePoint;

/// Price history loaded once per computation into sorted, immutable arrays
/// and queried via binary search, instead of issuing a store query per
/// (security, date) lookup.
pub struct PriceHistoryIndex {
    series: HashMap<String, Vec<PricePoint>>,
}

impl PriceHistoryIndex {
    /// Builds the index. Series are sorted here so lookups can assume
    /// ascending date order regardless of what the repository returned.
    pub fn new(mut series: HashMap<String, Vec<PricePoint>>) -> Self {
        for points in series.values_mut() {
            points.sort_by_key(|p| p.date);
        }
        Self { series }
    }

    /// Latest close on or before `date`, or `None` when the security has no
    /// price that early.
    pub fn price_on_or_before(&self, security_id: &str, date: NaiveDate) -> Option<Decimal> {
        let points = self.series.get(security_id)?;
        let idx = points.partition_point(|p| p.date <= date);
        if idx == 0 {
            None
        } else {
            Some(points[idx - 1].close)
        }
    }
}
