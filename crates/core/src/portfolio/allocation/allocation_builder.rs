use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{
    ALLOCATION_PALETTE, CASH_ALLOCATION_COLOR, CASH_ASSET_ID, PERCENT_DECIMAL_PLACES,
};
use crate::portfolio::holdings::ValuedHolding;

use super::allocation_model::AllocationEntry;

/// Builds the percentage-of-portfolio breakdown: one aggregate cash entry
/// when cash is positive, plus one entry per holding with positive converted
/// market value, sorted descending by value.
///
/// Security entries take colors round-robin from a fixed palette in
/// insertion order; cash always uses its own color. Both the ordering and
/// the colors are deterministic for identical input.
pub fn build_allocation(holdings: &[ValuedHolding], total_cash: Decimal) -> Vec<AllocationEntry> {
    let mut entries: Vec<AllocationEntry> = Vec::new();

    if total_cash > Decimal::ZERO {
        entries.push(AllocationEntry {
            id: CASH_ASSET_ID.to_string(),
            name: "Cash".to_string(),
            value: total_cash,
            percentage: Decimal::ZERO,
            color: CASH_ALLOCATION_COLOR.to_string(),
        });
    }

    let mut palette_cursor = 0usize;
    for holding in holdings {
        let value = match &holding.market_value {
            Some(mv) if mv.base > Decimal::ZERO => mv.base,
            _ => continue,
        };
        entries.push(AllocationEntry {
            id: holding.security.id.clone(),
            name: holding.security.symbol.clone(),
            value,
            percentage: Decimal::ZERO,
            color: ALLOCATION_PALETTE[palette_cursor % ALLOCATION_PALETTE.len()].to_string(),
        });
        palette_cursor += 1;
    }

    // Sort by value descending; id as tie-break keeps the order total.
    entries.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.id.cmp(&b.id)));

    // Percentages are of the whole portfolio (cash plus every holding's
    // market value), not of the shown entries alone: a short position is
    // excluded from the list but still dilutes the remaining slices.
    let total: Decimal = total_cash
        + holdings
            .iter()
            .filter_map(|h| h.market_value.as_ref().map(|mv| mv.base))
            .sum::<Decimal>();
    for entry in entries.iter_mut() {
        entry.percentage = if total > Decimal::ZERO {
            (entry.value / total * dec!(100)).round_dp(PERCENT_DECIMAL_PLACES)
        } else {
            Decimal::ZERO
        };
    }

    entries
}
