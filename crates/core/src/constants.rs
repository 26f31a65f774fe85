//! Shared constants for portfolio calculations.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal places for monetary amounts at component boundaries.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Decimal places for percentage-of-portfolio figures.
pub const PERCENT_DECIMAL_PLACES: u32 = 2;

/// Decimal places for gain/loss ratios and other derived ratios.
pub const RATIO_DECIMAL_PLACES: u32 = 4;

/// Julian year, used to annualize returns.
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);

/// Synthetic asset id for the aggregate cash entry in allocations.
pub const CASH_ASSET_ID: &str = "CASH";

/// Color of the aggregate cash allocation entry.
pub const CASH_ALLOCATION_COLOR: &str = "#c437c2";

/// Fixed palette for security allocation entries, assigned round-robin by
/// insertion order so chart colors are stable between recomputations.
pub const ALLOCATION_PALETTE: [&str; 10] = [
    "#4385be", "#da702c", "#879a39", "#8b7ec8", "#d14d41", "#3aa99f",
    "#d0a215", "#ce5d97", "#205ea6", "#878580",
];
