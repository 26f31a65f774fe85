use std::collections::HashMap;

use rust_decimal::Decimal;

/// Per-computation cache of resolved exchange rates, keyed by
/// `(from_currency, to_currency)`.
///
/// The cache is scoped to a single portfolio-summary computation and passed
/// explicitly between calls, so every figure in one summary uses the same
/// rate even if the provider's underlying data changes mid-computation.
pub type RateCache = HashMap<(String, String), Decimal>;
