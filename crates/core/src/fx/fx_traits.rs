use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;

/// Contract for the external exchange-rate provider.
///
/// Returns the most recent known rate for a currency pair, or `None` when no
/// rate is known for that pair in that direction. Providers must not invert
/// rates themselves; the converter handles the reverse-rate fallback.
#[async_trait]
pub trait ExchangeRateProviderTrait: Send + Sync {
    async fn get_latest_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Option<Decimal>>;
}
