use std::sync::Arc;

use log::warn;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::fx::fx_model::RateCache;
use crate::fx::fx_traits::ExchangeRateProviderTrait;

/// Converts monetary amounts between currencies through the rate provider.
///
/// Resolution order for a pair `from -> to`:
/// 1. the per-computation cache,
/// 2. the provider's direct `from -> to` rate,
/// 3. the inverse of the provider's `to -> from` rate,
/// 4. a default rate of 1.0 (degraded behavior, logged, never an error).
///
/// Resolved rates are cached for the lifetime of one summary computation so
/// that all figures in a single summary use one consistent rate.
pub struct CurrencyConverter {
    provider: Arc<dyn ExchangeRateProviderTrait>,
}

impl CurrencyConverter {
    pub fn new(provider: Arc<dyn ExchangeRateProviderTrait>) -> Self {
        Self { provider }
    }

    /// Converts `amount` from `from_currency` to `to_currency`.
    ///
    /// Identical currencies return the amount unchanged without touching the
    /// cache or the provider. Provider I/O errors propagate; missing rate
    /// data never does.
    pub async fn convert(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
        cache: &mut RateCache,
    ) -> Result<Decimal> {
        if from_currency == to_currency {
            return Ok(amount);
        }

        let key = (from_currency.to_string(), to_currency.to_string());
        if let Some(rate) = cache.get(&key) {
            return Ok(amount * rate);
        }

        let rate = self.resolve_rate(from_currency, to_currency).await?;
        cache.insert(key, rate);
        Ok(amount * rate)
    }

    async fn resolve_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        if let Some(rate) = self
            .provider
            .get_latest_rate(from_currency, to_currency)
            .await?
        {
            return Ok(rate);
        }

        // Fall back to the inverse of the reverse pair.
        if let Some(reverse) = self
            .provider
            .get_latest_rate(to_currency, from_currency)
            .await?
        {
            if !reverse.is_zero() {
                return Ok(Decimal::ONE / reverse);
            }
        }

        warn!(
            "No exchange rate found for {}->{}; defaulting to 1.0",
            from_currency, to_currency
        );
        Ok(Decimal::ONE)
    }
}
