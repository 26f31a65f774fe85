use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::market_data_model::{PricePoint, Security};
use crate::errors::Result;

/// Contract for market-data read operations consumed by the engine.
#[async_trait]
pub trait MarketDataRepositoryTrait: Send + Sync {
    /// The single most recent close per security. Securities without any
    /// price are simply absent from the map.
    async fn get_latest_prices(
        &self,
        security_ids: &[String],
    ) -> Result<HashMap<String, Decimal>>;

    /// Full price history per security, sorted ascending by date.
    async fn get_price_history(
        &self,
        security_ids: &[String],
    ) -> Result<HashMap<String, Vec<PricePoint>>>;

    /// Resolves securities by id (for currency and display data).
    async fn find_securities(&self, security_ids: &[String]) -> Result<Vec<Security>>;
}
