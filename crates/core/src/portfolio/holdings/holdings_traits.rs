use async_trait::async_trait;

use super::holdings_model::Holding;
use crate::errors::Result;

/// Contract for holdings read operations consumed by the engine.
#[async_trait]
pub trait HoldingsRepositoryTrait: Send + Sync {
    /// Holdings with nonzero quantity for the given accounts, with their
    /// securities embedded.
    async fn find_holdings(&self, account_ids: &[String]) -> Result<Vec<Holding>>;
}
