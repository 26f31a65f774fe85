use async_trait::async_trait;

use super::accounts_model::Account;
use crate::errors::Result;

/// Contract for account read operations consumed by the engine.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Returns the user's investment accounts.
    async fn find_investment_accounts(&self, user_id: &str) -> Result<Vec<Account>>;
}
