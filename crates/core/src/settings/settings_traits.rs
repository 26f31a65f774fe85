use async_trait::async_trait;

use crate::errors::Result;

/// Contract for user-settings lookups consumed by the engine.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// The user's reporting currency; all summary totals are expressed in it.
    async fn get_user_default_currency(&self, user_id: &str) -> Result<String>;
}
