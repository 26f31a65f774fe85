//! Accounts module - domain models, categorization, and repository contract.

mod accounts_categorizer;
mod accounts_model;
mod accounts_traits;

pub use accounts_categorizer::{categorize_accounts, AccountBuckets};
pub use accounts_model::{Account, AccountSubtype};
pub use accounts_traits::AccountRepositoryTrait;
