//! Account domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sub-type of an investment account.
///
/// A `Brokerage` account and its linked `Cash` account reference each other
/// symmetrically through `linked_account_id`. An account with no sub-type is
/// standalone: it carries both cash and security holdings itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountSubtype {
    /// Cash-only account paired with a brokerage account.
    Cash,
    /// Brokerage account holding securities, paired with a cash account.
    Brokerage,
}

/// Domain model representing an account in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub account_type: String,
    /// `None` means a standalone account carrying both cash and holdings.
    pub sub_type: Option<AccountSubtype>,
    /// Symmetric brokerage<->cash pairing, by id rather than by reference.
    pub linked_account_id: Option<String>,
    pub currency: String,
    pub opening_balance: Decimal,
    /// Denormalized balance maintained by the CRUD layer; the engine always
    /// recomputes effective balances from the ledger instead.
    pub current_balance: Decimal,
    pub created_at: NaiveDateTime,
}
