use async_trait::async_trait;
use chrono::NaiveDate;

use super::activities_model::{AccountCashBalance, AccountInvestmentFlows, InvestmentTransaction};
use crate::errors::Result;

/// Contract for ledger read operations consumed by the engine.
///
/// The balance and flow methods are raw aggregates evaluated by the storage
/// layer: they must exclude voided and child transactions and everything
/// dated after `as_of`. Accounts without matching rows fall back to their
/// stored opening balance (for balances) or all-zero flows.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// All investment transactions for the given accounts, ordered by
    /// `(transaction_date, created_at)` ascending.
    async fn find_investment_transactions(
        &self,
        user_id: &str,
        account_ids: &[String],
    ) -> Result<Vec<InvestmentTransaction>>;

    /// Effective cash balance per account as of `as_of`, in each account's
    /// own currency, rounded to 2 decimals.
    async fn get_cash_balances(
        &self,
        user_id: &str,
        account_ids: &[String],
        as_of: NaiveDate,
    ) -> Result<Vec<AccountCashBalance>>;

    /// Buy/sell/income cash-flow sums per account with
    /// `transaction_date <= as_of`, in each account's own currency.
    async fn get_investment_flows(
        &self,
        user_id: &str,
        account_ids: &[String],
        as_of: NaiveDate,
    ) -> Result<Vec<AccountInvestmentFlows>>;
}
