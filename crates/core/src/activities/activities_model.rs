//! Investment-transaction domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The closed set of investment-transaction actions.
///
/// The TWR simulation dispatches on this enum in its quantity-update step;
/// new actions must be added here, not modeled as an open hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionAction {
    Buy,
    Sell,
    Reinvest,
    TransferIn,
    TransferOut,
    AddShares,
    RemoveShares,
    Dividend,
    Interest,
    CapitalGain,
    Split,
}

/// How an action changes the simulated quantity of its security.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityEffect {
    Increase,
    Decrease,
    Unchanged,
}

impl TransactionAction {
    /// Effect of this action on the holdings quantity of its security.
    ///
    /// Dividend/Interest/CapitalGain are cash events; Split quantities are
    /// already reflected in the adjusted ledger rows.
    pub fn quantity_effect(&self) -> QuantityEffect {
        match self {
            TransactionAction::Buy
            | TransactionAction::Reinvest
            | TransactionAction::TransferIn
            | TransactionAction::AddShares => QuantityEffect::Increase,
            TransactionAction::Sell
            | TransactionAction::TransferOut
            | TransactionAction::RemoveShares => QuantityEffect::Decrease,
            TransactionAction::Dividend
            | TransactionAction::Interest
            | TransactionAction::CapitalGain
            | TransactionAction::Split => QuantityEffect::Unchanged,
        }
    }

    /// Income actions (dividends, interest, capital-gain distributions).
    pub fn is_income(&self) -> bool {
        matches!(
            self,
            TransactionAction::Dividend
                | TransactionAction::Interest
                | TransactionAction::CapitalGain
        )
    }
}

/// A row of the investment-transaction ledger. Read-only input to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTransaction {
    pub id: String,
    pub user_id: String,
    pub account_id: String,
    /// `None` for pure cash events (e.g. account-level interest).
    pub security_id: Option<String>,
    pub action: TransactionAction,
    pub quantity: Decimal,
    /// Total cash amount of the transaction, in the account's currency.
    pub amount: Decimal,
    pub transaction_date: NaiveDate,
    /// Deterministic tie-break for same-date ordering.
    pub created_at: NaiveDateTime,
}

/// Effective cash balance of one account as of a reference date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCashBalance {
    pub account_id: String,
    /// `opening_balance + sum of non-void, non-child transactions dated on
    /// or before the reference date`, rounded to 2 decimals.
    pub balance: Decimal,
}

/// Per-account buy/sell/income cash-flow sums from the investment ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInvestmentFlows {
    pub account_id: String,
    pub buys: Decimal,
    pub sells: Decimal,
    pub income: Decimal,
}

impl AccountInvestmentFlows {
    pub fn zero(account_id: &str) -> Self {
        Self {
            account_id: account_id.to_string(),
            buys: Decimal::ZERO,
            sells: Decimal::ZERO,
            income: Decimal::ZERO,
        }
    }

    /// External capital contributed to the account, derived algebraically
    /// from its cash balance and trading/income flows. Independent of
    /// trading activity.
    pub fn net_invested(&self, cash_balance: Decimal) -> Decimal {
        cash_balance + self.buys - self.sells - self.income
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quantity_effects() {
        assert_eq!(
            TransactionAction::Buy.quantity_effect(),
            QuantityEffect::Increase
        );
        assert_eq!(
            TransactionAction::Reinvest.quantity_effect(),
            QuantityEffect::Increase
        );
        assert_eq!(
            TransactionAction::TransferOut.quantity_effect(),
            QuantityEffect::Decrease
        );
        assert_eq!(
            TransactionAction::Split.quantity_effect(),
            QuantityEffect::Unchanged
        );
        assert_eq!(
            TransactionAction::Dividend.quantity_effect(),
            QuantityEffect::Unchanged
        );
    }

    #[test]
    fn test_income_actions() {
        assert!(TransactionAction::Dividend.is_income());
        assert!(TransactionAction::Interest.is_income());
        assert!(TransactionAction::CapitalGain.is_income());
        assert!(!TransactionAction::Buy.is_income());
        assert!(!TransactionAction::Split.is_income());
    }

    #[test]
    fn test_net_invested_identity() {
        // cash 500, buys 2000, sells 300, income 50 -> 2150
        let flows = AccountInvestmentFlows {
            account_id: "acct-1".to_string(),
            buys: dec!(2000),
            sells: dec!(300),
            income: dec!(50),
        };
        assert_eq!(flows.net_invested(dec!(500)), dec!(2150));
    }
}
