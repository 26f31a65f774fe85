//! Partitioning of investment accounts into cash / brokerage / standalone
//! buckets. Pure functions, no I/O.

use std::collections::HashMap;

use log::warn;

use super::accounts_model::{Account, AccountSubtype};

/// Investment accounts partitioned by sub-type.
#[derive(Debug, Clone, Default)]
pub struct AccountBuckets {
    /// Cash-only accounts, each paired with a brokerage account.
    pub cash_accounts: Vec<Account>,
    /// Brokerage accounts, each paired with a cash account.
    pub brokerage_accounts: Vec<Account>,
    /// Standalone accounts carrying both cash and holdings.
    pub standalone_accounts: Vec<Account>,
}

impl AccountBuckets {
    /// Ids of accounts that can carry security holdings
    /// (brokerage and standalone).
    pub fn holdings_capable_ids(&self) -> Vec<String> {
        self.brokerage_accounts
            .iter()
            .chain(self.standalone_accounts.iter())
            .map(|a| a.id.clone())
            .collect()
    }

    /// Ids of accounts that carry a cash balance directly
    /// (cash-only and standalone).
    pub fn cash_carrying_ids(&self) -> Vec<String> {
        self.cash_accounts
            .iter()
            .chain(self.standalone_accounts.iter())
            .map(|a| a.id.clone())
            .collect()
    }

    /// Resolves the cash account paired with a brokerage account.
    ///
    /// Returns `None` when the link is missing or dangling; the caller
    /// treats such a brokerage account as having no cash leg.
    pub fn linked_cash_account(&self, brokerage: &Account) -> Option<&Account> {
        let cash_by_id: HashMap<&str, &Account> = self
            .cash_accounts
            .iter()
            .map(|a| (a.id.as_str(), a))
            .collect();

        match brokerage.linked_account_id.as_deref() {
            Some(linked_id) => {
                let cash = cash_by_id.get(linked_id).copied();
                if cash.is_none() {
                    warn!(
                        "Brokerage account {} links to unknown cash account {}",
                        brokerage.id, linked_id
                    );
                }
                cash
            }
            None => {
                warn!("Brokerage account {} has no linked cash account", brokerage.id);
                None
            }
        }
    }
}

/// Classifies investment accounts into buckets by sub-type.
pub fn categorize_accounts(accounts: &[Account]) -> AccountBuckets {
    let mut buckets = AccountBuckets::default();

    for account in accounts {
        match account.sub_type {
            Some(AccountSubtype::Cash) => buckets.cash_accounts.push(account.clone()),
            Some(AccountSubtype::Brokerage) => buckets.brokerage_accounts.push(account.clone()),
            None => buckets.standalone_accounts.push(account.clone()),
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn make_account(id: &str, sub_type: Option<AccountSubtype>, linked: Option<&str>) -> Account {
        Account {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            name: format!("Account {}", id),
            account_type: "INVESTMENT".to_string(),
            sub_type,
            linked_account_id: linked.map(String::from),
            currency: "USD".to_string(),
            opening_balance: Decimal::ZERO,
            current_balance: Decimal::ZERO,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_partitions_by_sub_type() {
        let accounts = vec![
            make_account("cash-1", Some(AccountSubtype::Cash), Some("brok-1")),
            make_account("brok-1", Some(AccountSubtype::Brokerage), Some("cash-1")),
            make_account("solo-1", None, None),
        ];

        let buckets = categorize_accounts(&accounts);

        assert_eq!(buckets.cash_accounts.len(), 1);
        assert_eq!(buckets.brokerage_accounts.len(), 1);
        assert_eq!(buckets.standalone_accounts.len(), 1);
        assert_eq!(
            buckets.holdings_capable_ids(),
            vec!["brok-1".to_string(), "solo-1".to_string()]
        );
        assert_eq!(
            buckets.cash_carrying_ids(),
            vec!["cash-1".to_string(), "solo-1".to_string()]
        );
    }

    #[test]
    fn test_linked_cash_account_resolution() {
        let accounts = vec![
            make_account("cash-1", Some(AccountSubtype::Cash), Some("brok-1")),
            make_account("brok-1", Some(AccountSubtype::Brokerage), Some("cash-1")),
        ];
        let buckets = categorize_accounts(&accounts);

        let brokerage = &buckets.brokerage_accounts[0];
        let cash = buckets.linked_cash_account(brokerage).unwrap();
        assert_eq!(cash.id, "cash-1");
    }

    #[test]
    fn test_dangling_link_resolves_to_none() {
        let accounts = vec![make_account(
            "brok-1",
            Some(AccountSubtype::Brokerage),
            Some("missing"),
        )];
        let buckets = categorize_accounts(&accounts);

        assert!(buckets
            .linked_cash_account(&buckets.brokerage_accounts[0])
            .is_none());
    }

    #[test]
    fn test_empty_input() {
        let buckets = categorize_accounts(&[]);
        assert!(buckets.holdings_capable_ids().is_empty());
        assert!(buckets.cash_carrying_ids().is_empty());
    }
}
