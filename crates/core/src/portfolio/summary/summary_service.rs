use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::accounts::{categorize_accounts, Account, AccountRepositoryTrait, AccountSubtype};
use crate::activities::{AccountInvestmentFlows, TransactionRepositoryTrait};
use crate::constants::{MONEY_DECIMAL_PLACES, RATIO_DECIMAL_PLACES};
use crate::errors::Result;
use crate::fx::{CurrencyConverter, RateCache};
use crate::portfolio::allocation::build_allocation;
use crate::portfolio::holdings::{
    HoldingsRepositoryTrait, HoldingsValuationService, ValuedHolding,
};
use crate::portfolio::performance::{compound_annual_growth_rate, PerformanceService};
use crate::settings::SettingsRepositoryTrait;

use super::summary_model::{AccountHoldingsGroup, PortfolioSummary};

/// Trait for the portfolio summary composer.
#[async_trait]
pub trait PortfolioSummaryServiceTrait: Send + Sync {
    /// Computes the user's portfolio summary as of today.
    async fn get_portfolio_summary(&self, user_id: &str) -> Result<PortfolioSummary>;

    /// Computes the user's portfolio summary as of a given date. The final
    /// TWR sub-period still uses live latest prices regardless of `as_of`.
    async fn get_portfolio_summary_as_of(
        &self,
        user_id: &str,
        as_of: NaiveDate,
    ) -> Result<PortfolioSummary>;
}

/// Orchestrates categorization, cash and flow aggregation, holdings
/// valuation, grouping, allocation, TWR and CAGR into one summary.
///
/// Each request is a pure function of its input snapshot plus one fresh
/// rate cache; nothing is shared across requests.
pub struct PortfolioSummaryService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
    holdings_repository: Arc<dyn HoldingsRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    valuation_service: Arc<HoldingsValuationService>,
    performance_service: Arc<PerformanceService>,
    converter: Arc<CurrencyConverter>,
}

impl PortfolioSummaryService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        settings_repository: Arc<dyn SettingsRepositoryTrait>,
        holdings_repository: Arc<dyn HoldingsRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        valuation_service: Arc<HoldingsValuationService>,
        performance_service: Arc<PerformanceService>,
        converter: Arc<CurrencyConverter>,
    ) -> Self {
        Self {
            account_repository,
            settings_repository,
            holdings_repository,
            transaction_repository,
            valuation_service,
            performance_service,
            converter,
        }
    }

    async fn compose(&self, user_id: &str, as_of: NaiveDate) -> Result<PortfolioSummary> {
        debug!("Composing portfolio summary for user {} as of {}", user_id, as_of);

        let (accounts, base_currency) = futures::try_join!(
            self.account_repository.find_investment_accounts(user_id),
            self.settings_repository.get_user_default_currency(user_id),
        )?;

        let buckets = categorize_accounts(&accounts);
        let capable_ids = buckets.holdings_capable_ids();
        let cash_ids = buckets.cash_carrying_ids();

        // Independent reads; none depends on another's result.
        let (cash_balances, flows, holdings, transactions) = futures::try_join!(
            self.transaction_repository
                .get_cash_balances(user_id, &cash_ids, as_of),
            self.transaction_repository
                .get_investment_flows(user_id, &capable_ids, as_of),
            self.holdings_repository.find_holdings(&capable_ids),
            self.transaction_repository
                .find_investment_transactions(user_id, &capable_ids),
        )?;

        // One rate cache for the whole computation: every figure in this
        // summary uses the same rate per currency pair.
        let mut cache = RateCache::new();

        let valuation = self
            .valuation_service
            .value_holdings(&holdings, &base_currency, &mut cache)
            .await?;

        let balance_by_account: HashMap<&str, Decimal> = cash_balances
            .iter()
            .map(|b| (b.account_id.as_str(), b.balance))
            .collect();
        let flows_by_account: HashMap<&str, &AccountInvestmentFlows> = flows
            .iter()
            .map(|f| (f.account_id.as_str(), f))
            .collect();

        // Aggregate cash across cash-carrying accounts, converted per account.
        let mut total_cash_value = Decimal::ZERO;
        for account in buckets
            .cash_accounts
            .iter()
            .chain(buckets.standalone_accounts.iter())
        {
            total_cash_value += self
                .effective_cash_base(account, &balance_by_account, &base_currency, &mut cache)
                .await?;
        }
        let total_cash_value = total_cash_value.round_dp(MONEY_DECIMAL_PLACES);

        // Group valued holdings by account and derive per-account figures.
        let mut holdings_by_account: HashMap<String, Vec<ValuedHolding>> = HashMap::new();
        for holding in &valuation.holdings {
            holdings_by_account
                .entry(holding.account_id.clone())
                .or_default()
                .push(holding.clone());
        }

        let mut groups = Vec::new();
        for account in buckets
            .brokerage_accounts
            .iter()
            .chain(buckets.standalone_accounts.iter())
        {
            let cash_base = match account.sub_type {
                Some(AccountSubtype::Brokerage) => match buckets.linked_cash_account(account) {
                    Some(cash_account) => {
                        self.effective_cash_base(
                            cash_account,
                            &balance_by_account,
                            &base_currency,
                            &mut cache,
                        )
                        .await?
                    }
                    None => Decimal::ZERO,
                },
                _ => {
                    self.effective_cash_base(
                        account,
                        &balance_by_account,
                        &base_currency,
                        &mut cache,
                    )
                    .await?
                }
            };

            let account_flows = flows_by_account
                .get(account.id.as_str())
                .map(|f| (*f).clone())
                .unwrap_or_else(|| AccountInvestmentFlows::zero(&account.id));
            let trading_net_base = self
                .converter
                .convert(
                    account_flows.buys - account_flows.sells - account_flows.income,
                    &account.currency,
                    &base_currency,
                    &mut cache,
                )
                .await?;
            let net_invested = (cash_base + trading_net_base).round_dp(MONEY_DECIMAL_PLACES);

            let account_holdings = holdings_by_account
                .remove(&account.id)
                .unwrap_or_default();
            let total_market_value: Decimal = account_holdings
                .iter()
                .filter_map(|h| h.market_value.as_ref().map(|mv| mv.base))
                .sum();
            let total_cost_basis: Decimal =
                account_holdings.iter().map(|h| h.cost_basis.base).sum();
            let cash_base = cash_base.round_dp(MONEY_DECIMAL_PLACES);
            let total_market_value = total_market_value.round_dp(MONEY_DECIMAL_PLACES);
            let total_cost_basis = total_cost_basis.round_dp(MONEY_DECIMAL_PLACES);

            groups.push(AccountHoldingsGroup {
                account_id: account.id.clone(),
                account_name: account.name.clone(),
                account_currency: account.currency.clone(),
                cash_balance: cash_base,
                net_invested,
                total_cost_basis,
                total_market_value,
                total_gain_loss: total_market_value - total_cost_basis,
                total_value: cash_base + total_market_value,
                holdings: account_holdings,
            });
        }

        let total_net_invested: Decimal = groups.iter().map(|g| g.net_invested).sum();
        let total_net_invested = total_net_invested.round_dp(MONEY_DECIMAL_PLACES);
        let total_portfolio_value =
            (total_cash_value + valuation.total_holdings_value).round_dp(MONEY_DECIMAL_PLACES);
        let total_gain_loss = valuation.total_holdings_value - valuation.total_cost_basis;
        let total_gain_loss_percent = if valuation.total_cost_basis > Decimal::ZERO {
            Some(
                (total_gain_loss / valuation.total_cost_basis * dec!(100))
                    .round_dp(RATIO_DECIMAL_PLACES),
            )
        } else {
            None
        };

        let performance = self
            .performance_service
            .portfolio_performance(&transactions, &base_currency, &mut cache, as_of)
            .await?;

        let earliest_transaction_date = transactions.iter().map(|t| t.transaction_date).min();
        let cagr = if capable_ids.is_empty() {
            None
        } else {
            compound_annual_growth_rate(
                total_portfolio_value,
                total_net_invested,
                earliest_transaction_date,
                as_of,
            )
        };

        let allocation = build_allocation(&valuation.holdings, total_cash_value);

        Ok(PortfolioSummary {
            base_currency,
            as_of,
            total_cash_value,
            total_holdings_value: valuation.total_holdings_value,
            total_cost_basis: valuation.total_cost_basis,
            total_net_invested,
            total_portfolio_value,
            total_gain_loss,
            total_gain_loss_percent,
            time_weighted_return: performance.cumulative_twr,
            annualized_twr: performance.annualized_twr,
            cagr,
            holdings: valuation.holdings,
            accounts: groups,
            allocation,
        })
    }

    /// Effective cash balance of one account, converted to the reporting
    /// currency. Accounts without a ledger aggregate fall back to their
    /// stored opening balance.
    async fn effective_cash_base(
        &self,
        account: &Account,
        balance_by_account: &HashMap<&str, Decimal>,
        base_currency: &str,
        cache: &mut RateCache,
    ) -> Result<Decimal> {
        let balance = balance_by_account
            .get(account.id.as_str())
            .copied()
            .unwrap_or(account.opening_balance);
        self.converter
            .convert(balance, &account.currency, base_currency, cache)
            .await
    }
}

#[async_trait]
impl PortfolioSummaryServiceTrait for PortfolioSummaryService {
    async fn get_portfolio_summary(&self, user_id: &str) -> Result<PortfolioSummary> {
        self.compose(user_id, Utc::now().date_naive()).await
    }

    async fn get_portfolio_summary_as_of(
        &self,
        user_id: &str,
        as_of: NaiveDate,
    ) -> Result<PortfolioSummary> {
        self.compose(user_id, as_of).await
    }
}
