//! Time-weighted return engine.
//!
//! Forward-simulates the holdings book transaction-by-transaction and chains
//! sub-period returns into a single cumulative time-weighted return, which
//! measures investment skill independent of cash-flow timing.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::activities::{InvestmentTransaction, QuantityEffect};
use crate::constants::{DAYS_PER_YEAR, RATIO_DECIMAL_PLACES};
use crate::errors::Result;
use crate::fx::{CurrencyConverter, RateCache};
use crate::market_data::{MarketDataRepositoryTrait, PriceHistoryIndex};

use super::performance_model::PortfolioPerformance;

/// Simulated holdings book: security id -> signed quantity.
/// BTreeMap keeps the valuation walk deterministic.
type Positions = BTreeMap<String, Decimal>;

pub struct PerformanceService {
    market_data_repository: Arc<dyn MarketDataRepositoryTrait>,
    converter: Arc<CurrencyConverter>,
}

impl PerformanceService {
    pub fn new(
        market_data_repository: Arc<dyn MarketDataRepositoryTrait>,
        converter: Arc<CurrencyConverter>,
    ) -> Self {
        Self {
            market_data_repository,
            converter,
        }
    }

    /// Computes the cumulative and annualized time-weighted return from the
    /// full transaction ledger of the holdings-capable accounts.
    ///
    /// Sub-period boundaries are transaction dates: for each date the
    /// portfolio is valued before and after that day's trades using prices
    /// looked up as of that date, and one final sub-period runs from the
    /// last transaction date to the present using live latest prices. The
    /// two price paths are never mixed. Same-day trades share one boundary.
    pub async fn portfolio_performance(
        &self,
        transactions: &[InvestmentTransaction],
        base_currency: &str,
        cache: &mut RateCache,
        as_of: NaiveDate,
    ) -> Result<PortfolioPerformance> {
        if transactions.is_empty() {
            return Ok(PortfolioPerformance::empty());
        }
        debug!(
            "Simulating TWR over {} transactions in {}",
            transactions.len(),
            base_currency
        );

        // The repository contract orders by (date, created_at); re-sorting
        // here keeps the walk deterministic even for ad-hoc callers.
        let mut transactions: Vec<&InvestmentTransaction> = transactions.iter().collect();
        transactions.sort_by(|a, b| {
            (a.transaction_date, a.created_at).cmp(&(b.transaction_date, b.created_at))
        });

        let security_ids: Vec<String> = transactions
            .iter()
            .filter_map(|t| t.security_id.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        // Full ascending history, fetched once and indexed for binary-search
        // lookups instead of per-date store queries.
        let price_index = PriceHistoryIndex::new(
            self.market_data_repository
                .get_price_history(&security_ids)
                .await?,
        );
        let currencies: HashMap<String, String> = self
            .market_data_repository
            .find_securities(&security_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s.currency))
            .collect();

        let mut positions = Positions::new();
        let mut factors: Vec<Decimal> = Vec::new();
        let mut value_after_previous = Decimal::ZERO;
        let mut is_first_date = true;

        let mut remaining = transactions.as_slice();
        while let Some(first) = remaining.first() {
            let date = first.transaction_date;
            let day_end = remaining.partition_point(|t| t.transaction_date == date);
            let (day_transactions, rest) = remaining.split_at(day_end);
            remaining = rest;

            // Sub-period close: value the book at this date's prices before
            // applying the day's trades.
            if !is_first_date && value_after_previous > Decimal::ZERO {
                let pre_trade_value = self
                    .value_positions(&positions, &price_index, date, &currencies, base_currency, cache)
                    .await?;
                factors.push(pre_trade_value / value_after_previous);
            }

            for transaction in day_transactions {
                apply_transaction(&mut positions, transaction);
            }

            value_after_previous = self
                .value_positions(&positions, &price_index, date, &currencies, base_currency, cache)
                .await?;
            is_first_date = false;
        }

        // Final sub-period: last transaction date to the present day, valued
        // with the live latest prices rather than the historical series.
        if value_after_previous > Decimal::ZERO {
            let latest_prices = self
                .market_data_repository
                .get_latest_prices(&security_ids)
                .await?;
            let present_value = self
                .value_positions_with_prices(
                    &positions,
                    &latest_prices,
                    &currencies,
                    base_currency,
                    cache,
                )
                .await?;
            factors.push(present_value / value_after_previous);
        }

        if factors.is_empty() {
            return Ok(PortfolioPerformance::empty());
        }

        let cumulative_factor: Decimal = factors.iter().product();
        let cumulative_twr =
            ((cumulative_factor - Decimal::ONE) * dec!(100)).round_dp(RATIO_DECIMAL_PLACES);

        let first_date = transactions[0].transaction_date;
        let annualized_twr = annualize(cumulative_factor, first_date, as_of);

        Ok(PortfolioPerformance {
            cumulative_twr: Some(cumulative_twr),
            annualized_twr,
        })
    }

    /// Values the simulated book at `date`, using the historical price
    /// series ("latest price on or before date"). Positions without a price
    /// that early contribute nothing.
    async fn value_positions(
        &self,
        positions: &Positions,
        price_index: &PriceHistoryIndex,
        date: NaiveDate,
        currencies: &HashMap<String, String>,
        base_currency: &str,
        cache: &mut RateCache,
    ) -> Result<Decimal> {
        let mut total = Decimal::ZERO;
        for (security_id, quantity) in positions {
            if quantity.is_zero() {
                continue;
            }
            let Some(price) = price_index.price_on_or_before(security_id, date) else {
                continue;
            };
            total += self
                .convert_position(security_id, *quantity * price, currencies, base_currency, cache)
                .await?;
        }
        Ok(total)
    }

    /// Values the simulated book with an explicit price map (the live
    /// "latest price" fetch path used for the final sub-period).
    async fn value_positions_with_prices(
        &self,
        positions: &Positions,
        prices: &HashMap<String, Decimal>,
        currencies: &HashMap<String, String>,
        base_currency: &str,
        cache: &mut RateCache,
    ) -> Result<Decimal> {
        let mut total = Decimal::ZERO;
        for (security_id, quantity) in positions {
            if quantity.is_zero() {
                continue;
            }
            let Some(price) = prices.get(security_id).copied() else {
                continue;
            };
            total += self
                .convert_position(security_id, *quantity * price, currencies, base_currency, cache)
                .await?;
        }
        Ok(total)
    }

    async fn convert_position(
        &self,
        security_id: &str,
        amount: Decimal,
        currencies: &HashMap<String, String>,
        base_currency: &str,
        cache: &mut RateCache,
    ) -> Result<Decimal> {
        let currency = match currencies.get(security_id) {
            Some(currency) => currency.as_str(),
            None => {
                warn!(
                    "No security record for {}; assuming base currency {}",
                    security_id, base_currency
                );
                base_currency
            }
        };
        self.converter
            .convert(amount, currency, base_currency, cache)
            .await
    }
}

/// Applies one ledger row to the simulated book. Cash-only actions and
/// splits (already reflected in adjusted ledger rows) leave quantities
/// unchanged.
fn apply_transaction(positions: &mut Positions, transaction: &InvestmentTransaction) {
    let Some(security_id) = &transaction.security_id else {
        return;
    };
    match transaction.action.quantity_effect() {
        QuantityEffect::Increase => {
            *positions.entry(security_id.clone()).or_default() += transaction.quantity;
        }
        QuantityEffect::Decrease => {
            *positions.entry(security_id.clone()).or_default() -= transaction.quantity;
        }
        QuantityEffect::Unchanged => {}
    }
}

/// Annualizes a cumulative growth factor over the span from the first
/// transaction date to `as_of`, in Julian years. `None` under one day.
fn annualize(cumulative_factor: Decimal, first_date: NaiveDate, as_of: NaiveDate) -> Option<Decimal> {
    let elapsed_days = (as_of - first_date).num_days();
    if elapsed_days < 1 || cumulative_factor <= Decimal::ZERO {
        return None;
    }
    let years = Decimal::from(elapsed_days) / DAYS_PER_YEAR;
    let annualized = (cumulative_factor.powd(Decimal::ONE / years) - Decimal::ONE) * dec!(100);
    Some(annualized.round_dp(RATIO_DECIMAL_PLACES))
}
