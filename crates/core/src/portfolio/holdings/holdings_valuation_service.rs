use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{MONEY_DECIMAL_PLACES, PERCENT_DECIMAL_PLACES, RATIO_DECIMAL_PLACES};
use crate::errors::Result;
use crate::fx::{CurrencyConverter, RateCache};
use crate::market_data::MarketDataRepositoryTrait;

use super::holdings_model::{Holding, HoldingsValuation, MonetaryValue, ValuedHolding};

/// Joins holdings to their latest security prices and computes per-holding
/// and portfolio-level valuation figures.
///
/// Totals are converted to the reporting currency holding-by-holding, not
/// after summing, so mixed-currency portfolios do not compound rate error.
pub struct HoldingsValuationService {
    market_data_repository: Arc<dyn MarketDataRepositoryTrait>,
    converter: Arc<CurrencyConverter>,
}

impl HoldingsValuationService {
    pub fn new(
        market_data_repository: Arc<dyn MarketDataRepositoryTrait>,
        converter: Arc<CurrencyConverter>,
    ) -> Self {
        Self {
            market_data_repository,
            converter,
        }
    }

    /// Values `holdings` against the latest known prices.
    pub async fn value_holdings(
        &self,
        holdings: &[Holding],
        base_currency: &str,
        cache: &mut RateCache,
    ) -> Result<HoldingsValuation> {
        if holdings.is_empty() {
            return Ok(HoldingsValuation::empty());
        }
        debug!("Valuing {} holdings in {}", holdings.len(), base_currency);

        let security_ids: Vec<String> = holdings
            .iter()
            .map(|h| h.security.id.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let latest_prices = self
            .market_data_repository
            .get_latest_prices(&security_ids)
            .await?;

        let mut valued = Vec::with_capacity(holdings.len());
        let mut total_cost_basis = Decimal::ZERO;
        let mut total_holdings_value = Decimal::ZERO;

        for holding in holdings {
            // Zero-quantity positions contribute nothing and must never be
            // divided by.
            if holding.quantity.is_zero() {
                continue;
            }

            let currency = holding.security.currency.as_str();

            let cost_basis_local = holding.quantity * holding.average_cost;
            let cost_basis_base = self
                .converter
                .convert(cost_basis_local, currency, base_currency, cache)
                .await?;
            let cost_basis = MonetaryValue {
                local: cost_basis_local,
                base: cost_basis_base,
            };
            total_cost_basis += cost_basis_base;

            let price = latest_prices.get(&holding.security.id).copied();
            let market_value = match price {
                Some(price) => {
                    let local = holding.quantity * price;
                    let base = self
                        .converter
                        .convert(local, currency, base_currency, cache)
                        .await?;
                    total_holdings_value += base;
                    Some(MonetaryValue { local, base })
                }
                None => {
                    warn!(
                        "No price for security {} ({}); market value unavailable",
                        holding.security.symbol, holding.security.id
                    );
                    None
                }
            };

            let gain_loss = match &market_value {
                Some(mv) if cost_basis_local > Decimal::ZERO => Some(MonetaryValue {
                    local: mv.local - cost_basis.local,
                    base: mv.base - cost_basis.base,
                }),
                _ => None,
            };
            let gain_loss_percent = gain_loss.as_ref().map(|gl| {
                (gl.local / cost_basis.local * dec!(100)).round_dp(RATIO_DECIMAL_PLACES)
            });

            valued.push(ValuedHolding {
                id: holding.id.clone(),
                account_id: holding.account_id.clone(),
                security: holding.security.clone(),
                quantity: holding.quantity,
                average_cost: holding.average_cost,
                price,
                cost_basis,
                market_value,
                gain_loss,
                gain_loss_percent,
                weight: Decimal::ZERO,
            });
        }

        // Weights need the final total, so they are a second pass.
        if total_holdings_value > Decimal::ZERO {
            for holding in valued.iter_mut() {
                if let Some(mv) = &holding.market_value {
                    holding.weight = (mv.base / total_holdings_value * dec!(100))
                        .round_dp(PERCENT_DECIMAL_PLACES);
                }
            }
        }

        Ok(HoldingsValuation {
            holdings: valued,
            total_cost_basis: total_cost_basis.round_dp(MONEY_DECIMAL_PLACES),
            total_holdings_value: total_holdings_value.round_dp(MONEY_DECIMAL_PLACES),
        })
    }
}
