//! Holdings valuation - joins current holdings to latest prices.

mod holdings_model;
mod holdings_traits;
mod holdings_valuation_service;


pub use holdings_model::{Holding, HoldingsValuation, MonetaryValue, ValuedHolding};
pub use holdings_traits::HoldingsRepositoryTrait;
pub use holdings_valuation_service::HoldingsValuationService;
