//! Market data module - securities, daily prices, and the per-computation
//! price-history index used by the TWR engine.

mod market_data_model;
mod market_data_traits;
mod price_index;

pub use market_data_model::{PricePoint, Security, SecurityType};
pub use market_data_traits::MarketDataRepositoryTrait;
pub use price_index::PriceHistoryIndex;
