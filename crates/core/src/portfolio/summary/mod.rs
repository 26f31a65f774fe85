//! Portfolio summary - composes valuation, grouping, allocation, and
//! performance into one result object.

mod summary_model;
mod summary_service;


pub use summary_model::{AccountHoldingsGroup, PortfolioSummary};
pub use summary_service::{PortfolioSummaryService, PortfolioSummaryServiceTrait};
