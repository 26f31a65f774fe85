//! Portfolio module - valuation, allocation, performance, and the summary
//! composer.

pub mod allocation;
pub mod holdings;
pub mod performance;
pub mod summary;

pub use allocation::{build_allocation, AllocationEntry};
pub use holdings::{
    Holding, HoldingsRepositoryTrait, HoldingsValuation, HoldingsValuationService, MonetaryValue,
    ValuedHolding,
};
pub use performance::{compound_annual_growth_rate, PerformanceService, PortfolioPerformance};
pub use summary::{
    AccountHoldingsGroup, PortfolioSummary, PortfolioSummaryService, PortfolioSummaryServiceTrait,
};
