//! Performance - time-weighted return engine and CAGR.

mod cagr;
mod performance_model;
mod twr_service;


pub use cagr::compound_annual_growth_rate;
pub use performance_model::PortfolioPerformance;
pub use twr_service::PerformanceService;
