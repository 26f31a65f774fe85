//! Folio Core - Portfolio valuation and performance engine.
//!
//! This crate contains the valuation core of the Folio personal-finance
//! application: it turns raw holdings, the investment-transaction ledger and
//! daily security prices into a consistent multi-currency portfolio summary,
//! including a time-weighted return and CAGR.
//!
//! The crate is database-agnostic and side-effect free: every collaborator
//! (accounts, holdings, prices, transactions, exchange rates) is a trait
//! implemented by the storage/provider layer of the host application.

pub mod accounts;
pub mod activities;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod market_data;
pub mod portfolio;
pub mod settings;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
