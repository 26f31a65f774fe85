//! Investment activities module - transaction ledger models and the
//! repository contract for effective cash balances and flow aggregates.

mod activities_model;
mod activities_traits;

pub use activities_model::{
    AccountCashBalance, AccountInvestmentFlows, InvestmentTransaction, QuantityEffect,
    TransactionAction,
};
pub use activities_traits::TransactionRepositoryTrait;
