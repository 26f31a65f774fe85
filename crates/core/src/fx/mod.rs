//! FX (Foreign Exchange) module - rate provider contract and converter.

pub mod currency_converter;
mod fx_errors;
mod fx_model;
mod fx_traits;

pub use currency_converter::CurrencyConverter;
pub use fx_errors::FxError;
pub use fx_model::RateCache;
pub use fx_traits::ExchangeRateProviderTrait;
