//! Compound annual growth rate.

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::constants::{DAYS_PER_YEAR, RATIO_DECIMAL_PLACES};

/// `(portfolio_value / net_invested)^(1/years) - 1`, in percent.
///
/// `years` is the elapsed time since the earliest investment transaction in
/// Julian years (365.25-day year). Returns `None` - never zero or infinity -
/// when net invested or portfolio value is not positive, when there is no
/// transaction history, or when less than one day has elapsed.
pub fn compound_annual_growth_rate(
    portfolio_value: Decimal,
    net_invested: Decimal,
    earliest_transaction_date: Option<NaiveDate>,
    as_of: NaiveDate,
) -> Option<Decimal> {
    if net_invested <= Decimal::ZERO || portfolio_value <= Decimal::ZERO {
        return None;
    }
    let earliest = earliest_transaction_date?;

    let elapsed_days = (as_of - earliest).num_days();
    if elapsed_days < 1 {
        return None;
    }
    let years = Decimal::from(elapsed_days) / DAYS_PER_YEAR;

    let growth = portfolio_value / net_invested;
    let cagr = (growth.powd(Decimal::ONE / years) - Decimal::ONE) * dec!(100);
    Some(cagr.round_dp(RATIO_DECIMAL_PLACES))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_doubling_over_one_year() {
        // 365.25 days elapsed: exactly one Julian year, so CAGR == 100%.
        let earliest = date(2023, 1, 1);
        let as_of = earliest + chrono::Duration::days(365);
        let cagr =
            compound_annual_growth_rate(dec!(2000), dec!(1000), Some(earliest), as_of).unwrap();
        // Slightly more than 100% since 365 days is just under a Julian year.
        assert!(cagr > dec!(100));
        assert!(cagr < dec!(101));
    }

    #[test]
    fn test_none_without_history() {
        assert_eq!(
            compound_annual_growth_rate(dec!(2000), dec!(1000), None, date(2024, 1, 1)),
            None
        );
    }

    #[test]
    fn test_none_on_non_positive_inputs() {
        let earliest = Some(date(2023, 1, 1));
        let as_of = date(2024, 1, 1);
        assert_eq!(
            compound_annual_growth_rate(Decimal::ZERO, dec!(1000), earliest, as_of),
            None
        );
        assert_eq!(
            compound_annual_growth_rate(dec!(1000), Decimal::ZERO, earliest, as_of),
            None
        );
        assert_eq!(
            compound_annual_growth_rate(dec!(1000), dec!(-50), earliest, as_of),
            None
        );
    }

    #[test]
    fn test_none_under_one_day() {
        let earliest = date(2024, 3, 1);
        assert_eq!(
            compound_annual_growth_rate(dec!(1100), dec!(1000), Some(earliest), earliest),
            None
        );
    }
}
