//! Deposit rate helper.

use serde::{Deserialize, Serialize};

use tenor_core::calendars::{BusinessDayConvention, Calendar, CalendarKind};
use tenor_core::daycounts::{DayCount, DayCountConvention};
use tenor_core::quote::SimpleQuote;
use tenor_core::types::{Date, Period, TimeUnit};

use super::{format_rate, HelperKind, RateHelper};
use crate::error::{CurveError, CurveResult};
use crate::traits::YieldTermStructure;

/// Market conventions for money market deposits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepositConventions {
    /// Business days from trade to start.
    pub settlement_days: u32,
    /// Settlement and rolling calendar.
    pub calendar: CalendarKind,
    /// Maturity adjustment.
    pub convention: BusinessDayConvention,
    /// Month-end starts mature on month-end.
    pub end_of_month: bool,
    /// Accrual day count.
    pub day_count: DayCountConvention,
}

impl Default for DepositConventions {
    fn default() -> Self {
        Self {
            settlement_days: 2,
            calendar: CalendarKind::Target,
            convention: BusinessDayConvention::ModifiedFollowing,
            end_of_month: true,
            day_count: DayCountConvention::Act360,
        }
    }
}

/// A deposit quoted at its simple rate.
///
/// Pays `1 + r τ` at maturity for 1 invested at start, so the implied rate
/// is `(df(start) / df(maturity) - 1) / τ`.
///
/// # Example
///
/// ```rust
/// use tenor_core::prelude::*;
/// use tenor_curves::helpers::{DepositConventions, DepositRateHelper, RateHelper};
///
/// let trade = Date::from_ymd(2025, 6, 13).unwrap();
/// let helper = DepositRateHelper::new(
///     SimpleQuote::new(0.02),
///     Period::months(1),
///     &DepositConventions::default(),
///     trade,
/// )
/// .unwrap();
/// assert_eq!(helper.earliest_date(), Date::from_ymd(2025, 6, 17).unwrap());
/// assert_eq!(helper.maturity_date(), Date::from_ymd(2025, 7, 17).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DepositRateHelper {
    quote: SimpleQuote,
    tenor: Option<Period>,
    start: Date,
    maturity: Date,
    day_count: DayCountConvention,
}

impl DepositRateHelper {
    /// Creates a deposit of `tenor` traded on `evaluation_date`.
    ///
    /// Start is `settlement_days` business days after the trade; maturity
    /// is start plus tenor, adjusted.
    pub fn new(
        quote: SimpleQuote,
        tenor: Period,
        conventions: &DepositConventions,
        evaluation_date: Date,
    ) -> CurveResult<Self> {
        if tenor.length() <= 0 {
            return Err(CurveError::invalid_helper(format!(
                "deposit tenor {tenor} must be positive"
            )));
        }
        let calendar = conventions.calendar;
        let start = calendar.advance(
            evaluation_date,
            conventions.settlement_days as i32,
            TimeUnit::Days,
            BusinessDayConvention::Following,
            false,
        )?;
        let maturity = calendar.advance_period(
            start,
            tenor,
            conventions.convention,
            conventions.end_of_month,
        )?;

        Ok(Self {
            quote,
            tenor: Some(tenor),
            start,
            maturity,
            day_count: conventions.day_count,
        })
    }

    /// Creates a deposit over explicit dates.
    pub fn from_dates(
        quote: SimpleQuote,
        start: Date,
        maturity: Date,
        day_count: DayCountConvention,
    ) -> CurveResult<Self> {
        if maturity <= start {
            return Err(CurveError::invalid_helper(format!(
                "deposit maturity {maturity} must be after start {start}"
            )));
        }
        Ok(Self {
            quote,
            tenor: None,
            start,
            maturity,
            day_count,
        })
    }

    /// The quoted tenor, if built from one.
    #[must_use]
    pub fn tenor(&self) -> Option<Period> {
        self.tenor
    }

    /// Accrual day count.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }
}

impl RateHelper for DepositRateHelper {
    fn quote(&self) -> &SimpleQuote {
        &self.quote
    }

    fn earliest_date(&self) -> Date {
        self.start
    }

    fn maturity_date(&self) -> Date {
        self.maturity
    }

    fn implied_quote(&self, curve: &dyn YieldTermStructure) -> CurveResult<f64> {
        let tau = self.day_count.year_fraction(self.start, self.maturity);
        let df_start = curve.discount(self.start)?;
        let df_end = curve.discount(self.maturity)?;
        Ok((df_start / df_end - 1.0) / tau)
    }

    fn description(&self) -> String {
        match self.tenor {
            Some(tenor) => format!("Deposit {tenor} {}", format_rate(&self.quote)),
            None => format!(
                "Deposit {}..{} {}",
                self.start,
                self.maturity,
                format_rate(&self.quote)
            ),
        }
    }

    fn kind(&self) -> HelperKind {
        HelperKind::Deposit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::test_support::FlatCurve;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_dates_from_tenor() {
        let helper = DepositRateHelper::new(
            SimpleQuote::new(0.03),
            Period::months(3),
            &DepositConventions::default(),
            d(2025, 6, 13),
        )
        .unwrap();
        assert_eq!(helper.earliest_date(), d(2025, 6, 17));
        assert_eq!(helper.maturity_date(), d(2025, 9, 17));
        assert_eq!(helper.pillar_date(), helper.maturity_date());
        assert_eq!(helper.kind(), HelperKind::Deposit);
        assert_eq!(helper.description(), "Deposit 3M 3.0000%");
    }

    #[test]
    fn test_end_of_month_maturity() {
        // Wednesday 2025-02-26 settles on the last business day of February
        let helper = DepositRateHelper::new(
            SimpleQuote::new(0.03),
            Period::months(1),
            &DepositConventions::default(),
            d(2025, 2, 26),
        )
        .unwrap();
        assert_eq!(helper.earliest_date(), d(2025, 2, 28));
        assert_eq!(helper.maturity_date(), d(2025, 3, 31));
    }

    #[test]
    fn test_implied_quote_on_flat_curve() {
        let start = d(2025, 1, 2);
        let maturity = d(2025, 4, 2);
        let helper =
            DepositRateHelper::from_dates(SimpleQuote::new(0.05), start, maturity, DayCountConvention::Act360)
                .unwrap();
        let curve = FlatCurve {
            reference: start,
            rate: 0.04,
            day_count: DayCountConvention::Act365Fixed,
        };

        let tau = 90.0 / 360.0;
        let expected = ((0.04 * 90.0 / 365.0_f64).exp() - 1.0) / tau;
        assert_relative_eq!(helper.implied_quote(&curve).unwrap(), expected, epsilon = 1e-14);
        assert_relative_eq!(
            helper.quote_error(&curve).unwrap(),
            expected - 0.05,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_quote_updates_flow_through() {
        let quote = SimpleQuote::new(0.05);
        let helper = DepositRateHelper::from_dates(
            quote.clone(),
            d(2025, 1, 2),
            d(2025, 4, 2),
            DayCountConvention::Act360,
        )
        .unwrap();
        quote.set_value(0.06);
        assert_eq!(helper.quote_value().unwrap(), 0.06);

        quote.reset();
        assert!(matches!(
            helper.quote_value(),
            Err(CurveError::InvalidHelper { .. })
        ));
    }

    #[test]
    fn test_invalid_deposits() {
        let conventions = DepositConventions::default();
        assert!(DepositRateHelper::new(SimpleQuote::new(0.01), Period::months(0), &conventions, d(2025, 1, 2)).is_err());
        assert!(DepositRateHelper::from_dates(
            SimpleQuote::new(0.01),
            d(2025, 4, 2),
            d(2025, 1, 2),
            DayCountConvention::Act360
        )
        .is_err());
    }
}
