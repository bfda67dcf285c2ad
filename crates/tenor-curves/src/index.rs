//! Interest rate indices used by floating legs.

use serde::{Deserialize, Serialize};

use tenor_core::calendars::{BusinessDayConvention, Calendar, CalendarKind};
use tenor_core::daycounts::{DayCount, DayCountConvention};
use tenor_core::types::{Date, Period, TimeUnit};

use crate::error::CurveResult;
use crate::traits::YieldTermStructure;

/// An IBOR-style index: a deposit of fixed tenor starting `fixing_days`
/// business days after fixing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IborIndex {
    /// Index name (e.g., "USD Libor").
    pub name: String,
    /// Deposit tenor.
    pub tenor: Period,
    /// Business days between fixing and value date.
    pub fixing_days: u32,
    /// ISO currency code.
    pub currency: String,
    /// Fixing and rolling calendar.
    pub calendar: CalendarKind,
    /// Convention applied to the deposit maturity.
    pub convention: BusinessDayConvention,
    /// Whether month-end starts roll to month-end maturities.
    pub end_of_month: bool,
    /// Accrual day count.
    pub day_count: DayCountConvention,
}

impl IborIndex {
    /// USD Libor on the TARGET calendar, Act/360, two fixing days.
    #[must_use]
    pub fn usd_libor(tenor: Period) -> Self {
        Self {
            name: "USD Libor".to_string(),
            tenor,
            fixing_days: 2,
            currency: "USD".to_string(),
            calendar: CalendarKind::Target,
            convention: BusinessDayConvention::ModifiedFollowing,
            end_of_month: false,
            day_count: DayCountConvention::Act360,
        }
    }

    /// Value date of a fixing made on `fixing_date`.
    pub fn value_date(&self, fixing_date: Date) -> CurveResult<Date> {
        Ok(self.calendar.advance(
            fixing_date,
            self.fixing_days as i32,
            TimeUnit::Days,
            BusinessDayConvention::Following,
            false,
        )?)
    }

    /// Maturity of the deposit starting on `value_date`.
    pub fn maturity_date(&self, value_date: Date) -> CurveResult<Date> {
        Ok(self
            .calendar
            .advance_period(value_date, self.tenor, self.convention, self.end_of_month)?)
    }

    /// Forward fixing for the deposit starting on `value_date`, read off `curve`.
    pub fn forecast_fixing(
        &self,
        curve: &dyn YieldTermStructure,
        value_date: Date,
    ) -> CurveResult<f64> {
        let end = self.maturity_date(value_date)?;
        self.forecast_between(curve, value_date, end)
    }

    /// Forward rate over `[start, end]` in the index's day count.
    pub(crate) fn forecast_between(
        &self,
        curve: &dyn YieldTermStructure,
        start: Date,
        end: Date,
    ) -> CurveResult<f64> {
        let tau = self.day_count.year_fraction(start, end);
        let df_start = curve.discount(start)?;
        let df_end = curve.discount(end)?;
        Ok((df_start / df_end - 1.0) / tau)
    }
}

impl std::fmt::Display for IborIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.name, self.tenor, self.day_count)
    }
}
