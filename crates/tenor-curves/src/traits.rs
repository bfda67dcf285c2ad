//! Core trait for yield term structures.
//!
//! [`YieldTermStructure`] is what rate helpers price against. It is
//! implemented by the solved [`PiecewiseYieldCurve`](crate::PiecewiseYieldCurve)
//! and by the partial views the bootstrapper builds while solving each node.

use tenor_core::daycounts::{DayCount, DayCountConvention};
use tenor_core::types::{Compounding, Date};
use tenor_core::CoreError;

use crate::error::CurveResult;

/// Time step used for rates at a single point in time.
pub(crate) const INSTANTANEOUS_DT: f64 = 1e-4;

/// The core trait for discount curves anchored on a reference date.
///
/// Implementors supply [`discount_t`](YieldTermStructure::discount_t) on the
/// curve's own time axis; date-based queries, zero rates and forward rates
/// are derived from it.
///
/// # Example
///
/// ```rust,ignore
/// use tenor_curves::prelude::*;
///
/// fn present_value(curve: &dyn YieldTermStructure, pay: Date, amount: f64) -> CurveResult<f64> {
///     Ok(amount * curve.discount(pay)?)
/// }
/// ```
pub trait YieldTermStructure: Send + Sync {
    /// Date at which discount factors equal one.
    fn reference_date(&self) -> Date;

    /// Day count used to turn dates into curve times.
    fn day_count(&self) -> DayCountConvention;

    /// Last date covered by market data.
    fn max_date(&self) -> Date;

    /// Whether queries past [`max_date`](YieldTermStructure::max_date) are answered.
    fn allows_extrapolation(&self) -> bool;

    /// Discount factor at time `t` (years from the reference date).
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Extrapolation` outside the curve range when
    /// extrapolation is disabled.
    fn discount_t(&self, t: f64) -> CurveResult<f64>;

    /// Curve time of `date`.
    fn time_from_reference(&self, date: Date) -> f64 {
        self.day_count().year_fraction(self.reference_date(), date)
    }

    /// Curve time of the last node.
    fn max_time(&self) -> f64 {
        self.time_from_reference(self.max_date())
    }

    /// Discount factor at `date`.
    fn discount(&self, date: Date) -> CurveResult<f64> {
        self.discount_t(self.time_from_reference(date))
    }

    /// Zero rate to `date` under `compounding`.
    ///
    /// At the reference date the rate over a short step is returned instead.
    fn zero_rate(&self, date: Date, compounding: Compounding) -> CurveResult<f64> {
        let t = self.time_from_reference(date);
        if t == 0.0 {
            let df = self.discount_t(INSTANTANEOUS_DT)?;
            return Ok(compounding.zero_rate(df, INSTANTANEOUS_DT));
        }
        let df = self.discount_t(t)?;
        Ok(compounding.zero_rate(df, t))
    }

    /// Forward rate between `start` and `end` under `compounding`.
    ///
    /// Equal dates give the rate over a short step starting at `start`, or
    /// ending at `start` when the step would leave a curve that does not
    /// extrapolate.
    fn forward_rate(&self, start: Date, end: Date, compounding: Compounding) -> CurveResult<f64> {
        if end < start {
            return Err(CoreError::invalid_date(format!(
                "forward end {end} is before start {start}"
            ))
            .into());
        }
        let t_start = self.time_from_reference(start);
        let t_end = self.time_from_reference(end);
        let (t1, t2) = if t_end > t_start {
            (t_start, t_end)
        } else if self.allows_extrapolation() || t_start + INSTANTANEOUS_DT <= self.max_time() {
            (t_start, t_start + INSTANTANEOUS_DT)
        } else {
            ((t_start - INSTANTANEOUS_DT).max(0.0), t_start)
        };
        let df1 = self.discount_t(t1)?;
        let df2 = self.discount_t(t2)?;
        Ok(compounding.zero_rate(df2 / df1, t2 - t1))
    }
}
