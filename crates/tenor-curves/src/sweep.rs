//! Curves over a history of observation dates.
//!
//! [`sweep`] builds one curve per observation date and decides what to do
//! when a date cannot be built; [`zero_curve`] samples a built curve into
//! zero rates measured from the observation date.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tenor_core::calendars::{BusinessDayConvention, Calendar};
use tenor_core::types::{Date, TimeUnit};

use crate::error::{CurveError, CurveResult};
use crate::traits::YieldTermStructure;

/// Days in the year used for sweep zero rates.
pub const SWEEP_DAYS_PER_YEAR: f64 = 365.0;

/// What to do when one observation date fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FailurePolicy {
    /// Log the failure and continue with the next date.
    #[default]
    Skip,
    /// Stop at the first failure and return it.
    Propagate,
}

/// A sampled point of a zero curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZeroPoint {
    /// Sample date.
    pub date: Date,
    /// Years from the observation date, Act/365.
    pub time: f64,
    /// Curve discount factor at `date`.
    pub discount: f64,
    /// Continuously compounded zero rate, `-ln(df) / time`.
    pub zero_rate: f64,
}

/// A date that was skipped, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedDate {
    /// Observation date.
    pub date: Date,
    /// Why the build failed.
    pub error: CurveError,
}

/// Outcome of a sweep.
#[derive(Debug, Clone)]
pub struct SweepResult<T> {
    /// Built results, in observation order.
    pub successes: Vec<(Date, T)>,
    /// Dates that failed under [`FailurePolicy::Skip`].
    pub skipped: Vec<SkippedDate>,
}

impl<T> SweepResult<T> {
    /// Dates that were skipped.
    #[must_use]
    pub fn skipped_dates(&self) -> Vec<Date> {
        self.skipped.iter().map(|s| s.date).collect()
    }

    fn collect<I>(outcomes: I, policy: FailurePolicy) -> CurveResult<Self>
    where
        I: IntoIterator<Item = (Date, CurveResult<T>)>,
    {
        let mut successes = Vec::new();
        let mut skipped = Vec::new();
        for (date, outcome) in outcomes {
            match outcome {
                Ok(value) => successes.push((date, value)),
                Err(error) => match policy {
                    FailurePolicy::Propagate => return Err(error),
                    FailurePolicy::Skip => {
                        warn!(%date, %error, "skipping observation date");
                        skipped.push(SkippedDate { date, error });
                    }
                },
            }
        }
        debug!(built = successes.len(), skipped = skipped.len(), "sweep finished");
        Ok(Self { successes, skipped })
    }
}

/// Default sample offsets: every 30 days from day 10 out to 20 years.
pub fn default_offsets() -> impl Iterator<Item = i32> {
    (10..365 * 20).step_by(30)
}

/// Samples `curve` at business-day offsets from `observation_date`.
///
/// Each sample date is `observation_date` advanced by the offset in business
/// days, capped at the curve's last date. Times are measured from the
/// observation date in Act/365.
///
/// # Errors
///
/// Returns `CurveError::InvalidConfig` if a sample falls on the observation
/// date, or any error from the curve query.
pub fn zero_curve<I>(
    curve: &dyn YieldTermStructure,
    observation_date: Date,
    calendar: &dyn Calendar,
    day_offsets: I,
) -> CurveResult<Vec<ZeroPoint>>
where
    I: IntoIterator<Item = i32>,
{
    let max_date = curve.max_date();
    day_offsets
        .into_iter()
        .map(|days| {
            let advanced = calendar.advance(
                observation_date,
                days,
                TimeUnit::Days,
                BusinessDayConvention::Following,
                false,
            )?;
            let date = advanced.min(max_date);
            let time = observation_date.days_between(&date) as f64 / SWEEP_DAYS_PER_YEAR;
            if time <= 0.0 {
                return Err(CurveError::invalid_config(format!(
                    "sample {date} is not after observation date {observation_date}"
                )));
            }
            let discount = curve.discount(date)?;
            Ok(ZeroPoint {
                date,
                time,
                discount,
                zero_rate: -discount.ln() / time,
            })
        })
        .collect()
}

/// Builds one result per observation date, sequentially.
///
/// # Errors
///
/// Under [`FailurePolicy::Propagate`], the first build error in observation
/// order.
pub fn sweep<T, F>(observations: &[Date], mut build: F, policy: FailurePolicy) -> CurveResult<SweepResult<T>>
where
    F: FnMut(Date) -> CurveResult<T>,
{
    match policy {
        FailurePolicy::Skip => {
            SweepResult::collect(observations.iter().map(|&d| (d, build(d))), policy)
        }
        FailurePolicy::Propagate => {
            // Stop building at the first failure
            let mut successes = Vec::with_capacity(observations.len());
            for &date in observations {
                successes.push((date, build(date)?));
            }
            Ok(SweepResult {
                successes,
                skipped: Vec::new(),
            })
        }
    }
}

/// Builds one result per observation date on the rayon thread pool.
///
/// Every date gets its own curve; results come back in observation order.
///
/// # Errors
///
/// Under [`FailurePolicy::Propagate`], the first build error in observation
/// order.
#[cfg(feature = "parallel")]
pub fn sweep_parallel<T, F>(
    observations: &[Date],
    build: F,
    policy: FailurePolicy,
) -> CurveResult<SweepResult<T>>
where
    T: Send,
    F: Fn(Date) -> CurveResult<T> + Sync,
{
    use rayon::prelude::*;

    let outcomes: Vec<(Date, CurveResult<T>)> =
        observations.par_iter().map(|&d| (d, build(d))).collect();
    SweepResult::collect(outcomes, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::test_support::FlatCurve;
    use approx::assert_relative_eq;
    use tenor_core::calendars::{NullCalendar, WeekendCalendar};
    use tenor_core::daycounts::DayCountConvention;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_default_offsets() {
        let offsets: Vec<i32> = default_offsets().collect();
        assert_eq!(offsets[0], 10);
        assert_eq!(offsets[1], 40);
        assert!(*offsets.last().unwrap() < 365 * 20);
        assert_eq!(offsets.len(), 243);
    }

    #[test]
    fn test_zero_curve_on_flat_curve() {
        let obs = d(2025, 1, 2);
        let curve = FlatCurve {
            reference: obs,
            rate: 0.04,
            day_count: DayCountConvention::Act365Fixed,
        };
        let points = zero_curve(&curve, obs, &NullCalendar, [10, 100, 1000]).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, d(2025, 1, 12));
        for p in &points {
            assert_relative_eq!(p.zero_rate, 0.04, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_curve_caps_at_max_date() {
        struct Short(FlatCurve);
        impl YieldTermStructure for Short {
            fn reference_date(&self) -> Date {
                self.0.reference
            }
            fn day_count(&self) -> DayCountConvention {
                self.0.day_count
            }
            fn max_date(&self) -> Date {
                self.0.reference.add_days(30)
            }
            fn allows_extrapolation(&self) -> bool {
                false
            }
            fn discount_t(&self, t: f64) -> CurveResult<f64> {
                self.0.discount_t(t)
            }
        }

        let obs = d(2025, 1, 2);
        let curve = Short(FlatCurve {
            reference: obs,
            rate: 0.02,
            day_count: DayCountConvention::Act365Fixed,
        });
        let points = zero_curve(&curve, obs, &WeekendCalendar, [10, 60, 90]).unwrap();
        assert_eq!(points[1].date, obs.add_days(30));
        assert_eq!(points[2].date, obs.add_days(30));
    }

    #[test]
    fn test_sweep_skip_and_propagate() {
        let dates = [d(2025, 1, 2), d(2025, 1, 3), d(2025, 1, 6)];
        let build = |date: Date| {
            if date == d(2025, 1, 3) {
                Err(CurveError::EmptyCurve)
            } else {
                Ok(date.day())
            }
        };

        let result = sweep(&dates, build, FailurePolicy::Skip).unwrap();
        assert_eq!(result.successes, vec![(dates[0], 2), (dates[2], 6)]);
        assert_eq!(result.skipped_dates(), vec![dates[1]]);
        assert_eq!(result.skipped[0].error, CurveError::EmptyCurve);

        let err = sweep(&dates, build, FailurePolicy::Propagate).unwrap_err();
        assert_eq!(err, CurveError::EmptyCurve);
    }

    #[test]
    fn test_propagate_stops_building() {
        let dates = [d(2025, 1, 2), d(2025, 1, 3), d(2025, 1, 6)];
        let mut calls = 0;
        let _ = sweep(
            &dates,
            |_| {
                calls += 1;
                Err::<(), _>(CurveError::EmptyCurve)
            },
            FailurePolicy::Propagate,
        );
        assert_eq!(calls, 1);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let dates: Vec<Date> = (0..20).map(|i| d(2025, 1, 1).add_days(i)).collect();
        let build = |date: Date| {
            if date.day() % 7 == 0 {
                Err(CurveError::EmptyCurve)
            } else {
                Ok(date.day_of_year())
            }
        };
        let seq = sweep(&dates, build, FailurePolicy::Skip).unwrap();
        let par = sweep_parallel(&dates, build, FailurePolicy::Skip).unwrap();
        assert_eq!(seq.successes, par.successes);
        assert_eq!(seq.skipped_dates(), par.skipped_dates());
    }
}
