//! Backward schedule generation for swap legs.
//!
//! Dates are rolled back from the termination date in whole tenors, so a
//! short stub, when there is one, sits at the front. Rolled dates are then
//! adjusted on the leg calendar.

use tenor_core::calendars::{BusinessDayConvention, Calendar, CalendarKind};
use tenor_core::types::{Date, Period, TimeUnit};

use crate::error::{CurveError, CurveResult};

/// Configuration for schedule generation.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleConfig {
    /// Effective date (first accrual start).
    pub start_date: Date,
    /// Unadjusted termination date.
    pub end_date: Date,
    /// Length of a regular period.
    pub tenor: Period,
    /// Calendar for business day adjustments.
    pub calendar: CalendarKind,
    /// Business day adjustment convention.
    pub convention: BusinessDayConvention,
    /// Roll month-end termination dates to month-end.
    pub end_of_month: bool,
}

impl ScheduleConfig {
    /// Creates a configuration on the TARGET calendar, Modified Following.
    #[must_use]
    pub fn new(start_date: Date, end_date: Date, tenor: Period) -> Self {
        Self {
            start_date,
            end_date,
            tenor,
            calendar: CalendarKind::Target,
            convention: BusinessDayConvention::ModifiedFollowing,
            end_of_month: false,
        }
    }

    /// Sets the calendar.
    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarKind) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the business day convention.
    #[must_use]
    pub fn with_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Sets the end-of-month rule.
    #[must_use]
    pub fn with_end_of_month(mut self, eom: bool) -> Self {
        self.end_of_month = eom;
        self
    }
}

/// An adjusted date schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    unadjusted_dates: Vec<Date>,
    adjusted_dates: Vec<Date>,
}

impl Schedule {
    /// Generates the schedule backward from the termination date.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidHelper` if the end date is not after the
    /// start date or the tenor is not positive.
    pub fn generate(config: ScheduleConfig) -> CurveResult<Self> {
        if config.end_date <= config.start_date {
            return Err(CurveError::invalid_helper(format!(
                "schedule end {} must be after start {}",
                config.end_date, config.start_date
            )));
        }
        if config.tenor.length() <= 0 {
            return Err(CurveError::invalid_helper(format!(
                "schedule tenor {} must be positive",
                config.tenor
            )));
        }

        let eom = config.end_of_month && config.end_date.is_end_of_month();
        let mut unadjusted = vec![config.end_date];
        for k in 1.. {
            let mut rolled = roll(config.end_date, config.tenor, -k)?;
            if eom {
                rolled = rolled.end_of_month();
            }
            if rolled <= config.start_date {
                break;
            }
            unadjusted.push(rolled);
        }
        unadjusted.push(config.start_date);
        unadjusted.reverse();

        let mut adjusted: Vec<Date> = unadjusted
            .iter()
            .map(|&d| config.calendar.adjust(d, config.convention))
            .collect();
        adjusted.dedup();

        Ok(Self {
            unadjusted_dates: unadjusted,
            adjusted_dates: adjusted,
        })
    }

    /// Returns the adjusted schedule dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.adjusted_dates
    }

    /// Returns the unadjusted schedule dates.
    #[must_use]
    pub fn unadjusted_dates(&self) -> &[Date] {
        &self.unadjusted_dates
    }

    /// Iterates over accrual periods (start, end) on adjusted dates.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        self.adjusted_dates.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of accrual periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjusted_dates.len().saturating_sub(1)
    }

    /// Whether the schedule has no accrual period.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `date` moved by `k` whole tenors, in calendar time and unadjusted.
pub(crate) fn roll(date: Date, tenor: Period, k: i32) -> CurveResult<Date> {
    let n = tenor.length() * k;
    Ok(match tenor.unit() {
        TimeUnit::Days => date.add_days(i64::from(n)),
        TimeUnit::Weeks => date.add_days(7 * i64::from(n)),
        TimeUnit::Months => date.add_months(n)?,
        TimeUnit::Years => date.add_years(n)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_regular_semiannual() {
        let config = ScheduleConfig::new(d(2025, 1, 15), d(2027, 1, 15), Period::months(6))
            .with_calendar(CalendarKind::Null);
        let schedule = Schedule::generate(config).unwrap();
        assert_eq!(
            schedule.dates(),
            &[
                d(2025, 1, 15),
                d(2025, 7, 15),
                d(2026, 1, 15),
                d(2026, 7, 15),
                d(2027, 1, 15)
            ]
        );
        assert_eq!(schedule.len(), 4);
    }

    #[test]
    fn test_front_stub() {
        let config = ScheduleConfig::new(d(2025, 3, 1), d(2026, 1, 15), Period::months(6))
            .with_calendar(CalendarKind::Null);
        let schedule = Schedule::generate(config).unwrap();
        assert_eq!(
            schedule.dates(),
            &[d(2025, 3, 1), d(2025, 7, 15), d(2026, 1, 15)]
        );
    }

    #[test]
    fn test_dates_are_adjusted() {
        // 2025-11-15 is a Saturday
        let config = ScheduleConfig::new(d(2025, 5, 15), d(2026, 5, 15), Period::months(6));
        let schedule = Schedule::generate(config).unwrap();
        assert_eq!(schedule.dates()[1], d(2025, 11, 17));
        assert_eq!(schedule.unadjusted_dates()[1], d(2025, 11, 15));
    }

    #[test]
    fn test_end_of_month_roll() {
        let config = ScheduleConfig::new(d(2025, 2, 28), d(2026, 2, 28), Period::months(3))
            .with_calendar(CalendarKind::Null)
            .with_end_of_month(true);
        let schedule = Schedule::generate(config).unwrap();
        assert_eq!(
            schedule.dates(),
            &[
                d(2025, 2, 28),
                d(2025, 5, 31),
                d(2025, 8, 31),
                d(2025, 11, 30),
                d(2026, 2, 28)
            ]
        );
    }

    #[test]
    fn test_invalid_schedule() {
        let config = ScheduleConfig::new(d(2025, 1, 15), d(2025, 1, 15), Period::months(6));
        assert!(Schedule::generate(config).is_err());
    }
}
