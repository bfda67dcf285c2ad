//! Business day calendars and conventions.
//!
//! This module provides:
//! - The [`Calendar`] trait: business-day tests, adjustment and date rolling
//! - Weekend-only, null and TARGET calendars
//! - Business day adjustment conventions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod conventions;
mod target;

pub use conventions::BusinessDayConvention;
pub use target::{easter_sunday, TargetCalendar};

use crate::error::{CoreError, CoreResult};
use crate::types::{Date, Period, TimeUnit};

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays
/// for a specific market or jurisdiction.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        convention.adjust(date, self)
    }

    /// True if `date` is the last business day of its month.
    fn is_end_of_month(&self, date: Date) -> bool {
        date.month() != self.adjust(date.add_days(1), BusinessDayConvention::Following).month()
    }

    /// Last business day of the month containing `date`.
    fn end_of_month(&self, date: Date) -> Date {
        self.adjust(date.end_of_month(), BusinessDayConvention::Preceding)
    }

    /// Advances a date by a number of business days.
    fn add_business_days(&self, date: Date, days: i32) -> Date {
        let mut result = date;
        let mut remaining = days.abs();
        let direction: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(direction);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Advances `date` by `n` units and adjusts the result.
    ///
    /// Days are counted as business days, and `n = 0` just adjusts the date.
    /// Weeks, months and years roll in calendar time before adjusting; with
    /// `end_of_month` set, a start on the last business day of a month lands
    /// on the last business day of the target month.
    fn advance(
        &self,
        date: Date,
        n: i32,
        unit: TimeUnit,
        convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> CoreResult<Date> {
        match unit {
            TimeUnit::Days => {
                if n == 0 {
                    Ok(self.adjust(date, convention))
                } else {
                    Ok(self.add_business_days(date, n))
                }
            }
            TimeUnit::Weeks => Ok(self.adjust(date.add_days(7 * i64::from(n)), convention)),
            TimeUnit::Months | TimeUnit::Years => {
                let months = if unit == TimeUnit::Years { n * 12 } else { n };
                let rolled = date.add_months(months)?;
                if end_of_month && self.is_end_of_month(date) {
                    Ok(self.end_of_month(rolled))
                } else {
                    Ok(self.adjust(rolled, convention))
                }
            }
        }
    }

    /// Advances `date` by a [`Period`].
    fn advance_period(
        &self,
        date: Date,
        period: Period,
        convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> CoreResult<Date> {
        self.advance(date, period.length(), period.unit(), convention, end_of_month)
    }

    /// Counts business days between two dates (exclusive of start, inclusive of end).
    fn business_days_between(&self, start: Date, end: Date) -> i32 {
        let mut count = 0;
        let mut current = start.add_days(1);

        while current <= end {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }

        count
    }
}

/// A simple weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "WeekendsOnly"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// Calendar in which every day is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &'static str {
        "Null"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }
}

/// Serializable selector for the built-in calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CalendarKind {
    /// [`TargetCalendar`]
    #[default]
    Target,
    /// [`WeekendCalendar`]
    WeekendsOnly,
    /// [`NullCalendar`]
    Null,
}

impl CalendarKind {
    /// Every built-in calendar.
    #[must_use]
    pub fn all() -> &'static [CalendarKind] {
        &[CalendarKind::Target, CalendarKind::WeekendsOnly, CalendarKind::Null]
    }

    /// Boxed calendar instance.
    #[must_use]
    pub fn to_calendar(&self) -> Box<dyn Calendar> {
        match self {
            CalendarKind::Target => Box::new(TargetCalendar),
            CalendarKind::WeekendsOnly => Box::new(WeekendCalendar),
            CalendarKind::Null => Box::new(NullCalendar),
        }
    }
}

impl Calendar for CalendarKind {
    fn name(&self) -> &'static str {
        match self {
            CalendarKind::Target => TargetCalendar.name(),
            CalendarKind::WeekendsOnly => WeekendCalendar.name(),
            CalendarKind::Null => NullCalendar.name(),
        }
    }

    fn is_business_day(&self, date: Date) -> bool {
        match self {
            CalendarKind::Target => TargetCalendar.is_business_day(date),
            CalendarKind::WeekendsOnly => WeekendCalendar.is_business_day(date),
            CalendarKind::Null => NullCalendar.is_business_day(date),
        }
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CalendarKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace([' ', '_', '-'], "").as_str() {
            "TARGET" | "TARGET2" => Ok(CalendarKind::Target),
            "WEEKENDSONLY" | "WEEKEND" => Ok(CalendarKind::WeekendsOnly),
            "NULL" | "NONE" => Ok(CalendarKind::Null),
            _ => Err(CoreError::calendar_error(format!("unknown calendar '{s}'"))),
        }
    }
}
