//! TARGET calendar for Eurozone payments and settlement.

use chrono::NaiveDate;

use super::Calendar;
use crate::types::Date;

/// TARGET holiday calendar.
///
/// ## Holidays
///
/// - New Year's Day (January 1)
/// - Good Friday and Easter Monday (from 2000)
/// - Labour Day, May 1 (from 2000)
/// - Christmas Day (December 25)
/// - December 26 (from 2000)
/// - December 31 in 1998, 1999 and 2001
///
/// Holidays falling on a weekend are not moved.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetCalendar;

impl TargetCalendar {
    /// Creates the calendar.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calendar for TargetCalendar {
    fn name(&self) -> &'static str {
        "TARGET"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if date.is_weekend() {
            return false;
        }

        let (y, m, d) = (date.year(), date.month(), date.day());
        let fixed = (m == 1 && d == 1)
            || (m == 12 && d == 25)
            || (y >= 2000 && ((m == 5 && d == 1) || (m == 12 && d == 26)))
            || (m == 12 && d == 31 && matches!(y, 1998 | 1999 | 2001));
        if fixed {
            return false;
        }

        if y >= 2000 {
            if let Some(easter) = easter_sunday(y) {
                let offset = easter.days_between(&date);
                if offset == -2 || offset == 1 {
                    return false;
                }
            }
        }

        true
    }
}

/// Western Easter Sunday for `year` (anonymous Gregorian algorithm).
#[must_use]
pub fn easter_sunday(year: i32) -> Option<Date> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).map(Date::from)
}
