//! Actual-days conventions.

use super::DayCount;
use crate::types::Date;

/// Actual/360: money market convention, used by deposits and Libor fixings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365 Fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 365.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/Actual ISDA.
///
/// The period is split by calendar year; days falling in a leap year count
/// 1/366, the others 1/365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if start == end {
            return 0.0;
        }
        if start > end {
            return -self.year_fraction(end, start);
        }

        let y1 = start.year();
        let y2 = end.year();
        let basis1 = f64::from(start.days_in_year());
        let basis2 = f64::from(end.days_in_year());

        if y1 == y2 {
            return start.days_between(&end) as f64 / basis1;
        }

        // Days from start to 1 Jan of the next year, whole years in between,
        // then 1 Jan of the end year to end.
        let to_year_end = f64::from(start.days_in_year() - start.day_of_year() + 1);
        let from_year_start = f64::from(end.day_of_year() - 1);
        to_year_end / basis1 + f64::from(y2 - y1 - 1) + from_year_start / basis2
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_act360() {
        let yf = Act360.year_fraction(d(2025, 6, 17), d(2025, 7, 17));
        assert_relative_eq!(yf, 30.0 / 360.0, epsilon = 1e-15);
        assert_eq!(Act360.day_count(d(2025, 1, 1), d(2025, 7, 1)), 181);
    }

    #[test]
    fn test_act365_fixed() {
        assert_relative_eq!(Act365Fixed.year_fraction(d(2024, 1, 1), d(2025, 1, 1)), 366.0 / 365.0);
    }

    #[test]
    fn test_act_act_isda_same_year() {
        assert_relative_eq!(
            ActActIsda.year_fraction(d(2024, 1, 1), d(2024, 7, 1)),
            182.0 / 366.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_act_act_isda_across_leap_year() {
        // ISDA worked example: 2003-11-01 to 2004-05-01
        let yf = ActActIsda.year_fraction(d(2003, 11, 1), d(2004, 5, 1));
        assert_relative_eq!(yf, 61.0 / 365.0 + 121.0 / 366.0, epsilon = 1e-15);
    }

    #[test]
    fn test_act_act_isda_whole_years() {
        assert_relative_eq!(ActActIsda.year_fraction(d(2023, 3, 15), d(2026, 3, 15)), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_period() {
        let a = d(2025, 3, 1);
        let b = d(2027, 9, 1);
        assert_relative_eq!(ActActIsda.year_fraction(b, a), -ActActIsda.year_fraction(a, b));
        assert!(Act360.year_fraction(b, a) < 0.0);
    }
}
