//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Calendar;
use crate::error::CoreError;
use crate::types::Date;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls
/// on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    Unadjusted,

    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    ModifiedPreceding,
}

impl BusinessDayConvention {
    /// Adjusts `date` on `calendar` under this convention.
    pub fn adjust<C: Calendar + ?Sized>(&self, date: Date, calendar: &C) -> Date {
        if calendar.is_business_day(date) {
            return date;
        }

        match self {
            BusinessDayConvention::Unadjusted => date,
            BusinessDayConvention::Following => following(date, calendar),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = following(date, calendar);
                if adjusted.month() == date.month() {
                    adjusted
                } else {
                    preceding(date, calendar)
                }
            }
            BusinessDayConvention::Preceding => preceding(date, calendar),
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = preceding(date, calendar);
                if adjusted.month() == date.month() {
                    adjusted
                } else {
                    following(date, calendar)
                }
            }
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BusinessDayConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace([' ', '_', '-'], "").as_str() {
            "unadjusted" | "none" => Ok(Self::Unadjusted),
            "following" | "f" => Ok(Self::Following),
            "modifiedfollowing" | "mf" => Ok(Self::ModifiedFollowing),
            "preceding" | "p" => Ok(Self::Preceding),
            "modifiedpreceding" | "mp" => Ok(Self::ModifiedPreceding),
            _ => Err(CoreError::calendar_error(format!(
                "unknown business day convention '{s}'"
            ))),
        }
    }
}

fn following<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(1);
    }
    date
}

fn preceding<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(-1);
    }
    date
}
