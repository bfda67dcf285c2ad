//! # Tenor Core
//!
//! Foundational types for the Tenor yield curve engine.
//!
//! This crate provides the collaborators the bootstrapper consumes:
//!
//! - **Types**: [`Date`], [`Period`], [`Frequency`], [`Compounding`]
//! - **Day Count Conventions**: year fractions for accrual and curve time
//! - **Business Day Calendars**: business-day tests, adjustment and date rolling
//! - **Quotes**: observable market values shared between callers and rate helpers
//! - **Registry**: explicit name-to-object lookup with a printable help table
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let calendar = TargetCalendar::new();
//! let trade = Date::from_ymd(2025, 6, 13).unwrap();
//! let spot = calendar
//!     .advance(trade, 2, TimeUnit::Days, BusinessDayConvention::Following, false)
//!     .unwrap();
//! assert_eq!(spot, Date::from_ymd(2025, 6, 17).unwrap());
//!
//! let yf = Act360.year_fraction(spot, spot.add_days(90));
//! assert!((yf - 0.25).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod quote;
pub mod registry;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayConvention, Calendar, CalendarKind, NullCalendar, TargetCalendar,
        WeekendCalendar,
    };
    pub use crate::daycounts::{
        Act360, Act365Fixed, ActActIsda, DayCount, DayCountConvention, Thirty360E, Thirty360US,
    };
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::quote::SimpleQuote;
    pub use crate::registry::ObjectRegistry;
    pub use crate::types::{Compounding, Date, Frequency, Period, TimeUnit};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Compounding, Date, Frequency, Period, TimeUnit};
