//! # Tenor Curves
//!
//! Piecewise yield curves bootstrapped from deposit and swap quotes.
//!
//! A [`PiecewiseYieldCurve`] places one node at the pillar date of each
//! [`RateHelper`](helpers::RateHelper) and solves the nodes in maturity
//! order so that every helper reprices its market quote. The node quantity
//! is chosen with [`BootstrapTrait`] and the curve between nodes with
//! [`InterpolationMethod`].
//!
//! ## Modules
//!
//! - [`helpers`]: deposit and par swap instruments with their conventions
//! - [`piecewise`]: the curve and its build state
//! - [`bootstrap`]: node quantities, bounds and guesses
//! - [`repricing`]: checks that a solved curve gives back its quotes
//! - [`sweep`]: curves over a history of observation dates
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//! use tenor_curves::prelude::*;
//!
//! let trade = Date::from_ymd(2025, 3, 13).unwrap();
//! let deposits = DepositConventions::default();
//! let swaps = SwapConventions::default();
//!
//! let mut helpers: Vec<Box<dyn RateHelper>> = Vec::new();
//! for (months, rate) in [(3, 0.031), (6, 0.032)] {
//!     let quote = SimpleQuote::new(rate);
//!     helpers.push(Box::new(
//!         DepositRateHelper::new(quote, Period::months(months), &deposits, trade).unwrap(),
//!     ));
//! }
//! for (years, rate) in [(2, 0.034), (5, 0.036)] {
//!     let quote = SimpleQuote::new(rate);
//!     helpers.push(Box::new(
//!         SwapRateHelper::new(quote, Period::years(years), &swaps, trade).unwrap(),
//!     ));
//! }
//!
//! let spot = TargetCalendar::new()
//!     .advance(trade, 2, TimeUnit::Days, BusinessDayConvention::Following, false)
//!     .unwrap();
//! let curve = PiecewiseYieldCurve::bootstrap(
//!     spot,
//!     helpers,
//!     DayCountConvention::Act365Fixed,
//!     InterpolationMethod::LogLinear,
//!     BootstrapTrait::Discount,
//!     BootstrapConfig::default(),
//! )
//! .unwrap();
//!
//! let report = RepricingReport::check(&curve).unwrap();
//! assert!(report.is_valid());
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
#![allow(clippy::float_cmp)]

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod helpers;
pub mod index;
pub mod interpolation;
pub mod piecewise;
pub mod repricing;
pub mod schedule;
pub mod sweep;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::BootstrapTrait;
    pub use crate::config::BootstrapConfig;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::helpers::{
        DepositConventions, DepositRateHelper, HelperKind, RateHelper, SwapConventions,
        SwapRateHelper,
    };
    pub use crate::index::IborIndex;
    pub use crate::interpolation::InterpolationMethod;
    pub use crate::piecewise::{CurveState, PiecewiseYieldCurve};
    pub use crate::repricing::{RepricingCheck, RepricingReport};
    pub use crate::schedule::{Schedule, ScheduleConfig};
    pub use crate::sweep::{sweep, zero_curve, FailurePolicy, SweepResult, ZeroPoint};
    pub use crate::traits::YieldTermStructure;
}

// Re-export commonly used types at crate root
pub use bootstrap::BootstrapTrait;
pub use config::BootstrapConfig;
pub use error::{CurveError, CurveResult};
pub use interpolation::InterpolationMethod;
pub use piecewise::{CurveState, PiecewiseYieldCurve};
pub use repricing::RepricingReport;
pub use traits::YieldTermStructure;
