//! # Tenor Math
//!
//! Numerical building blocks for the Tenor yield curve engine.
//!
//! This crate provides:
//!
//! - **Interpolation**: linear, log-linear and natural cubic spline, each with
//!   a derivative and a primitive and an explicit extrapolation policy
//! - **Solvers**: Brent's method and outward bracket search within bounds
//!
//! ## Example
//!
//! ```rust
//! use tenor_math::prelude::*;
//!
//! let interp = LogLinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![1.0, 0.97, 0.94]).unwrap();
//! let df = interp.interpolate(1.5).unwrap();
//! assert!(df < 0.97 && df > 0.94);
//!
//! let root = brent(|x| x * x - 2.0, 1.0, 2.0, &SolverConfig::default()).unwrap();
//! assert!((root.root - 2f64.sqrt()).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        CubicSpline, Interpolator, LinearInterpolator, LogLinearInterpolator,
    };
    pub use crate::solvers::{brent, find_bracket, BracketConfig, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
