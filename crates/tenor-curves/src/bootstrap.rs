//! What the bootstrapper solves for on each node.
//!
//! A [`BootstrapTrait`] fixes the quantity stored on curve nodes, how that
//! quantity turns into discount factors, and the search range and starting
//! point for each node solve.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use tenor_math::interpolation::Interpolator;
use tenor_math::MathResult;

use crate::error::CurveError;

/// Largest rate magnitude the solver will consider.
pub const MAX_RATE: f64 = 1.0;

/// Rate used for the first guess when nothing is known yet.
pub const AVERAGE_RATE: f64 = 0.05;

/// Lower bound for rate nodes that must stay positive.
const MIN_POSITIVE_RATE: f64 = 1e-10;

/// The node quantity of a piecewise curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BootstrapTrait {
    /// Discount factors; node 0 is 1.
    #[default]
    Discount,
    /// Continuously compounded zero rates; node 0 mirrors node 1.
    ZeroYield,
    /// Instantaneous forward rates; node 0 mirrors node 1.
    ForwardRate,
}

impl BootstrapTrait {
    /// Every supported trait.
    #[must_use]
    pub fn all() -> &'static [BootstrapTrait] {
        &[Self::Discount, Self::ZeroYield, Self::ForwardRate]
    }

    /// Returns true if node 0 copies the value of node 1.
    #[must_use]
    pub fn mirrors_first_node(&self) -> bool {
        !matches!(self, Self::Discount)
    }

    /// Value of node 0, given the value of node 1.
    #[must_use]
    pub fn reference_value(&self, first: f64) -> f64 {
        match self {
            Self::Discount => 1.0,
            Self::ZeroYield | Self::ForwardRate => first,
        }
    }

    /// Starting point for node `i`, given solved nodes `0..i`.
    ///
    /// The first node assumes [`AVERAGE_RATE`]; later nodes extend the
    /// previous segment.
    #[must_use]
    pub fn initial_guess(&self, i: usize, times: &[f64], values: &[f64]) -> f64 {
        match self {
            Self::Discount => {
                if i <= 1 {
                    return (-AVERAGE_RATE * times[1]).exp();
                }
                let dt_prev = times[i - 1] - times[i - 2];
                let forward = (values[i - 2] / values[i - 1]).ln() / dt_prev;
                values[i - 1] * (-forward * (times[i] - times[i - 1])).exp()
            }
            Self::ZeroYield | Self::ForwardRate => {
                if i <= 1 {
                    AVERAGE_RATE
                } else {
                    values[i - 1]
                }
            }
        }
    }

    /// Lowest admissible value for node `i`.
    ///
    /// With `positive_only`, rate nodes stay above zero so that log-linear
    /// interpolation remains defined.
    #[must_use]
    pub fn min_value_after(
        &self,
        i: usize,
        times: &[f64],
        values: &[f64],
        positive_only: bool,
    ) -> f64 {
        match self {
            Self::Discount => {
                let dt = times[i] - times[i - 1];
                values[i - 1] * (-MAX_RATE * dt).exp()
            }
            Self::ZeroYield | Self::ForwardRate => {
                if positive_only {
                    MIN_POSITIVE_RATE
                } else {
                    -MAX_RATE
                }
            }
        }
    }

    /// Highest admissible value for node `i`.
    ///
    /// With `monotone`, discount factors may not rise above the previous node.
    #[must_use]
    pub fn max_value_after(&self, i: usize, times: &[f64], values: &[f64], monotone: bool) -> f64 {
        match self {
            Self::Discount => {
                if monotone {
                    values[i - 1]
                } else {
                    let dt = times[i] - times[i - 1];
                    values[i - 1] * (MAX_RATE * dt).exp()
                }
            }
            Self::ZeroYield | Self::ForwardRate => MAX_RATE,
        }
    }

    /// Discount factor at `t` from an interpolator over node values.
    pub fn node_value_to_discount(&self, interpolator: &dyn Interpolator, t: f64) -> MathResult<f64> {
        match self {
            Self::Discount => interpolator.interpolate(t),
            Self::ZeroYield => Ok((-interpolator.interpolate(t)? * t).exp()),
            Self::ForwardRate => Ok((-interpolator.primitive(t)?).exp()),
        }
    }

    /// Node value matching discount factor `df` at `t > 0`.
    ///
    /// For forward rates this is the average forward over `[0, t]`.
    #[must_use]
    pub fn discount_to_node_value(&self, df: f64, t: f64) -> f64 {
        match self {
            Self::Discount => df,
            Self::ZeroYield | Self::ForwardRate => -df.ln() / t,
        }
    }
}

impl std::fmt::Display for BootstrapTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Discount => "Discount",
            Self::ZeroYield => "ZeroYield",
            Self::ForwardRate => "ForwardRate",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BootstrapTrait {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "discount" | "df" => Ok(Self::Discount),
            "zeroyield" | "zero" => Ok(Self::ZeroYield),
            "forwardrate" | "forward" => Ok(Self::ForwardRate),
            _ => Err(CurveError::invalid_config(format!(
                "unknown bootstrap trait '{s}'"
            ))),
        }
    }
}
