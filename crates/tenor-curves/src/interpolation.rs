//! Interpolation methods for piecewise curves.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use tenor_math::interpolation::{
    CubicSpline, Interpolator, LinearInterpolator, LogLinearInterpolator,
};
use tenor_math::MathResult;

use crate::error::CurveError;

/// How node values are interpolated between pillars.
///
/// The method applies to whatever quantity the
/// [`BootstrapTrait`](crate::BootstrapTrait) stores on the nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationMethod {
    /// Linear interpolation.
    Linear,

    /// Linear interpolation of logarithms; values must be positive.
    #[default]
    LogLinear,

    /// Natural cubic spline.
    CubicSpline,
}

impl InterpolationMethod {
    /// Every supported method.
    #[must_use]
    pub fn all() -> &'static [InterpolationMethod] {
        &[Self::Linear, Self::LogLinear, Self::CubicSpline]
    }

    /// Returns true if moving one node only changes the two adjacent segments.
    ///
    /// Non-local methods need extra bootstrap passes because later nodes
    /// reshape segments that earlier helpers were fitted on.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Linear | Self::LogLinear)
    }

    /// Local method used for the first sequential bootstrap pass.
    ///
    /// A spline fitted on a prefix of the nodes can overshoot far enough
    /// that the next node has no root, so spline curves are seeded with
    /// linear nodes and then refined on the full spline.
    #[must_use]
    pub fn seed_method(&self) -> InterpolationMethod {
        match self {
            Self::CubicSpline => Self::Linear,
            local => *local,
        }
    }

    /// Returns true if node values must be strictly positive.
    #[must_use]
    pub fn requires_positive(&self) -> bool {
        matches!(self, Self::LogLinear)
    }

    /// Builds an interpolator over the given nodes.
    ///
    /// Extrapolation is always enabled here; the curve decides whether a
    /// query outside the nodes is allowed.
    pub fn build(&self, xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Box<dyn Interpolator>> {
        Ok(match self {
            Self::Linear => Box::new(LinearInterpolator::new(xs, ys)?.with_extrapolation()),
            Self::LogLinear => Box::new(LogLinearInterpolator::new(xs, ys)?.with_extrapolation()),
            Self::CubicSpline => Box::new(CubicSpline::new(xs, ys)?.with_extrapolation()),
        })
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Linear => "Linear",
            Self::LogLinear => "LogLinear",
            Self::CubicSpline => "CubicSpline",
        };
        write!(f, "{name}")
    }
}

impl FromStr for InterpolationMethod {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "linear" => Ok(Self::Linear),
            "loglinear" => Ok(Self::LogLinear),
            "cubicspline" | "cubic" | "spline" => Ok(Self::CubicSpline),
            _ => Err(CurveError::invalid_config(format!(
                "unknown interpolation method '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_and_display() {
        for method in InterpolationMethod::all() {
            let parsed: InterpolationMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, *method);
        }
        assert_eq!(
            "log-linear".parse::<InterpolationMethod>().unwrap(),
            InterpolationMethod::LogLinear
        );
        assert!("akima".parse::<InterpolationMethod>().is_err());
    }

    #[test]
    fn test_build_hits_nodes() {
        let xs = vec![0.0, 1.0, 2.0];
        let ys = vec![1.0, 0.97, 0.93];
        for method in InterpolationMethod::all() {
            let interp = method.build(xs.clone(), ys.clone()).unwrap();
            assert_relative_eq!(interp.interpolate(1.0).unwrap(), 0.97, epsilon = 1e-14);
            assert!(interp.allows_extrapolation());
        }
    }

    #[test]
    fn test_log_linear_rejects_negative_values() {
        let result = InterpolationMethod::LogLinear.build(vec![0.0, 1.0], vec![0.01, -0.01]);
        assert!(result.is_err());
        assert!(InterpolationMethod::LogLinear.requires_positive());
        assert!(!InterpolationMethod::CubicSpline.is_local());
    }

    #[test]
    fn test_seed_method_is_local() {
        for method in InterpolationMethod::all() {
            assert!(method.seed_method().is_local());
        }
        assert_eq!(
            InterpolationMethod::CubicSpline.seed_method(),
            InterpolationMethod::Linear
        );
        assert_eq!(
            InterpolationMethod::LogLinear.seed_method(),
            InterpolationMethod::LogLinear
        );
    }
}
