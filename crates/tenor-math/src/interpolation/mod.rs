//! Interpolation methods for yield curve construction.
//!
//! Every interpolator is a pure function of the node arrays it was built
//! from. Curves rebuild them whenever node values change.
//!
//! # Available Methods
//!
//! | Method | Smoothness | Extrapolation |
//! |--------|------------|---------------|
//! | [`LinearInterpolator`] | C0 | extends the end segment's slope |
//! | [`LogLinearInterpolator`] | C0 | extends the end segment's slope in log space |
//! | [`CubicSpline`] | C2 | linear, using the end-point derivative |
//!
//! With extrapolation disabled, queries outside `[x_0, x_N]` fail with
//! [`MathError::ExtrapolationNotAllowed`], except within a boundary tolerance
//! of `1e-12 * max(1, |x_N|)` so that times recomputed from dates do not trip
//! on rounding.

mod cubic_spline;
mod linear;
mod log_linear;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;
pub use log_linear::LogLinearInterpolator;

use crate::error::{MathError, MathResult};

/// Relative tolerance applied at the edges of the node range.
pub const BOUNDARY_TOLERANCE: f64 = 1e-12;

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns the integral of the interpolant from the first node to x.
    fn primitive(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range, boundary tolerance included.
    fn in_range(&self, x: f64) -> bool {
        let tol = BOUNDARY_TOLERANCE * self.max_x().abs().max(1.0);
        x >= self.min_x() - tol && x <= self.max_x() + tol
    }

    /// Fails unless x is in range or extrapolation is allowed.
    fn check_range(&self, x: f64) -> MathResult<()> {
        if self.allows_extrapolation() || self.in_range(x) {
            Ok(())
        } else {
            Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            })
        }
    }
}

/// Validates node arrays shared by all interpolators.
pub(crate) fn validate_nodes(xs: &[f64], ys: &[f64]) -> MathResult<()> {
    if xs.len() < 2 {
        return Err(MathError::insufficient_data(2, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("node values must be finite"));
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(MathError::invalid_input(
            "x values must be strictly increasing",
        ));
    }
    Ok(())
}

/// Finds the index i such that xs[i] <= x < xs[i+1], clamped to the end segments.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
    {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => (i.saturating_sub(1)).min(xs.len() - 2),
    }
}
