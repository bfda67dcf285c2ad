//! Log-linear interpolation.
//!
//! Interpolates the logarithm of values. On discount factors this gives
//! piecewise constant forward rates.

use super::{find_segment, validate_nodes, Interpolator};
use crate::error::{MathError, MathResult};

/// Log-linear interpolation between data points.
///
/// `y(x) = exp(linear_interpolate(x, ln(y)))`. Values must be strictly
/// positive. Extrapolation, when enabled, extends the end segments in log
/// space, so discount factors keep decaying at the last forward rate.
///
/// # Example
///
/// ```rust
/// use tenor_math::interpolation::{Interpolator, LogLinearInterpolator};
///
/// let times = vec![0.0, 1.0, 2.0, 3.0];
/// let discount_factors = vec![1.0, 0.97, 0.94, 0.91];
///
/// let interp = LogLinearInterpolator::new(times, discount_factors).unwrap();
/// let df = interp.interpolate(1.5).unwrap();
/// assert!(df > 0.94 && df < 0.97);
/// ```
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Precomputed log(y) values
    log_ys: Vec<f64>,
    /// Integral from xs[0] to xs[i]
    cumulative: Vec<f64>,
    allow_extrapolation: bool,
}

impl LogLinearInterpolator {
    /// Creates a new log-linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are fewer than 2 points
    /// - Lengths differ
    /// - Any y value is non-positive
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys)?;

        let mut log_ys = Vec::with_capacity(ys.len());
        for (i, &y) in ys.iter().enumerate() {
            if y <= 0.0 {
                return Err(MathError::invalid_input(format!(
                    "y[{i}] = {y} is not positive; log-linear requires positive values"
                )));
            }
            log_ys.push(y.ln());
        }

        let mut interp = Self {
            xs,
            ys,
            log_ys,
            cumulative: Vec::new(),
            allow_extrapolation: false,
        };
        let mut cumulative = vec![0.0];
        for i in 1..interp.xs.len() {
            let h = interp.xs[i] - interp.xs[i - 1];
            cumulative.push(cumulative[i - 1] + interp.segment_integral(i - 1, h));
        }
        interp.cumulative = cumulative;
        Ok(interp)
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Returns the original y values.
    #[must_use]
    pub fn y_values(&self) -> &[f64] {
        &self.ys
    }

    fn log_slope(&self, i: usize) -> f64 {
        (self.log_ys[i + 1] - self.log_ys[i]) / (self.xs[i + 1] - self.xs[i])
    }

    /// Integral of segment i's exponential from xs[i] to xs[i] + dx.
    fn segment_integral(&self, i: usize, dx: f64) -> f64 {
        let s = self.log_slope(i);
        let y0 = self.ys[i];
        if (s * dx).abs() < 1e-12 {
            y0 * dx * (1.0 + 0.5 * s * dx)
        } else {
            y0 * (s * dx).exp_m1() / s
        }
    }
}

impl Interpolator for LogLinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let i = find_segment(&self.xs, x);
        Ok((self.log_ys[i] + self.log_slope(i) * (x - self.xs[i])).exp())
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let i = find_segment(&self.xs, x);
        // dy/dx = y(x) * d(log y)/dx
        let s = self.log_slope(i);
        Ok((self.log_ys[i] + s * (x - self.xs[i])).exp() * s)
    }

    fn primitive(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let i = find_segment(&self.xs, x);
        Ok(self.cumulative[i] + self.segment_integral(i, x - self.xs[i]))
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_linear_through_points() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![1.0, 0.97, 0.94, 0.91];
        let interp = LogLinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(interp.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_constant_forward_rate() {
        // Flat 5% continuously compounded curve
        let xs = vec![0.0, 1.0, 2.0];
        let ys: Vec<f64> = xs.iter().map(|t: &f64| (-0.05 * t).exp()).collect();
        let interp = LogLinearInterpolator::new(xs, ys).unwrap().with_extrapolation();

        for t in [0.3, 1.7, 4.0] {
            let df = interp.interpolate(t).unwrap();
            assert_relative_eq!(df, (-0.05 * t).exp(), epsilon = 1e-14);
            assert_relative_eq!(-interp.derivative(t).unwrap() / df, 0.05, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_primitive_of_exponential() {
        let xs = vec![0.0, 2.0];
        let ys = vec![1.0, (-0.1f64).exp()];
        let interp = LogLinearInterpolator::new(xs, ys).unwrap();
        // integral of exp(-0.05 t) from 0 to 2
        let expected = (1.0 - (-0.1f64).exp()) / 0.05;
        assert_relative_eq!(interp.primitive(2.0).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_segment_primitive() {
        let interp = LogLinearInterpolator::new(vec![0.0, 1.0], vec![2.0, 2.0]).unwrap();
        assert_relative_eq!(interp.primitive(0.5).unwrap(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(LogLinearInterpolator::new(vec![0.0, 1.0], vec![1.0, 0.0]).is_err());
        assert!(LogLinearInterpolator::new(vec![0.0, 1.0], vec![-1.0, 1.0]).is_err());
    }

    #[test]
    fn test_extrapolation_disabled() {
        let interp = LogLinearInterpolator::new(vec![0.0, 1.0], vec![1.0, 0.98]).unwrap();
        assert!(interp.interpolate(1.5).is_err());
        assert!(!interp.allows_extrapolation());
    }
}
