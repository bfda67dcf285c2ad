//! Natural cubic spline interpolation.

use super::{find_segment, validate_nodes, Interpolator};
use crate::error::MathResult;

/// Natural cubic spline interpolation.
///
/// Piecewise cubic polynomials with continuous first and second derivatives;
/// the second derivative is zero at both ends. Two points degenerate to a
/// straight line.
///
/// Extrapolation, when enabled, continues linearly with the derivative at the
/// nearest end point.
///
/// # Example
///
/// ```rust
/// use tenor_math::interpolation::{CubicSpline, Interpolator};
///
/// let spline = CubicSpline::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0]).unwrap();
/// let y = spline.interpolate(1.5).unwrap();
/// assert!(y > 1.0 && y < 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
    /// Integral from xs[0] to xs[i]
    cumulative: Vec<f64>,
    allow_extrapolation: bool,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, the lengths differ,
    /// or the x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys)?;

        let y2s = compute_second_derivatives(&xs, &ys);
        let mut cumulative = vec![0.0];
        for i in 1..xs.len() {
            let h = xs[i] - xs[i - 1];
            let area = 0.5 * h * (ys[i - 1] + ys[i]) - h * h * h / 24.0 * (y2s[i - 1] + y2s[i]);
            cumulative.push(cumulative[i - 1] + area);
        }

        Ok(Self {
            xs,
            ys,
            y2s,
            cumulative,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    fn last(&self) -> usize {
        self.xs.len() - 1
    }

    fn spline_value(&self, i: usize, x: f64) -> f64 {
        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;
        a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.y2s[i] + (b * b * b - b) * self.y2s[i + 1]) * (h * h) / 6.0
    }

    fn spline_derivative(&self, i: usize, x: f64) -> f64 {
        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;
        (self.ys[i + 1] - self.ys[i]) / h - (3.0 * a * a - 1.0) / 6.0 * h * self.y2s[i]
            + (3.0 * b * b - 1.0) / 6.0 * h * self.y2s[i + 1]
    }

    fn spline_primitive(&self, i: usize, x: f64) -> f64 {
        let h = self.xs[i + 1] - self.xs[i];
        let t = x - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = t / h;
        let linear = self.ys[i] * (t - t * t / (2.0 * h)) + self.ys[i + 1] * t * t / (2.0 * h);
        let int_a = h * ((1.0 - a.powi(4)) / 4.0 - (1.0 - a * a) / 2.0);
        let int_b = h * (b.powi(4) / 4.0 - b * b / 2.0);
        self.cumulative[i] + linear + h * h / 6.0 * (self.y2s[i] * int_a + self.y2s[i + 1] * int_b)
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let n = self.last();
        if x < self.xs[0] {
            let slope = self.spline_derivative(0, self.xs[0]);
            return Ok(self.ys[0] + slope * (x - self.xs[0]));
        }
        if x > self.xs[n] {
            let slope = self.spline_derivative(n - 1, self.xs[n]);
            return Ok(self.ys[n] + slope * (x - self.xs[n]));
        }
        Ok(self.spline_value(find_segment(&self.xs, x), x))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let n = self.last();
        if x < self.xs[0] {
            return Ok(self.spline_derivative(0, self.xs[0]));
        }
        if x > self.xs[n] {
            return Ok(self.spline_derivative(n - 1, self.xs[n]));
        }
        Ok(self.spline_derivative(find_segment(&self.xs, x), x))
    }

    fn primitive(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let n = self.last();
        if x < self.xs[0] {
            let dx = x - self.xs[0];
            let slope = self.spline_derivative(0, self.xs[0]);
            return Ok(self.ys[0] * dx + 0.5 * slope * dx * dx);
        }
        if x > self.xs[n] {
            let dx = x - self.xs[n];
            let slope = self.spline_derivative(n - 1, self.xs[n]);
            return Ok(self.cumulative[n] + self.ys[n] * dx + 0.5 * slope * dx * dx);
        }
        Ok(self.spline_primitive(find_segment(&self.xs, x), x))
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.last()]
    }
}

/// Computes the second derivatives for natural cubic spline.
fn compute_second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut y2s = vec![0.0; n];
    let mut u = vec![0.0; n - 1];

    // Tridiagonal decomposition
    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * y2s[i - 1] + 2.0;
        y2s[i] = (sig - 1.0) / p;
        u[i] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
            - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (6.0 * u[i] / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }

    // Back-substitution; y2s[n-1] stays 0
    for i in (0..n - 1).rev() {
        y2s[i] = y2s[i] * y2s[i + 1] + u[i];
    }

    y2s
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cubic_spline_through_points() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 4.0, 9.0];
        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(spline.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_natural_end_conditions() {
        let spline = CubicSpline::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 0.0, 1.0]).unwrap();
        assert_eq!(spline.y2s[0], 0.0);
        assert_eq!(spline.y2s[3], 0.0);
    }

    #[test]
    fn test_two_points_is_linear() {
        let spline = CubicSpline::new(vec![1.0, 3.0], vec![2.0, 6.0]).unwrap();
        assert_relative_eq!(spline.interpolate(2.0).unwrap(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(spline.derivative(1.5).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(spline.primitive(3.0).unwrap(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_extrapolation() {
        let spline = CubicSpline::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0])
            .unwrap()
            .with_extrapolation();
        let end_slope = spline.derivative(3.0).unwrap();
        assert_relative_eq!(
            spline.interpolate(4.0).unwrap(),
            9.0 + end_slope,
            epsilon = 1e-12
        );
        assert_relative_eq!(spline.derivative(5.0).unwrap(), end_slope, epsilon = 1e-12);
        let start_slope = spline.derivative(0.0).unwrap();
        assert_relative_eq!(spline.interpolate(-1.0).unwrap(), -start_slope, epsilon = 1e-12);
    }

    #[test]
    fn test_primitive_continuous_at_end() {
        let spline = CubicSpline::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0])
            .unwrap()
            .with_extrapolation();
        let inside = spline.primitive(3.0).unwrap();
        let outside = spline.primitive(3.0 + 1e-9).unwrap();
        assert!((outside - inside).abs() < 1e-7);
    }

    #[test]
    fn test_extrapolation_error() {
        let spline = CubicSpline::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0]).unwrap();
        assert!(spline.interpolate(-0.5).is_err());
        assert!(spline.interpolate(3.5).is_err());
    }
}
