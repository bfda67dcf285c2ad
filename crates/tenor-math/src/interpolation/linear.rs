//! Linear interpolation.

use super::{find_segment, validate_nodes, Interpolator};
use crate::error::MathResult;

/// Piecewise linear interpolation between data points.
///
/// Extrapolation, when enabled, extends the first or last segment.
///
/// # Example
///
/// ```rust
/// use tenor_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
/// assert!((interp.interpolate(1.5).unwrap() - 2.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Integral from xs[0] to xs[i]
    cumulative: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, the lengths differ,
    /// or the x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys)?;

        let mut cumulative = Vec::with_capacity(xs.len());
        cumulative.push(0.0);
        for i in 1..xs.len() {
            let area = 0.5 * (ys[i - 1] + ys[i]) * (xs[i] - xs[i - 1]);
            cumulative.push(cumulative[i - 1] + area);
        }

        Ok(Self {
            xs,
            ys,
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

    fn slope(&self, i: usize) -> f64 {
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let i = find_segment(&self.xs, x);
        Ok(self.ys[i] + self.slope(i) * (x - self.xs[i]))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        Ok(self.slope(find_segment(&self.xs, x)))
    }

    fn primitive(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let i = find_segment(&self.xs, x);
        let dx = x - self.xs[i];
        Ok(self.cumulative[i] + self.ys[i] * dx + 0.5 * self.slope(i) * dx * dx)
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
