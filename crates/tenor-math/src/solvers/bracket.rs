//! Outward bracket search.

use tracing::trace;

use crate::error::{MathError, MathResult};

/// Settings for [`find_bracket`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketConfig {
    /// First step away from the guess.
    pub initial_step: f64,
    /// Factor applied to the bracket width on every expansion.
    pub growth: f64,
    /// Lowest admissible x.
    pub lower: f64,
    /// Highest admissible x.
    pub upper: f64,
    /// Maximum number of function evaluations.
    pub max_evaluations: u32,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            initial_step: 0.01,
            growth: 1.6,
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
            max_evaluations: 100,
        }
    }
}

impl BracketConfig {
    /// Restricts the search to `[lower, upper]`.
    #[must_use]
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Sets the first step.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.initial_step = step;
        self
    }
}

/// Searches outward from `guess` for an interval on which `f` changes sign.
///
/// The guess is clamped into the bounds. At each step the endpoint whose
/// value is closer to zero is pushed further out, never beyond the bounds.
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if the bounds are empty or the step is not positive
/// - [`MathError::NonFiniteValue`] if `f` returns NaN or infinity
/// - [`MathError::InvalidBracket`] if both bounds are reached, or the
///   evaluation budget runs out, without a sign change
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{find_bracket, BracketConfig};
///
/// let config = BracketConfig::default().with_bounds(0.0, 10.0);
/// let (a, b) = find_bracket(|x| x - 7.5, 1.0, &config).unwrap();
/// assert!(a <= 7.5 && 7.5 <= b);
/// ```
pub fn find_bracket<F>(f: F, guess: f64, config: &BracketConfig) -> MathResult<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    if config.lower.is_nan() || config.upper.is_nan() || config.lower >= config.upper {
        return Err(MathError::invalid_input(format!(
            "empty search interval [{}, {}]",
            config.lower, config.upper
        )));
    }
    if config.initial_step.is_nan()
        || config.growth.is_nan()
        || config.initial_step <= 0.0
        || config.growth <= 1.0
    {
        return Err(MathError::invalid_input(
            "bracket step must be positive and growth above 1",
        ));
    }

    let eval = |x: f64| -> MathResult<f64> {
        let fx = f(x);
        if fx.is_finite() {
            Ok(fx)
        } else {
            Err(MathError::NonFiniteValue { x })
        }
    };
    let clamp = |x: f64| x.clamp(config.lower, config.upper);

    let mut lo = clamp(guess);
    let mut hi = clamp(lo + config.initial_step);
    if hi <= lo {
        hi = lo;
        lo = clamp(hi - config.initial_step);
    }
    let mut f_lo = eval(lo)?;
    let mut f_hi = eval(hi)?;
    let mut evaluations = 2;

    loop {
        if f_lo * f_hi <= 0.0 {
            trace!(lo, hi, evaluations, "bracket found");
            return Ok((lo, hi));
        }

        let lo_stuck = lo <= config.lower;
        let hi_stuck = hi >= config.upper;
        if (lo_stuck && hi_stuck) || evaluations >= config.max_evaluations {
            return Err(MathError::InvalidBracket {
                a: lo,
                b: hi,
                fa: f_lo,
                fb: f_hi,
            });
        }

        let width = hi - lo;
        let expand_low = !lo_stuck && (hi_stuck || f_lo.abs() < f_hi.abs());
        if expand_low {
            lo = clamp(lo - config.growth * width);
            f_lo = eval(lo)?;
        } else {
            hi = clamp(hi + config.growth * width);
            f_hi = eval(hi)?;
        }
        evaluations += 1;
    }
}
