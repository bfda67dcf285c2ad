//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Requires `f(a)` and `f(b)` of opposite signs (or one of them zero).
///
/// Converges when `|f(x)| <= config.tolerance`, or when the bracket has
/// shrunk to floating-point resolution around the root; in the latter case
/// the returned residual may exceed the tolerance and the caller decides
/// whether it is acceptable.
///
/// # Errors
///
/// - [`MathError::InvalidBracket`] if the endpoints do not bracket a root
/// - [`MathError::NonFiniteValue`] if `f` returns NaN or infinity
/// - [`MathError::ConvergenceFailed`] when `max_iterations` is exhausted
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{brent, SolverConfig};
///
/// // Find root of x^3 - x - 2
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((f(result.root)).abs() < 1e-10);
/// ```
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let eval = |x: f64| -> MathResult<f64> {
        let fx = f(x);
        if fx.is_finite() {
            Ok(fx)
        } else {
            Err(MathError::NonFiniteValue { x })
        }
    };

    let mut a = a;
    let mut b = b;
    let mut fa = eval(a)?;
    let mut fb = eval(b)?;

    if fa == 0.0 {
        return Ok(SolverResult {
            root: a,
            iterations: 0,
            residual: 0.0,
        });
    }
    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for iteration in 0..config.max_iterations {
        // Keep the root between b and c
        if (fb > 0.0 && fc > 0.0) || (fb < 0.0 && fc < 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        // b is the best estimate
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let resolution = 2.0 * f64::EPSILON * b.abs().max(1.0);
        let xm = 0.5 * (c - b);

        if fb.abs() <= config.tolerance || xm.abs() <= resolution {
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        if e.abs() >= resolution && fa.abs() > fb.abs() {
            let s = fb / fa;
            let mut p;
            let mut q;
            if a == c {
                // Secant step
                p = 2.0 * xm * s;
                q = 1.0 - s;
            } else {
                // Inverse quadratic interpolation
                let qq = fa / fc;
                let r = fb / fc;
                p = s * (2.0 * xm * qq * (qq - r) - (b - a) * (r - 1.0));
                q = (qq - 1.0) * (r - 1.0) * (s - 1.0);
            }
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (resolution * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                // Interpolation rejected, bisect
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        if d.abs() > resolution {
            b += d;
        } else {
            b += resolution.copysign(xm);
        }
        fb = eval(b)?;
    }

    Err(MathError::convergence_failed(config.max_iterations, fb.abs()))
}
