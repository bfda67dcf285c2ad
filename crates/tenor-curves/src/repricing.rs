//! Repricing validation for bootstrapped curves.
//!
//! A bootstrapped curve must give back every quote it was fitted to. The
//! report prices each helper on the solved curve and compares the implied
//! quote with the market quote.
//!
//! # Usage
//!
//! ```rust,ignore
//! let curve = PiecewiseYieldCurve::bootstrap(/* ... */)?;
//! let report = RepricingReport::check(&curve)?;
//! if !report.is_valid() {
//!     eprintln!("Failed helpers: {:?}", report.failed_helpers());
//! }
//! println!("{report}");
//! ```

use std::fmt;

use tenor_core::types::Date;

use crate::error::CurveResult;
use crate::helpers::{HelperKind, RateHelper};
use crate::piecewise::PiecewiseYieldCurve;
use crate::traits::YieldTermStructure;

/// Result of repricing a single helper against the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RepricingCheck {
    /// Helper description (e.g., "Swap 5Y 3.1000%")
    pub helper_id: String,

    /// Helper type
    pub kind: HelperKind,

    /// Pillar date of the helper's node
    pub pillar: Date,

    /// Market quote
    pub market_quote: f64,

    /// Quote implied by the curve
    pub implied_quote: f64,

    /// Absolute error |implied - market|
    pub error: f64,

    /// Tolerance applied
    pub tolerance: f64,

    /// Whether the helper passed
    pub passed: bool,
}

impl RepricingCheck {
    /// Creates a new repricing check result.
    #[must_use]
    pub fn new(
        helper_id: String,
        kind: HelperKind,
        pillar: Date,
        market_quote: f64,
        implied_quote: f64,
        tolerance: f64,
    ) -> Self {
        let error = (implied_quote - market_quote).abs();
        let passed = error <= tolerance;

        Self {
            helper_id,
            kind,
            pillar,
            market_quote,
            implied_quote,
            error,
            tolerance,
            passed,
        }
    }

    /// Prices `helper` on `curve`.
    pub fn from_helper(
        helper: &dyn RateHelper,
        curve: &dyn YieldTermStructure,
        tolerance: f64,
    ) -> CurveResult<Self> {
        Ok(Self::new(
            helper.description(),
            helper.kind(),
            helper.pillar_date(),
            helper.quote_value()?,
            helper.implied_quote(curve)?,
            tolerance,
        ))
    }
}

impl fmt::Display for RepricingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "✓" } else { "✗" };
        write!(
            f,
            "{} {:<24} | {} | Market: {:.6}% | Implied: {:.6}% | Error: {:.2e} (tol: {:.2e})",
            status,
            self.helper_id,
            self.pillar,
            self.market_quote * 100.0,
            self.implied_quote * 100.0,
            self.error,
            self.tolerance
        )
    }
}

/// Repricing report over all helpers of a curve.
#[derive(Debug, Clone)]
pub struct RepricingReport {
    /// Individual helper checks
    checks: Vec<RepricingCheck>,

    /// Maximum absolute error across all helpers
    max_error: f64,

    /// Root mean square of all errors
    rms_error: f64,

    /// Whether all helpers passed
    all_passed: bool,

    /// Number of helpers that passed
    passed_count: usize,
}

impl RepricingReport {
    /// Creates a new repricing report from individual checks.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>) -> Self {
        let max_error = checks.iter().map(|c| c.error).fold(0.0_f64, f64::max);

        let rms_error = if checks.is_empty() {
            0.0
        } else {
            let sum_sq: f64 = checks.iter().map(|c| c.error * c.error).sum();
            (sum_sq / checks.len() as f64).sqrt()
        };

        let all_passed = checks.iter().all(|c| c.passed);
        let passed_count = checks.iter().filter(|c| c.passed).count();

        Self {
            checks,
            max_error,
            rms_error,
            all_passed,
            passed_count,
        }
    }

    /// Reprices every helper of a solved curve against its tolerance.
    ///
    /// Tolerances below double precision resolution are relaxed to
    /// [`RESIDUAL_FLOOR`](crate::config::RESIDUAL_FLOOR).
    ///
    /// # Errors
    ///
    /// Returns `CurveError::CurveNotBuilt` if the curve is not solved.
    pub fn check(curve: &PiecewiseYieldCurve) -> CurveResult<Self> {
        let tolerance = curve.config().effective_tolerance();
        let checks = curve
            .helpers()
            .iter()
            .map(|h| RepricingCheck::from_helper(h.as_ref(), curve, tolerance))
            .collect::<CurveResult<Vec<_>>>()?;
        Ok(Self::new(checks))
    }

    /// Returns whether all helpers passed repricing validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.all_passed
    }

    /// Returns the individual repricing checks.
    #[must_use]
    pub fn checks(&self) -> &[RepricingCheck] {
        &self.checks
    }

    /// Returns the maximum absolute error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Returns the RMS error.
    #[must_use]
    pub fn rms_error(&self) -> f64 {
        self.rms_error
    }

    /// Returns the number of helpers that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.passed_count
    }

    /// Returns failed checks.
    #[must_use]
    pub fn failed(&self) -> Vec<&RepricingCheck> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }

    /// Returns failed helper descriptions for error messages.
    #[must_use]
    pub fn failed_helpers(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.helper_id.as_str())
            .collect()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repricing Report")?;
        writeln!(f, "================")?;
        writeln!(f, "Status: {}", if self.all_passed { "PASSED" } else { "FAILED" })?;
        writeln!(f, "Helpers: {}/{} passed", self.passed_count, self.checks.len())?;
        writeln!(f, "Max Error: {:.2e}", self.max_error)?;
        writeln!(f, "RMS Error: {:.2e}", self.rms_error)?;

        if !self.checks.is_empty() {
            writeln!(f)?;
            writeln!(f, "Details:")?;
            for check in &self.checks {
                writeln!(f, "  {check}")?;
            }
        }

        Ok(())
    }
}
