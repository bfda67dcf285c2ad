//! Error types for curve construction and queries.

use tenor_core::types::Date;
use tenor_core::CoreError;
use tenor_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A rate helper is malformed or cannot be priced.
    #[error("Invalid helper: {reason}")]
    InvalidHelper {
        /// Description of what's wrong with the helper.
        reason: String,
    },

    /// Two helpers share the same pillar date.
    #[error("More than one helper with pillar date {date}")]
    DuplicateMaturity {
        /// The shared pillar date.
        date: Date,
    },

    /// The curve was given no helpers.
    #[error("No rate helpers given")]
    EmptyCurve,

    /// The solver could not find node `node`.
    #[error(
        "Bootstrap failed at node {node} ({helper}) after {iterations} iterations \
         (residual: {residual:.2e}): {reason}"
    )]
    BootstrapConvergence {
        /// Node index (1-based, node 0 is the reference date).
        node: usize,
        /// Description of the helper being solved.
        helper: String,
        /// Iterations spent on the node.
        iterations: u32,
        /// Last quote residual seen.
        residual: f64,
        /// Why the solve stopped.
        reason: String,
    },

    /// Query outside the curve range with extrapolation disabled.
    #[error("Time {t:.6} is outside the curve range [0, {max_t:.6}] and extrapolation is disabled")]
    Extrapolation {
        /// Requested time in years from the reference date.
        t: f64,
        /// Time of the last node.
        max_t: f64,
    },

    /// The curve has not been solved.
    #[error("Curve not built: {reason}")]
    CurveNotBuilt {
        /// Current state, or the stored failure.
        reason: String,
    },

    /// Invalid bootstrap settings.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the invalid setting.
        reason: String,
    },

    /// Error from interpolation or root finding.
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Error from dates, calendars or day counts.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates an invalid helper error.
    #[must_use]
    pub fn invalid_helper(reason: impl Into<String>) -> Self {
        Self::InvalidHelper {
            reason: reason.into(),
        }
    }

    /// Creates a curve-not-built error.
    #[must_use]
    pub fn not_built(reason: impl Into<String>) -> Self {
        Self::CurveNotBuilt {
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Creates a bootstrap convergence error.
    #[must_use]
    pub fn convergence(
        node: usize,
        helper: impl Into<String>,
        iterations: u32,
        residual: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self::BootstrapConvergence {
            node,
            helper: helper.into(),
            iterations,
            residual,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::Extrapolation { t: 31.0, max_t: 30.0 };
        assert!(err.to_string().contains("extrapolation is disabled"));

        let err = CurveError::convergence(3, "Swap 2Y", 12, 1e-3, "no sign change");
        let msg = err.to_string();
        assert!(msg.contains("node 3"));
        assert!(msg.contains("Swap 2Y"));
    }

    #[test]
    fn test_from_math_error() {
        let err: CurveError = MathError::invalid_input("bad").into();
        assert!(matches!(err, CurveError::Math(_)));
    }
}
