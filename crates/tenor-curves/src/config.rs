//! Bootstrap settings.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Smallest quote residual the solver is held to.
///
/// Tighter tolerances are accepted but cannot be met in double precision;
/// node solves and repricing checks fall back to this floor.
pub const RESIDUAL_FLOOR: f64 = 1e-12;

/// Solver and query settings for a piecewise curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Target absolute error on each helper's quote.
    pub tolerance: f64,
    /// Iteration cap per node solve, and pass cap for non-local interpolation.
    pub max_iterations: u32,
    /// Whether queries beyond the last pillar are answered.
    pub extrapolation: bool,
    /// Forbid discount factors from increasing between nodes.
    pub monotone: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 100,
            extrapolation: false,
            monotone: false,
        }
    }
}

impl BootstrapConfig {
    /// Sets the quote tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Enables or disables extrapolation.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: bool) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Enables or disables monotone discounting.
    #[must_use]
    pub fn with_monotone(mut self, monotone: bool) -> Self {
        self.monotone = monotone;
        self
    }

    /// Tolerance actually enforced, never below [`RESIDUAL_FLOOR`].
    #[must_use]
    pub fn effective_tolerance(&self) -> f64 {
        self.tolerance.max(RESIDUAL_FLOOR)
    }

    /// Checks the settings.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidConfig` if the tolerance is not positive
    /// or the iteration cap is zero.
    pub fn validate(&self) -> CurveResult<()> {
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(CurveError::invalid_config(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(CurveError::invalid_config("max_iterations must be at least 1"));
        }
        Ok(())
    }
}
