//! Interest compounding and the discount factor / rate conversions it implies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interest compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Simple interest: `df = 1 / (1 + r t)`.
    Simple,
    /// Annual compounding (1x per year)
    Annual,
    /// Semi-annual compounding (2x per year)
    SemiAnnual,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Monthly compounding (12x per year)
    Monthly,
    /// Continuous compounding: `df = exp(-r t)`.
    #[default]
    Continuous,
}

impl Compounding {
    /// Compounding periods per year; `None` for simple and continuous.
    #[must_use]
    pub fn periods_per_year(&self) -> Option<f64> {
        match self {
            Compounding::Simple | Compounding::Continuous => None,
            Compounding::Annual => Some(1.0),
            Compounding::SemiAnnual => Some(2.0),
            Compounding::Quarterly => Some(4.0),
            Compounding::Monthly => Some(12.0),
        }
    }

    /// Discount factor for `rate` over `t` years.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        match self {
            Compounding::Simple => 1.0 / (1.0 + rate * t),
            Compounding::Continuous => (-rate * t).exp(),
            _ => {
                let n = self.periods_per_year().unwrap_or(1.0);
                (1.0 + rate / n).powf(-n * t)
            }
        }
    }

    /// Rate implied by discount factor `df` over `t` years.
    ///
    /// `t` must be positive; callers handle the zero-time limit.
    #[must_use]
    pub fn zero_rate(&self, df: f64, t: f64) -> f64 {
        match self {
            Compounding::Simple => (1.0 / df - 1.0) / t,
            Compounding::Continuous => -df.ln() / t,
            _ => {
                let n = self.periods_per_year().unwrap_or(1.0);
                n * (df.powf(-1.0 / (n * t)) - 1.0)
            }
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Simple => "Simple",
            Compounding::Annual => "Annual",
            Compounding::SemiAnnual => "Semi-Annual",
            Compounding::Quarterly => "Quarterly",
            Compounding::Monthly => "Monthly",
            Compounding::Continuous => "Continuous",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_continuous() {
        let df = Compounding::Continuous.discount_factor(0.05, 2.0);
        assert_relative_eq!(df, (-0.1f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(Compounding::Continuous.zero_rate(df, 2.0), 0.05, epsilon = 1e-14);
    }

    #[test]
    fn test_simple() {
        let df = Compounding::Simple.discount_factor(0.02, 0.5);
        assert_relative_eq!(df, 1.0 / 1.01, epsilon = 1e-15);
        assert_relative_eq!(Compounding::Simple.zero_rate(df, 0.5), 0.02, epsilon = 1e-14);
    }

    #[test]
    fn test_periodic_inverse() {
        for c in [
            Compounding::Annual,
            Compounding::SemiAnnual,
            Compounding::Quarterly,
            Compounding::Monthly,
        ] {
            let df = c.discount_factor(0.04, 3.25);
            assert!(df > 0.0 && df < 1.0);
            assert_relative_eq!(c.zero_rate(df, 3.25), 0.04, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_semiannual_value() {
        let df = Compounding::SemiAnnual.discount_factor(0.06, 1.0);
        assert_relative_eq!(df, 1.0 / 1.03f64.powi(2), epsilon = 1e-15);
    }
}
