//! Rate helpers: market quotes the bootstrapper fits node by node.
//!
//! A helper owns a handle to an observable [`SimpleQuote`], the dates it
//! settles on and a pricing function that returns the quote a curve implies.
//! Each helper contributes one curve node, on its pillar date.
//!
//! - [`DepositRateHelper`]: single-period money market deposit
//! - [`SwapRateHelper`]: fixed vs IBOR swap quoted at its par rate

mod deposit;
mod swap;

pub use deposit::{DepositConventions, DepositRateHelper};
pub use swap::{SwapConventions, SwapRateHelper};

use serde::{Deserialize, Serialize};

use tenor_core::quote::SimpleQuote;
use tenor_core::types::Date;

use crate::error::{CurveError, CurveResult};
use crate::traits::YieldTermStructure;

/// Helper type, used in reports and for tie-break ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HelperKind {
    /// Money market deposit
    Deposit,
    /// Fixed vs floating interest rate swap
    Swap,
}

impl std::fmt::Display for HelperKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Swap => write!(f, "Swap"),
        }
    }
}

/// A market quote the curve must reprice.
///
/// Implementations must only read discount factors at dates on or before
/// [`pillar_date`](RateHelper::pillar_date), so that the node on that date
/// is the last unknown when the helper is solved.
pub trait RateHelper: Send + Sync {
    /// The observable quote.
    fn quote(&self) -> &SimpleQuote;

    /// Current quote value.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidHelper` if the quote is empty.
    fn quote_value(&self) -> CurveResult<f64> {
        self.quote().value().ok_or_else(|| {
            CurveError::invalid_helper(format!("{} has no valid quote", self.description()))
        })
    }

    /// First date whose discount factor the helper reads.
    fn earliest_date(&self) -> Date;

    /// Final cash flow date.
    fn maturity_date(&self) -> Date;

    /// Date of the node this helper solves for.
    fn pillar_date(&self) -> Date {
        self.maturity_date()
    }

    /// Quote implied by `curve`.
    fn implied_quote(&self, curve: &dyn YieldTermStructure) -> CurveResult<f64>;

    /// Implied minus market quote.
    fn quote_error(&self, curve: &dyn YieldTermStructure) -> CurveResult<f64> {
        let quote = self.quote_value()?;
        Ok(self.implied_quote(curve)? - quote)
    }

    /// Human-readable description (e.g., "Deposit 3M 2.50%").
    fn description(&self) -> String;

    /// Helper type.
    fn kind(&self) -> HelperKind;
}

impl std::fmt::Debug for dyn RateHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateHelper")
            .field("kind", &self.kind())
            .field("pillar", &self.pillar_date())
            .field("quote", &self.quote().value())
            .finish()
    }
}

/// Formats a quote as a percentage for descriptions.
pub(crate) fn format_rate(quote: &SimpleQuote) -> String {
    match quote.value() {
        Some(v) => format!("{:.4}%", v * 100.0),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! A flat curve for pricing helpers in isolation.

    use tenor_core::daycounts::DayCountConvention;
    use tenor_core::types::Date;

    use crate::error::CurveResult;
    use crate::traits::YieldTermStructure;

    /// Continuously compounded flat curve.
    pub struct FlatCurve {
        pub reference: Date,
        pub rate: f64,
        pub day_count: DayCountConvention,
    }

    impl YieldTermStructure for FlatCurve {
        fn reference_date(&self) -> Date {
            self.reference
        }

        fn day_count(&self) -> DayCountConvention {
            self.day_count
        }

        fn max_date(&self) -> Date {
            self.reference.add_days(365 * 100)
        }

        fn allows_extrapolation(&self) -> bool {
            true
        }

        fn discount_t(&self, t: f64) -> CurveResult<f64> {
            Ok((-self.rate * t).exp())
        }
    }
}
