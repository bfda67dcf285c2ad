//! Curve setup.
//!
//! Describes which instruments make up the curve, where their quotes come
//! from, and how the curve is bootstrapped. Loaded from TOML; the default
//! is a USD Libor curve of deposits and semiannual swaps.
//!
//! ```toml
//! calendar = "Target"
//! day_count = "ACT/ACT ISDA"
//! interpolation = "LogLinear"
//!
//! [[instruments]]
//! kind = "Deposit"
//! tenor = "3M"
//! label = "Libor3M"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use tenor_core::calendars::{BusinessDayConvention, Calendar, CalendarKind};
use tenor_core::daycounts::DayCountConvention;
use tenor_core::quote::SimpleQuote;
use tenor_core::types::{Date, Period, TimeUnit};
use tenor_curves::helpers::{
    DepositConventions, DepositRateHelper, HelperKind, RateHelper, SwapConventions, SwapRateHelper,
};
use tenor_curves::{BootstrapConfig, BootstrapTrait, CurveResult, InterpolationMethod, PiecewiseYieldCurve};

use crate::data::QuoteRow;
use crate::error::{CliError, CliResult};

/// One curve instrument and the column holding its quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSpec {
    /// Instrument type.
    pub kind: HelperKind,
    /// Instrument tenor.
    pub tenor: Period,
    /// Quote column in the quotes file.
    pub label: String,
}

impl InstrumentSpec {
    fn new(kind: HelperKind, tenor: Period, label: &str) -> Self {
        Self {
            kind,
            tenor,
            label: label.to_string(),
        }
    }
}

/// Everything needed to bootstrap a curve from a row of quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSetup {
    /// Calendar for the evaluation and settlement dates.
    pub calendar: CalendarKind,
    /// Business days from evaluation to the curve reference date.
    pub settlement_days: u32,
    /// Curve time measure.
    pub day_count: DayCountConvention,
    /// Interpolation between nodes.
    pub interpolation: InterpolationMethod,
    /// Node quantity.
    pub bootstrap_trait: BootstrapTrait,
    /// Solver and query settings.
    pub bootstrap: BootstrapConfig,
    /// Deposit conventions.
    pub deposit: DepositConventions,
    /// Swap conventions.
    pub swap: SwapConventions,
    /// Curve instruments.
    pub instruments: Vec<InstrumentSpec>,
}

impl Default for CurveSetup {
    fn default() -> Self {
        Self {
            calendar: CalendarKind::Target,
            settlement_days: 2,
            day_count: DayCountConvention::ActActIsda,
            interpolation: InterpolationMethod::LogLinear,
            bootstrap_trait: BootstrapTrait::Discount,
            bootstrap: BootstrapConfig::default().with_tolerance(1e-15).with_extrapolation(true),
            deposit: DepositConventions::default(),
            swap: SwapConventions::default(),
            instruments: vec![
                InstrumentSpec::new(HelperKind::Deposit, Period::months(1), "Libor1M"),
                InstrumentSpec::new(HelperKind::Deposit, Period::months(3), "Libor3M"),
                InstrumentSpec::new(HelperKind::Deposit, Period::months(6), "Libor6M"),
                InstrumentSpec::new(HelperKind::Swap, Period::years(1), "Swap1Y"),
                InstrumentSpec::new(HelperKind::Swap, Period::years(2), "Swap2Y"),
                InstrumentSpec::new(HelperKind::Swap, Period::years(3), "Swap3Y"),
                InstrumentSpec::new(HelperKind::Swap, Period::years(4), "Swap4Y"),
                InstrumentSpec::new(HelperKind::Swap, Period::years(5), "Swap5Y"),
                InstrumentSpec::new(HelperKind::Swap, Period::years(7), "Swap7Y"),
                InstrumentSpec::new(HelperKind::Swap, Period::years(10), "Swap10Y"),
                InstrumentSpec::new(HelperKind::Swap, Period::years(30), "Swap30Y"),
            ],
        }
    }
}

impl CurveSetup {
    /// Loads a setup from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let setup: Self = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        setup.validate()?;
        debug!(path = %path.display(), instruments = setup.instruments.len(), "curve setup loaded");
        Ok(setup)
    }

    /// Loads from `path`, or falls back to the default setup.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Checks the setup before any curve is built.
    pub fn validate(&self) -> CliResult<()> {
        if self.instruments.is_empty() {
            return Err(CliError::Config("no instruments configured".to_string()));
        }
        self.bootstrap.validate()?;
        Ok(())
    }

    /// Curve reference date for an observation date.
    ///
    /// The observation date is moved to a business day, then advanced by the
    /// settlement days.
    pub fn settlement_date(&self, observation: Date) -> CurveResult<Date> {
        let evaluation = self.calendar.adjust(observation, BusinessDayConvention::Following);
        Ok(self.calendar.advance(
            evaluation,
            self.settlement_days as i32,
            TimeUnit::Days,
            BusinessDayConvention::Following,
            false,
        )?)
    }

    /// Builds the helpers for one row of quotes.
    ///
    /// Missing quotes become empty quotes, so the bootstrap rejects the date.
    pub fn helpers(&self, observation: Date, quotes: &QuoteRow<'_>) -> CurveResult<Vec<Box<dyn RateHelper>>> {
        let evaluation = self.calendar.adjust(observation, BusinessDayConvention::Following);
        self.instruments
            .iter()
            .map(|spec| {
                let quote = quotes.get(&spec.label).map_or_else(SimpleQuote::empty, SimpleQuote::new);
                let helper: Box<dyn RateHelper> = match spec.kind {
                    HelperKind::Deposit => Box::new(DepositRateHelper::new(
                        quote,
                        spec.tenor,
                        &self.deposit,
                        evaluation,
                    )?),
                    HelperKind::Swap => Box::new(SwapRateHelper::new(
                        quote,
                        spec.tenor,
                        &self.swap,
                        evaluation,
                    )?),
                };
                Ok(helper)
            })
            .collect()
    }

    /// Bootstraps the curve for one observation date.
    pub fn build_curve(&self, observation: Date, quotes: &QuoteRow<'_>) -> CurveResult<PiecewiseYieldCurve> {
        PiecewiseYieldCurve::bootstrap(
            self.settlement_date(observation)?,
            self.helpers(observation, quotes)?,
            self.day_count,
            self.interpolation,
            self.bootstrap_trait,
            self.bootstrap,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_setup() {
        let setup = CurveSetup::default();
        assert!(setup.validate().is_ok());
        assert_eq!(setup.instruments.len(), 11);
        assert!(setup.bootstrap.extrapolation);
        assert_eq!(setup.day_count, DayCountConvention::ActActIsda);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let setup: CurveSetup = toml::from_str(
            r#"
            interpolation = "Linear"
            bootstrap_trait = "ZeroYield"

            [bootstrap]
            tolerance = 1e-10

            [[instruments]]
            kind = "Deposit"
            tenor = "3M"
            label = "D3M"
            "#,
        )
        .unwrap();
        assert_eq!(setup.interpolation, InterpolationMethod::Linear);
        assert_eq!(setup.bootstrap_trait, BootstrapTrait::ZeroYield);
        assert_eq!(setup.bootstrap.tolerance, 1e-10);
        assert_eq!(setup.bootstrap.max_iterations, 100);
        assert_eq!(setup.instruments, vec![InstrumentSpec::new(HelperKind::Deposit, Period::months(3), "D3M")]);
        assert_eq!(setup.calendar, CalendarKind::Target);
    }

    #[test]
    fn test_settlement_skips_weekend() {
        let setup = CurveSetup::default();
        // Saturday observation: evaluate Monday, settle Wednesday
        let saturday = Date::from_ymd(2025, 3, 15).unwrap();
        assert_eq!(setup.settlement_date(saturday).unwrap(), Date::from_ymd(2025, 3, 19).unwrap());
    }

    #[test]
    fn test_empty_setup_rejected() {
        let setup = CurveSetup {
            instruments: Vec::new(),
            ..CurveSetup::default()
        };
        assert!(setup.validate().is_err());
    }
}
