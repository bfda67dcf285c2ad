//! Swap rate helper.

use serde::{Deserialize, Serialize};

use tenor_core::calendars::{BusinessDayConvention, Calendar, CalendarKind};
use tenor_core::daycounts::{DayCount, DayCountConvention};
use tenor_core::quote::SimpleQuote;
use tenor_core::types::{Date, Frequency, Period, TimeUnit};

use super::{format_rate, HelperKind, RateHelper};
use crate::error::{CurveError, CurveResult};
use crate::index::IborIndex;
use crate::schedule::{roll, Schedule, ScheduleConfig};
use crate::traits::YieldTermStructure;

/// Market conventions for vanilla fixed vs IBOR swaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapConventions {
    /// Calendar for spot and the fixed leg.
    pub calendar: CalendarKind,
    /// Fixed leg payment frequency.
    pub fixed_frequency: Frequency,
    /// Fixed leg date adjustment.
    pub fixed_convention: BusinessDayConvention,
    /// Fixed leg accrual day count.
    pub fixed_day_count: DayCountConvention,
    /// Floating leg index.
    pub index: IborIndex,
    /// Spread over the index on the floating leg.
    pub spread: f64,
    /// Delay from spot to the swap start.
    pub forward_start: Period,
}

impl Default for SwapConventions {
    fn default() -> Self {
        Self {
            calendar: CalendarKind::Target,
            fixed_frequency: Frequency::SemiAnnual,
            fixed_convention: BusinessDayConvention::ModifiedFollowing,
            fixed_day_count: DayCountConvention::Thirty360US,
            index: IborIndex::usd_libor(Period::months(3)),
            spread: 0.0,
            forward_start: Period::days(0),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct FixedPeriod {
    payment: Date,
    accrual: f64,
}

#[derive(Debug, Clone, Copy)]
struct FloatingPeriod {
    start: Date,
    payment: Date,
    index_end: Date,
    accrual: f64,
}

/// A spot or forward-starting swap quoted at its par fixed rate.
///
/// The implied quote is the floating leg value over the fixed leg annuity,
/// both discounted on the curve being built.
#[derive(Debug, Clone)]
pub struct SwapRateHelper {
    quote: SimpleQuote,
    tenor: Period,
    start: Date,
    maturity: Date,
    pillar: Date,
    spread: f64,
    index: IborIndex,
    fixed: Vec<FixedPeriod>,
    floating: Vec<FloatingPeriod>,
}

impl SwapRateHelper {
    /// Creates a swap of `tenor` traded on `evaluation_date`.
    ///
    /// Spot is the index fixing days after trade on the swap calendar; the
    /// swap starts `forward_start` after spot.
    pub fn new(
        quote: SimpleQuote,
        tenor: Period,
        conventions: &SwapConventions,
        evaluation_date: Date,
    ) -> CurveResult<Self> {
        if tenor.length() <= 0 {
            return Err(CurveError::invalid_helper(format!(
                "swap tenor {tenor} must be positive"
            )));
        }
        let fixed_tenor = conventions.fixed_frequency.period().ok_or_else(|| {
            CurveError::invalid_helper(format!(
                "fixed leg frequency {} has no regular period",
                conventions.fixed_frequency
            ))
        })?;

        let calendar = conventions.calendar;
        let index = &conventions.index;
        let spot = calendar.advance(
            evaluation_date,
            index.fixing_days as i32,
            TimeUnit::Days,
            BusinessDayConvention::Following,
            false,
        )?;
        let start = calendar.advance_period(
            spot,
            conventions.forward_start,
            conventions.fixed_convention,
            false,
        )?;
        let termination = roll(start, tenor, 1)?;

        let fixed_schedule = Schedule::generate(
            ScheduleConfig::new(start, termination, fixed_tenor)
                .with_calendar(calendar)
                .with_convention(conventions.fixed_convention),
        )?;
        let floating_schedule = Schedule::generate(
            ScheduleConfig::new(start, termination, index.tenor)
                .with_calendar(index.calendar)
                .with_convention(index.convention)
                .with_end_of_month(index.end_of_month),
        )?;

        let fixed: Vec<FixedPeriod> = fixed_schedule
            .periods()
            .map(|(s, e)| FixedPeriod {
                payment: e,
                accrual: conventions.fixed_day_count.year_fraction(s, e),
            })
            .collect();
        let floating = floating_schedule
            .periods()
            .map(|(s, e)| {
                Ok(FloatingPeriod {
                    start: s,
                    payment: e,
                    index_end: index.maturity_date(s)?,
                    accrual: index.day_count.year_fraction(s, e),
                })
            })
            .collect::<CurveResult<Vec<_>>>()?;

        let maturity = fixed
            .iter()
            .map(|p| p.payment)
            .chain(floating.iter().map(|p| p.payment))
            .max()
            .unwrap_or(start);
        let pillar = floating
            .iter()
            .map(|p| p.index_end)
            .fold(maturity, Date::max);

        Ok(Self {
            quote,
            tenor,
            start,
            maturity,
            pillar,
            spread: conventions.spread,
            index: index.clone(),
            fixed,
            floating,
        })
    }

    /// Swap tenor.
    #[must_use]
    pub fn tenor(&self) -> Period {
        self.tenor
    }

    /// Floating leg index.
    #[must_use]
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// Fixed leg annuity: `Σ τ_i df(pay_i)`.
    pub fn annuity(&self, curve: &dyn YieldTermStructure) -> CurveResult<f64> {
        self.fixed.iter().try_fold(0.0, |acc, p| {
            Ok(acc + p.accrual * curve.discount(p.payment)?)
        })
    }

    /// Floating leg value: forwards plus spread, accrued and discounted.
    pub fn floating_leg_value(&self, curve: &dyn YieldTermStructure) -> CurveResult<f64> {
        self.floating.iter().try_fold(0.0, |acc, p| {
            let forward = self.index.forecast_between(curve, p.start, p.index_end)?;
            Ok(acc + (forward + self.spread) * p.accrual * curve.discount(p.payment)?)
        })
    }
}

impl RateHelper for SwapRateHelper {
    fn quote(&self) -> &SimpleQuote {
        &self.quote
    }

    fn earliest_date(&self) -> Date {
        self.start
    }

    fn maturity_date(&self) -> Date {
        self.maturity
    }

    fn pillar_date(&self) -> Date {
        self.pillar
    }

    fn implied_quote(&self, curve: &dyn YieldTermStructure) -> CurveResult<f64> {
        let annuity = self.annuity(curve)?;
        if annuity <= 0.0 || !annuity.is_finite() {
            return Err(CurveError::invalid_helper(format!(
                "{}: fixed leg annuity {annuity} is not positive",
                self.description()
            )));
        }
        Ok(self.floating_leg_value(curve)? / annuity)
    }

    fn description(&self) -> String {
        format!("Swap {} {}", self.tenor, format_rate(&self.quote))
    }

    fn kind(&self) -> HelperKind {
        HelperKind::Swap
    }
}
