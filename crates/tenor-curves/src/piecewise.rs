//! Piecewise yield curve bootstrapped from rate helpers.
//!
//! The curve has one node on the reference date and one per helper, on the
//! helper's pillar date. Nodes are solved in pillar order: node `i` is the
//! value that makes helper `i` reprice its market quote, with nodes `0..i`
//! already fixed. Each trial value is priced on a temporary curve over nodes
//! `0..=i`, so the curve never needs a reference to itself while solving.
//!
//! # Lifecycle
//!
//! ```text
//! Unbuilt ──build()──▶ Bootstrapping ──▶ Solved
//!                                    └─▶ Failed ──rebuild()──▶ Bootstrapping
//! ```
//!
//! Quote changes never trigger a rebuild; [`PiecewiseYieldCurve::is_stale`]
//! reports them and [`PiecewiseYieldCurve::rebuild`] refits.

use std::cell::RefCell;
use std::fmt;

use tracing::{debug, trace};

use tenor_core::daycounts::{DayCount, DayCountConvention};
use tenor_core::types::Date;
use tenor_math::interpolation::{Interpolator, BOUNDARY_TOLERANCE};
use tenor_math::solvers::{brent, find_bracket, BracketConfig, SolverConfig};
use tenor_math::MathError;

use crate::bootstrap::BootstrapTrait;
use crate::config::BootstrapConfig;
use crate::error::{CurveError, CurveResult};
use crate::helpers::RateHelper;
use crate::interpolation::InterpolationMethod;
use crate::traits::YieldTermStructure;

/// Bracket step as a fraction of the admissible range.
const BRACKET_STEP_FRACTION: f64 = 0.01;

/// Node solves target this fraction of the quote tolerance.
const SOLVER_TOLERANCE_FACTOR: f64 = 0.01;

/// Where a curve is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveState {
    /// Constructed and validated, not yet solved.
    Unbuilt,
    /// Node solving in progress.
    Bootstrapping,
    /// All nodes solved; queries are answered.
    Solved,
    /// The last build failed; `rebuild()` is the only way out.
    Failed(CurveError),
}

impl fmt::Display for CurveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbuilt => write!(f, "Unbuilt"),
            Self::Bootstrapping => write!(f, "Bootstrapping"),
            Self::Solved => write!(f, "Solved"),
            Self::Failed(err) => write!(f, "Failed: {err}"),
        }
    }
}

struct SolvedNodes {
    values: Vec<f64>,
    interpolator: Box<dyn Interpolator>,
}

/// A yield curve whose nodes are solved to reprice a set of rate helpers.
///
/// # Example
///
/// ```rust
/// use tenor_core::prelude::*;
/// use tenor_curves::prelude::*;
///
/// let trade = Date::from_ymd(2025, 3, 13).unwrap();
/// let conventions = DepositConventions::default();
/// let helper = DepositRateHelper::new(SimpleQuote::new(0.02), Period::months(1), &conventions, trade)
///     .unwrap();
/// let spot = helper.earliest_date();
///
/// let curve = PiecewiseYieldCurve::bootstrap(
///     spot,
///     vec![Box::new(helper)],
///     DayCountConvention::Act360,
///     InterpolationMethod::LogLinear,
///     BootstrapTrait::Discount,
///     BootstrapConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(curve.discount(spot).unwrap(), 1.0);
/// let df = curve.discount(curve.max_date()).unwrap();
/// assert!((df - 1.0 / (1.0 + 0.02 * 31.0 / 360.0)).abs() < 1e-12);
/// ```
pub struct PiecewiseYieldCurve {
    reference_date: Date,
    day_count: DayCountConvention,
    interpolation: InterpolationMethod,
    bootstrap_trait: BootstrapTrait,
    config: BootstrapConfig,
    helpers: Vec<Box<dyn RateHelper>>,
    dates: Vec<Date>,
    times: Vec<f64>,
    state: CurveState,
    nodes: Option<SolvedNodes>,
    quote_versions: Vec<u64>,
}

impl PiecewiseYieldCurve {
    /// Creates an unbuilt curve.
    ///
    /// Helpers are sorted by pillar date.
    ///
    /// # Errors
    ///
    /// - `EmptyCurve` if `helpers` is empty
    /// - `InvalidConfig` for a non-positive tolerance or zero iteration cap
    /// - `InvalidHelper` if a pillar is on or before the reference date, or
    ///   two pillars fall on the same curve time
    /// - `DuplicateMaturity` if two helpers share a pillar date
    pub fn new(
        reference_date: Date,
        mut helpers: Vec<Box<dyn RateHelper>>,
        day_count: DayCountConvention,
        interpolation: InterpolationMethod,
        bootstrap_trait: BootstrapTrait,
        config: BootstrapConfig,
    ) -> CurveResult<Self> {
        if helpers.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        config.validate()?;

        helpers.sort_by_key(|h| h.pillar_date());

        let mut dates = Vec::with_capacity(helpers.len() + 1);
        let mut times = Vec::with_capacity(helpers.len() + 1);
        dates.push(reference_date);
        times.push(0.0);

        for helper in &helpers {
            let pillar = helper.pillar_date();
            if pillar <= reference_date {
                return Err(CurveError::invalid_helper(format!(
                    "{}: pillar {pillar} is not after reference date {reference_date}",
                    helper.description()
                )));
            }
            let previous = dates[dates.len() - 1];
            if pillar == previous {
                return Err(CurveError::DuplicateMaturity { date: pillar });
            }
            let t = day_count.year_fraction(reference_date, pillar);
            if t <= times[times.len() - 1] {
                return Err(CurveError::invalid_helper(format!(
                    "{}: pillar {pillar} has the same curve time as {previous}",
                    helper.description()
                )));
            }
            dates.push(pillar);
            times.push(t);
        }

        Ok(Self {
            reference_date,
            day_count,
            interpolation,
            bootstrap_trait,
            config,
            helpers,
            dates,
            times,
            state: CurveState::Unbuilt,
            nodes: None,
            quote_versions: Vec::new(),
        })
    }

    /// Creates and builds a curve in one step.
    pub fn bootstrap(
        reference_date: Date,
        helpers: Vec<Box<dyn RateHelper>>,
        day_count: DayCountConvention,
        interpolation: InterpolationMethod,
        bootstrap_trait: BootstrapTrait,
        config: BootstrapConfig,
    ) -> CurveResult<Self> {
        let mut curve = Self::new(
            reference_date,
            helpers,
            day_count,
            interpolation,
            bootstrap_trait,
            config,
        )?;
        curve.build()?;
        Ok(curve)
    }

    /// Solves the nodes.
    ///
    /// Does nothing on a solved curve. On a failed curve the stored failure
    /// is returned again; call [`rebuild`](Self::rebuild) to retry.
    pub fn build(&mut self) -> CurveResult<()> {
        match &self.state {
            CurveState::Solved => return Ok(()),
            CurveState::Failed(err) => return Err(err.clone()),
            CurveState::Unbuilt | CurveState::Bootstrapping => {}
        }

        self.state = CurveState::Bootstrapping;
        let versions: Vec<u64> = self.helpers.iter().map(|h| h.quote().version()).collect();

        match self.solve_all() {
            Ok(nodes) => {
                debug!(
                    reference_date = %self.reference_date,
                    nodes = nodes.values.len(),
                    interpolation = %self.interpolation,
                    bootstrap_trait = %self.bootstrap_trait,
                    "curve bootstrapped"
                );
                self.nodes = Some(nodes);
                self.quote_versions = versions;
                self.state = CurveState::Solved;
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, "curve bootstrap failed");
                self.nodes = None;
                self.state = CurveState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Discards any solved or failed state and bootstraps again from node 0.
    pub fn rebuild(&mut self) -> CurveResult<()> {
        self.state = CurveState::Unbuilt;
        self.nodes = None;
        self.build()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &CurveState {
        &self.state
    }

    /// Returns true once all nodes are solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == CurveState::Solved
    }

    /// The error that left the curve failed, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&CurveError> {
        match &self.state {
            CurveState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true if any helper quote changed since the last successful build.
    ///
    /// A curve that has never been solved is always stale.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.quote_versions.len() != self.helpers.len()
            || self
                .helpers
                .iter()
                .zip(&self.quote_versions)
                .any(|(h, &v)| h.quote().version() != v)
    }

    /// Enables or disables extrapolation past the last pillar.
    pub fn set_extrapolation(&mut self, enabled: bool) {
        self.config.extrapolation = enabled;
    }

    /// Helpers in pillar order.
    #[must_use]
    pub fn helpers(&self) -> &[Box<dyn RateHelper>] {
        &self.helpers
    }

    /// Node dates: the reference date followed by each pillar.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Node times in years from the reference date.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Solved node values, in the bootstrap trait's quantity.
    pub fn node_values(&self) -> CurveResult<&[f64]> {
        Ok(&self.solved()?.values)
    }

    /// Solved nodes as (date, value) pairs.
    pub fn nodes(&self) -> CurveResult<Vec<(Date, f64)>> {
        let values = self.node_values()?;
        Ok(self.dates.iter().copied().zip(values.iter().copied()).collect())
    }

    /// Interpolation method.
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMethod {
        self.interpolation
    }

    /// Node quantity.
    #[must_use]
    pub fn bootstrap_trait(&self) -> BootstrapTrait {
        self.bootstrap_trait
    }

    /// Solver and query settings.
    #[must_use]
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    fn solved(&self) -> CurveResult<&SolvedNodes> {
        match (&self.state, &self.nodes) {
            (CurveState::Solved, Some(nodes)) => Ok(nodes),
            (CurveState::Failed(err), _) => Err(CurveError::not_built(format!(
                "bootstrap failed: {err}"
            ))),
            (state, _) => Err(CurveError::not_built(format!("curve is {state}"))),
        }
    }

    fn solve_all(&self) -> CurveResult<SolvedNodes> {
        for helper in &self.helpers {
            helper.quote_value()?;
        }

        let n = self.helpers.len();
        let mut values = vec![f64::NAN; n + 1];
        values[0] = self.bootstrap_trait.reference_value(f64::NAN);

        let seed = self.interpolation.seed_method();
        for i in 1..=n {
            self.solve_node(seed, i, &mut values, i + 1, None)?;
        }

        if !self.interpolation.is_local() && n > 1 {
            self.refine_globally(&mut values)?;
        }

        let interpolator = self
            .interpolation
            .build(self.times.clone(), values.clone())?;
        Ok(SolvedNodes {
            values,
            interpolator,
        })
    }

    /// Repeats full passes over all nodes until every helper reprices.
    ///
    /// Needed when moving a later node reshapes earlier segments.
    fn refine_globally(&self, values: &mut [f64]) -> CurveResult<()> {
        let n = self.helpers.len();
        let tolerance = self.config.effective_tolerance();
        let mut worst = f64::INFINITY;

        for pass in 1..=self.config.max_iterations {
            for i in 1..=n {
                let previous = values[i];
                self.solve_node(self.interpolation, i, values, n + 1, Some(previous))?;
            }

            let curve = self.trial_curve(self.interpolation, values, n + 1)?;
            worst = self.helpers.iter().try_fold(0.0_f64, |acc, h| {
                Ok::<_, CurveError>(acc.max(h.quote_error(&curve)?.abs()))
            })?;
            debug!(pass, max_error = worst, "global bootstrap pass");
            if worst <= tolerance {
                return Ok(());
            }
        }

        let last = &self.helpers[n - 1];
        Err(CurveError::convergence(
            n,
            last.description(),
            self.config.max_iterations,
            worst,
            "repricing errors still above tolerance after all passes",
        ))
    }

    /// Solves node `i` on a `method` curve over the first `active` nodes.
    fn solve_node(
        &self,
        method: InterpolationMethod,
        i: usize,
        values: &mut [f64],
        active: usize,
        previous: Option<f64>,
    ) -> CurveResult<()> {
        let helper = &self.helpers[i - 1];
        let bt = self.bootstrap_trait;

        let lower = bt.min_value_after(
            i,
            &self.times,
            values,
            method.requires_positive(),
        );
        let upper = bt.max_value_after(i, &self.times, values, self.config.monotone);
        let guess = previous
            .unwrap_or_else(|| bt.initial_guess(i, &self.times, values))
            .clamp(lower, upper);

        let pricing_error: RefCell<Option<CurveError>> = RefCell::new(None);
        let nodes: &[f64] = values;
        let objective = |x: f64| -> f64 {
            match self.trial_error(method, i, x, nodes, active) {
                Ok(err) => err,
                Err(e) => {
                    *pricing_error.borrow_mut() = Some(e);
                    f64::NAN
                }
            }
        };

        let bracket = BracketConfig::default()
            .with_bounds(lower, upper)
            .with_step(((upper - lower) * BRACKET_STEP_FRACTION).max(f64::EPSILON));
        let bracket = BracketConfig {
            max_evaluations: self.config.max_iterations,
            ..bracket
        };
        let (a, b) = find_bracket(&objective, guess, &bracket)
            .map_err(|e| self.node_failure(i, e, 0, &pricing_error))?;

        let solver = SolverConfig::new(
            self.config.tolerance * SOLVER_TOLERANCE_FACTOR,
            self.config.max_iterations,
        );
        let result = brent(&objective, a, b, &solver)
            .map_err(|e| self.node_failure(i, e, solver.max_iterations, &pricing_error))?;

        if result.residual.abs() > self.config.effective_tolerance() {
            return Err(CurveError::convergence(
                i,
                helper.description(),
                result.iterations,
                result.residual,
                "bracket collapsed with the residual above tolerance",
            ));
        }

        values[i] = result.root;
        if bt.mirrors_first_node() && i == 1 {
            values[0] = result.root;
        }

        trace!(node = i, lower, upper, a, b, "node bracket");
        debug!(
            node = i,
            pillar = %self.dates[i],
            value = result.root,
            iterations = result.iterations,
            residual = result.residual,
            "node solved"
        );
        Ok(())
    }

    fn node_failure(
        &self,
        i: usize,
        err: MathError,
        iterations: u32,
        pricing_error: &RefCell<Option<CurveError>>,
    ) -> CurveError {
        let description = self.helpers[i - 1].description();
        match err {
            MathError::NonFiniteValue { x } => {
                let reason = pricing_error
                    .borrow_mut()
                    .take()
                    .map_or_else(|| format!("objective not finite at {x}"), |e| e.to_string());
                CurveError::convergence(i, description, iterations, f64::NAN, reason)
            }
            MathError::InvalidBracket { a, b, fa, fb } => CurveError::convergence(
                i,
                description,
                iterations,
                fa.abs().min(fb.abs()),
                format!("no sign change in [{a}, {b}]"),
            ),
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => CurveError::convergence(
                i,
                description,
                iterations,
                residual,
                "iteration limit reached",
            ),
            other => CurveError::convergence(i, description, iterations, f64::NAN, other.to_string()),
        }
    }

    /// Quote error of helper `i` when node `i` takes value `x`.
    fn trial_error(
        &self,
        method: InterpolationMethod,
        i: usize,
        x: f64,
        values: &[f64],
        active: usize,
    ) -> CurveResult<f64> {
        let mut trial = values[..active].to_vec();
        trial[i] = x;
        if self.bootstrap_trait.mirrors_first_node() && i == 1 {
            trial[0] = x;
        }
        let curve = self.trial_curve(method, &trial, active)?;
        self.helpers[i - 1].quote_error(&curve)
    }

    fn trial_curve(
        &self,
        method: InterpolationMethod,
        values: &[f64],
        active: usize,
    ) -> CurveResult<NodeCurve> {
        let interpolator = method
            .build(self.times[..active].to_vec(), values[..active].to_vec())?;
        Ok(NodeCurve {
            reference_date: self.reference_date,
            day_count: self.day_count,
            max_date: self.dates[active - 1],
            max_time: self.times[active - 1],
            extrapolation: self.config.extrapolation,
            bootstrap_trait: self.bootstrap_trait,
            interpolator,
        })
    }
}

impl YieldTermStructure for PiecewiseYieldCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    fn max_date(&self) -> Date {
        self.dates.last().copied().unwrap_or(self.reference_date)
    }

    fn allows_extrapolation(&self) -> bool {
        self.config.extrapolation
    }

    fn discount_t(&self, t: f64) -> CurveResult<f64> {
        let nodes = self.solved()?;
        let max_time = self.times.last().copied().unwrap_or(0.0);
        discount_on_nodes(
            self.bootstrap_trait,
            nodes.interpolator.as_ref(),
            t,
            max_time,
            self.config.extrapolation,
        )
    }
}

impl fmt::Debug for PiecewiseYieldCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PiecewiseYieldCurve")
            .field("reference_date", &self.reference_date)
            .field("day_count", &self.day_count)
            .field("interpolation", &self.interpolation)
            .field("bootstrap_trait", &self.bootstrap_trait)
            .field("state", &self.state)
            .field("dates", &self.dates)
            .field("values", &self.nodes.as_ref().map(|n| &n.values))
            .finish_non_exhaustive()
    }
}

/// A curve over a prefix of the nodes, priced during node solves.
struct NodeCurve {
    reference_date: Date,
    day_count: DayCountConvention,
    max_date: Date,
    max_time: f64,
    extrapolation: bool,
    bootstrap_trait: BootstrapTrait,
    interpolator: Box<dyn Interpolator>,
}

impl YieldTermStructure for NodeCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    fn max_date(&self) -> Date {
        self.max_date
    }

    fn allows_extrapolation(&self) -> bool {
        self.extrapolation
    }

    fn discount_t(&self, t: f64) -> CurveResult<f64> {
        discount_on_nodes(
            self.bootstrap_trait,
            self.interpolator.as_ref(),
            t,
            self.max_time,
            self.extrapolation,
        )
    }
}

fn discount_on_nodes(
    bootstrap_trait: BootstrapTrait,
    interpolator: &dyn Interpolator,
    t: f64,
    max_t: f64,
    extrapolation: bool,
) -> CurveResult<f64> {
    if t == 0.0 {
        return Ok(1.0);
    }
    let slack = BOUNDARY_TOLERANCE * max_t.abs().max(1.0);
    if t.is_nan() || t < -slack || (!extrapolation && t > max_t + slack) {
        return Err(CurveError::Extrapolation { t, max_t });
    }
    Ok(bootstrap_trait.node_value_to_discount(interpolator, t.max(0.0))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::{DepositRateHelper, HelperKind};
    use approx::assert_relative_eq;
    use tenor_core::quote::SimpleQuote;
    use tenor_core::types::Compounding;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn deposit(start: Date, end: Date, rate: f64) -> Box<dyn RateHelper> {
        Box::new(
            DepositRateHelper::from_dates(SimpleQuote::new(rate), start, end, DayCountConvention::Act360)
                .unwrap(),
        )
    }

    fn ladder(start: Date) -> Vec<Box<dyn RateHelper>> {
        vec![
            deposit(start, start.add_days(91), 0.030),
            deposit(start, start.add_days(30), 0.028),
            deposit(start, start.add_days(182), 0.032),
            deposit(start, start.add_days(365), 0.035),
        ]
    }

    fn curve_with(trait_: BootstrapTrait, method: InterpolationMethod) -> PiecewiseYieldCurve {
        let start = d(2025, 1, 2);
        PiecewiseYieldCurve::bootstrap(
            start,
            ladder(start),
            DayCountConvention::Act365Fixed,
            method,
            trait_,
            BootstrapConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_helpers_sorted_by_pillar() {
        let curve = curve_with(BootstrapTrait::Discount, InterpolationMethod::LogLinear);
        let pillars: Vec<Date> = curve.helpers().iter().map(|h| h.pillar_date()).collect();
        let mut sorted = pillars.clone();
        sorted.sort();
        assert_eq!(pillars, sorted);
        assert_eq!(curve.dates().len(), 5);
        assert_eq!(curve.helpers()[0].kind(), HelperKind::Deposit);
    }

    #[test]
    fn test_every_trait_and_method_reprices() {
        for &trait_ in BootstrapTrait::all() {
            for &method in InterpolationMethod::all() {
                let curve = curve_with(trait_, method);
                assert_eq!(curve.discount(curve.reference_date()).unwrap(), 1.0);
                for helper in curve.helpers() {
                    let err = helper.quote_error(&curve).unwrap();
                    assert!(err.abs() <= 1e-12, "{trait_}/{method}: {err:e}");
                }
            }
        }
    }

    #[test]
    fn test_mirrored_reference_node() {
        let curve = curve_with(BootstrapTrait::ZeroYield, InterpolationMethod::Linear);
        let values = curve.node_values().unwrap();
        assert_eq!(values[0], values[1]);

        let curve = curve_with(BootstrapTrait::Discount, InterpolationMethod::LogLinear);
        assert_eq!(curve.node_values().unwrap()[0], 1.0);
    }

    #[test]
    fn test_unbuilt_and_failed_queries() {
        let start = d(2025, 1, 2);
        let mut curve = PiecewiseYieldCurve::new(
            start,
            ladder(start),
            DayCountConvention::Act365Fixed,
            InterpolationMethod::LogLinear,
            BootstrapTrait::Discount,
            BootstrapConfig::default(),
        )
        .unwrap();
        assert_eq!(curve.state(), &CurveState::Unbuilt);
        assert!(curve.is_stale());
        assert!(matches!(
            curve.discount(start.add_days(10)),
            Err(CurveError::CurveNotBuilt { .. })
        ));
        curve.build().unwrap();
        assert!(curve.is_solved());
        assert!(!curve.is_stale());
    }

    #[test]
    fn test_failure_is_sticky_until_rebuild() {
        let start = d(2025, 1, 2);
        let quote = SimpleQuote::new(0.03);
        let helpers: Vec<Box<dyn RateHelper>> = vec![Box::new(
            DepositRateHelper::from_dates(quote.clone(), start, start.add_days(90), DayCountConvention::Act360)
                .unwrap(),
        )];
        let mut curve = PiecewiseYieldCurve::new(
            start,
            helpers,
            DayCountConvention::Act365Fixed,
            InterpolationMethod::LogLinear,
            BootstrapTrait::Discount,
            BootstrapConfig::default().with_monotone(true),
        )
        .unwrap();

        // Monotone discounting cannot fit a negative rate
        quote.set_value(-0.01);
        let err = curve.build().unwrap_err();
        assert!(matches!(err, CurveError::BootstrapConvergence { node: 1, .. }));
        assert!(curve.failure().is_some());
        assert!(matches!(
            curve.discount(start.add_days(30)),
            Err(CurveError::CurveNotBuilt { .. })
        ));
        assert_eq!(curve.build().unwrap_err(), err);

        quote.set_value(0.03);
        curve.rebuild().unwrap();
        assert!(curve.failure().is_none());
        assert!(curve.discount(start.add_days(30)).unwrap() < 1.0);
    }

    #[test]
    fn test_empty_quote_is_invalid_helper() {
        let start = d(2025, 1, 2);
        let helpers: Vec<Box<dyn RateHelper>> = vec![Box::new(
            DepositRateHelper::from_dates(SimpleQuote::empty(), start, start.add_days(90), DayCountConvention::Act360)
                .unwrap(),
        )];
        let result = PiecewiseYieldCurve::bootstrap(
            start,
            helpers,
            DayCountConvention::Act365Fixed,
            InterpolationMethod::LogLinear,
            BootstrapTrait::Discount,
            BootstrapConfig::default(),
        );
        assert!(matches!(result, Err(CurveError::InvalidHelper { .. })));
    }

    #[test]
    fn test_pillar_before_reference_rejected() {
        let start = d(2025, 1, 2);
        let result = PiecewiseYieldCurve::new(
            start.add_days(60),
            vec![deposit(start, start.add_days(30), 0.03)],
            DayCountConvention::Act365Fixed,
            InterpolationMethod::LogLinear,
            BootstrapTrait::Discount,
            BootstrapConfig::default(),
        );
        assert!(matches!(result, Err(CurveError::InvalidHelper { .. })));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let start = d(2025, 1, 2);
        let result = PiecewiseYieldCurve::new(
            start,
            ladder(start),
            DayCountConvention::Act365Fixed,
            InterpolationMethod::LogLinear,
            BootstrapTrait::Discount,
            BootstrapConfig::default().with_tolerance(0.0),
        );
        assert!(matches!(result, Err(CurveError::InvalidConfig { .. })));
    }

    #[test]
    fn test_zero_and_forward_rates() {
        let curve = curve_with(BootstrapTrait::Discount, InterpolationMethod::LogLinear);
        let start = curve.reference_date();
        let end = start.add_days(182);

        let zero = curve.zero_rate(end, Compounding::Continuous).unwrap();
        let t = curve.time_from_reference(end);
        assert_relative_eq!((-zero * t).exp(), curve.discount(end).unwrap(), epsilon = 1e-15);

        // Simple forward over the 6M deposit period in Act/365 reproduces the
        // deposit's growth factor
        let fwd = curve.forward_rate(start, end, Compounding::Simple).unwrap();
        let growth = 1.0 + 0.032 * 182.0 / 360.0;
        assert_relative_eq!(1.0 + fwd * t, growth, epsilon = 1e-12);

        // Short-step rates at the reference date are finite
        assert!(curve.zero_rate(start, Compounding::Continuous).unwrap().is_finite());
        assert!(curve.forward_rate(end, end, Compounding::Continuous).unwrap() > 0.0);
        assert!(curve.forward_rate(end, start, Compounding::Simple).is_err());
    }

    #[test]
    fn test_negative_time_rejected() {
        let curve = curve_with(BootstrapTrait::Discount, InterpolationMethod::LogLinear);
        let before = curve.reference_date().add_days(-1);
        assert!(matches!(curve.discount(before), Err(CurveError::Extrapolation { .. })));
    }

    #[test]
    fn test_debug_output() {
        let curve = curve_with(BootstrapTrait::Discount, InterpolationMethod::Linear);
        let text = format!("{curve:?}");
        assert!(text.contains("PiecewiseYieldCurve"));
        assert!(text.contains("Solved"));
    }
}
