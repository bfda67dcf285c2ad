//! Integration test: bootstrap a USD Libor curve from deposits and swaps.
//!
//! Market Data: March 13, 2025 (spot March 17, TARGET calendar)
//!
//! | Instrument | Tenor | Rate   |
//! |------------|-------|--------|
//! | Deposit    | 1M    | 4.320% |
//! | Deposit    | 2M    | 4.310% |
//! | Deposit    | 3M    | 4.300% |
//! | Deposit    | 6M    | 4.200% |
//! | Deposit    | 9M    | 4.100% |
//! | Swap       | 2Y    | 3.900% |
//! | Swap       | 3Y    | 3.820% |
//! | Swap       | 5Y    | 3.800% |
//! | Swap       | 7Y    | 3.850% |
//! | Swap       | 10Y   | 3.950% |
//! | Swap       | 15Y   | 4.050% |
//! | Swap       | 20Y   | 4.080% |
//! | Swap       | 30Y   | 4.000% |

use approx::assert_relative_eq;
use proptest::prelude::*;

use tenor_core::prelude::*;
use tenor_curves::prelude::*;
use tenor_curves::sweep::default_offsets;

const DEPOSITS: [(i32, f64); 5] = [
    (1, 0.0432),
    (2, 0.0431),
    (3, 0.0430),
    (6, 0.0420),
    (9, 0.0410),
];

const SWAPS: [(i32, f64); 8] = [
    (2, 0.0390),
    (3, 0.0382),
    (5, 0.0380),
    (7, 0.0385),
    (10, 0.0395),
    (15, 0.0405),
    (20, 0.0408),
    (30, 0.0400),
];

fn trade_date() -> Date {
    Date::from_ymd(2025, 3, 13).unwrap()
}

fn spot(trade: Date) -> Date {
    TargetCalendar::new()
        .advance(trade, 2, TimeUnit::Days, BusinessDayConvention::Following, false)
        .unwrap()
}

/// Builds the helpers and hands back the quotes so tests can move them.
fn market(
    trade: Date,
    deposits: &[(i32, f64)],
    swaps: &[(i32, f64)],
) -> (Vec<Box<dyn RateHelper>>, Vec<SimpleQuote>) {
    let deposit_conventions = DepositConventions::default();
    let swap_conventions = SwapConventions::default();
    let mut helpers: Vec<Box<dyn RateHelper>> = Vec::new();
    let mut quotes = Vec::new();

    for &(months, rate) in deposits {
        let quote = SimpleQuote::new(rate);
        quotes.push(quote.clone());
        helpers.push(Box::new(
            DepositRateHelper::new(quote, Period::months(months), &deposit_conventions, trade)
                .unwrap(),
        ));
    }
    for &(years, rate) in swaps {
        let quote = SimpleQuote::new(rate);
        quotes.push(quote.clone());
        helpers.push(Box::new(
            SwapRateHelper::new(quote, Period::years(years), &swap_conventions, trade).unwrap(),
        ));
    }
    (helpers, quotes)
}

fn build(
    interpolation: InterpolationMethod,
    bootstrap_trait: BootstrapTrait,
    config: BootstrapConfig,
) -> (PiecewiseYieldCurve, Vec<SimpleQuote>) {
    let trade = trade_date();
    let (helpers, quotes) = market(trade, &DEPOSITS, &SWAPS);
    let curve = PiecewiseYieldCurve::bootstrap(
        spot(trade),
        helpers,
        DayCountConvention::Act365Fixed,
        interpolation,
        bootstrap_trait,
        config,
    )
    .unwrap();
    (curve, quotes)
}

#[test]
fn test_one_month_deposit_scenario() {
    let trade = trade_date();
    let (helpers, _) = market(trade, &[(1, 0.02)], &[]);
    let curve = PiecewiseYieldCurve::bootstrap(
        spot(trade),
        helpers,
        DayCountConvention::Act360,
        InterpolationMethod::LogLinear,
        BootstrapTrait::Discount,
        BootstrapConfig::default(),
    )
    .unwrap();

    let start = Date::from_ymd(2025, 3, 17).unwrap();
    let maturity = Date::from_ymd(2025, 4, 17).unwrap();
    assert_eq!(curve.reference_date(), start);
    assert_eq!(curve.max_date(), maturity);

    let expected = 1.0 / (1.0 + 0.02 * 31.0 / 360.0);
    assert_relative_eq!(curve.discount(maturity).unwrap(), expected, epsilon = 1e-10);
}

#[test]
fn test_discount_is_one_at_reference() {
    for &tr in BootstrapTrait::all() {
        let (curve, _) = build(InterpolationMethod::LogLinear, tr, BootstrapConfig::default());
        assert_eq!(curve.discount(curve.reference_date()).unwrap(), 1.0);
    }
}

#[test]
fn test_every_combination_reprices_market() {
    let config = BootstrapConfig::default().with_tolerance(1e-10);
    for &method in InterpolationMethod::all() {
        for &tr in BootstrapTrait::all() {
            let (curve, _) = build(method, tr, config);
            let report = RepricingReport::check(&curve).unwrap();
            assert!(
                report.is_valid(),
                "{method} on {tr} failed:\n{report}"
            );
            assert_eq!(report.passed_count(), DEPOSITS.len() + SWAPS.len());
        }
    }
}

#[test]
fn test_every_combination_reprices_demo_market() {
    // 1M/3M/6M deposits and a 1Y to 30Y swap strip, Act/Act ISDA
    let deposits = [(1, 0.0432), (3, 0.0430), (6, 0.0420)];
    let swaps = [
        (1, 0.0408),
        (2, 0.0390),
        (3, 0.0382),
        (4, 0.0379),
        (5, 0.0380),
        (7, 0.0385),
        (10, 0.0395),
        (30, 0.0400),
    ];
    let trade = trade_date();
    for &method in InterpolationMethod::all() {
        for &tr in BootstrapTrait::all() {
            let (helpers, _) = market(trade, &deposits, &swaps);
            let curve = PiecewiseYieldCurve::bootstrap(
                spot(trade),
                helpers,
                DayCountConvention::ActActIsda,
                method,
                tr,
                BootstrapConfig::default(),
            )
            .unwrap_or_else(|e| panic!("{method} on {tr} failed to bootstrap: {e}"));
            let report = RepricingReport::check(&curve).unwrap();
            assert!(report.is_valid(), "{method} on {tr} failed:\n{report}");
            assert_eq!(report.passed_count(), deposits.len() + swaps.len());
        }
    }
}

#[test]
fn test_nodes_sit_on_pillars() {
    let (curve, _) = build(
        InterpolationMethod::LogLinear,
        BootstrapTrait::Discount,
        BootstrapConfig::default(),
    );
    let nodes = curve.nodes().unwrap();
    assert_eq!(nodes.len(), DEPOSITS.len() + SWAPS.len() + 1);
    assert_eq!(nodes[0], (curve.reference_date(), 1.0));
    for (helper, (date, _)) in curve.helpers().iter().zip(&nodes[1..]) {
        assert_eq!(helper.pillar_date(), *date);
    }
    // Swap pillars cover the last Libor fixing
    let last = curve.helpers().last().unwrap();
    assert!(last.pillar_date() >= last.maturity_date());
}

#[test]
fn test_rebuild_is_idempotent() {
    let (mut curve, _) = build(
        InterpolationMethod::CubicSpline,
        BootstrapTrait::ZeroYield,
        BootstrapConfig::default().with_tolerance(1e-10),
    );
    let before = curve.node_values().unwrap().to_vec();
    curve.rebuild().unwrap();
    assert_eq!(curve.node_values().unwrap(), before.as_slice());
    // Building a solved curve is a no-op
    curve.build().unwrap();
    assert_eq!(curve.node_values().unwrap(), before.as_slice());
}

#[test]
fn test_extrapolation_boundary() {
    let (mut curve, _) = build(
        InterpolationMethod::LogLinear,
        BootstrapTrait::Discount,
        BootstrapConfig::default(),
    );
    let max_date = curve.max_date();
    let at_max = curve.discount(max_date).unwrap();
    assert!(at_max > 0.0 && at_max < 1.0);

    let err = curve.discount(max_date.add_days(1)).unwrap_err();
    assert!(matches!(err, CurveError::Extrapolation { .. }));

    curve.set_extrapolation(true);
    let beyond = curve.discount(max_date.add_days(1)).unwrap();
    assert!(beyond <= at_max);
    let far = curve.discount(max_date.add_years(5).unwrap()).unwrap();
    assert!(far < beyond);
}

#[test]
fn test_forward_rate_at_last_pillar() {
    let (mut curve, _) = build(
        InterpolationMethod::LogLinear,
        BootstrapTrait::Discount,
        BootstrapConfig::default(),
    );
    let max_date = curve.max_date();
    let short = curve
        .forward_rate(max_date, max_date, Compounding::Continuous)
        .unwrap();
    let zero = curve.zero_rate(max_date, Compounding::Continuous).unwrap();
    assert!(short.is_finite());
    assert_relative_eq!(short, zero, epsilon = 0.02);

    // With extrapolation the step goes forward past the last pillar
    curve.set_extrapolation(true);
    let ahead = curve
        .forward_rate(max_date, max_date, Compounding::Continuous)
        .unwrap();
    assert!(ahead.is_finite());
}

#[test]
fn test_rates_are_consistent_with_discounts() {
    let (curve, _) = build(
        InterpolationMethod::LogLinear,
        BootstrapTrait::Discount,
        BootstrapConfig::default(),
    );
    let d1 = Date::from_ymd(2027, 3, 17).unwrap();
    let d2 = Date::from_ymd(2030, 3, 18).unwrap();

    let t1 = curve.time_from_reference(d1);
    let zero = curve.zero_rate(d1, Compounding::Continuous).unwrap();
    assert_relative_eq!((-zero * t1).exp(), curve.discount(d1).unwrap(), epsilon = 1e-14);

    let fwd = curve.forward_rate(d1, d2, Compounding::Continuous).unwrap();
    let t2 = curve.time_from_reference(d2);
    let ratio = curve.discount(d2).unwrap() / curve.discount(d1).unwrap();
    assert_relative_eq!((-fwd * (t2 - t1)).exp(), ratio, epsilon = 1e-14);
    assert!(curve.forward_rate(d2, d1, Compounding::Continuous).is_err());
}

#[test]
fn test_quote_change_marks_curve_stale() {
    let (mut curve, quotes) = build(
        InterpolationMethod::LogLinear,
        BootstrapTrait::Discount,
        BootstrapConfig::default(),
    );
    assert!(!curve.is_stale());
    let before = curve.discount(Date::from_ymd(2030, 3, 18).unwrap()).unwrap();

    // Bump the 5Y swap
    quotes[DEPOSITS.len() + 2].set_value(0.0400);
    assert!(curve.is_stale());
    assert!(curve.is_solved());

    curve.rebuild().unwrap();
    assert!(!curve.is_stale());
    let after = curve.discount(Date::from_ymd(2030, 3, 18).unwrap()).unwrap();
    assert!(after < before);
    assert!(RepricingReport::check(&curve).unwrap().is_valid());
}

#[test]
fn test_empty_and_duplicate_inputs() {
    let trade = trade_date();
    let err = PiecewiseYieldCurve::bootstrap(
        spot(trade),
        Vec::new(),
        DayCountConvention::Act365Fixed,
        InterpolationMethod::LogLinear,
        BootstrapTrait::Discount,
        BootstrapConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err, CurveError::EmptyCurve);

    let (helpers, _) = market(trade, &[(3, 0.03), (3, 0.031)], &[]);
    let err = PiecewiseYieldCurve::new(
        spot(trade),
        helpers,
        DayCountConvention::Act365Fixed,
        InterpolationMethod::LogLinear,
        BootstrapTrait::Discount,
        BootstrapConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CurveError::DuplicateMaturity { .. }));
}

#[test]
fn test_sweep_over_observation_dates() {
    let observations = [
        Date::from_ymd(2025, 3, 11).unwrap(),
        Date::from_ymd(2025, 3, 12).unwrap(),
        Date::from_ymd(2025, 3, 13).unwrap(),
    ];
    let calendar = TargetCalendar::new();

    let result = sweep(
        &observations,
        |obs| {
            let (helpers, quotes) = market(obs, &DEPOSITS, &SWAPS);
            if obs == observations[1] {
                // No fixing published for this date
                quotes[0].reset();
            }
            let curve = PiecewiseYieldCurve::bootstrap(
                spot(obs),
                helpers,
                DayCountConvention::Act365Fixed,
                InterpolationMethod::LogLinear,
                BootstrapTrait::Discount,
                BootstrapConfig::default(),
            )?;
            zero_curve(&curve, obs, &calendar, default_offsets())
        },
        FailurePolicy::Skip,
    )
    .unwrap();

    assert_eq!(result.successes.len(), 2);
    assert_eq!(result.skipped_dates(), vec![observations[1]]);
    assert!(matches!(
        result.skipped[0].error,
        CurveError::InvalidHelper { .. }
    ));

    for (_, points) in &result.successes {
        assert_eq!(points.len(), default_offsets().count());
        for p in points {
            assert!(p.zero_rate > 0.03 && p.zero_rate < 0.05, "{p:?}");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn upward_markets_give_decreasing_discounts(
        base in 0.005f64..0.06,
        steps in prop::collection::vec(0.0f64..0.004, 6),
    ) {
        let mut level = base;
        let mut rates = Vec::new();
        for s in &steps {
            level += s;
            rates.push(level);
        }
        let deposits = [(3, rates[0]), (6, rates[1])];
        let swaps = [(1, rates[2]), (2, rates[3]), (5, rates[4]), (10, rates[5])];

        let trade = trade_date();
        let (helpers, _) = market(trade, &deposits, &swaps);
        let curve = PiecewiseYieldCurve::bootstrap(
            spot(trade),
            helpers,
            DayCountConvention::Act365Fixed,
            InterpolationMethod::LogLinear,
            BootstrapTrait::Discount,
            BootstrapConfig::default(),
        )
        .unwrap();

        let mut date = curve.reference_date();
        let mut previous = 1.0;
        while date <= curve.max_date() {
            let df = curve.discount(date).unwrap();
            prop_assert!(df <= previous, "discount rose at {}", date);
            previous = df;
            date = date.add_days(30);
        }
    }
}
