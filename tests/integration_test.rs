//! Integration tests for the comparison pipeline.
//!
//! Tests cover:
//! - Full fetch-compute pipeline with a mock data port (no network)
//! - Lump-sum arithmetic, zero-amount and single-entry edge cases
//! - Recurring simulation: distinct purchase days, same-day collision,
//!   start date past the end of the series
//! - The worked end-to-end scenario over three weekly closes
//! - HTML report generation from a full comparison

mod common;

use approx::assert_relative_eq;
use common::*;
use dcacompare::adapters::html_report::HtmlReportAdapter;
use dcacompare::domain::comparison::run_comparison;
use dcacompare::domain::error::CompareError;
use dcacompare::domain::frequency::Frequency;
use dcacompare::domain::lump_sum::evaluate_lump_sum;
use dcacompare::domain::recurring::simulate_recurring;
use dcacompare::ports::data_port::MarketDataPort;
use dcacompare::ports::report_port::ReportPort;

mod full_pipeline {
    use super::*;

    #[test]
    fn fetch_build_compare_with_mock_port() {
        let port = MockMarketDataPort::new().with_closes(
            "AAPL",
            make_points(&[
                ("2024-01-01", 100.0),
                ("2024-01-08", 110.0),
                ("2024-01-15", 121.0),
            ]),
        );

        let points = port
            .fetch_daily_closes("AAPL", date(2024, 1, 1), date(2024, 1, 15))
            .unwrap();
        assert_eq!(points.len(), 3);

        let series = PriceSeries::new("AAPL", points).unwrap();
        let comparison = run_comparison(&series, &sample_inputs("AAPL")).unwrap();

        assert_eq!(comparison.symbol, "AAPL");
        assert_relative_eq!(comparison.lump_sum.current_value, 121.0);
        assert_eq!(comparison.purchases.len(), 3);
    }

    #[test]
    fn fetch_respects_date_range() {
        let port = MockMarketDataPort::new().with_closes(
            "AAPL",
            make_points(&[("2024-01-01", 100.0), ("2024-06-01", 150.0)]),
        );

        let points = port
            .fetch_daily_closes("AAPL", date(2024, 1, 1), date(2024, 2, 1))
            .unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn fetch_error_propagates() {
        let port = MockMarketDataPort::new().with_error("AAPL", "connection refused");

        let err = port
            .fetch_daily_closes("AAPL", date(2024, 1, 1), date(2024, 1, 15))
            .unwrap_err();
        assert!(matches!(err, CompareError::Fetch { symbol, .. } if symbol == "AAPL"));
    }

    #[test]
    fn unknown_symbol_yields_empty_not_error() {
        let port = MockMarketDataPort::new();
        let points = port
            .fetch_daily_closes("NOPE", date(2024, 1, 1), date(2024, 1, 15))
            .unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn empty_series_aborts_comparison() {
        let series = PriceSeries::new("AAPL", vec![]).unwrap();
        let err = run_comparison(&series, &sample_inputs("AAPL")).unwrap_err();
        assert!(matches!(err, CompareError::NoData { symbol } if symbol == "AAPL"));
    }
}

mod lump_sum_properties {
    use super::*;

    #[test]
    fn exact_shares_value_and_profit() {
        let series = make_series("VOO", &[("2024-01-02", 400.0), ("2024-06-03", 500.0)]);
        let outcome = evaluate_lump_sum(&series, 6800.0).unwrap();

        assert_relative_eq!(outcome.shares, 17.0);
        assert_relative_eq!(outcome.current_value, 8500.0);
        assert_relative_eq!(outcome.profit_loss(), 1700.0);
        assert_eq!(outcome.percent_label(), "25.00% profit");
    }

    #[test]
    fn zero_amount_has_no_division_fault() {
        let series = make_series("VOO", &[("2024-01-02", 400.0), ("2024-06-03", 500.0)]);
        let outcome = evaluate_lump_sum(&series, 0.0).unwrap();

        assert_eq!(outcome.shares, 0.0);
        assert_eq!(outcome.current_value, 0.0);
        assert_eq!(outcome.profit_loss(), 0.0);
        assert_eq!(outcome.percent_change(), 0.0);
        assert_eq!(outcome.percent_label(), "0.00% profit");
    }

    #[test]
    fn single_entry_series_breaks_even() {
        let series = make_series("VOO", &[("2024-01-02", 400.0)]);
        let outcome = evaluate_lump_sum(&series, 6800.0).unwrap();

        assert_relative_eq!(outcome.current_value, 6800.0);
        assert_relative_eq!(outcome.profit_loss(), 0.0);
    }
}

mod recurring_properties {
    use super::*;

    #[test]
    fn n_distinct_days_accumulate_all_events() {
        let series = make_series(
            "MSFT",
            &[
                ("2024-01-01", 200.0),
                ("2024-01-08", 220.0),
                ("2024-01-15", 210.0),
                ("2024-01-22", 230.0),
            ],
        );
        let sim = simulate_recurring(
            &series,
            date(2024, 1, 1),
            date(2024, 1, 22),
            100.0,
            Frequency::Weekly,
        )
        .unwrap();

        let expected_shares = 100.0 / 200.0 + 100.0 / 220.0 + 100.0 / 210.0 + 100.0 / 230.0;
        assert_eq!(sim.purchases.len(), 4);
        assert_relative_eq!(sim.outcome.invested, 400.0);
        assert_relative_eq!(sim.outcome.shares, expected_shares);
        assert_relative_eq!(sim.outcome.current_value, expected_shares * 230.0);
    }

    #[test]
    fn same_day_collision_counts_both_purchases() {
        // A two-week gap in trading days: the schedule entries for
        // Jan 8 and Jan 15 both fill on Jan 15.
        let series = make_series("MSFT", &[("2024-01-01", 200.0), ("2024-01-15", 220.0)]);
        let sim = simulate_recurring(
            &series,
            date(2024, 1, 1),
            date(2024, 1, 15),
            100.0,
            Frequency::Weekly,
        )
        .unwrap();

        assert_eq!(sim.purchases.len(), 3);
        assert_relative_eq!(sim.outcome.invested, 300.0);
        let expected_shares = 100.0 / 200.0 + 2.0 * (100.0 / 220.0);
        assert_relative_eq!(sim.outcome.shares, expected_shares);

        // Only the trace collapses the collided day.
        assert_eq!(sim.trace.len(), 2);
        assert_relative_eq!(sim.trace[1].value, expected_shares * 220.0);
    }

    #[test]
    fn start_after_series_end_reports_zero_percent() {
        let series = make_series("MSFT", &[("2024-01-01", 200.0), ("2024-01-08", 220.0)]);
        let sim = simulate_recurring(
            &series,
            date(2025, 1, 1),
            date(2025, 6, 1),
            100.0,
            Frequency::Monthly,
        )
        .unwrap();

        assert!(sim.purchases.is_empty());
        assert_eq!(sim.outcome.invested, 0.0);
        assert_eq!(sim.outcome.percent_change(), 0.0);
        assert_eq!(sim.outcome.percent_label(), "0.00% profit");
    }

    #[test]
    fn zero_recurring_amount_reports_zero_percent() {
        let series = make_series("MSFT", &[("2024-01-01", 200.0), ("2024-01-08", 220.0)]);
        let sim = simulate_recurring(
            &series,
            date(2024, 1, 1),
            date(2024, 1, 8),
            0.0,
            Frequency::Weekly,
        )
        .unwrap();

        assert_eq!(sim.outcome.invested, 0.0);
        assert_eq!(sim.outcome.percent_change(), 0.0);
    }
}

mod end_to_end_scenario {
    use super::*;

    /// The worked example: closes 100, 110, 121 one week apart, lump sum
    /// of 100 and weekly recurring of 50 landing on every trading day.
    #[test]
    fn three_close_scenario() {
        let series = make_series(
            "AAPL",
            &[
                ("2024-01-01", 100.0),
                ("2024-01-08", 110.0),
                ("2024-01-15", 121.0),
            ],
        );
        let comparison = run_comparison(&series, &sample_inputs("AAPL")).unwrap();

        assert_relative_eq!(comparison.lump_sum.shares, 1.0);
        assert_relative_eq!(comparison.lump_sum.current_value, 121.0);
        assert_relative_eq!(comparison.lump_sum.profit_loss(), 21.0);
        assert_eq!(comparison.lump_sum.percent_label(), "21.00% profit");

        // 50/100 + 50/110 + 50/121 shares, worth exactly 60.50 + 55.00
        // + 50.00 at the final close.
        let expected_shares = 50.0 / 100.0 + 50.0 / 110.0 + 50.0 / 121.0;
        assert_relative_eq!(comparison.recurring.invested, 150.0);
        assert_relative_eq!(comparison.recurring.shares, expected_shares);
        assert_relative_eq!(comparison.recurring.current_value, 165.5, epsilon = 1e-9);
        assert_relative_eq!(comparison.recurring.profit_loss(), 15.5, epsilon = 1e-9);
        assert_eq!(comparison.recurring.percent_label(), "10.33% profit");
    }

    #[test]
    fn traces_support_charting() {
        let series = make_series(
            "AAPL",
            &[
                ("2024-01-01", 100.0),
                ("2024-01-08", 110.0),
                ("2024-01-15", 121.0),
            ],
        );
        let comparison = run_comparison(&series, &sample_inputs("AAPL")).unwrap();

        // Lump-sum curve has one point per trading day.
        assert_eq!(comparison.lump_sum_curve.len(), 3);
        assert_relative_eq!(comparison.lump_sum_curve[0].value, 100.0);
        assert_relative_eq!(comparison.lump_sum_curve[1].value, 110.0);
        assert_relative_eq!(comparison.lump_sum_curve[2].value, 121.0);

        // Recurring trace steps up at each purchase.
        assert_eq!(comparison.recurring_trace.len(), 3);
        assert!(
            comparison
                .recurring_trace
                .windows(2)
                .all(|w| w[0].date < w[1].date)
        );
    }
}

mod report_generation {
    use super::*;

    #[test]
    fn full_pipeline_writes_html_report() {
        let series = make_series(
            "AAPL",
            &[
                ("2024-01-01", 100.0),
                ("2024-01-08", 110.0),
                ("2024-01-15", 121.0),
            ],
        );
        let comparison = run_comparison(&series, &sample_inputs("AAPL")).unwrap();

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("comparison.html");
        HtmlReportAdapter::new().write(&comparison, &path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("AAPL Investment Strategy Comparison"));
        assert!(html.contains("21.00% profit"));
        assert!(html.contains("10.33% profit"));
        assert!(html.contains("<svg"));
        // Three purchases in the log plus the header row.
        assert_eq!(html.matches("<tr><td>2024-").count(), 3);
    }
}
