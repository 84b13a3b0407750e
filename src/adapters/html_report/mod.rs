//! HTML comparison report generation.
//!
//! Resolves `{{PLACEHOLDER}}` markers in an HTML template (the built-in
//! default or a custom file) with the rendered tables and the SVG value
//! chart, then writes the finished page.

pub mod chart_svg;
pub mod default_template;
pub mod tables;

use std::fs;
use std::path::Path;

use crate::domain::comparison::Comparison;
use crate::domain::error::CompareError;
use crate::ports::report_port::ReportPort;

/// Resolve all `{{PLACEHOLDER}}`s in the template and return the final
/// HTML page.
pub fn resolve(template: &str, comparison: &Comparison) -> String {
    let mut output = template.to_string();

    output = output.replace(
        "{{TITLE}}",
        &format!("{} Investment Strategy Comparison", comparison.symbol),
    );
    output = output.replace("{{HEADER}}", &tables::render_header(comparison));

    let lump_table = tables::render_outcome_table(
        "Lump Sum Investment",
        "Initial Investment",
        &comparison.lump_sum,
    );
    output = output.replace("{{LUMP_SUM_TABLE}}", &lump_table);

    let recurring_table = tables::render_outcome_table(
        &format!("{} Investment", comparison.frequency),
        "Total Investment",
        &comparison.recurring,
    );
    output = output.replace("{{RECURRING_TABLE}}", &recurring_table);

    let chart =
        chart_svg::generate_comparison_svg(&comparison.lump_sum_curve, &comparison.recurring_trace);
    let chart_html = if chart.is_empty() {
        "<p>No value data available.</p>".to_string()
    } else {
        chart
    };
    output = output.replace("{{VALUE_CHART}}", &chart_html);

    output = output.replace(
        "{{PURCHASE_LOG}}",
        &tables::render_purchase_log(&comparison.purchases),
    );

    output
}

pub struct HtmlReportAdapter {
    template: Option<String>,
}

impl HtmlReportAdapter {
    pub fn new() -> Self {
        Self { template: None }
    }

    pub fn with_template(template: String) -> Self {
        Self {
            template: Some(template),
        }
    }
}

impl Default for HtmlReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for HtmlReportAdapter {
    fn write(&self, comparison: &Comparison, output_path: &Path) -> Result<(), CompareError> {
        let template = self
            .template
            .as_deref()
            .unwrap_or(default_template::template());
        let html = resolve(template, comparison);
        fs::write(output_path, html)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::frequency::Frequency;
    use crate::domain::outcome::{InvestmentOutcome, TracePoint};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_comparison() -> Comparison {
        Comparison {
            symbol: "AAPL".into(),
            frequency: Frequency::Monthly,
            start_date: date(2024, 1, 2),
            end_date: date(2024, 3, 1),
            lump_sum: InvestmentOutcome {
                invested: 100.0,
                shares: 1.0,
                current_value: 121.0,
            },
            recurring: InvestmentOutcome {
                invested: 150.0,
                shares: 1.3196,
                current_value: 159.67,
            },
            purchases: vec![],
            lump_sum_curve: vec![
                TracePoint {
                    date: date(2024, 1, 2),
                    value: 100.0,
                },
                TracePoint {
                    date: date(2024, 3, 1),
                    value: 121.0,
                },
            ],
            recurring_trace: vec![TracePoint {
                date: date(2024, 1, 2),
                value: 50.0,
            }],
        }
    }

    #[test]
    fn resolve_fills_every_placeholder() {
        let html = resolve(default_template::template(), &sample_comparison());

        assert!(!html.contains("{{"));
        assert!(html.contains("AAPL Investment Strategy Comparison"));
        assert!(html.contains("Lump Sum Investment"));
        assert!(html.contains("Monthly Investment"));
        assert!(html.contains("<svg"));
        assert!(html.contains("No purchases executed."));
    }

    #[test]
    fn resolve_without_curve_says_no_data() {
        let mut comparison = sample_comparison();
        comparison.lump_sum_curve.clear();
        let html = resolve(default_template::template(), &comparison);

        assert!(html.contains("No value data available."));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn write_produces_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("comparison.html");
        let adapter = HtmlReportAdapter::new();

        adapter.write(&sample_comparison(), &path).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("AAPL"));
    }

    #[test]
    fn custom_template_is_used() {
        let adapter = HtmlReportAdapter::with_template("only {{TITLE}}".to_string());
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.html");

        adapter.write(&sample_comparison(), &path).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert_eq!(html, "only AAPL Investment Strategy Comparison");
    }
}
