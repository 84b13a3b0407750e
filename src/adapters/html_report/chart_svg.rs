//! SVG chart rendering for the comparison report.
//!
//! Hand-rolled two-series line chart: lump-sum value at every trading
//! day, recurring value forward-filled from its sparse purchase trace
//! (zero before the first purchase).

use chrono::NaiveDate;

use crate::domain::outcome::TracePoint;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 320.0;
const PADDING: f64 = 48.0;

const LUMP_SUM_COLOR: &str = "#1f77b4";
const RECURRING_COLOR: &str = "#ff7f0e";

/// Expand a sparse trace across `dates`: each date takes the last trace
/// value at or before it, zero until the first trace entry.
pub fn step_fill(dates: &[NaiveDate], trace: &[TracePoint]) -> Vec<f64> {
    let mut values = Vec::with_capacity(dates.len());
    let mut idx = 0usize;
    let mut current = 0.0_f64;

    for &date in dates {
        while idx < trace.len() && trace[idx].date <= date {
            current = trace[idx].value;
            idx += 1;
        }
        values.push(current);
    }
    values
}

pub fn generate_comparison_svg(
    lump_sum_curve: &[TracePoint],
    recurring_trace: &[TracePoint],
) -> String {
    if lump_sum_curve.is_empty() {
        return String::new();
    }

    let dates: Vec<NaiveDate> = lump_sum_curve.iter().map(|p| p.date).collect();
    let lump_values: Vec<f64> = lump_sum_curve.iter().map(|p| p.value).collect();
    let recurring_values = step_fill(&dates, recurring_trace);

    let min_value = lump_values
        .iter()
        .chain(recurring_values.iter())
        .fold(f64::INFINITY, |a, &b| a.min(b));
    let max_value = lump_values
        .iter()
        .chain(recurring_values.iter())
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    let plot_width = WIDTH - 2.0 * PADDING;
    let plot_height = HEIGHT - 2.0 * PADDING;

    let range = max_value - min_value;
    let scale_y = if range > 0.0 { plot_height / range } else { 1.0 };
    let scale_x = if dates.len() > 1 {
        plot_width / (dates.len() - 1) as f64
    } else {
        0.0
    };

    let polyline = |values: &[f64]| -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = PADDING + i as f64 * scale_x;
                let y = HEIGHT - PADDING - (v - min_value) * scale_y;
                format!("{:.1},{:.1}", x, y)
            })
            .collect::<Vec<String>>()
            .join(" ")
    };

    let first_date = dates[0];
    let last_date = dates[dates.len() - 1];

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">
  <rect width="{w:.0}" height="{h:.0}" fill="white"/>
  <line x1="{pad:.0}" y1="{pad:.0}" x2="{pad:.0}" y2="{ybase:.0}" stroke="#333" stroke-width="1"/>
  <line x1="{pad:.0}" y1="{ybase:.0}" x2="{xend:.0}" y2="{ybase:.0}" stroke="#333" stroke-width="1"/>
  <polyline fill="none" stroke="{lump_color}" stroke-width="1.5" points="{lump_points}"/>
  <polyline fill="none" stroke="{rec_color}" stroke-width="1.5" points="{rec_points}"/>
  <text x="{pad:.0}" y="{label_y:.0}" font-size="11" fill="#333">{first_date}</text>
  <text x="{xend:.0}" y="{label_y:.0}" font-size="11" fill="#333" text-anchor="end">{last_date}</text>
  <text x="{ytext:.0}" y="{ybase:.0}" font-size="11" fill="#333" text-anchor="end">{min_value:.2}</text>
  <text x="{ytext:.0}" y="{pad:.0}" font-size="11" fill="#333" text-anchor="end">{max_value:.2}</text>
  <rect x="{legend_x:.0}" y="12" width="12" height="3" fill="{lump_color}"/>
  <text x="{legend_text_x:.0}" y="17" font-size="11" fill="#333">Lump Sum</text>
  <rect x="{legend_x2:.0}" y="12" width="12" height="3" fill="{rec_color}"/>
  <text x="{legend_text_x2:.0}" y="17" font-size="11" fill="#333">Recurring</text>
</svg>"##,
        w = WIDTH,
        h = HEIGHT,
        pad = PADDING,
        ybase = HEIGHT - PADDING,
        xend = WIDTH - PADDING,
        label_y = HEIGHT - PADDING + 16.0,
        ytext = PADDING - 6.0,
        legend_x = PADDING,
        legend_text_x = PADDING + 18.0,
        legend_x2 = PADDING + 100.0,
        legend_text_x2 = PADDING + 118.0,
        lump_color = LUMP_SUM_COLOR,
        rec_color = RECURRING_COLOR,
        lump_points = polyline(&lump_values),
        rec_points = polyline(&recurring_values),
    )
}
