//! HTML table formatting for the comparison report.

use crate::domain::comparison::Comparison;
use crate::domain::outcome::InvestmentOutcome;
use crate::domain::recurring::Purchase;

pub fn format_money(value: f64) -> String {
    format!("${:.2}", value)
}

pub fn render_header(comparison: &Comparison) -> String {
    format!(
        "<h1>{} Investment Strategy Comparison</h1>\n\
         <p>{} to {} &middot; {} recurring cadence</p>",
        comparison.symbol, comparison.start_date, comparison.end_date, comparison.frequency,
    )
}

pub fn render_outcome_table(
    title: &str,
    invested_label: &str,
    outcome: &InvestmentOutcome,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("<h2>{}</h2>\n<table>\n", title));
    push_row(&mut out, invested_label, &format_money(outcome.invested));
    push_row(&mut out, "Shares Bought", &format!("{:.4}", outcome.shares));
    push_row(
        &mut out,
        "Current Value",
        &format_money(outcome.current_value),
    );
    push_row(
        &mut out,
        "Profit/Loss",
        &format_money(outcome.profit_loss()),
    );
    push_row(&mut out, "Percentage Change", &outcome.percent_label());
    out.push_str("</table>\n");
    out
}

pub fn render_purchase_log(purchases: &[Purchase]) -> String {
    if purchases.is_empty() {
        return "<p>No purchases executed.</p>\n".to_string();
    }

    let mut out = String::new();
    out.push_str(
        "<table>\n<tr><th>Scheduled</th><th>Traded</th><th>Price</th><th>Shares</th></tr>\n",
    );
    for purchase in purchases {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.4}</td></tr>\n",
            purchase.scheduled,
            purchase.traded,
            format_money(purchase.price),
            purchase.shares,
        ));
    }
    out.push_str("</table>\n");
    out
}

fn push_row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        "<tr><td><strong>{}</strong></td><td>{}</td></tr>\n",
        label, value
    ));
}
