//! Aggregate result of a single investment strategy.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentOutcome {
    pub invested: f64,
    pub shares: f64,
    pub current_value: f64,
}

impl InvestmentOutcome {
    pub fn profit_loss(&self) -> f64 {
        self.current_value - self.invested
    }

    /// Signed percentage change. Zero invested would divide by zero, so
    /// that case reports 0 instead.
    pub fn percent_change(&self) -> f64 {
        if self.invested == 0.0 {
            0.0
        } else {
            self.profit_loss() / self.invested * 100.0
        }
    }

    /// "X.XX% profit" or "X.XX% loss": labeled magnitude, sign decides
    /// the label (zero counts as profit).
    pub fn percent_label(&self) -> String {
        let pct = self.percent_change();
        let word = if pct >= 0.0 { "profit" } else { "loss" };
        format!("{:.2}% {}", pct.abs(), word)
    }
}

/// Running value of held shares at one date, for charting.
#[derive(Debug, Clone, PartialEq)]
pub struct TracePoint {
    pub date: NaiveDate,
    pub value: f64,
}
