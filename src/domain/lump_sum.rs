//! Lump-sum strategy evaluator.
//!
//! Buys the full amount at the first available close and values the
//! position at the last available close.

use crate::domain::error::CompareError;
use crate::domain::outcome::{InvestmentOutcome, TracePoint};
use crate::domain::series::PriceSeries;

pub fn evaluate_lump_sum(
    series: &PriceSeries,
    amount: f64,
) -> Result<InvestmentOutcome, CompareError> {
    let first = series.first().ok_or_else(|| CompareError::NoData {
        symbol: series.symbol().to_string(),
    })?;
    let last = series.last().ok_or_else(|| CompareError::NoData {
        symbol: series.symbol().to_string(),
    })?;

    let shares = amount / first.close;
    Ok(InvestmentOutcome {
        invested: amount,
        shares,
        current_value: shares * last.close,
    })
}

/// Per-date value of the lump-sum position, one point per trading day.
pub fn lump_sum_curve(series: &PriceSeries, amount: f64) -> Vec<TracePoint> {
    let Some(first) = series.first() else {
        return Vec::new();
    };
    let shares = amount / first.close;
    series
        .points()
        .iter()
        .map(|p| TracePoint {
            date: p.date,
            value: shares * p.close,
        })
        .collect()
}
