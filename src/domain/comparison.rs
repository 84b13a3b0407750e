//! Strategy comparison orchestration.
//!
//! One explicit call: validated inputs in, both outcomes plus chart
//! traces out. No state survives between invocations.

use chrono::NaiveDate;

use crate::domain::error::CompareError;
use crate::domain::frequency::Frequency;
use crate::domain::lump_sum::{evaluate_lump_sum, lump_sum_curve};
use crate::domain::outcome::{InvestmentOutcome, TracePoint};
use crate::domain::recurring::{Purchase, simulate_recurring};
use crate::domain::series::PriceSeries;

#[derive(Debug, Clone)]
pub struct ComparisonInputs {
    pub symbol: String,
    pub lump_sum_amount: f64,
    pub recurring_amount: f64,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub symbol: String,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub lump_sum: InvestmentOutcome,
    pub recurring: InvestmentOutcome,
    pub purchases: Vec<Purchase>,
    /// Lump-sum position value at every trading day.
    pub lump_sum_curve: Vec<TracePoint>,
    /// Recurring position value, populated only at purchase days.
    pub recurring_trace: Vec<TracePoint>,
}

pub fn run_comparison(
    series: &PriceSeries,
    inputs: &ComparisonInputs,
) -> Result<Comparison, CompareError> {
    let lump_sum = evaluate_lump_sum(series, inputs.lump_sum_amount)?;
    let recurring = simulate_recurring(
        series,
        inputs.start_date,
        inputs.end_date,
        inputs.recurring_amount,
        inputs.frequency,
    )?;

    Ok(Comparison {
        symbol: series.symbol().to_string(),
        frequency: inputs.frequency,
        start_date: inputs.start_date,
        end_date: inputs.end_date,
        lump_sum,
        recurring: recurring.outcome,
        purchases: recurring.purchases,
        lump_sum_curve: lump_sum_curve(series, inputs.lump_sum_amount),
        recurring_trace: recurring.trace,
    })
}
