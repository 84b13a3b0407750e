//! Recurring (dollar-cost averaging) investment simulator.
//!
//! Walks the purchase schedule from the start date, buying a fixed
//! amount at the earliest trading day on or after each scheduled date.
//! Scheduled dates past the end of the series are skipped without error.

use chrono::NaiveDate;

use crate::domain::error::CompareError;
use crate::domain::frequency::Frequency;
use crate::domain::outcome::{InvestmentOutcome, TracePoint};
use crate::domain::schedule::PurchaseSchedule;
use crate::domain::series::PriceSeries;

/// One executed purchase: the scheduled date and the trading day it
/// actually filled on.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub scheduled: NaiveDate,
    pub traded: NaiveDate,
    pub price: f64,
    pub shares: f64,
}

#[derive(Debug, Clone)]
pub struct RecurringSimulation {
    pub outcome: InvestmentOutcome,
    pub purchases: Vec<Purchase>,
    pub trace: Vec<TracePoint>,
}

pub fn simulate_recurring(
    series: &PriceSeries,
    start_date: NaiveDate,
    end_date: NaiveDate,
    amount: f64,
    frequency: Frequency,
) -> Result<RecurringSimulation, CompareError> {
    let last = series.last().ok_or_else(|| CompareError::NoData {
        symbol: series.symbol().to_string(),
    })?;

    let mut total_shares = 0.0_f64;
    let mut total_invested = 0.0_f64;
    let mut purchases = Vec::new();
    let mut trace: Vec<TracePoint> = Vec::new();

    for scheduled in PurchaseSchedule::new(start_date, end_date, frequency) {
        let Some(point) = series.first_on_or_after(scheduled) else {
            continue;
        };

        let shares = amount / point.close;
        total_shares += shares;
        total_invested += amount;
        purchases.push(Purchase {
            scheduled,
            traded: point.date,
            price: point.close,
            shares,
        });

        // Two scheduled dates can map to the same trading day; the trace
        // keeps only the latest running value for that day. Totals above
        // accumulate both events.
        let value = total_shares * point.close;
        match trace.last_mut() {
            Some(t) if t.date == point.date => t.value = value,
            _ => trace.push(TracePoint {
                date: point.date,
                value,
            }),
        }
    }

    Ok(RecurringSimulation {
        outcome: InvestmentOutcome {
            invested: total_invested,
            shares: total_shares,
            current_value: total_shares * last.close,
        },
        purchases,
        trace,
    })
}
