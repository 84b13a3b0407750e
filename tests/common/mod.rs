#![allow(dead_code)]

use chrono::NaiveDate;
use dcacompare::domain::comparison::ComparisonInputs;
use dcacompare::domain::error::CompareError;
use dcacompare::domain::frequency::Frequency;
pub use dcacompare::domain::series::{PricePoint, PriceSeries};
use dcacompare::ports::data_port::MarketDataPort;
use std::collections::HashMap;

#[derive(Debug)]
pub struct MockMarketDataPort {
    pub data: HashMap<String, Vec<PricePoint>>,
    pub errors: HashMap<String, String>,
}

impl MockMarketDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_closes(mut self, symbol: &str, points: Vec<PricePoint>) -> Self {
        self.data.insert(symbol.to_string(), points);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl MarketDataPort for MockMarketDataPort {
    fn fetch_daily_closes(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PricePoint>, CompareError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(CompareError::Fetch {
                symbol: symbol.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self
            .data
            .get(symbol)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|p| p.date >= start_date && p.date <= end_date)
            .collect())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn make_point(date_str: &str, close: f64) -> PricePoint {
    PricePoint {
        date: parse_date(date_str),
        close,
    }
}

pub fn make_points(rows: &[(&str, f64)]) -> Vec<PricePoint> {
    rows.iter()
        .map(|&(date_str, close)| make_point(date_str, close))
        .collect()
}

pub fn make_series(symbol: &str, rows: &[(&str, f64)]) -> PriceSeries {
    PriceSeries::new(symbol, make_points(rows)).unwrap()
}

pub fn sample_inputs(symbol: &str) -> ComparisonInputs {
    ComparisonInputs {
        symbol: symbol.to_string(),
        lump_sum_amount: 100.0,
        recurring_amount: 50.0,
        frequency: Frequency::Weekly,
        start_date: date(2024, 1, 1),
        end_date: date(2024, 1, 15),
    }
}
