//! Daily closing-price series.
//!
//! Invariant: dates strictly increasing, so no two entries share a date.
//! The constructor rejects anything else rather than reordering quietly.

use chrono::NaiveDate;

use crate::domain::error::CompareError;

/// One trading day: the date and the closing price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// An ordered run of daily closes for a single symbol.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from date-ascending points. Fails if any date does
    /// not strictly increase over its predecessor.
    pub fn new(symbol: &str, points: Vec<PricePoint>) -> Result<Self, CompareError> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(CompareError::SeriesOrder {
                    reason: format!(
                        "{} does not increase after {}",
                        pair[1].date, pair[0].date
                    ),
                });
            }
        }
        Ok(Self {
            symbol: symbol.to_uppercase(),
            points,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Earliest entry on or after `date`, if the series extends that far.
    pub fn first_on_or_after(&self, date: NaiveDate) -> Option<&PricePoint> {
        let idx = self.points.partition_point(|p| p.date < date);
        self.points.get(idx)
    }
}
