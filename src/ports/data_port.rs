//! Market data access port trait.

use chrono::NaiveDate;

use crate::domain::error::CompareError;
use crate::domain::series::PricePoint;

/// The market-data collaborator: given a symbol and a date range,
/// returns daily closes in date-ascending order. An empty result means
/// "no data" and is the caller's decision to abort on.
pub trait MarketDataPort: std::fmt::Debug {
    fn fetch_daily_closes(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PricePoint>, CompareError>;
}
