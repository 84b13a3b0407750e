//! CSV file data adapter.
//!
//! Reads `<SYMBOL>.csv` files (`date,close` header) from a base
//! directory, one file per symbol.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::error::CompareError;
use crate::domain::series::PricePoint;
use crate::ports::data_port::MarketDataPort;

#[derive(Debug)]
pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol.to_uppercase()))
    }
}

impl MarketDataPort for CsvAdapter {
    fn fetch_daily_closes(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PricePoint>, CompareError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| CompareError::Fetch {
            symbol: symbol.to_string(),
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| CompareError::Fetch {
                symbol: symbol.to_string(),
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| CompareError::Fetch {
                symbol: symbol.to_string(),
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                CompareError::Fetch {
                    symbol: symbol.to_string(),
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            if date < start_date || date > end_date {
                continue;
            }

            let close: f64 = record
                .get(1)
                .ok_or_else(|| CompareError::Fetch {
                    symbol: symbol.to_string(),
                    reason: "missing close column".into(),
                })?
                .parse()
                .map_err(|e| CompareError::Fetch {
                    symbol: symbol.to_string(),
                    reason: format!("invalid close value: {}", e),
                })?;

            points.push(PricePoint { date, close });
        }

        points.sort_by_key(|p| p.date);
        Ok(points)
    }
}
