//! Stooq market data adapter (feature `stooq`).
//!
//! Downloads daily bars from Stooq's CSV endpoint:
//! `{base_url}?s={symbol}{suffix}&d1={YYYYMMDD}&d2={YYYYMMDD}&i=d`
//! and keeps the Date and Close columns. Stooq answers unknown symbols
//! with a bare "No data" body, which maps to an empty result.

use chrono::NaiveDate;

use crate::domain::error::CompareError;
use crate::domain::series::PricePoint;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::MarketDataPort;

const DEFAULT_BASE_URL: &str = "https://stooq.com/q/d/l/";
const DEFAULT_SUFFIX: &str = ".us";

#[derive(Debug)]
pub struct StooqAdapter {
    base_url: String,
    suffix: String,
}

impl StooqAdapter {
    pub fn new(base_url: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            suffix: suffix.into(),
        }
    }

    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let base_url = config
            .get_string("stooq", "base_url")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let suffix = config
            .get_string("stooq", "suffix")
            .unwrap_or_else(|| DEFAULT_SUFFIX.to_string());
        Self::new(base_url, suffix)
    }

    fn request_url(&self, symbol: &str, start_date: NaiveDate, end_date: NaiveDate) -> String {
        format!(
            "{}?s={}{}&d1={}&d2={}&i=d",
            self.base_url,
            symbol.to_lowercase(),
            self.suffix,
            start_date.format("%Y%m%d"),
            end_date.format("%Y%m%d"),
        )
    }

    /// Parse a Stooq daily-bars CSV body (Date,Open,High,Low,Close,Volume)
    /// down to (date, close) points.
    fn parse_closes(symbol: &str, body: &str) -> Result<Vec<PricePoint>, CompareError> {
        if body.trim() == "No data" {
            return Ok(Vec::new());
        }

        let mut rdr = csv::Reader::from_reader(body.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| CompareError::Fetch {
                symbol: symbol.to_string(),
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| CompareError::Fetch {
                symbol: symbol.to_string(),
                reason: "missing Date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                CompareError::Fetch {
                    symbol: symbol.to_string(),
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            let close: f64 = record
                .get(4)
                .ok_or_else(|| CompareError::Fetch {
                    symbol: symbol.to_string(),
                    reason: "missing Close column".into(),
                })?
                .parse()
                .map_err(|e| CompareError::Fetch {
                    symbol: symbol.to_string(),
                    reason: format!("invalid close value: {}", e),
                })?;

            points.push(PricePoint { date, close });
        }

        Ok(points)
    }
}

impl MarketDataPort for StooqAdapter {
    fn fetch_daily_closes(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PricePoint>, CompareError> {
        let url = self.request_url(symbol, start_date, end_date);

        let response = reqwest::blocking::get(&url).map_err(|e| CompareError::Fetch {
            symbol: symbol.to_string(),
            reason: e.to_string(),
        })?;

        if !response.status().is_success() {
            return Err(CompareError::Fetch {
                symbol: symbol.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let body = response.text().map_err(|e| CompareError::Fetch {
            symbol: symbol.to_string(),
            reason: e.to_string(),
        })?;

        let mut points = Self::parse_closes(symbol, &body)?;
        points.sort_by_key(|p| p.date);
        points.retain(|p| p.date >= start_date && p.date <= end_date);
        Ok(points)
    }
}
