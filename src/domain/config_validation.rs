//! Configuration validation.
//!
//! Validates every config field before any data is fetched.

use chrono::NaiveDate;

use crate::domain::error::CompareError;
use crate::domain::frequency::Frequency;
use crate::ports::config_port::ConfigPort;

pub fn validate_compare_config(config: &dyn ConfigPort) -> Result<(), CompareError> {
    validate_symbol(config)?;
    validate_amount(config, "lump_sum_amount")?;
    validate_amount(config, "recurring_amount")?;
    validate_frequency(config)?;
    validate_dates(config)?;
    Ok(())
}

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), CompareError> {
    let source = config
        .get_string("data", "source")
        .unwrap_or_else(|| "stooq".to_string());

    match source.as_str() {
        "stooq" => Ok(()),
        "csv" => match config.get_string("data", "csv_path") {
            Some(p) if !p.trim().is_empty() => Ok(()),
            _ => Err(CompareError::ConfigMissing {
                section: "data".to_string(),
                key: "csv_path".to_string(),
            }),
        },
        _ => Err(CompareError::ConfigInvalid {
            section: "data".to_string(),
            key: "source".to_string(),
            reason: format!("unknown source {source:?} (expected csv or stooq)"),
        }),
    }
}

fn validate_symbol(config: &dyn ConfigPort) -> Result<(), CompareError> {
    match config.get_string("compare", "symbol") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(CompareError::ConfigMissing {
            section: "compare".to_string(),
            key: "symbol".to_string(),
        }),
    }
}

fn validate_amount(config: &dyn ConfigPort, key: &str) -> Result<(), CompareError> {
    let value = config.get_double("compare", key, 0.0);
    if value < 0.0 {
        return Err(CompareError::ConfigInvalid {
            section: "compare".to_string(),
            key: key.to_string(),
            reason: format!("{key} must be non-negative"),
        });
    }
    Ok(())
}

fn validate_frequency(config: &dyn ConfigPort) -> Result<(), CompareError> {
    if let Some(value) = config.get_string("compare", "frequency") {
        value
            .parse::<Frequency>()
            .map_err(|_| CompareError::ConfigInvalid {
                section: "compare".to_string(),
                key: "frequency".to_string(),
                reason: format!("{value:?} is not one of weekly, monthly, quarterly"),
            })?;
    }
    Ok(())
}

fn validate_dates(config: &dyn ConfigPort) -> Result<(), CompareError> {
    let start_str = config.get_string("compare", "start_date");
    let start_date = parse_date(start_str.as_deref(), "start_date")?;

    // end_date is optional; it defaults to today at resolution time.
    if let Some(end_str) = config.get_string("compare", "end_date") {
        let end_date = parse_date(Some(&end_str), "end_date")?;
        if start_date > end_date {
            return Err(CompareError::ConfigInvalid {
                section: "compare".to_string(),
                key: "start_date".to_string(),
                reason: "start_date must be on or before end_date".to_string(),
            });
        }
    }
    Ok(())
}

pub fn parse_date(value: Option<&str>, field: &str) -> Result<NaiveDate, CompareError> {
    match value {
        None => Err(CompareError::ConfigMissing {
            section: "compare".to_string(),
            key: field.to_string(),
        }),
        Some(s) => {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CompareError::ConfigInvalid {
                section: "compare".to_string(),
                key: field.to_string(),
                reason: format!("invalid {field} format, expected YYYY-MM-DD"),
            })
        }
    }
}
