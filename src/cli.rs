//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::html_report::HtmlReportAdapter;
use crate::domain::comparison::{Comparison, ComparisonInputs, run_comparison};
use crate::domain::config_validation::{
    parse_date, validate_compare_config, validate_data_config,
};
use crate::domain::error::CompareError;
use crate::domain::frequency::Frequency;
use crate::domain::outcome::InvestmentOutcome;
use crate::domain::series::PriceSeries;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::MarketDataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(
    name = "dcacompare",
    about = "Compare lump-sum vs recurring stock investment strategies"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a strategy comparison
    Compare {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long)]
        lump_sum: Option<f64>,
        #[arg(long)]
        recurring: Option<f64>,
        #[arg(long)]
        frequency: Option<String>,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the available data range for a symbol
    Info {
        #[arg(long)]
        symbol: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// CLI overrides for `compare`; any present value beats the config file.
#[derive(Debug, Default)]
pub struct CompareOverrides {
    pub symbol: Option<String>,
    pub lump_sum: Option<f64>,
    pub recurring: Option<f64>,
    pub frequency: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Compare {
            config,
            symbol,
            lump_sum,
            recurring,
            frequency,
            start_date,
            end_date,
            output,
        } => {
            let overrides = CompareOverrides {
                symbol,
                lump_sum,
                recurring,
                frequency,
                start_date,
                end_date,
            };
            run_compare(config.as_ref(), &overrides, output.as_ref())
        }
        Command::Info { symbol, config } => run_info(&symbol, config.as_ref()),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = CompareError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn empty_config() -> FileConfigAdapter {
    // An empty INI parses fine; every lookup falls back to defaults.
    FileConfigAdapter::from_string("").unwrap_or_else(|_| unreachable!())
}

/// Merge CLI overrides over the config file into validated inputs.
pub fn resolve_inputs(
    config: &dyn ConfigPort,
    overrides: &CompareOverrides,
) -> Result<ComparisonInputs, CompareError> {
    let symbol = match overrides
        .symbol
        .clone()
        .or_else(|| config.get_string("compare", "symbol"))
    {
        Some(s) if !s.trim().is_empty() => s.trim().to_uppercase(),
        _ => {
            return Err(CompareError::ConfigMissing {
                section: "compare".to_string(),
                key: "symbol".to_string(),
            });
        }
    };

    let lump_sum_amount = resolve_amount(config, overrides.lump_sum, "lump_sum_amount")?;
    let recurring_amount = resolve_amount(config, overrides.recurring, "recurring_amount")?;

    let frequency = overrides
        .frequency
        .clone()
        .or_else(|| config.get_string("compare", "frequency"))
        .unwrap_or_else(|| "monthly".to_string())
        .parse::<Frequency>()?;

    let start_str = overrides
        .start_date
        .clone()
        .or_else(|| config.get_string("compare", "start_date"));
    let start_date = parse_date(start_str.as_deref(), "start_date")?;

    let end_date = match overrides
        .end_date
        .clone()
        .or_else(|| config.get_string("compare", "end_date"))
    {
        Some(s) => parse_date(Some(&s), "end_date")?,
        None => chrono::Local::now().date_naive(),
    };

    if start_date > end_date {
        return Err(CompareError::ConfigInvalid {
            section: "compare".to_string(),
            key: "start_date".to_string(),
            reason: "start_date must be on or before end_date".to_string(),
        });
    }

    Ok(ComparisonInputs {
        symbol,
        lump_sum_amount,
        recurring_amount,
        frequency,
        start_date,
        end_date,
    })
}

fn resolve_amount(
    config: &dyn ConfigPort,
    override_value: Option<f64>,
    key: &str,
) -> Result<f64, CompareError> {
    let value = override_value.unwrap_or_else(|| config.get_double("compare", key, 0.0));
    if value < 0.0 {
        return Err(CompareError::ConfigInvalid {
            section: "compare".to_string(),
            key: key.to_string(),
            reason: format!("{key} must be non-negative"),
        });
    }
    Ok(value)
}

pub fn build_data_port(
    config: &dyn ConfigPort,
) -> Result<Box<dyn MarketDataPort>, CompareError> {
    let source = config
        .get_string("data", "source")
        .unwrap_or_else(|| "stooq".to_string());

    match source.as_str() {
        "csv" => {
            let path = config.get_string("data", "csv_path").ok_or_else(|| {
                CompareError::ConfigMissing {
                    section: "data".to_string(),
                    key: "csv_path".to_string(),
                }
            })?;
            Ok(Box::new(CsvAdapter::new(PathBuf::from(path))))
        }
        "stooq" => {
            #[cfg(feature = "stooq")]
            {
                use crate::adapters::stooq_adapter::StooqAdapter;
                Ok(Box::new(StooqAdapter::from_config(config)))
            }
            #[cfg(not(feature = "stooq"))]
            {
                Err(CompareError::ConfigInvalid {
                    section: "data".to_string(),
                    key: "source".to_string(),
                    reason: "stooq feature is required for the stooq source".to_string(),
                })
            }
        }
        _ => Err(CompareError::ConfigInvalid {
            section: "data".to_string(),
            key: "source".to_string(),
            reason: format!("unknown source {source:?} (expected csv or stooq)"),
        }),
    }
}

fn run_compare(
    config_path: Option<&PathBuf>,
    overrides: &CompareOverrides,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    // Stage 1: Load config (optional; overrides can carry everything)
    let config: FileConfigAdapter = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            match load_config(path) {
                Ok(c) => c,
                Err(code) => return code,
            }
        }
        None => empty_config(),
    };

    if let Err(e) = validate_data_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 2: Resolve and validate inputs
    let inputs = match resolve_inputs(&config, overrides) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 3: Build data port
    let data_port = match build_data_port(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 4: Fetch prices
    eprintln!(
        "Fetching {} closes, {} to {}",
        inputs.symbol, inputs.start_date, inputs.end_date
    );
    let points =
        match data_port.fetch_daily_closes(&inputs.symbol, inputs.start_date, inputs.end_date) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

    if points.is_empty() {
        let err = CompareError::NoData {
            symbol: inputs.symbol.clone(),
        };
        eprintln!("warning: {err}");
        return (&err).into();
    }

    let series = match PriceSeries::new(&inputs.symbol, points) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("  {}: {} trading days", series.symbol(), series.len());

    // Stage 5: Run the comparison
    let comparison = match run_comparison(&series, &inputs) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 6: Console summary
    print_summary(&comparison);

    // Stage 7: HTML report
    let output = output_path
        .cloned()
        .unwrap_or_else(|| PathBuf::from("comparison.html"));

    let report = match config.get_string("report", "template_path") {
        Some(path) => match fs::read_to_string(&path) {
            Ok(template) => HtmlReportAdapter::with_template(template),
            Err(e) => {
                eprintln!("error: failed to read template {}: {}", path, e);
                return ExitCode::from(1);
            }
        },
        None => HtmlReportAdapter::new(),
    };

    match report.write(&comparison, &output) {
        Ok(()) => {
            eprintln!("\nReport written to: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to write report: {e}");
            ExitCode::from(1)
        }
    }
}

fn print_summary(comparison: &Comparison) {
    println!("=== Lump Sum Investment ===");
    print_outcome("Initial Investment", &comparison.lump_sum);
    println!();
    println!("=== {} Investment ===", comparison.frequency);
    print_outcome("Total Investment", &comparison.recurring);
}

fn print_outcome(invested_label: &str, outcome: &InvestmentOutcome) {
    println!("{:<20} ${:.2}", format!("{invested_label}:"), outcome.invested);
    println!("{:<20} {:.4}", "Shares Bought:", outcome.shares);
    println!("{:<20} ${:.2}", "Current Value:", outcome.current_value);
    println!("{:<20} ${:.2}", "Profit/Loss:", outcome.profit_loss());
    println!("{:<20} {}", "Change:", outcome.percent_label());
}

fn run_info(symbol: &str, config_path: Option<&PathBuf>) -> ExitCode {
    let config: FileConfigAdapter = match config_path {
        Some(path) => match load_config(path) {
            Ok(c) => c,
            Err(code) => return code,
        },
        None => empty_config(),
    };

    if let Err(e) = validate_data_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let data_port = match build_data_port(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let symbol = symbol.trim().to_uppercase();
    // Unix epoch start: effectively "all available history".
    let start = NaiveDate::default();
    let end = chrono::Local::now().date_naive();

    match data_port.fetch_daily_closes(&symbol, start, end) {
        Ok(points) if points.is_empty() => {
            eprintln!("{}: no data found", symbol);
            ExitCode::SUCCESS
        }
        Ok(points) => {
            println!(
                "{}: {} trading days, {} to {}",
                symbol,
                points.len(),
                points[0].date,
                points[points.len() - 1].date
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if let Err(e) = validate_compare_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Err(e) = validate_data_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let inputs = match resolve_inputs(&config, &CompareOverrides::default()) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("\nResolved inputs:");
    eprintln!("  symbol:           {}", inputs.symbol);
    eprintln!("  lump sum:         ${:.2}", inputs.lump_sum_amount);
    eprintln!("  recurring:        ${:.2}", inputs.recurring_amount);
    eprintln!("  frequency:        {}", inputs.frequency);
    eprintln!("  start date:       {}", inputs.start_date);
    eprintln!("  end date:         {}", inputs.end_date);

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}
