//! PhoneBill command-line calculator
//!
//! Reads a call log and prints the customer's bill.
//!
//! ```sh
//! # Bill a log file
//! phonebill calls.csv
//!
//! # Read from stdin, itemized
//! cat calls.csv | phonebill --itemize
//!
//! # JSON output
//! phonebill calls.csv --format json
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use phonebill_core::{
    config::{LogFormat, LoggingConfig, OutputFormat},
    models::{BillSummary, TIMESTAMP_FORMAT},
    traits::BillCalculator,
    AppConfig, AppError, AppResult,
};
use phonebill_services::{PhoneBillCalculator, TariffRatingService};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Telephone bill calculator: prices a call log, the most called number is free.
#[derive(Parser, Debug)]
#[command(name = "phonebill", version, about)]
struct Cli {
    /// Call log file, one `number,start,end` record per line. Reads stdin when omitted or `-`.
    file: Option<PathBuf>,

    /// Path to a configuration file (TOML, YAML or JSON).
    #[arg(short, long, env = "PHONEBILL_CONFIG")]
    config: Option<PathBuf>,

    /// Print one line per call before the total.
    #[arg(short, long)]
    itemize: bool,

    /// Output format (plain, json).
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,
}

/// Initialize tracing/logging
///
/// Logs go to stderr so stdout carries only the bill.
fn init_tracing(logging: &LoggingConfig) {
    let level = &logging.level;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "phonebill={},phonebill_core={},phonebill_services={}",
            level, level, level
        ))
    });

    let registry = tracing_subscriber::registry().with(env_filter);
    match logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Read the whole call log from a file or stdin
fn read_log(file: Option<&PathBuf>) -> AppResult<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("{}: {}", path.display(), e))),
        _ => {
            let mut log = String::new();
            std::io::stdin().read_to_string(&mut log)?;
            Ok(log)
        }
    }
}

/// Log a failure with its stable error code
fn log_failure(context: &str, err: &AppError) {
    error!(
        code = err.error_code(),
        input = err.is_input_error(),
        "{}: {}",
        context,
        err
    );
}

/// Print the bill in plain text
fn print_plain(summary: &BillSummary, itemize: bool) {
    if itemize {
        for call in &summary.calls {
            println!(
                "{:<16} {} {} {:>6} {:>4} min {:>8}{}",
                call.record.number,
                call.record.start.format(TIMESTAMP_FORMAT),
                call.record.end.format(TIMESTAMP_FORMAT),
                call.record.display_duration(),
                call.minutes,
                call.cost,
                if call.exempt { "  (free)" } else { "" }
            );
        }
    }
    println!("{}", summary.total);
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => AppConfig::from_file(&path.to_string_lossy()),
        None => AppConfig::load(),
    };
    let (mut config, config_error) = match loaded {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(AppError::from(e))),
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.itemize {
        config.output.itemize = true;
    }

    init_tracing(&config.logging);

    if let Some(e) = config_error {
        warn!(
            code = e.error_code(),
            "Failed to load configuration, using defaults: {}",
            e
        );
    }
    debug!("Configuration: {:?}", config);

    let log = read_log(cli.file.as_ref()).map_err(|e| {
        log_failure("Failed to read call log", &e);
        e
    })?;

    let calculator = PhoneBillCalculator::new(TariffRatingService::default());
    let summary = calculator.itemize(&log).map_err(|e| {
        log_failure("Bill calculation failed", &e);
        e
    })?;

    info!(
        total = %summary.total,
        calls = summary.call_count(),
        billed = summary.billed_call_count(),
        exempt = ?summary.exempt_number,
        "Bill calculated"
    );

    match config.output.format {
        OutputFormat::Plain => print_plain(&summary, config.output.itemize),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("failed to serialize bill")?
        ),
    }

    Ok(())
}
