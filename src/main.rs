//! PhoneBill command line
//!
//! Reads a CSV table of calls, prices them, exempts the favorite number,
//! and prints the total cost.

mod cli;

use anyhow::Context;
use clap::{error::ErrorKind, Parser};
use cli::Cli;
use phonebill_core::{config::LogFormat, AppConfig, AppError};
use phonebill_services::{BillingService, BillingSummary, CsvCallSource};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging on stderr; stdout carries only the result
fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "phonebill={},phonebill_core={},phonebill_services={}",
            config.log.level, config.log.level, config.log.level
        ))
    });

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.log.format {
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

/// Parse arguments; help and version exit directly
fn parse_args() -> Result<Cli, AppError> {
    Cli::try_parse().map_err(|e| {
        if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            e.exit();
        }
        // Usage message on stderr
        let _ = e.print();
        AppError::from(e)
    })
}

fn run(cli: &Cli) -> anyhow::Result<BillingSummary> {
    info!("Billing calls from {}", cli.input.display());

    let mut source = CsvCallSource::open(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let summary = BillingService::default()
        .bill(&mut source)
        .with_context(|| format!("billing {}", cli.input.display()))?;

    info!(
        "Billed {} calls across {} contacts",
        summary.call_count(),
        summary.contacts.len()
    );

    for contact in &summary.contacts {
        debug!(
            "Contact {}: {} calls, {} min, cost {}",
            contact.contact_id,
            contact.call_count(),
            contact.total_minutes,
            contact.total_price
        );
    }

    Ok(summary)
}

fn exit_code(err: &anyhow::Error) -> ExitCode {
    let code = err
        .downcast_ref::<AppError>()
        .map_or(1, AppError::exit_code);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", AppError::from(e));
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            error!(code = e.error_code(), "{}", e);
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1));
        }
    };

    match run(&cli) {
        Ok(summary) => {
            println!("Calculated cost is {}", summary.total_cost);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let code = e
                .downcast_ref::<AppError>()
                .map_or("internal_error", AppError::error_code);
            error!(code, "{:#}", e);
            eprintln!("Error: {:#}", e);
            exit_code(&e)
        }
    }
}
