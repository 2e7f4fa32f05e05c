mod analytics;
mod ingest;
mod models;
mod report;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::analytics::{categorize, expense_series, summarize};
use crate::ingest::TransactionLoader;
use crate::report::write_dashboard;
use crate::storage::{LedgerStorage, Storage};
use crate::types::DEFAULT_USER;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: wealthwise-analytics [transactions].csv [log_level:optional] > [dashboard].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let storage = Arc::new(LedgerStorage::new());
    let loader = TransactionLoader::new();

    let timer = Instant::now();
    let stored = loader.load_into(path, storage.clone(), DEFAULT_USER.to_string()).await?;
    info!("Loaded [{stored}] transactions in: {:?}", timer.elapsed());

    let transactions = storage.load(DEFAULT_USER);

    let timer = Instant::now();
    let summary = summarize(&transactions);
    let buckets = categorize(&transactions);
    let series = expense_series(&transactions);
    info!("Aggregated [{}] transactions into [{}] categories in: {:?}", summary.transaction_count, buckets.len(), timer.elapsed());

    let mut output = BufWriter::new(stdout().lock());
    write_dashboard(&mut output, &summary, &buckets, &series)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the dashboard, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
