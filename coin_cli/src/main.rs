//! Command-line front end: reads an already-fetched market data payload,
//! runs one indicator over it and prints a summary.
//!
//! Subcommands:
//!   - `bop`: daily Balance of Power from OHLC candles
//!   - `rsi`: Wilder RSI from a daily price series

mod usage_log;

use clap::{Args, Parser, Subcommand};
use coin_core::config::indicator_config::{validate_bop_days, validate_rsi_period};
use coin_core::kline::series::{parse_ohlc_payload, read_candles_csv};
use coin_core::report::summary::{render_bop, render_no_data, render_rsi};
use coin_core::{compute_bop, compute_rsi, IndicatorConfig, IndicatorError, PriceSeries};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use usage_log::UsageLog;

#[derive(Parser)]
#[command(
    name = "coin-cli",
    version,
    about = "Balance of Power and RSI summaries for crypto market data",
    propagate_version = true
)]
struct Cli {
    /// JSON config file (rsi_period, bop_days, vs_currency, usage_log)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append-only usage log, overrides the config value
    #[arg(long, global = true)]
    usage_log: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily Balance of Power from OHLC candles
    Bop(BopArgs),
    /// Relative Strength Index from daily prices
    Rsi(RsiArgs),
}

#[derive(Args)]
struct BopArgs {
    /// OHLC payload: JSON `[[ts_ms, o, h, l, c], ...]` or CSV with --csv
    #[arg(long)]
    input: PathBuf,

    /// Asset name shown in the summary
    #[arg(long, default_value = "btc")]
    name: String,

    /// Candle window in days (1, 7 or 14)
    #[arg(long)]
    days: Option<u32>,

    /// Input is CSV `timestamp,open,high,low,close`
    #[arg(long)]
    csv: bool,
}

#[derive(Args)]
struct RsiArgs {
    /// Market chart payload: JSON `{"prices": [[ts_ms, p], ...]}` or CSV with --csv
    #[arg(long)]
    input: PathBuf,

    #[arg(long, default_value = "btc")]
    symbol: String,

    /// Smoothing window in days (1-14)
    #[arg(long)]
    period: Option<usize>,

    /// Input is CSV `timestamp,price`
    #[arg(long)]
    csv: bool,
}

fn main() -> Result<(), IndicatorError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => IndicatorConfig::from_json_file(path)?,
        None => IndicatorConfig::default(),
    };
    if let Some(path) = cli.usage_log {
        config.usage_log = path;
    }

    let usage = UsageLog::new(&config.usage_log);
    tracing::debug!(session = %usage.session_id(), log = %usage.path().display(), "session started");

    let summary = match cli.command {
        Commands::Bop(args) => run_bop(&config, &usage, &args),
        Commands::Rsi(args) => run_rsi(&config, &usage, &args),
    };

    match summary {
        Ok(text) => println!("{}", text),
        Err(err) if err.is_no_data() => {
            tracing::warn!(code = %err.code(), "{}", err);
            println!("{}", render_no_data(&err));
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

fn run_bop(
    config: &IndicatorConfig,
    usage: &UsageLog,
    args: &BopArgs,
) -> Result<String, IndicatorError> {
    let days = args.days.unwrap_or(config.bop_days);
    validate_bop_days(days)?;
    usage.record("/bop", &format!("{} {}", args.name, days))?;

    let candles = if args.csv {
        read_candles_csv(File::open(&args.input)?)?
    } else {
        parse_ohlc_payload(&read_input(&args.input)?)?
    };

    let bop = compute_bop(&candles)?;
    tracing::info!(name = %args.name, days, dates = bop.len(), "BOP calculated");
    Ok(render_bop(&args.name, days, &config.vs_currency, &bop))
}

fn run_rsi(
    config: &IndicatorConfig,
    usage: &UsageLog,
    args: &RsiArgs,
) -> Result<String, IndicatorError> {
    let period = args.period.unwrap_or(config.rsi_period);
    validate_rsi_period(period)?;
    usage.record("/rsi", &format!("{} {}d", args.symbol, period))?;

    let series = if args.csv {
        PriceSeries::from_csv(File::open(&args.input)?)?
    } else {
        PriceSeries::from_market_chart(&read_input(&args.input)?)?
    };

    let rsi = compute_rsi(series.as_slice(), period)?;
    tracing::info!(symbol = %args.symbol, period, vs = %config.vs_currency, rsi, "RSI calculated");
    Ok(render_rsi(&args.symbol, period, &config.vs_currency, rsi))
}

fn read_input(path: &Path) -> Result<String, IndicatorError> {
    tracing::debug!(path = %path.display(), "reading payload");
    Ok(std::fs::read_to_string(path)?)
}
