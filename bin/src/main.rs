//! candela CLI - Bybit candlestick history downloader.

use anyhow::{Context, Result};
use candela_lib::prelude::*;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod output;

use output::{write_table, Format};

#[derive(Parser)]
#[command(name = "candela")]
#[command(about = "Download Bybit candlestick history over long date ranges", long_about = None)]
#[command(version)]
struct Cli {
    /// Instrument symbol (e.g., BTCUSD)
    symbol: String,

    /// Start date (YYYY-MM-DD)
    #[arg(short, long)]
    start: String,

    /// End date (YYYY-MM-DD)
    #[arg(short, long)]
    end: String,

    /// Kline interval (1, 3, 5, 15, 30, 60, 120, 240, 360, 720, D, W, M)
    #[arg(short, long, default_value = "D")]
    interval: String,

    /// Output file path. Defaults to <symbol>.<format>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// Chunk size for splitting the date range, in calendar months
    #[arg(long, default_value_t = DEFAULT_CHUNK_MONTHS)]
    chunk_months: u32,

    /// Convert timestamps to UTC datetimes instead of epoch milliseconds
    #[arg(long)]
    datetime: bool,

    /// Use the production host instead of testnet
    #[arg(long)]
    mainnet: bool,

    /// Quiet mode (suppress progress output)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let interval = cli
        .interval
        .parse::<Interval>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let request = HistoryRequest::new(&cli.symbol, &cli.start, &cli.end, interval)
        .context("Invalid request")?
        .with_chunk_months(cli.chunk_months)
        .context("Invalid chunk size")?
        .with_datetime_timestamps(cli.datetime);

    let config = ClientConfig {
        testnet: !cli.mainnet,
        ..Default::default()
    };
    let client = KlineClient::new(config).context("Failed to create HTTP client")?;

    log::info!(
        "Fetching {} {} candles, {}",
        request.symbol(),
        request.interval(),
        request.range()
    );

    // Setup progress bar over chunk requests
    let total_chunks = request.range().chunks(request.chunk_months()).count() as u64;
    let progress = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(total_chunks);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks {msg}")
                .expect("Invalid progress template")
                .progress_chars("=>-"),
        );
        pb.set_message(format!("{} {} -> {}", cli.symbol, cli.start, cli.end));
        pb
    };

    let series = fetch_history_with_progress(&client, &request, |_| progress.inc(1))
        .await
        .context("History download failed")?;
    progress.finish_with_message(format!("Fetched {} candles", series.len()));

    let table = CandleTable::from_series(&series).context("Table conversion failed")?;

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.{}", cli.symbol.to_lowercase(), cli.format)));
    write_table(&table, &output, cli.format)?;

    if !cli.quiet {
        println!("Output written to: {}", output.display());
    }

    Ok(())
}
