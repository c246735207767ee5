//! Subcommand implementations.
//!
//! Each dataset argument accepts a local path or an http(s) URL; URLs go
//! through the same loader contract the dashboard uses (no caching, no
//! retry).

use anyhow::Context;
use clap::Subcommand;
use log::info;
use meteo_data::compare::comparison_metrics;
use meteo_obs::comparison::ComparisonSeries;
use meteo_obs::loader::{fetch_table, DataTable};
use meteo_obs::report::parse_raw_reports;
use meteo_obs::weather_code::WeatherCodeTable;

#[derive(Subcommand)]
pub enum Command {
    /// Print RMSE and Bias per variable of the paired comparison dataset
    Metrics {
        /// Path or URL of the comparison CSV
        #[arg(short = 'c', long)]
        comparison_csv: String,
    },

    /// List classified weather events from the raw METAR report dataset
    Events {
        /// Path or URL of the raw report CSV
        #[arg(short = 'r', long)]
        reports_csv: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Metrics { comparison_csv } => run_metrics(&comparison_csv).await,
        Command::Events { reports_csv } => run_events(&reports_csv).await,
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn http_client() -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?)
}

/// Load a header-keyed dataset from disk or over HTTP.
async fn load_table(source: &str) -> anyhow::Result<DataTable> {
    if is_url(source) {
        return Ok(fetch_table(&http_client()?, source).await?);
    }
    let text =
        std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))?;
    Ok(DataTable::parse(&text)?)
}

/// Read a dataset as raw text (for the positional raw-report file).
async fn read_text(source: &str) -> anyhow::Result<String> {
    if is_url(source) {
        let response = http_client()?.get(source).send().await?;
        anyhow::ensure!(
            response.status().is_success(),
            "request for {source} returned {}",
            response.status()
        );
        return Ok(response.text().await?);
    }
    std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))
}

async fn run_metrics(comparison_csv: &str) -> anyhow::Result<()> {
    let table = load_table(comparison_csv).await?;
    let all_series = ComparisonSeries::all_from_table(&table);

    info!("Loaded {} rows from {}", table.len(), comparison_csv);

    println!("{:<18} {:>5} {:>12} {:>12}", "Variable", "n", "RMSE", "Bias");
    for series in &all_series {
        match comparison_metrics(series) {
            Ok(metrics) => println!(
                "{:<18} {:>5} {:>8.2} {:<3} {:>8.2} {:<3}",
                series.variable.label(),
                metrics.samples,
                metrics.rmse,
                series.variable.unit(),
                metrics.bias,
                series.variable.unit(),
            ),
            Err(_) => println!(
                "{:<18} {:>5} {:>12} {:>12}",
                series.variable.label(),
                0,
                "no data",
                "no data"
            ),
        }
    }
    Ok(())
}

async fn run_events(reports_csv: &str) -> anyhow::Result<()> {
    let text = read_text(reports_csv).await?;
    let reports = parse_raw_reports(&text)?;
    let codes = WeatherCodeTable::default();

    info!("Loaded {} reports from {}", reports.len(), reports_csv);

    for report in &reports {
        println!("{}  {}", report.time, codes.labels(&report.report));
    }
    Ok(())
}
