use anyhow::{Context, Result};
use bls_rs::{Client, ConfigError, DataProvider, QueryConfig, ResponseEnvelope, api, render};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "bls",
    version,
    about = "Query the BLS public data API and print a report for one series"
)]
struct Cli {
    /// First year to get data for (required unless --file is given)
    #[arg(long, value_name = "YEAR")]
    start: Option<String>,
    /// Last year to get data for (required unless --file is given)
    #[arg(long, value_name = "YEAR")]
    end: Option<String>,
    /// Series to get data for (required unless --file is given)
    #[arg(long, value_name = "ID")]
    series: Option<String>,
    /// Request annual average of monthly values
    #[arg(long, default_value_t = false)]
    avg: bool,
    /// Request data calculations
    #[arg(long, default_value_t = false)]
    calc: bool,
    /// Request series catalog data
    #[arg(long, default_value_t = false)]
    cat: bool,
    /// API registration key. Queries work without one, with tighter limits.
    #[arg(long)]
    key: Option<String>,
    /// Render a saved API response instead of querying the API.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn query_config(&self) -> QueryConfig {
        QueryConfig {
            start: self.start.clone(),
            end: self.end.clone(),
            series: self.series.clone(),
            annual_average: self.avg,
            calculations: self.calc,
            catalog: self.cat,
            key: self.key.clone(),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let envelope = match cli.file.as_ref() {
        Some(path) => api::parse_file(path)
            .with_context(|| format!("parse saved response {}", path.display()))?,
        None => match query(&cli)? {
            Some(envelope) => envelope,
            None => return Ok(ExitCode::FAILURE),
        },
    };
    log::info!(
        "status={} response_time={}ms messages={}",
        envelope.status,
        envelope.response_time,
        envelope.messages.len()
    );

    render(&envelope, &mut std::io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}

/// Run a live query. Returns `None` after reporting missing required flags.
fn query(cli: &Cli) -> Result<Option<ResponseEnvelope>> {
    let payload = match cli.query_config().into_payload() {
        Ok(p) => p,
        Err(ConfigError::MissingFlag(flag)) => {
            log::debug!("missing --{}", flag);
            println!("Missing a required flag!");
            println!("Try 'bls --help' for more information.");
            return Ok(None);
        }
    };

    println!(
        "Querying series {} for years {} through {}...\n",
        payload.series.join(","),
        payload.start,
        payload.end
    );

    let client = Client::new().context("build http client")?;
    let envelope = client
        .fetch(&payload)
        .with_context(|| format!("query {}", client.base_url))?;
    Ok(Some(envelope))
}
