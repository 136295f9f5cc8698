use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use itertools::Itertools;
use tracing::error;
use wackyweather::{
    app::{self, AppConfig, OutputType, DEFAULT_CONFIG_PATH},
    weather_client,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Config {
    /// The city to look up. Several words are joined with spaces.
    #[arg(required = true)]
    pub city: Vec<String>,

    /// The type of output to display the forecast.
    #[arg(short, long)]
    pub output: Option<OutputType>,

    /// Path of the TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only accept cities in this country (ISO 3166-1 alpha-2 code).
    #[arg(long, conflicts_with = "any_country")]
    pub country: Option<String>,

    /// Accept the first matching city in any country.
    #[arg(long)]
    pub any_country: bool,

    /// Use the hourly forecast instead of the twice-daily one.
    #[arg(long)]
    pub hourly: bool,

    /// Number of periods shown by the table and JSON outputs.
    #[arg(short, long)]
    pub periods: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(short, long)]
    pub level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli_config = Config::parse();

    let loaded = match &cli_config.config {
        Some(path) => AppConfig::load(path, true),
        None => AppConfig::load(DEFAULT_CONFIG_PATH, false),
    };
    let mut app_config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(level) = cli_config.level {
        app_config.set_level(level);
    }
    app::init_tracing(app_config.tracing_level());

    if let Some(output) = cli_config.output {
        app_config.set_output(output);
    }
    if let Some(periods) = cli_config.periods {
        app_config.set_periods(periods);
    }
    if cli_config.any_country {
        app_config.client_mut().set_country_code(None);
    } else if let Some(country) = cli_config.country {
        app_config.client_mut().set_country_code(Some(country));
    }

    let city = cli_config
        .city
        .iter()
        .map(String::as_str)
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .join(" ");
    let output = app_config.output();
    let periods = app_config.periods();

    let client = match weather_client::Client::new(app_config.into_client()) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to create the HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match app::fetch_report(&client, &city, cli_config.hourly).await {
        Ok(report) => {
            println!("{}", app::format_report(&report, output, periods));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
