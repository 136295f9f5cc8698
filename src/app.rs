use std::{fs, io, path::Path};

use anyhow::Context;
use clap::ValueEnum;
use getset::{CopyGetters, Getters};
use prettytable::{
    format::{self},
    row, Table,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, subscriber::set_global_default, Level};
use tracing_subscriber::FmtSubscriber;

use crate::{
    error::Error,
    forecast::{classify, render, WeatherCategory},
    weather_client::{Client, Config, ForecastPeriod, LocationMetadata},
};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    #[default]
    Simple,
    Table,
    Json,
}

#[derive(Debug, Deserialize, Getters, CopyGetters)]
#[serde(default)]
pub struct AppConfig {
    #[getset(get = "pub")]
    client: Config,

    #[getset(get_copy = "pub")]
    output: OutputType,

    #[getset(get = "pub")]
    level: Option<String>,

    /// How many periods the table and JSON outputs include.
    #[getset(get_copy = "pub")]
    periods: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            client: Config::default(),
            output: OutputType::default(),
            level: Some("warn".to_owned()),
            periods: 1,
        }
    }
}

impl AppConfig {
    /// Reads the configuration at `path`. A missing file is only tolerated when
    /// `required` is false, in which case the defaults are used.
    pub fn load(path: impl AsRef<Path>, required: bool) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                return Ok(AppConfig::default());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("failed to read the configuration file {}", path.display())
                })
            }
        };

        toml::from_str(&content)
            .with_context(|| format!("failed to deserialize config file {}", path.display()))
    }

    pub fn client_mut(&mut self) -> &mut Config {
        &mut self.client
    }

    pub fn into_client(self) -> Config {
        self.client
    }

    pub fn set_output(&mut self, output: OutputType) {
        self.output = output;
    }

    pub fn set_level(&mut self, level: String) {
        self.level = Some(level);
    }

    pub fn set_periods(&mut self, periods: usize) {
        self.periods = periods;
    }

    pub fn tracing_level(&self) -> Level {
        match self.level.as_ref() {
            Some(level) => level.parse::<Level>().unwrap_or(Level::INFO),
            None => Level::INFO,
        }
    }
}

/// Everything needed to print a forecast, gathered before anything is printed.
#[derive(Debug, Getters, CopyGetters)]
pub struct ForecastReport {
    #[getset(get = "pub")]
    location: LocationMetadata,

    #[getset(get_copy = "pub")]
    category: WeatherCategory,

    #[getset(get = "pub")]
    periods: Vec<ForecastPeriod>,
}

impl ForecastReport {
    /// The current period. Reports are only built from non-empty period lists.
    pub fn current(&self) -> Option<&ForecastPeriod> {
        self.periods.first()
    }

    pub fn art(&self) -> Option<&'static str> {
        render(self.category)
    }
}

/// Runs the whole lookup for `city`: geocode, point lookup, periods fetch and
/// classification of the current period.
pub async fn fetch_report(client: &Client, city: &str, hourly: bool) -> Result<ForecastReport, Error> {
    let coordinates = client.geocode(city).await?;
    let location = client.forecast_location(&coordinates).await?;

    let link = if hourly && !location.forecast_hourly_link().is_empty() {
        location.forecast_hourly_link()
    } else {
        location.forecast_link()
    };
    let periods = client.forecast_periods(link).await?;

    let current = periods.first().ok_or(Error::EmptyForecast)?;
    let category = classify(current.short_forecast())?;
    debug!("{:?} classified as {}", current.short_forecast(), category);

    Ok(ForecastReport {
        location,
        category,
        periods,
    })
}

pub fn format_report(report: &ForecastReport, output: OutputType, periods: usize) -> String {
    match output {
        OutputType::Simple => format_simple(report),
        OutputType::Table => format_table(report, periods),
        OutputType::Json => format_json(report, periods),
    }
}

fn location_line(location: &LocationMetadata) -> String {
    format!("{}, {}", location.relative_city(), location.relative_state())
}

/// Hourly periods come without a name, so their start time labels them instead.
fn period_label(period: &ForecastPeriod) -> &str {
    if period.name().trim().is_empty() {
        period.start_time()
    } else {
        period.name()
    }
}

fn temperature(period: &ForecastPeriod) -> String {
    format!("{}°{}", period.temperature(), period.temperature_unit())
}

pub(crate) fn format_simple(report: &ForecastReport) -> String {
    let mut lines = vec![location_line(report.location())];
    if let Some(period) = report.current() {
        lines.push(period_label(period).to_owned());
        lines.push(temperature(period));
        lines.push(period.detailed_forecast().clone());
    }
    if let Some(art) = report.art() {
        lines.push(art.to_owned());
    }
    lines.join("\n")
}

pub(crate) fn format_table(report: &ForecastReport, periods: usize) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["Period", "Temperature", "Wind", "Precipitation", "Forecast"]);

    for period in report.periods().iter().take(periods.max(1)) {
        let precipitation = period
            .precipitation_probability_percent()
            .map_or_else(|| "-".to_owned(), |value| format!("{value}%"));
        table.add_row(row![
            period_label(period),
            temperature(period),
            format!("{} {}", period.wind_speed(), period.wind_direction()),
            precipitation,
            period.short_forecast()
        ]);
    }

    let mut lines = vec![location_line(report.location()), table.to_string()];
    if let Some(art) = report.art() {
        lines.push(art.to_owned());
    }
    lines.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    location: &'a LocationMetadata,
    category: WeatherCategory,
    periods: &'a [ForecastPeriod],
}

pub(crate) fn format_json(report: &ForecastReport, periods: usize) -> String {
    let count = periods.max(1).min(report.periods.len());
    let json = JsonReport {
        location: &report.location,
        category: report.category,
        periods: report.periods.get(..count).unwrap_or_default(),
    };
    serde_json::to_string_pretty(&json).unwrap_or_default()
}

pub fn init_tracing(level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();

    if set_global_default(subscriber).is_err() {
        debug!("tracing subscriber already set");
    }
}
