use std::time::Duration;

use getset::{CopyGetters, Getters};
use reqwest::{header::ACCEPT, Client as HttpClient, ClientBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    decode::{decode_list, decode_object},
    error::Error,
    utils::{format_significant, Timing},
};

const GEOCODE_ACCEPT: &str = "application/json;charset=utf-8";
const GEO_JSON_ACCEPT: &str = "application/geo+json";

/// Significant digits of each coordinate in a point lookup.
const POINT_PRECISION: usize = 4;

#[derive(Debug, Clone, Deserialize, Getters, CopyGetters)]
#[serde(default)]
pub struct Config {
    #[getset(get = "pub")]
    geocode_base_url: String,

    #[getset(get = "pub")]
    weather_base_url: String,

    /// Only geocoding candidates from this country are accepted. Empty disables the filter.
    #[getset(get = "pub")]
    country_code: Option<String>,

    #[getset(get_copy = "pub")]
    timeout_seconds: u64,

    #[getset(get = "pub")]
    user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            geocode_base_url: "https://api.geocode.city".to_owned(),
            weather_base_url: "https://api.weather.gov".to_owned(),
            country_code: Some("US".to_owned()),
            timeout_seconds: 10,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl Config {
    pub fn set_country_code(&mut self, country_code: Option<String>) {
        self.country_code = country_code;
    }

    fn country_filter(&self) -> Option<&str> {
        self.country_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, CopyGetters, Serialize)]
pub struct Coordinates {
    #[getset(get_copy = "pub")]
    latitude: f64,

    #[getset(get_copy = "pub")]
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Ok(Coordinates {
                latitude,
                longitude,
            })
        } else {
            Err(Error::InvalidCoordinates {
                latitude,
                longitude,
            })
        }
    }

    /// The `lat,lon` segment of a point lookup path.
    pub fn point(&self) -> String {
        format!(
            "{},{}",
            format_significant(self.latitude, POINT_PRECISION),
            format_significant(self.longitude, POINT_PRECISION)
        )
    }
}

#[derive(Debug, Clone, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeCandidate {
    #[getset(get = "pub")]
    name: String,

    longitude: f64,

    latitude: f64,

    #[serde(default)]
    #[getset(get = "pub")]
    country: Option<String>,

    #[serde(default)]
    #[getset(get = "pub")]
    country_code: Option<String>,

    #[serde(default)]
    #[getset(get = "pub")]
    region: Option<String>,

    #[serde(default)]
    #[getset(get = "pub")]
    district: Option<String>,

    #[serde(default)]
    #[getset(get = "pub")]
    timezone: Option<String>,

    #[serde(default)]
    #[getset(get = "pub")]
    population: Option<u64>,
}

impl GeocodeCandidate {
    pub fn coordinates(&self) -> Result<Coordinates, Error> {
        Coordinates::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Getters, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMetadata {
    #[getset(get = "pub")]
    forecast_link: String,

    #[getset(get = "pub")]
    forecast_hourly_link: String,

    #[getset(get = "pub")]
    relative_city: String,

    #[getset(get = "pub")]
    relative_state: String,
}

impl LocationMetadata {
    pub fn new(
        forecast_link: String,
        forecast_hourly_link: String,
        relative_city: String,
        relative_state: String,
    ) -> Self {
        LocationMetadata {
            forecast_link,
            forecast_hourly_link,
            relative_city,
            relative_state,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointResponse {
    properties: PointProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointProperties {
    forecast: String,
    #[serde(default)]
    forecast_hourly: String,
    relative_location: RelativeLocation,
}

#[derive(Debug, Deserialize)]
struct RelativeLocation {
    properties: RelativeLocationProperties,
}

#[derive(Debug, Deserialize)]
struct RelativeLocationProperties {
    city: String,
    state: String,
}

impl From<PointResponse> for LocationMetadata {
    fn from(response: PointResponse) -> Self {
        let properties = response.properties;
        let relative = properties.relative_location.properties;
        LocationMetadata::new(
            properties.forecast,
            properties.forecast_hourly,
            relative.city,
            relative.state,
        )
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    #[serde(default)]
    pub unit_code: String,
    pub value: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Getters, CopyGetters)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    #[getset(get_copy = "pub")]
    number: u32,

    #[getset(get = "pub")]
    name: String,

    #[getset(get = "pub")]
    start_time: String,

    #[getset(get = "pub")]
    end_time: String,

    #[serde(alias = "isDayTime")]
    #[getset(get_copy = "pub")]
    is_daytime: bool,

    #[getset(get_copy = "pub")]
    temperature: i32,

    #[getset(get = "pub")]
    temperature_unit: String,

    #[serde(default)]
    #[getset(get = "pub")]
    temperature_trend: Option<String>,

    #[serde(default)]
    probability_of_precipitation: Quantity,

    #[getset(get = "pub")]
    wind_speed: String,

    #[getset(get = "pub")]
    wind_direction: String,

    #[getset(get = "pub")]
    short_forecast: String,

    #[getset(get = "pub")]
    detailed_forecast: String,
}

impl ForecastPeriod {
    pub fn precipitation_probability_percent(&self) -> Option<i32> {
        self.probability_of_precipitation.value
    }
}

/// Status code and fully read body of a single GET.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

pub fn check_status(actual: StatusCode, expected: StatusCode) -> Result<(), Error> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::UnexpectedStatus(actual))
    }
}

pub struct Client {
    config: Config,
    client: HttpClient,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Client { config, client })
    }

    /// Issues one GET with the given headers and reads the whole body.
    pub async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse, Error> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }

    /// Turns a free-text city name into coordinates.
    ///
    /// With a country filter configured, the first candidate from that country is used
    /// and a result set without one is [`Error::CityNotFound`]; otherwise the first
    /// candidate is used.
    pub async fn geocode(&self, city: &str) -> Result<Coordinates, Error> {
        let city = city.trim();
        if city.is_empty() {
            return Err(Error::CityNotFound(city.to_owned()));
        }

        let country = self.config.country_filter();
        let url = geocode_url(&self.config.geocode_base_url, city, country.is_none());
        let candidates: Vec<GeocodeCandidate> =
            self.get_response(&url, GEOCODE_ACCEPT, "geocode").await?;
        debug!("{} geocoding candidates for {}", candidates.len(), city);

        let candidate = match country {
            Some(code) => candidates
                .iter()
                .find(|candidate| {
                    candidate
                        .country_code
                        .as_deref()
                        .is_some_and(|candidate_code| candidate_code.eq_ignore_ascii_case(code))
                }),
            None => candidates.first(),
        };

        let Some(candidate) = candidate else {
            if !candidates.is_empty() {
                warn!("no candidate for {} in country {:?}", city, country);
            }
            return Err(Error::CityNotFound(city.to_owned()));
        };

        let coordinates = candidate.coordinates()?;
        info!(
            "resolved {} to {}, {} ({}, {})",
            city,
            candidate.name,
            candidate.country.as_deref().unwrap_or("unknown country"),
            coordinates.latitude,
            coordinates.longitude
        );

        Ok(coordinates)
    }

    /// Looks up the forecast links and nearest named place for a coordinate pair.
    pub async fn forecast_location(
        &self,
        coordinates: &Coordinates,
    ) -> Result<LocationMetadata, Error> {
        let url = format!(
            "{}/points/{}",
            self.config.weather_base_url.trim_end_matches('/'),
            coordinates.point()
        );
        let point: PointResponse = self.get_response(&url, GEO_JSON_ACCEPT, "points").await?;

        Ok(point.into())
    }

    /// Fetches the forecast periods behind `forecast_link`, in the order received.
    pub async fn forecast_periods(&self, forecast_link: &str) -> Result<Vec<ForecastPeriod>, Error> {
        let forecast: ForecastResponse = self
            .get_response(forecast_link, GEO_JSON_ACCEPT, "forecast")
            .await?;

        let periods = forecast.properties.periods;
        if periods.is_empty() {
            return Err(Error::EmptyForecast);
        }

        Ok(periods)
    }

    async fn get_response<T: DecodeShape>(
        &self,
        url: &str,
        accept: &str,
        identifier: &'static str,
    ) -> Result<T, Error> {
        let _timing = Timing::new(identifier, url);
        let response = self.get(url, &[(ACCEPT.as_str(), accept)]).await?;
        check_status(response.status, StatusCode::OK)?;

        T::decode_body(&response.body)
    }
}

/// Whether a response type is decoded from a JSON object or a JSON array.
trait DecodeShape: Sized {
    fn decode_body(body: &[u8]) -> Result<Self, Error>;
}

impl<T: DeserializeOwned> DecodeShape for Vec<T> {
    fn decode_body(body: &[u8]) -> Result<Self, Error> {
        decode_list(body)
    }
}

impl DecodeShape for PointResponse {
    fn decode_body(body: &[u8]) -> Result<Self, Error> {
        decode_object(body)
    }
}

impl DecodeShape for ForecastResponse {
    fn decode_body(body: &[u8]) -> Result<Self, Error> {
        decode_object(body)
    }
}

pub fn geocode_url(base_url: &str, city: &str, limit_one: bool) -> String {
    let limit = if limit_one { "limit=1&" } else { "" };
    format!(
        "{}/autocomplete?{}q={}",
        base_url.trim_end_matches('/'),
        limit,
        urlencoding::encode(city)
    )
}
