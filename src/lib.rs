//! Look up the current National Weather Service forecast for a city.
//!
//! A city name is geocoded to coordinates, the coordinates are mapped to a forecast
//! resource on `api.weather.gov`, and the first forecast period is classified into a
//! [`forecast::WeatherCategory`] that selects an ASCII-art picture.

pub mod app;
pub mod art;
pub mod decode;
pub mod error;
pub mod forecast;
mod utils;
pub mod weather_client;

pub use error::Error;
pub use utils::format_significant;
