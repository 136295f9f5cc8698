use std::fmt;

use serde::Serialize;

use crate::{art, error::Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCategory {
    Sunny,
    Cloudy,
    Rainy,
    Thunderstorm,
    Tornado,
    Hail,
    Snow,
    Unknown,
}

/// Keyword sets in precedence order; the first category with a matching keyword wins.
const KEYWORDS: &[(WeatherCategory, &[&str])] = &[
    (WeatherCategory::Tornado, &["tornado"]),
    (WeatherCategory::Hail, &["hail"]),
    (WeatherCategory::Snow, &["snow", "snowy"]),
    (
        WeatherCategory::Thunderstorm,
        &["thunder", "thunderstorms", "lightning"],
    ),
    (WeatherCategory::Rainy, &["rain", "rainy", "showers", "drizzle"]),
    (WeatherCategory::Cloudy, &["clouds", "cloudy", "overcast"]),
    (WeatherCategory::Sunny, &["sun", "sunny"]),
];

impl WeatherCategory {
    /// Matches a short forecast such as "Partly Cloudy" against the keyword sets,
    /// ignoring case. Text with no known keyword is [`WeatherCategory::Unknown`].
    pub fn from_short_forecast(text: &str) -> Self {
        let text = text.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|word| text.contains(word)))
            .map_or(WeatherCategory::Unknown, |(category, _)| *category)
    }

    /// The art for this category, if there is any.
    pub fn art(self) -> Option<&'static str> {
        match self {
            WeatherCategory::Sunny => Some(art::SUN),
            WeatherCategory::Cloudy => Some(art::CLOUDS),
            WeatherCategory::Rainy => Some(art::RAIN),
            WeatherCategory::Tornado => Some(art::TORNADO),
            WeatherCategory::Thunderstorm
            | WeatherCategory::Hail
            | WeatherCategory::Snow
            | WeatherCategory::Unknown => None,
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeatherCategory::Sunny => "sunny",
            WeatherCategory::Cloudy => "cloudy",
            WeatherCategory::Rainy => "rainy",
            WeatherCategory::Thunderstorm => "thunderstorm",
            WeatherCategory::Tornado => "tornado",
            WeatherCategory::Hail => "hail",
            WeatherCategory::Snow => "snow",
            WeatherCategory::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Like [`WeatherCategory::from_short_forecast`], but unmatched text is an error.
pub fn classify(short_forecast: &str) -> Result<WeatherCategory, Error> {
    match WeatherCategory::from_short_forecast(short_forecast) {
        WeatherCategory::Unknown => Err(Error::UnclassifiedForecast(short_forecast.to_owned())),
        category => Ok(category),
    }
}

pub fn render(category: WeatherCategory) -> Option<&'static str> {
    category.art()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_over_later_categories() {
        assert_eq!(
            classify("Thunderstorms likely with sunny breaks").unwrap(),
            WeatherCategory::Thunderstorm
        );
        assert_eq!(classify("Rain And Snow").unwrap(), WeatherCategory::Snow);
        assert_eq!(
            classify("Tornado Watch, Hail Possible").unwrap(),
            WeatherCategory::Tornado
        );
        assert_eq!(
            classify("Chance Rain Showers then Mostly Cloudy").unwrap(),
            WeatherCategory::Rainy
        );
    }

    #[test]
    fn single_categories() {
        assert_eq!(classify("Tornado Warning").unwrap(), WeatherCategory::Tornado);
        assert_eq!(classify("Partly Cloudy").unwrap(), WeatherCategory::Cloudy);
        assert_eq!(classify("Mostly Sunny").unwrap(), WeatherCategory::Sunny);
        assert_eq!(classify("Small Hail").unwrap(), WeatherCategory::Hail);
        assert_eq!(classify("Lightning").unwrap(), WeatherCategory::Thunderstorm);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("SUNNY").unwrap(), WeatherCategory::Sunny);
        assert_eq!(classify("light snow").unwrap(), WeatherCategory::Snow);
    }

    #[test]
    fn unknown_text_is_an_error() {
        let err = classify("Hazy").unwrap_err();
        assert!(matches!(err, Error::UnclassifiedForecast(ref text) if text == "Hazy"));
        assert_eq!(
            WeatherCategory::from_short_forecast("Hazy"),
            WeatherCategory::Unknown
        );
    }

    #[test]
    fn art_lookup() {
        assert_eq!(render(WeatherCategory::Sunny), Some(art::SUN));
        assert_eq!(render(WeatherCategory::Tornado), Some(art::TORNADO));
        assert_eq!(render(WeatherCategory::Snow), None);
        assert_eq!(render(WeatherCategory::Unknown), None);
    }
}
