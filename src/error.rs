use reqwest::StatusCode;
use thiserror::Error;

use crate::decode::Shape;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status code: {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),

    #[error("no valid response found")]
    EmptyResponse,

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected {expected} response, got {found}")]
    ShapeMismatch { expected: Shape, found: Shape },

    #[error("the requested city could not be found: {0}")]
    CityNotFound(String),

    #[error("coordinates out of range: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("the forecast contained no periods")]
    EmptyForecast,

    #[error("could not classify forecast: {0:?}")]
    UnclassifiedForecast(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_carries_code() {
        let error = Error::UnexpectedStatus(StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "unexpected status code: 404");
    }

    #[test]
    fn shape_mismatch_names_both_shapes() {
        let error = Error::ShapeMismatch {
            expected: Shape::List,
            found: Shape::Object,
        };
        assert_eq!(error.to_string(), "expected list response, got object");
    }
}
