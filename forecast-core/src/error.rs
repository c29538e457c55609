use reqwest::StatusCode;
use thiserror::Error;

/// Transport-level failure of a single OpenWeather request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Why a city search produced no dashboard.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("City not found")]
    NotFound,

    #[error("Failed to fetch city data")]
    LocationFetch(#[source] FetchError),

    #[error("Failed to fetch weather data")]
    ForecastFetch(#[source] FetchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_match_each_kind() {
        let decode = || FetchError::Decode(serde_json::from_str::<u8>("x").unwrap_err());

        assert_eq!(LookupError::NotFound.to_string(), "City not found");
        assert_eq!(
            LookupError::LocationFetch(decode()).to_string(),
            "Failed to fetch city data"
        );
        assert_eq!(
            LookupError::ForecastFetch(decode()).to_string(),
            "Failed to fetch weather data"
        );
    }

    #[test]
    fn fetch_failure_keeps_its_source() {
        use std::error::Error as _;

        let err = LookupError::ForecastFetch(FetchError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: "Invalid API key".into(),
        });
        let source = err.source().expect("source").to_string();
        assert!(source.contains("401"));
        assert!(source.contains("Invalid API key"));
    }
}
