use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::FetchError,
    model::{CityMatch, ForecastSample},
};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Remote data the search pipeline depends on.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Geocode free text; an empty vector means no place matched.
    async fn geocode(&self, query: &str) -> Result<Vec<CityMatch>, FetchError>;

    /// Fetch the metric 3-hour forecast series for a coordinate, in chronological order.
    async fn forecast(&self, latitude: f64, longitude: f64)
    -> Result<Vec<ForecastSample>, FetchError>;
}
