use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};

use crate::{
    config::{Config, DEFAULT_FORECAST_URL, DEFAULT_GEOCODE_URL},
    error::FetchError,
    model::{CityMatch, ForecastSample},
};

use super::WeatherSource;

const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    geocode_url: String,
    forecast_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoints(api_key, DEFAULT_GEOCODE_URL, DEFAULT_FORECAST_URL)
    }

    /// Point the client at other endpoints, e.g. a local mock server.
    pub fn with_endpoints(
        api_key: String,
        geocode_url: impl Into<String>,
        forecast_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key,
            geocode_url: geocode_url.into(),
            forecast_url: forecast_url.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_endpoints(
            config.api_key().to_string(),
            config.geocode_url.as_str(),
            config.forecast_url.as_str(),
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let res = self
            .http
            .get(url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct OwGeoEntry {
    name: String,
    country: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp_max: f64,
    temp_min: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    #[serde(deserialize_with = "de_dt_txt")]
    dt_txt: NaiveDateTime,
    main: OwMain,
    /// Only `weather[0]` is used; an empty array is a malformed sample.
    #[serde(rename = "weather", deserialize_with = "de_first_weather")]
    condition: OwWeather,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

impl From<OwGeoEntry> for CityMatch {
    fn from(entry: OwGeoEntry) -> Self {
        Self {
            display_name: entry.name,
            country_code: entry.country,
            latitude: entry.lat,
            longitude: entry.lon,
        }
    }
}

impl From<OwForecastEntry> for ForecastSample {
    fn from(entry: OwForecastEntry) -> Self {
        Self {
            timestamp: entry.dt_txt,
            temp_max: entry.main.temp_max,
            temp_min: entry.main.temp_min,
            condition_description: entry.condition.description,
            condition_icon_code: entry.condition.icon,
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn geocode(&self, query: &str) -> Result<Vec<CityMatch>, FetchError> {
        tracing::debug!(query, url = %self.geocode_url, "geocoding request");

        let entries: Vec<OwGeoEntry> = self
            .get_json(&self.geocode_url, &[("q", query), ("limit", "1")])
            .await?;

        Ok(entries.into_iter().map(CityMatch::from).collect())
    }

    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastSample>, FetchError> {
        tracing::debug!(latitude, longitude, url = %self.forecast_url, "forecast request");

        let lat = latitude.to_string();
        let lon = longitude.to_string();
        let parsed: OwForecastResponse = self
            .get_json(
                &self.forecast_url,
                &[("lat", lat.as_str()), ("lon", lon.as_str()), ("units", "metric")],
            )
            .await?;

        Ok(parsed.list.into_iter().map(ForecastSample::from).collect())
    }
}

fn de_dt_txt<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, DT_TXT_FORMAT).map_err(serde::de::Error::custom)
}

fn de_first_weather<'de, D>(deserializer: D) -> Result<OwWeather, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<OwWeather>::deserialize(deserializer)?
        .into_iter()
        .next()
        .ok_or_else(|| serde::de::Error::custom("forecast sample has no weather condition"))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
