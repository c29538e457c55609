use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Best geocoding match for a free-text city query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityMatch {
    pub display_name: String,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityMatch {
    /// Heading shown above the cards, e.g. "Shanghai, CN".
    pub fn label(&self) -> String {
        format!("{}, {}", self.display_name, self.country_code)
    }
}

/// One 3-hour step of the remote forecast series.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp: NaiveDateTime,
    pub temp_max: f64,
    pub temp_min: f64,
    pub condition_description: String,
    pub condition_icon_code: String,
}

impl ForecastSample {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Summary of every sample that falls on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Serialized as "YYYY-MM-DD".
    pub date: NaiveDate,
    pub temp_max: f64,
    pub temp_min: f64,
    pub condition_description: String,
    pub condition_icon_code: String,
    /// Samples folded into this record; fewer than 8 means a partial day.
    pub sample_count: usize,
}

impl DailyForecast {
    /// Number of 3-hour samples in a complete day.
    pub const FULL_DAY_SAMPLES: usize = 8;

    pub fn is_partial(&self) -> bool {
        self.sample_count < Self::FULL_DAY_SAMPLES
    }
}

/// A resolved city together with its aggregated days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub city: CityMatch,
    pub days: Vec<DailyForecast>,
}
