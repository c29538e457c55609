//! Core library for the `forecast` dashboard.
//!
//! This crate defines:
//! - Configuration & API key handling
//! - The OpenWeather client behind the `WeatherSource` trait
//! - City resolution and the daily aggregation of the 3-hour forecast
//! - The search session state machine the front end drives
//!
//! It is used by `forecast-cli`, but can also be reused by other front ends.

pub mod aggregate;
pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod resolve;
pub mod session;

pub use aggregate::{MAX_DAYS, aggregate_daily, fetch_daily};
pub use config::Config;
pub use display::{RangeBar, TempBand, icon_url};
pub use error::{FetchError, LookupError};
pub use model::{CityMatch, DailyForecast, Dashboard, ForecastSample};
pub use pipeline::search;
pub use provider::{OpenWeatherClient, WeatherSource};
pub use resolve::resolve;
pub use session::{Completion, SearchState, SearchTicket, Session};
