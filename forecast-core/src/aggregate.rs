//! Daily reduction of the 3-hour forecast series.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::{
    error::LookupError,
    model::{DailyForecast, ForecastSample},
    provider::WeatherSource,
};

/// Most days handed to the rendering surface.
pub const MAX_DAYS: usize = 7;

/// Fold samples into one record per calendar day.
///
/// Samples are walked in the order given. The first sample of a date seeds
/// the record, including its description and icon; later samples of that
/// date only push the max up or the min down. Records come out in
/// first-seen date order, truncated to [`MAX_DAYS`]. Partial days at either
/// end of the series are kept as they are.
pub fn aggregate_daily<I>(samples: I) -> Vec<DailyForecast>
where
    I: IntoIterator<Item = ForecastSample>,
{
    let mut days: Vec<DailyForecast> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for sample in samples {
        let date = sample.date();

        match index.get(&date).copied() {
            Some(slot) => {
                let day = &mut days[slot];
                if sample.temp_max > day.temp_max {
                    day.temp_max = sample.temp_max;
                }
                if sample.temp_min < day.temp_min {
                    day.temp_min = sample.temp_min;
                }
                day.sample_count += 1;
            }
            None => {
                index.insert(date, days.len());
                days.push(DailyForecast {
                    date,
                    temp_max: sample.temp_max,
                    temp_min: sample.temp_min,
                    condition_description: sample.condition_description,
                    condition_icon_code: sample.condition_icon_code,
                    sample_count: 1,
                });
            }
        }
    }

    days.truncate(MAX_DAYS);
    days
}

/// Fetch the forecast for a coordinate and reduce it to daily records.
pub async fn fetch_daily(
    source: &dyn WeatherSource,
    latitude: f64,
    longitude: f64,
) -> Result<Vec<DailyForecast>, LookupError> {
    let samples = source.forecast(latitude, longitude).await.map_err(|err| {
        tracing::warn!(error = %err, latitude, longitude, "forecast request failed");
        LookupError::ForecastFetch(err)
    })?;

    let sample_count = samples.len();
    let days = aggregate_daily(samples);
    tracing::info!(sample_count, days = days.len(), "aggregated forecast");

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn sample(ts: &str, max: f64, min: f64, desc: &str) -> ForecastSample {
        ForecastSample {
            timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S")
                .expect("valid timestamp"),
            temp_max: max,
            temp_min: min,
            condition_description: desc.to_string(),
            condition_icon_code: format!("{desc}-icon"),
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
    }

    #[test]
    fn two_day_scenario() {
        let days = aggregate_daily(vec![
            sample("2024-01-01 00:00:00", 10.0, 2.0, "clear"),
            sample("2024-01-01 03:00:00", 15.0, 0.0, "cloudy"),
            sample("2024-01-02 00:00:00", 8.0, -1.0, "rain"),
        ]);

        assert_eq!(days.len(), 2);

        assert_eq!(days[0].date, date("2024-01-01"));
        assert_eq!(days[0].temp_max, 15.0);
        assert_eq!(days[0].temp_min, 0.0);
        assert_eq!(days[0].condition_description, "clear");
        assert_eq!(days[0].condition_icon_code, "clear-icon");
        assert_eq!(days[0].sample_count, 2);

        assert_eq!(days[1].date, date("2024-01-02"));
        assert_eq!(days[1].temp_max, 8.0);
        assert_eq!(days[1].temp_min, -1.0);
        assert_eq!(days[1].condition_description, "rain");
    }

    #[test]
    fn max_and_min_cover_the_whole_group() {
        let maxes = [3.5, 9.0, -2.0, 9.0, 7.25, 1.0];
        let mins = [0.0, -4.5, 2.0, -1.0, -4.5, 3.0];
        let samples = maxes.iter().zip(mins.iter()).enumerate().map(|(i, (max, min))| {
            sample(&format!("2024-03-10 {:02}:00:00", i * 3), *max, *min, "x")
        });

        let days = aggregate_daily(samples);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].temp_max, 9.0);
        assert_eq!(days[0].temp_min, -4.5);
        assert_eq!(days[0].sample_count, 6);
    }

    #[test]
    fn first_description_wins_over_later_ones() {
        let days = aggregate_daily(vec![
            sample("2024-05-01 06:00:00", 12.0, 8.0, "light rain"),
            sample("2024-05-01 09:00:00", 20.0, 5.0, "clear sky"),
            sample("2024-05-01 12:00:00", 25.0, 4.0, "thunderstorm"),
        ]);

        assert_eq!(days[0].condition_description, "light rain");
        assert_eq!(days[0].condition_icon_code, "light rain-icon");
    }

    #[test]
    fn dates_keep_first_seen_order() {
        let days = aggregate_daily(vec![
            sample("2024-01-03 21:00:00", 1.0, 0.0, "a"),
            sample("2024-01-01 00:00:00", 1.0, 0.0, "b"),
            sample("2024-01-03 00:00:00", 5.0, -3.0, "c"),
            sample("2024-01-02 00:00:00", 1.0, 0.0, "d"),
        ]);

        let order: Vec<_> = days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(order, ["2024-01-03", "2024-01-01", "2024-01-02"]);
        assert_eq!(days[0].temp_max, 5.0);
        assert_eq!(days[0].temp_min, -3.0);
        assert_eq!(days[0].condition_description, "a");
    }

    #[test]
    fn output_is_truncated_to_the_first_seven_days() {
        let samples = (1..=10).flat_map(|day| {
            [0, 12].map(move |hour| {
                sample(&format!("2024-02-{day:02} {hour:02}:00:00"), 1.0, 0.0, "x")
            })
        });

        let days = aggregate_daily(samples);

        assert_eq!(days.len(), MAX_DAYS);
        assert_eq!(days.first().map(|d| d.date), Some(date("2024-02-01")));
        assert_eq!(days.last().map(|d| d.date), Some(date("2024-02-07")));
    }

    #[test]
    fn equal_values_do_not_change_the_record() {
        let days = aggregate_daily(vec![
            sample("2024-01-01 00:00:00", 4.0, 1.0, "first"),
            sample("2024-01-01 03:00:00", 4.0, 1.0, "second"),
        ]);

        assert_eq!(days[0].temp_max, 4.0);
        assert_eq!(days[0].temp_min, 1.0);
        assert_eq!(days[0].condition_description, "first");
    }

    #[test]
    fn partial_edge_days_are_kept() {
        let mut samples = vec![sample("2024-01-01 21:00:00", 3.0, 1.0, "late")];
        samples.extend((0..8).map(|i| {
            sample(&format!("2024-01-02 {:02}:00:00", i * 3), 6.0, 2.0, "full")
        }));

        let days = aggregate_daily(samples);

        assert_eq!(days.len(), 2);
        assert!(days[0].is_partial());
        assert!(!days[1].is_partial());
    }

    #[test]
    fn empty_series_yields_no_days() {
        assert!(aggregate_daily(Vec::new()).is_empty());
    }
}
