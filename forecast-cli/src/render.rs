//! Plain-text cards for the dashboard.

use std::fmt::Write as _;

use forecast_core::{
    DailyForecast, Dashboard, RangeBar, Session, TempBand,
    display::{RANGE_SCALE_MAX, RANGE_SCALE_MIN},
    icon_url,
};

const BAR_CELLS: usize = 20;

pub fn dashboard(dashboard: &Dashboard, icon_base_url: &str) -> String {
    let mut out = format!("\n  {}\n\n", dashboard.city.label());

    if dashboard.days.is_empty() {
        out.push_str("  No forecast data\n");
    }

    for day in &dashboard.days {
        out.push_str(&card(day, icon_base_url));
        out.push('\n');
    }

    out
}

/// Error line (if any) followed by the last good dashboard.
pub fn session(session: &Session, icon_base_url: &str) -> String {
    let mut out = String::new();

    if let Some(message) = session.error() {
        let _ = writeln!(out, "  ! {message}");
    }
    if let Some(current) = session.dashboard() {
        out.push_str(&dashboard(current, icon_base_url));
    }

    out
}

fn card(day: &DailyForecast, icon_base_url: &str) -> String {
    let band = TempBand::from_max(day.temp_max).as_str();
    let bar = RangeBar::new(day.temp_min, day.temp_max).render(BAR_CELLS);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {} {:<6} {:>4}° / {:>4}°  [{band}]{}",
        day.date.format("%a"),
        day.date.format("%b %-d").to_string(),
        degrees(day.temp_max),
        degrees(day.temp_min),
        if day.is_partial() { "  (partial day)" } else { "" },
    );
    let _ = writeln!(out, "      {}", day.condition_description);
    let _ = writeln!(out, "      {RANGE_SCALE_MIN}° {bar} {RANGE_SCALE_MAX}°");
    let _ = writeln!(out, "      {}", icon_url(icon_base_url, &day.condition_icon_code));

    out
}

/// Rounded half up (-2.5 -> -2), without a "-0".
fn degrees(temp: f64) -> f64 {
    (temp + 0.5).floor() + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use forecast_core::CityMatch;

    fn day(max: f64, min: f64, samples: usize) -> DailyForecast {
        DailyForecast {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            temp_max: max,
            temp_min: min,
            condition_description: "light rain".into(),
            condition_icon_code: "10d".into(),
            sample_count: samples,
        }
    }

    #[test]
    fn card_shows_weekday_date_and_rounded_temps() {
        let text = card(&day(14.6, -0.4, 8), "https://openweathermap.org/img/wn");

        assert!(text.contains("Mon Jan 1"), "{text}");
        assert!(text.contains("  15° /    0°"), "{text}");
        assert!(text.contains("[cool]"));
        assert!(text.contains("light rain"));
        assert!(text.contains("https://openweathermap.org/img/wn/10d@2x.png"));
        assert!(!text.contains("partial"));
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(degrees(-2.5), -2.0);
        assert_eq!(degrees(2.5), 3.0);
        assert_eq!(degrees(-2.6), -3.0);
        assert_eq!(degrees(-0.4).to_string(), "0");

        let text = card(&day(7.5, -2.5, 8), "http://icons");
        assert!(text.contains("   8° /   -2°"), "{text}");
    }

    #[test]
    fn partial_days_are_flagged() {
        let text = card(&day(31.0, 20.0, 3), "http://icons");

        assert!(text.contains("[scorching]"));
        assert!(text.contains("(partial day)"));
    }

    #[test]
    fn dashboard_starts_with_city_label() {
        let board = Dashboard {
            city: CityMatch {
                display_name: "Shanghai".into(),
                country_code: "CN".into(),
                latitude: 31.23,
                longitude: 121.47,
            },
            days: vec![day(10.0, 2.0, 8)],
        };

        let text = dashboard(&board, "http://icons");
        assert!(text.trim_start().starts_with("Shanghai, CN"));
    }
}
