//! Pure helpers the rendering surface uses to present a day.

/// Lower end of the range bar scale, in °C.
pub const RANGE_SCALE_MIN: f64 = -10.0;
/// Upper label of the range bar scale, in °C.
pub const RANGE_SCALE_MAX: f64 = 30.0;
/// Bar length per degree, in percent of the track.
const PERCENT_PER_DEGREE: f64 = 3.0;

/// `<base>/<code>@2x.png`. The URL is not checked.
pub fn icon_url(base_url: &str, icon_code: &str) -> String {
    format!("{}/{icon_code}@2x.png", base_url.trim_end_matches('/'))
}

/// Card tint picked from a day's maximum temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempBand {
    Scorching,
    Hot,
    Warm,
    Mild,
    Cool,
}

impl TempBand {
    pub fn from_max(temp_max: f64) -> Self {
        if temp_max > 30.0 {
            Self::Scorching
        } else if temp_max > 25.0 {
            Self::Hot
        } else if temp_max > 20.0 {
            Self::Warm
        } else if temp_max > 15.0 {
            Self::Mild
        } else {
            Self::Cool
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scorching => "scorching",
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Mild => "mild",
            Self::Cool => "cool",
        }
    }
}

/// Horizontal temperature bar anchored at [`RANGE_SCALE_MIN`].
///
/// Both values are percentages of the track. `width` is at least 5 and at
/// most 100; `offset` is never negative. Offset plus width may overflow the
/// track for warm days, the renderer clips it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBar {
    pub offset: f64,
    pub width: f64,
}

impl RangeBar {
    pub fn new(temp_min: f64, temp_max: f64) -> Self {
        Self {
            offset: ((temp_min - RANGE_SCALE_MIN) * PERCENT_PER_DEGREE).max(0.0),
            width: ((temp_max - RANGE_SCALE_MIN) * PERCENT_PER_DEGREE).clamp(5.0, 100.0),
        }
    }

    /// Draw onto a track of `cells` characters.
    pub fn render(&self, cells: usize) -> String {
        let to_cell = |pct: f64| ((pct / 100.0) * cells as f64).round() as usize;
        let start = to_cell(self.offset).min(cells);
        let end = (start + to_cell(self.width).max(1)).min(cells);

        (0..cells)
            .map(|i| if (start..end).contains(&i) { '█' } else { '░' })
            .collect()
    }
}
