use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::error::WeatherError;

mod conditions;
mod conversions;

pub use conditions::{CATALOG, UNKNOWN_ENTRY, WeatherCodeEntry, WeatherIcon, describe};
pub use conversions::{
    DEFAULT_HUMIDITY_PCT, DEFAULT_VISIBILITY_M, dew_point_c, is_night_hour, midpoint, parse_date,
    parse_datetime, round_temp,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub coordinates: Coordinates,
    pub admin1: Option<String>,
    pub country: Option<String>,
}

impl Place {
    pub fn from_coords(coordinates: Coordinates) -> Self {
        Self {
            name: format!("{:.4}, {:.4}", coordinates.latitude, coordinates.longitude),
            coordinates,
            admin1: None,
            country: None,
        }
    }

    /// Moscow, the dashboard's starting place when nothing else is configured.
    pub fn default_place() -> Self {
        Self {
            name: "Moscow".to_string(),
            coordinates: Coordinates {
                latitude: 55.7558,
                longitude: 37.6173,
            },
            admin1: None,
            country: Some("Russia".to_string()),
        }
    }

    pub fn label(&self) -> String {
        let mut label = self.name.clone();
        for part in [&self.admin1, &self.country].into_iter().flatten() {
            if !part.is_empty() {
                label.push_str(", ");
                label.push_str(part);
            }
        }
        label
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub time: Option<NaiveDateTime>,
    pub temperature_c: f32,
    pub apparent_temperature_c: f32,
    pub weather_code: i64,
    pub wind_speed_ms: f32,
    pub relative_humidity_pct: f32,
    pub visibility_m: f32,
    pub precipitation_mm: f32,
    pub pressure_hpa: Option<f32>,
    pub uv_index: Option<f32>,
}

impl CurrentConditions {
    #[must_use]
    pub fn dew_point_c(&self) -> f32 {
        dew_point_c(self.temperature_c, self.relative_humidity_pct)
    }
}

/// Which response shape the current conditions were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentSource {
    Current,
    LegacyCurrentWeather,
    DailyAggregate,
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyForecast {
    pub time: NaiveDateTime,
    pub temperature_c: Option<f32>,
    pub apparent_temperature_c: Option<f32>,
    pub relative_humidity_pct: Option<f32>,
    pub weather_code: Option<i64>,
    pub visibility_m: Option<f32>,
    pub precipitation_mm: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: Option<i64>,
    pub temperature_max_c: Option<f32>,
    pub temperature_min_c: Option<f32>,
    pub precipitation_sum_mm: Option<f32>,
    pub precipitation_probability_max: Option<f32>,
    pub wind_speed_max_ms: Option<f32>,
    pub uv_index_max: Option<f32>,
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
}

/// Canonical model: one shape regardless of which provider payload arrived.
#[derive(Debug, Clone)]
pub struct ForecastBundle {
    pub current: Option<CurrentConditions>,
    pub current_source: CurrentSource,
    pub hourly: Vec<HourlyForecast>,
    pub daily: Vec<DailyForecast>,
    pub timezone: Option<String>,
    pub utc_offset_seconds: i32,
    pub fetched_at: DateTime<Utc>,
}

impl ForecastBundle {
    /// Wall clock expressed in the forecast's local time (timezone=auto).
    pub fn local_now(&self) -> NaiveDateTime {
        self.local_time_at(Utc::now())
    }

    pub fn local_time_at(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.naive_utc() + Duration::seconds(i64::from(self.utc_offset_seconds))
    }
}
