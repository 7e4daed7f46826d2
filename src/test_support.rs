use chrono::{Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::{
    cli::Cli,
    domain::{
        projection::Period,
        weather::{
            Coordinates, CurrentConditions, CurrentSource, DailyForecast, ForecastBundle,
            HourlyForecast, Place,
        },
    },
};

fn parse_time(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").expect("valid time fixture")
}

fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid date fixture")
}

pub(crate) fn state_test_cli() -> Cli {
    Cli {
        city: None,
        lat: None,
        lon: None,
        period: Period::Today,
        language: "en".to_string(),
        refresh_interval: 1800,
        debounce_ms: 300,
        ascii_icons: false,
        emoji_icons: false,
        forecast_url: Some("http://127.0.0.1:9/v1/forecast".to_string()),
        geocode_url: Some("http://127.0.0.1:9/v1/search".to_string()),
        one_shot: false,
        log_file: None,
    }
}

pub(crate) fn moscow_place() -> Place {
    Place::default_place()
}

pub(crate) fn paris_place() -> Place {
    Place {
        name: "Paris".to_string(),
        coordinates: Coordinates {
            latitude: 48.8566,
            longitude: 2.3522,
        },
        admin1: Some("Ile-de-France".to_string()),
        country: Some("France".to_string()),
    }
}

pub(crate) fn sample_current() -> CurrentConditions {
    CurrentConditions {
        time: Some(parse_time("2026-02-12T10:00")),
        temperature_c: 7.0,
        apparent_temperature_c: 5.0,
        weather_code: 3,
        wind_speed_ms: 4.0,
        relative_humidity_pct: 72.0,
        visibility_m: 10_000.0,
        precipitation_mm: 0.0,
        pressure_hpa: Some(1012.0),
        uv_index: Some(1.5),
    }
}

pub(crate) fn daily_series(days: usize) -> Vec<DailyForecast> {
    (0..days)
        .map(|idx| {
            let date = first_day() + Duration::days(idx as i64);
            let offset = idx as f32;
            DailyForecast {
                date,
                weather_code: Some(if idx % 2 == 0 { 3 } else { 61 }),
                temperature_max_c: Some(8.0 + offset),
                temperature_min_c: Some(1.0 + offset),
                precipitation_sum_mm: Some(0.5 * offset),
                precipitation_probability_max: Some(20.0),
                wind_speed_max_ms: Some(6.0),
                uv_index_max: Some(2.0),
                sunrise: date.and_hms_opt(7, 45, 0),
                sunset: date.and_hms_opt(17, 20, 0),
            }
        })
        .collect()
}

/// Clear-sky hours so the icon only depends on the hour of day.
pub(crate) fn hourly_series(start: NaiveDateTime, hours: usize) -> Vec<HourlyForecast> {
    (0..hours)
        .map(|idx| HourlyForecast {
            time: start + Duration::hours(idx as i64),
            temperature_c: Some(2.0 + (idx % 12) as f32),
            apparent_temperature_c: Some(idx as f32 % 12.0),
            relative_humidity_pct: Some(70.0),
            weather_code: Some(0),
            visibility_m: Some(10_000.0),
            precipitation_mm: Some(0.0),
        })
        .collect()
}

pub(crate) fn sample_bundle() -> ForecastBundle {
    ForecastBundle {
        current: Some(sample_current()),
        current_source: CurrentSource::Current,
        hourly: hourly_series(parse_time("2026-02-12T00:00"), 48),
        daily: daily_series(10),
        timezone: Some("Europe/Moscow".to_string()),
        utc_offset_seconds: 10_800,
        fetched_at: Utc
            .with_ymd_and_hms(2026, 2, 12, 7, 0, 0)
            .single()
            .expect("valid fetch time"),
    }
}
