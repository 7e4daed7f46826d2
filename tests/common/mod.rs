#![allow(dead_code)]

use serde_json::{Value, json};
use weather_dashboard::{
    app::{events::AppEvent, state::AppState},
    cli::Cli,
    domain::{
        projection::Period,
        weather::{Coordinates, Place},
    },
};
use tokio::sync::mpsc;

pub fn mock_cli(server_uri: &str) -> Cli {
    Cli {
        city: None,
        lat: None,
        lon: None,
        period: Period::Today,
        language: "en".to_string(),
        refresh_interval: 1800,
        debounce_ms: 300,
        ascii_icons: true,
        emoji_icons: false,
        forecast_url: Some(format!("{server_uri}/v1/forecast")),
        geocode_url: Some(format!("{server_uri}/v1/search")),
        one_shot: false,
        log_file: None,
    }
}

pub fn place(name: &str, latitude: f64, longitude: f64) -> Place {
    Place {
        name: name.to_string(),
        coordinates: Coordinates {
            latitude,
            longitude,
        },
        admin1: None,
        country: None,
    }
}

pub fn hours(start_day: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|idx| format!("{start_day}T{:02}:00", idx % 24))
        .collect()
}

pub fn days(count: usize) -> Vec<String> {
    (0..count)
        .map(|idx| format!("2026-02-{:02}", 12 + idx))
        .collect()
}

/// Daily block with `count` days, maxima rising from `max_c`.
pub fn daily_block(count: usize, max_c: f64) -> Value {
    let dates = days(count);
    json!({
        "time": dates,
        "weather_code": vec![3; count],
        "temperature_2m_max": (0..count).map(|i| max_c + i as f64).collect::<Vec<_>>(),
        "temperature_2m_min": (0..count).map(|i| max_c - 6.0 + i as f64).collect::<Vec<_>>(),
        "precipitation_sum": vec![0.4; count],
        "precipitation_probability_max": vec![30; count],
        "wind_speed_10m_max": vec![5.5; count],
        "uv_index_max": vec![2.1; count],
        "sunrise": dates.iter().map(|d| format!("{d}T07:45")).collect::<Vec<_>>(),
        "sunset": dates.iter().map(|d| format!("{d}T17:20")).collect::<Vec<_>>(),
    })
}

pub fn hourly_block(count: usize) -> Value {
    json!({
        "time": hours("2026-02-12", count.min(24)),
        "temperature_2m": vec![4.0; count.min(24)],
        "apparent_temperature": vec![2.0; count.min(24)],
        "relative_humidity_2m": vec![65; count.min(24)],
        "weather_code": vec![2; count.min(24)],
        "visibility": vec![12000.0; count.min(24)],
        "precipitation": vec![0.0; count.min(24)],
    })
}

/// Payload in the current forecast shape.
pub fn current_payload(temperature: f64) -> Value {
    json!({
        "timezone": "Europe/Moscow",
        "utc_offset_seconds": 10800,
        "current": {
            "time": "2026-02-12T10:00",
            "temperature_2m": temperature,
            "apparent_temperature": temperature - 2.0,
            "relative_humidity_2m": 70,
            "weather_code": 3,
            "wind_speed_10m": 4.2,
            "pressure_msl": 1015.0,
            "visibility": 9000.0,
            "uv_index": 1.0,
            "precipitation": 0.1
        },
        "hourly": hourly_block(24),
        "daily": daily_block(10, temperature + 2.0),
    })
}

/// Payload from deployments that only send `current_weather`.
pub fn legacy_payload(temperature: f64) -> Value {
    json!({
        "timezone": "Europe/Moscow",
        "utc_offset_seconds": 10800,
        "current_weather": {
            "time": "2026-02-12T10:00",
            "temperature": temperature,
            "windspeed": 3.0,
            "winddirection": 180.0,
            "weathercode": 61
        },
        "hourly": hourly_block(24),
        "daily": daily_block(10, temperature + 2.0),
    })
}

pub fn geocode_body(places: &[(&str, f64, f64, &str)]) -> Value {
    let results: Vec<Value> = places
        .iter()
        .map(|(name, latitude, longitude, country)| {
            json!({
                "name": name,
                "latitude": latitude,
                "longitude": longitude,
                "country": country,
            })
        })
        .collect();
    json!({ "results": results })
}

/// Feeds channel events into the state until `done` holds or `limit` events
/// were processed.
pub async fn drive_until(
    state: &mut AppState,
    tx: &mpsc::Sender<AppEvent>,
    rx: &mut mpsc::Receiver<AppEvent>,
    cli: &Cli,
    limit: usize,
    mut done: impl FnMut(&AppState, &AppEvent) -> bool,
) {
    for _ in 0..limit {
        let event = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
            .await
            .expect("event before timeout")
            .expect("channel open");
        let finished = done(state, &event);
        state.handle_event(event, tx, cli).expect("handle event");
        if finished {
            return;
        }
    }
}
