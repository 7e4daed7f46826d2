use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{
    domain::weather::{Coordinates, UNKNOWN_ENTRY},
    error::WeatherError,
};

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m,pressure_msl,visibility,uv_index,precipitation";
const HOURLY_FIELDS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,weather_code,visibility,precipitation";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum,precipitation_probability_max,wind_speed_10m_max,uv_index_max,sunrise,sunset";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the raw provider payload. Error bodies from the provider are
    /// returned as payloads so the normalizer can surface their reason.
    pub async fn fetch(&self, coordinates: Coordinates) -> Result<ProviderResponse, WeatherError> {
        debug!(
            "fetching forecast for {:.4}, {:.4}",
            coordinates.latitude, coordinates.longitude
        );
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("wind_speed_unit", "ms".to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", "10".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = match response.json::<serde_json::Value>().await {
            Ok(body) => body,
            Err(err) if status.is_success() => {
                return Err(WeatherError::Provider(format!(
                    "unexpected forecast payload: {err}"
                )));
            }
            Err(_) => {
                return Err(WeatherError::Network(format!(
                    "forecast request returned {status}"
                )));
            }
        };

        let payload = ProviderResponse::from_value(body)?;
        if !status.is_success() && !payload.has_error() {
            return Err(WeatherError::Network(format!(
                "forecast request returned {status}"
            )));
        }
        Ok(payload)
    }
}

/// Forecast payload as the provider sends it. Every block is optional: older
/// deployments only send `current_weather`, sparse ones omit `daily` fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderResponse {
    pub error: Option<bool>,
    pub reason: Option<String>,
    pub timezone: Option<String>,
    pub utc_offset_seconds: Option<i32>,
    pub current: Option<CurrentBlock>,
    pub current_weather: Option<LegacyCurrentBlock>,
    pub hourly: Option<HourlyBlock>,
    pub daily: Option<DailyBlock>,
}

impl ProviderResponse {
    pub fn from_value(value: serde_json::Value) -> Result<Self, WeatherError> {
        serde_json::from_value(value).map_err(|err| {
            WeatherError::Provider(format!("unexpected forecast payload: {err}"))
        })
    }

    pub fn has_error(&self) -> bool {
        self.error == Some(true) || self.reason.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrentBlock {
    pub time: Option<String>,
    pub temperature_2m: Option<f32>,
    pub relative_humidity_2m: Option<f32>,
    pub apparent_temperature: Option<f32>,
    #[serde(deserialize_with = "deserialize_code")]
    pub weather_code: Option<i64>,
    pub wind_speed_10m: Option<f32>,
    pub pressure_msl: Option<f32>,
    pub visibility: Option<f32>,
    pub uv_index: Option<f32>,
    pub precipitation: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegacyCurrentBlock {
    pub time: Option<String>,
    pub temperature: Option<f32>,
    pub windspeed: Option<f32>,
    pub winddirection: Option<f32>,
    #[serde(deserialize_with = "deserialize_code")]
    pub weathercode: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f32>>,
    pub apparent_temperature: Vec<Option<f32>>,
    #[serde(alias = "relativehumidity_2m")]
    pub relative_humidity_2m: Vec<Option<f32>>,
    #[serde(alias = "weathercode", deserialize_with = "deserialize_codes")]
    pub weather_code: Vec<Option<i64>>,
    pub visibility: Vec<Option<f32>>,
    pub precipitation: Vec<Option<f32>>,
}

impl HourlyBlock {
    /// Parallel arrays only form a series when they all line up.
    pub fn is_aligned(&self) -> bool {
        let len = self.time.len();
        [
            self.temperature_2m.len(),
            self.apparent_temperature.len(),
            self.relative_humidity_2m.len(),
            self.weather_code.len(),
            self.visibility.len(),
            self.precipitation.len(),
        ]
        .iter()
        .all(|other| *other == len)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DailyBlock {
    pub time: Vec<String>,
    #[serde(alias = "weathercode", deserialize_with = "deserialize_codes")]
    pub weather_code: Vec<Option<i64>>,
    pub temperature_2m_max: Vec<Option<f32>>,
    pub temperature_2m_min: Vec<Option<f32>>,
    pub precipitation_sum: Vec<Option<f32>>,
    pub precipitation_probability_max: Vec<Option<f32>>,
    #[serde(alias = "windspeed_10m_max")]
    pub wind_speed_10m_max: Vec<Option<f32>>,
    pub uv_index_max: Vec<Option<f32>>,
    pub sunrise: Vec<Option<String>>,
    pub sunset: Vec<Option<String>>,
}

/// Weather codes are an open set. Any number, whole or not, maps to a code so
/// an odd entry degrades to the unknown description instead of failing the payload.
fn code_from_value(value: Value) -> Option<i64> {
    match value {
        Value::Null => None,
        Value::Number(num) => Some(
            num.as_i64()
                .or_else(|| {
                    num.as_f64()
                        .filter(|raw| raw.fract() == 0.0 && raw.abs() < 1e15)
                        .map(|raw| raw as i64)
                })
                .unwrap_or(UNKNOWN_ENTRY.code),
        ),
        _ => Some(UNKNOWN_ENTRY.code),
    }
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(code_from_value))
}

fn deserialize_codes<'de, D>(deserializer: D) -> Result<Vec<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<Value> = Vec::deserialize(deserializer)?;
    Ok(values.into_iter().map(code_from_value).collect())
}
