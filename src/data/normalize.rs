use chrono::Utc;
use log::debug;

use crate::{
    data::forecast::{
        CurrentBlock, DailyBlock, HourlyBlock, LegacyCurrentBlock, ProviderResponse,
    },
    domain::weather::{
        CurrentConditions, CurrentSource, DEFAULT_HUMIDITY_PCT, DEFAULT_VISIBILITY_M,
        DailyForecast, ForecastBundle, HourlyForecast, midpoint, parse_date, parse_datetime,
    },
    error::WeatherError,
};

/// Turns any provider payload shape into the canonical bundle. Only an explicit
/// provider error fails; sparse payloads yield a bundle with `current: None`
/// or empty series, and views flag that when projected.
pub fn normalize(raw: ProviderResponse) -> Result<ForecastBundle, WeatherError> {
    if raw.has_error() {
        let reason = raw
            .reason
            .unwrap_or_else(|| "unknown provider error".to_string());
        return Err(WeatherError::Provider(reason));
    }

    let daily = raw.daily.as_ref().map(parse_daily).unwrap_or_default();
    let hourly = raw.hourly.as_ref().map(parse_hourly).unwrap_or_default();

    let (current, current_source) = if let Some(current) =
        raw.current.as_ref().and_then(from_current_block)
    {
        (Some(current), CurrentSource::Current)
    } else if let Some(current) = raw
        .current_weather
        .as_ref()
        .and_then(|legacy| from_legacy_block(legacy, raw.hourly.as_ref()))
    {
        (Some(current), CurrentSource::LegacyCurrentWeather)
    } else if let Some(current) = daily.first().and_then(from_daily_aggregate) {
        (Some(current), CurrentSource::DailyAggregate)
    } else {
        (None, CurrentSource::Missing)
    };
    debug!("normalized forecast, current from {current_source:?}");

    Ok(ForecastBundle {
        current,
        current_source,
        hourly,
        daily,
        timezone: raw.timezone,
        utc_offset_seconds: raw.utc_offset_seconds.unwrap_or_default(),
        fetched_at: Utc::now(),
    })
}

fn from_current_block(block: &CurrentBlock) -> Option<CurrentConditions> {
    let temperature_c = block.temperature_2m?;
    Some(CurrentConditions {
        time: block.time.as_deref().and_then(parse_datetime),
        temperature_c,
        apparent_temperature_c: block.apparent_temperature.unwrap_or(temperature_c),
        weather_code: block.weather_code?,
        wind_speed_ms: block.wind_speed_10m.unwrap_or_default(),
        relative_humidity_pct: block.relative_humidity_2m.unwrap_or(DEFAULT_HUMIDITY_PCT),
        visibility_m: block.visibility.unwrap_or(DEFAULT_VISIBILITY_M),
        precipitation_mm: block.precipitation.unwrap_or_default(),
        pressure_hpa: block.pressure_msl,
        uv_index: block.uv_index,
    })
}

// Legacy payloads have no feels-like field, so the air temperature stands in.
fn from_legacy_block(
    block: &LegacyCurrentBlock,
    hourly: Option<&HourlyBlock>,
) -> Option<CurrentConditions> {
    let temperature_c = block.temperature?;

    Some(CurrentConditions {
        time: block.time.as_deref().and_then(parse_datetime),
        temperature_c,
        apparent_temperature_c: temperature_c,
        weather_code: block.weathercode?,
        wind_speed_ms: block.windspeed.unwrap_or_default(),
        relative_humidity_pct: hourly
            .and_then(|h| cell(&h.relative_humidity_2m, 0))
            .unwrap_or(DEFAULT_HUMIDITY_PCT),
        visibility_m: hourly
            .and_then(|h| cell(&h.visibility, 0))
            .unwrap_or(DEFAULT_VISIBILITY_M),
        precipitation_mm: 0.0,
        pressure_hpa: None,
        uv_index: None,
    })
}

fn from_daily_aggregate(day: &DailyForecast) -> Option<CurrentConditions> {
    let temperature_c = midpoint(day.temperature_max_c?, day.temperature_min_c?);
    Some(CurrentConditions {
        time: None,
        temperature_c,
        apparent_temperature_c: temperature_c,
        weather_code: day.weather_code.unwrap_or_default(),
        wind_speed_ms: day.wind_speed_max_ms.unwrap_or_default(),
        relative_humidity_pct: DEFAULT_HUMIDITY_PCT,
        visibility_m: DEFAULT_VISIBILITY_M,
        precipitation_mm: day.precipitation_sum_mm.unwrap_or_default(),
        pressure_hpa: None,
        uv_index: day.uv_index_max,
    })
}

fn parse_hourly(hourly: &HourlyBlock) -> Vec<HourlyForecast> {
    if !hourly.is_aligned() {
        debug!("hourly arrays differ in length, dropping hourly series");
        return Vec::new();
    }

    let mut out = Vec::with_capacity(hourly.time.len());
    for idx in 0..hourly.time.len() {
        let Some(time) = parse_datetime(&hourly.time[idx]) else {
            continue;
        };

        out.push(HourlyForecast {
            time,
            temperature_c: hourly.temperature_2m[idx],
            apparent_temperature_c: hourly.apparent_temperature[idx],
            relative_humidity_pct: hourly.relative_humidity_2m[idx],
            weather_code: hourly.weather_code[idx],
            visibility_m: hourly.visibility[idx],
            precipitation_mm: hourly.precipitation[idx],
        });
    }
    out
}

fn parse_daily(daily: &DailyBlock) -> Vec<DailyForecast> {
    let mut out = Vec::with_capacity(daily.time.len());
    for idx in 0..daily.time.len() {
        let Some(date) = parse_date(&daily.time[idx]) else {
            continue;
        };

        out.push(DailyForecast {
            date,
            weather_code: daily.weather_code.get(idx).copied().flatten(),
            temperature_max_c: cell(&daily.temperature_2m_max, idx),
            temperature_min_c: cell(&daily.temperature_2m_min, idx),
            precipitation_sum_mm: cell(&daily.precipitation_sum, idx),
            precipitation_probability_max: cell(&daily.precipitation_probability_max, idx),
            wind_speed_max_ms: cell(&daily.wind_speed_10m_max, idx),
            uv_index_max: cell(&daily.uv_index_max, idx),
            sunrise: moment(&daily.sunrise, idx),
            sunset: moment(&daily.sunset, idx),
        });
    }
    out
}

fn cell(series: &[Option<f32>], idx: usize) -> Option<f32> {
    series.get(idx).copied().flatten()
}

fn moment(series: &[Option<String>], idx: usize) -> Option<chrono::NaiveDateTime> {
    series
        .get(idx)
        .and_then(Option::as_deref)
        .and_then(parse_datetime)
}
