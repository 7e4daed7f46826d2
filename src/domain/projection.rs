use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::{
    domain::weather::{
        CurrentConditions, DailyForecast, ForecastBundle, HourlyForecast, UNKNOWN_ENTRY,
        WeatherCodeEntry, WeatherIcon, describe, midpoint, round_temp,
    },
    error::WeatherError,
};

pub const HOURLY_SLOTS: usize = 24;
pub const TOMORROW_MIN_DAYS: usize = 2;
pub const TEN_DAY_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Today,
    Tomorrow,
    TenDays,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Today, Period::Tomorrow, Period::TenDays];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::TenDays => "10days",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Tomorrow => "Tomorrow",
            Self::TenDays => "10 days",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Today => Self::Tomorrow,
            Self::Tomorrow => Self::TenDays,
            Self::TenDays => Self::Today,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "today" => Ok(Self::Today),
            "tomorrow" => Ok(Self::Tomorrow),
            "10days" => Ok(Self::TenDays),
            other => Err(format!(
                "unknown period '{other}' (expected today, tomorrow or 10days)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodayView {
    pub current: CurrentConditions,
    pub entry: WeatherCodeEntry,
    pub dew_point_c: f32,
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
    pub uv_index_max: Option<f32>,
}

impl TodayView {
    #[must_use]
    pub fn temperature(&self) -> i32 {
        round_temp(self.current.temperature_c)
    }

    #[must_use]
    pub fn feels_like(&self) -> i32 {
        round_temp(self.current.apparent_temperature_c)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TomorrowView {
    pub date: NaiveDate,
    pub entry: WeatherCodeEntry,
    pub temperature_max_c: Option<f32>,
    pub temperature_min_c: Option<f32>,
    pub average_c: Option<i32>,
    pub wind_speed_max_ms: Option<f32>,
    pub precipitation_sum_mm: Option<f32>,
    pub precipitation_probability_max: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCard {
    pub date: NaiveDate,
    pub entry: WeatherCodeEntry,
    pub temperature_max_c: Option<f32>,
    pub temperature_min_c: Option<f32>,
    pub max_display: Option<i32>,
    pub min_display: Option<i32>,
    pub wind_speed_max_ms: Option<f32>,
    pub precipitation_sum_mm: Option<f32>,
    pub precipitation_probability_max: Option<f32>,
    pub uv_index_max: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Today(TodayView),
    Tomorrow(TomorrowView),
    TenDays(Vec<DayCard>),
}

pub fn project(bundle: &ForecastBundle, period: Period) -> Result<Projection, WeatherError> {
    match period {
        Period::Today => project_today(bundle).map(Projection::Today),
        Period::Tomorrow => project_tomorrow(bundle).map(Projection::Tomorrow),
        Period::TenDays => project_ten_days(bundle).map(Projection::TenDays),
    }
}

pub fn project_today(bundle: &ForecastBundle) -> Result<TodayView, WeatherError> {
    let current = bundle.current.clone().ok_or(WeatherError::MissingCurrent)?;
    let today = bundle.daily.first();
    let hour = current.time.map(|t| t.hour());

    Ok(TodayView {
        entry: describe(current.weather_code, hour),
        dew_point_c: current.dew_point_c(),
        sunrise: today.and_then(|d| d.sunrise),
        sunset: today.and_then(|d| d.sunset),
        uv_index_max: today.and_then(|d| d.uv_index_max),
        current,
    })
}

pub fn project_tomorrow(bundle: &ForecastBundle) -> Result<TomorrowView, WeatherError> {
    let day = &require_days(&bundle.daily, TOMORROW_MIN_DAYS)?[1];

    let average_c = match (day.temperature_max_c, day.temperature_min_c) {
        (Some(max), Some(min)) => Some(round_temp(midpoint(max, min))),
        _ => None,
    };

    Ok(TomorrowView {
        date: day.date,
        entry: day_entry(day),
        temperature_max_c: day.temperature_max_c,
        temperature_min_c: day.temperature_min_c,
        average_c,
        wind_speed_max_ms: day.wind_speed_max_ms,
        precipitation_sum_mm: day.precipitation_sum_mm,
        precipitation_probability_max: day.precipitation_probability_max,
    })
}

pub fn project_ten_days(bundle: &ForecastBundle) -> Result<Vec<DayCard>, WeatherError> {
    let days = require_days(&bundle.daily, TEN_DAY_COUNT)?;
    Ok(days.iter().take(TEN_DAY_COUNT).map(day_card).collect())
}

fn require_days(daily: &[DailyForecast], required: usize) -> Result<&[DailyForecast], WeatherError> {
    if daily.len() < required {
        return Err(WeatherError::InsufficientForecast {
            required,
            available: daily.len(),
        });
    }
    Ok(daily)
}

fn day_entry(day: &DailyForecast) -> WeatherCodeEntry {
    day.weather_code
        .map_or(UNKNOWN_ENTRY, |code| describe(code, None))
}

fn day_card(day: &DailyForecast) -> DayCard {
    DayCard {
        date: day.date,
        entry: day_entry(day),
        temperature_max_c: day.temperature_max_c,
        temperature_min_c: day.temperature_min_c,
        max_display: day.temperature_max_c.map(round_temp),
        min_display: day.temperature_min_c.map(round_temp),
        wind_speed_max_ms: day.wind_speed_max_ms,
        precipitation_sum_mm: day.precipitation_sum_mm,
        precipitation_probability_max: day.precipitation_probability_max,
        uv_index_max: day.uv_index_max,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlySlot {
    pub time: NaiveDateTime,
    pub label: String,
    pub temperature_c: Option<f32>,
    pub icon: WeatherIcon,
}

/// Up to 24 slots starting at the first hour at or after `now`. The series is
/// ascending, so the start index is found by binary search. Empty when `now`
/// is past the last hour.
pub fn project_hourly(
    hourly: &[HourlyForecast],
    now: NaiveDateTime,
) -> impl Iterator<Item = HourlySlot> + '_ {
    let start = hourly.partition_point(|h| h.time < now);
    hourly[start..]
        .iter()
        .take(HOURLY_SLOTS)
        .map(hourly_slot)
}

fn hourly_slot(hour: &HourlyForecast) -> HourlySlot {
    let icon = hour
        .weather_code
        .map_or(UNKNOWN_ENTRY.icon, |code| {
            describe(code, Some(hour.time.hour())).icon
        });
    HourlySlot {
        time: hour.time,
        label: hour.time.format("%H:%M").to_string(),
        temperature_c: hour.temperature_c,
        icon,
    }
}
