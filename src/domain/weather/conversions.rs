use chrono::{NaiveDate, NaiveDateTime};

pub const DEFAULT_HUMIDITY_PCT: f32 = 50.0;
pub const DEFAULT_VISIBILITY_M: f32 = 10_000.0;

/// Linear dew point approximation: `t - (100 - rh) / 5`.
#[must_use]
pub fn dew_point_c(temperature_c: f32, relative_humidity_pct: f32) -> f32 {
    temperature_c - (100.0 - relative_humidity_pct) / 5.0
}

#[must_use]
pub fn midpoint(max: f32, min: f32) -> f32 {
    (max + min) / 2.0
}

#[must_use]
pub fn round_temp(value: f32) -> i32 {
    value.round() as i32
}

/// Night is 19:00 up to 06:00.
#[must_use]
pub fn is_night_hour(hour: u32) -> bool {
    (19..24).contains(&hour) || hour < 6
}

#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
