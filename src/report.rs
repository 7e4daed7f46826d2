//! Plain-text rendering for `--one-shot`.

use std::fmt::Write as _;

use anyhow::Result;
use log::info;

use crate::{
    cli::{Cli, IconMode},
    data::{forecast::ForecastClient, geocode::GeocodeClient, normalize::normalize},
    domain::{
        projection::{DayCard, Period, Projection, TodayView, TomorrowView, project},
        weather::{ForecastBundle, Place, round_temp},
    },
};

pub async fn run_one_shot(cli: &Cli) -> Result<()> {
    cli.validate()?;
    let place = match cli.initial_place() {
        Some(place) => place,
        None => {
            let query = cli.city.as_deref().unwrap_or_default();
            GeocodeClient::with_base_url(cli.geocode_url())
                .with_language(cli.language.clone())
                .resolve(query)
                .await
                .map_err(|err| anyhow::anyhow!(err.status_message()))?
        }
    };
    info!("one-shot report for {}", place.label());

    let bundle = ForecastClient::with_base_url(cli.forecast_url())
        .fetch(place.coordinates)
        .await
        .and_then(normalize)
        .map_err(|err| anyhow::anyhow!(err.status_message()))?;

    print!("{}", render_report(&place, &bundle, cli.period, cli.icon_mode()));
    Ok(())
}

#[must_use]
pub fn render_report(
    place: &Place,
    bundle: &ForecastBundle,
    period: Period,
    mode: IconMode,
) -> String {
    let mut out = format!("{} - {}\n", place.label(), period.title());
    match project(bundle, period) {
        Ok(Projection::Today(view)) => out.push_str(&format_today(&view, mode)),
        Ok(Projection::Tomorrow(view)) => out.push_str(&format_tomorrow(&view, mode)),
        Ok(Projection::TenDays(cards)) => {
            for card in &cards {
                out.push_str(&format_day_card(card, mode));
                out.push('\n');
            }
        }
        Err(err) => {
            out.push_str(&err.status_message());
            out.push('\n');
        }
    }
    out
}

#[must_use]
pub fn format_today(view: &TodayView, mode: IconMode) -> String {
    let current = &view.current;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}  {}°C (feels like {}°C)",
        view.entry.icon.glyph(mode),
        view.entry.description,
        view.temperature(),
        view.feels_like()
    );
    let _ = writeln!(
        out,
        "Wind {:.1} m/s  Humidity {:.0}%  Dew point {:.0}°C",
        current.wind_speed_ms, current.relative_humidity_pct, view.dew_point_c
    );
    let _ = writeln!(
        out,
        "Visibility {:.1} km  Precipitation {:.1} mm",
        current.visibility_m / 1000.0,
        current.precipitation_mm
    );
    if let Some(pressure) = current.pressure_hpa {
        let _ = writeln!(out, "Pressure {pressure:.0} hPa");
    }
    if let (Some(rise), Some(set)) = (view.sunrise, view.sunset) {
        let _ = writeln!(
            out,
            "Sunrise {}  Sunset {}",
            rise.format("%H:%M"),
            set.format("%H:%M")
        );
    }
    out
}

#[must_use]
pub fn format_tomorrow(view: &TomorrowView, mode: IconMode) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {}",
        view.date.format("%a %d %b"),
        view.entry.icon.glyph(mode),
        view.entry.description
    );
    let _ = writeln!(
        out,
        "High {}  Low {}  Average {}",
        degrees(view.temperature_max_c.map(round_temp)),
        degrees(view.temperature_min_c.map(round_temp)),
        degrees(view.average_c)
    );
    let _ = writeln!(
        out,
        "Wind up to {}  Precipitation {} ({} chance)",
        optional(view.wind_speed_max_ms, "m/s"),
        optional(view.precipitation_sum_mm, "mm"),
        percent(view.precipitation_probability_max)
    );
    out
}

#[must_use]
pub fn format_day_card(card: &DayCard, mode: IconMode) -> String {
    format!(
        "{}  {:<4} {:>5} / {:<5} {:<24} {}",
        card.date.format("%a %d"),
        card.entry.icon.glyph(mode),
        degrees(card.max_display),
        degrees(card.min_display),
        card.entry.description,
        percent(card.precipitation_probability_max)
    )
}

fn degrees(value: Option<i32>) -> String {
    value.map_or_else(|| "--".to_string(), |v| format!("{v}°C"))
}

fn optional(value: Option<f32>, unit: &str) -> String {
    value.map_or_else(|| "--".to_string(), |v| format!("{v:.1} {unit}"))
}

fn percent(value: Option<f32>) -> String {
    value.map_or_else(|| "--".to_string(), |v| format!("{v:.0}%"))
}
