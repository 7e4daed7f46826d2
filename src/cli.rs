#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::Parser;

use crate::{
    data::{forecast::FORECAST_URL, geocode::GEOCODE_URL},
    domain::{
        projection::Period,
        weather::{Coordinates, Place},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-dashboard",
    version,
    about = "Terminal weather dashboard: today, tomorrow and 10-day forecasts"
)]
pub struct Cli {
    /// City name (default: Moscow)
    pub city: Option<String>,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Initial view: today, tomorrow or 10days
    #[arg(long, default_value_t = Period::Today)]
    pub period: Period,

    /// Language hint for place search
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Refresh interval in seconds
    #[arg(long, default_value_t = 1800, value_parser = clap::value_parser!(u64).range(60..))]
    pub refresh_interval: u64,

    /// Delay before a typed query triggers suggestions, in milliseconds
    #[arg(long, default_value_t = 300)]
    pub debounce_ms: u64,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Forecast endpoint override
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Geocoding endpoint override
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Print the selected view to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            (Some(lat), Some(lon)) => {
                Coordinates::new(lat, lon)?;
                Ok(())
            }
            (None, None) => Ok(()),
        }
    }

    /// Place given by coordinates, or the default place when neither a city
    /// nor coordinates were passed. `None` means the city must be geocoded.
    #[must_use]
    pub fn initial_place(&self) -> Option<Place> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return Coordinates::new(lat, lon).ok().map(Place::from_coords);
        }
        if self.city.is_none() {
            return Some(Place::default_place());
        }
        None
    }

    #[must_use]
    pub fn forecast_url(&self) -> &str {
        self.forecast_url.as_deref().unwrap_or(FORECAST_URL)
    }

    #[must_use]
    pub fn geocode_url(&self) -> &str {
        self.geocode_url.as_deref().unwrap_or(GEOCODE_URL)
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }
}
