use crate::cli::IconMode;

use super::conversions::is_night_hour;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Sun,
    Moon,
    Cloud,
    Rain,
    Snow,
    Thunder,
    Fog,
}

impl WeatherIcon {
    #[must_use]
    pub fn glyph(self, mode: IconMode) -> &'static str {
        let (ascii, emoji, unicode) = icon_tokens(self);
        match mode {
            IconMode::Ascii => ascii,
            IconMode::Emoji => emoji,
            IconMode::Unicode => unicode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCodeEntry {
    pub code: i64,
    pub icon: WeatherIcon,
    pub description: &'static str,
}

pub const UNKNOWN_ENTRY: WeatherCodeEntry = WeatherCodeEntry {
    code: -1,
    icon: WeatherIcon::Cloud,
    description: "Unknown",
};

const CLEAR_NIGHT: WeatherCodeEntry = WeatherCodeEntry {
    code: 0,
    icon: WeatherIcon::Moon,
    description: "Clear night",
};

const fn entry(code: i64, icon: WeatherIcon, description: &'static str) -> WeatherCodeEntry {
    WeatherCodeEntry {
        code,
        icon,
        description,
    }
}

pub const CATALOG: &[WeatherCodeEntry] = &[
    entry(0, WeatherIcon::Sun, "Clear sky"),
    entry(1, WeatherIcon::Sun, "Mainly clear"),
    entry(2, WeatherIcon::Cloud, "Partly cloudy"),
    entry(3, WeatherIcon::Cloud, "Overcast"),
    entry(45, WeatherIcon::Fog, "Fog"),
    entry(48, WeatherIcon::Fog, "Depositing rime fog"),
    entry(51, WeatherIcon::Rain, "Light drizzle"),
    entry(53, WeatherIcon::Rain, "Moderate drizzle"),
    entry(55, WeatherIcon::Rain, "Dense drizzle"),
    entry(56, WeatherIcon::Rain, "Light freezing drizzle"),
    entry(57, WeatherIcon::Rain, "Dense freezing drizzle"),
    entry(61, WeatherIcon::Rain, "Slight rain"),
    entry(63, WeatherIcon::Rain, "Moderate rain"),
    entry(65, WeatherIcon::Rain, "Heavy rain"),
    entry(66, WeatherIcon::Rain, "Light freezing rain"),
    entry(67, WeatherIcon::Rain, "Heavy freezing rain"),
    entry(71, WeatherIcon::Snow, "Slight snowfall"),
    entry(73, WeatherIcon::Snow, "Moderate snowfall"),
    entry(75, WeatherIcon::Snow, "Heavy snowfall"),
    entry(77, WeatherIcon::Snow, "Snow grains"),
    entry(80, WeatherIcon::Rain, "Slight rain showers"),
    entry(81, WeatherIcon::Rain, "Moderate rain showers"),
    entry(82, WeatherIcon::Rain, "Violent rain showers"),
    entry(85, WeatherIcon::Snow, "Slight snow showers"),
    entry(86, WeatherIcon::Snow, "Heavy snow showers"),
    entry(95, WeatherIcon::Thunder, "Thunderstorm"),
    entry(96, WeatherIcon::Thunder, "Thunderstorm + light hail"),
    entry(99, WeatherIcon::Thunder, "Thunderstorm + heavy hail"),
];

/// Looks up a provider weather code. Unknown codes degrade to a cloudy
/// "Unknown" entry; code 0 switches to its night variant inside the night window.
#[must_use]
pub fn describe(code: i64, hour: Option<u32>) -> WeatherCodeEntry {
    if code == 0 && hour.is_some_and(is_night_hour) {
        return CLEAR_NIGHT;
    }
    CATALOG
        .iter()
        .find(|candidate| candidate.code == code)
        .copied()
        .unwrap_or(UNKNOWN_ENTRY)
}

fn icon_tokens(icon: WeatherIcon) -> (&'static str, &'static str, &'static str) {
    match icon {
        WeatherIcon::Sun => ("SUN", "☀️", "☀"),
        WeatherIcon::Moon => ("MON", "🌙", "☾"),
        WeatherIcon::Cloud => ("CLD", "☁️", "☁"),
        WeatherIcon::Rain => ("RAN", "🌧️", "☂"),
        WeatherIcon::Snow => ("SNW", "🌨️", "❄"),
        WeatherIcon::Thunder => ("THN", "⛈️", "⚡"),
        WeatherIcon::Fog => ("FOG", "🌫️", "░"),
    }
}
