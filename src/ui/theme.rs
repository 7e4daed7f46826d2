use ratatui::style::Color;

use crate::domain::weather::WeatherIcon;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub surface: Color,
    pub popup_surface: Color,
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub border: Color,
    pub popup_border: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub temp_freezing: Color,
    pub temp_cold: Color,
    pub temp_mild: Color,
    pub temp_warm: Color,
    pub temp_hot: Color,
}

/// Palette keyed by the icon of the current conditions.
#[must_use]
pub fn theme_for(icon: WeatherIcon) -> Theme {
    let (surface, accent) = match icon {
        WeatherIcon::Sun => ((13, 53, 102), (255, 215, 117)),
        WeatherIcon::Moon => ((9, 18, 44), (173, 216, 255)),
        WeatherIcon::Cloud => ((25, 36, 51), (210, 223, 235)),
        WeatherIcon::Rain => ((17, 47, 88), (153, 214, 255)),
        WeatherIcon::Snow => ((27, 51, 77), (237, 247, 255)),
        WeatherIcon::Fog => ((30, 34, 40), (216, 220, 224)),
        WeatherIcon::Thunder => ((28, 25, 66), (255, 223, 112)),
    };

    Theme {
        surface: rgb(surface),
        popup_surface: rgb(shade(surface, 18)),
        accent: rgb(accent),
        text: Color::Rgb(236, 242, 248),
        muted_text: Color::Rgb(160, 174, 190),
        border: rgb(shade(surface, 40)),
        popup_border: rgb(accent),
        success: Color::Rgb(120, 220, 150),
        warning: Color::Rgb(255, 200, 90),
        danger: Color::Rgb(255, 110, 110),
        temp_freezing: Color::Rgb(150, 200, 255),
        temp_cold: Color::Rgb(110, 170, 255),
        temp_mild: Color::Rgb(130, 220, 170),
        temp_warm: Color::Rgb(255, 200, 100),
        temp_hot: Color::Rgb(255, 120, 90),
    }
}

#[must_use]
pub fn temp_color(theme: &Theme, temp_c: f32) -> Color {
    match temp_c {
        t if t <= -8.0 => theme.temp_freezing,
        t if t <= 2.0 => theme.temp_cold,
        t if t <= 16.0 => theme.temp_mild,
        t if t <= 28.0 => theme.temp_warm,
        _ => theme.temp_hot,
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn shade((r, g, b): (u8, u8, u8), amount: u8) -> (u8, u8, u8) {
    (
        r.saturating_add(amount),
        g.saturating_add(amount),
        b.saturating_add(amount),
    )
}
