use thiserror::Error;

/// Failures surfaced to the renderer as status text. None of them are fatal:
/// the previously displayed data stays on screen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherError {
    #[error("provider error: {0}")]
    Provider(String),

    #[error("network failure: {0}")]
    Network(String),

    #[error("no current conditions in forecast")]
    MissingCurrent,

    #[error("forecast has {available} days, view needs {required}")]
    InsufficientForecast { required: usize, available: usize },

    #[error("no search results for '{0}'")]
    NoSearchResults(String),

    #[error("coordinates out of range: {latitude}, {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

impl WeatherError {
    #[must_use]
    pub fn status_message(&self) -> String {
        match self {
            Self::Provider(reason) => reason.clone(),
            Self::Network(_) => "Network error, try again later".to_string(),
            Self::MissingCurrent | Self::InsufficientForecast { .. } => {
                "Data unavailable for this view".to_string()
            }
            Self::NoSearchResults(query) => format!("Place not found: {query}"),
            Self::InvalidCoordinates {
                latitude,
                longitude,
            } => format!("Invalid coordinates {latitude:.4}, {longitude:.4}"),
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
