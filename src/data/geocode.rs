use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    domain::weather::{Coordinates, Place},
    error::WeatherError,
};

pub const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const SEARCH_COUNT: usize = 1;
pub const SUGGESTION_COUNT: usize = 8;

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    language: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    pub fn new() -> Self {
        Self::with_base_url(GEOCODE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(8))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            language: "en".to_string(),
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Places matching `query`, in provider order. Empty when nothing matches.
    pub async fn search(&self, query: &str, count: usize) -> Result<Vec<Place>, WeatherError> {
        debug!("geocoding '{query}' (count {count})");
        let payload: GeocodeResponse = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", query),
                ("count", count.to_string().as_str()),
                ("language", self.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(payload
            .results
            .unwrap_or_default()
            .into_iter()
            .filter_map(into_place)
            .collect())
    }

    /// Direct search: the first match or `NoSearchResults`.
    pub async fn resolve(&self, query: &str) -> Result<Place, WeatherError> {
        self.search(query, SEARCH_COUNT)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::NoSearchResults(query.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    admin1: Option<String>,
    country: Option<String>,
}

fn into_place(entry: GeocodeResult) -> Option<Place> {
    let coordinates = Coordinates::new(entry.latitude, entry.longitude).ok()?;
    Some(Place {
        name: entry.name,
        coordinates,
        admin1: entry.admin1,
        country: entry.country,
    })
}
