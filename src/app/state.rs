use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info, warn};
use tokio::sync::mpsc;

use crate::{
    app::{
        debounce::Debouncer,
        events::{AppEvent, Intent, start_clock_task, start_refresh_task},
    },
    cli::{Cli, IconMode},
    data::{
        forecast::ForecastClient,
        geocode::{GeocodeClient, SUGGESTION_COUNT},
        normalize::normalize,
        suggestions::SuggestionCache,
    },
    domain::{
        projection::{Period, Projection, project},
        weather::{ForecastBundle, Place},
    },
    error::WeatherError,
    resilience::freshness::RefreshMetadata,
};

mod methods_fetch;
mod methods_input;

/// Queries shorter than this never trigger suggestions.
pub const MIN_SUGGEST_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Error,
    Quit,
}

#[derive(Debug, Default)]
pub struct SearchState {
    pub open: bool,
    pub query: String,
    pub suggestions: Vec<Place>,
    pub selected: Option<usize>,
}

impl SearchState {
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    pub fn selected_place(&self) -> Option<&Place> {
        self.selected.and_then(|idx| self.suggestions.get(idx))
    }
}

/// Session state. Owned by the event loop, which is its only writer.
#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub period: Period,
    pub loading_message: String,
    pub last_error: Option<WeatherError>,
    pub selected_place: Option<Place>,
    pub displayed_place: Option<Place>,
    pub weather: Option<ForecastBundle>,
    pub refresh_meta: RefreshMetadata,
    pub fetch_generation: u64,
    pub fetch_in_flight: bool,
    pub selection_token: u64,
    pub suggestions: SuggestionCache,
    pub search: SearchState,
    pub icon_mode: IconMode,
    pub refresh_interval_secs: u64,
    forecast: ForecastClient,
    geocoder: GeocodeClient,
    debouncer: Debouncer,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        Self {
            mode: AppMode::Loading,
            running: true,
            period: cli.period,
            loading_message: "Initializing...".to_string(),
            last_error: None,
            selected_place: None,
            displayed_place: None,
            weather: None,
            refresh_meta: RefreshMetadata::default(),
            fetch_generation: 0,
            fetch_in_flight: false,
            selection_token: 0,
            suggestions: SuggestionCache::new(),
            search: SearchState::default(),
            icon_mode: cli.icon_mode(),
            refresh_interval_secs: cli.refresh_interval,
            forecast: ForecastClient::with_base_url(cli.forecast_url()),
            geocoder: GeocodeClient::with_base_url(cli.geocode_url())
                .with_language(cli.language.clone()),
            debouncer: Debouncer::new(Duration::from_millis(cli.debounce_ms)),
        }
    }

    /// Projection of the displayed forecast for the active period.
    pub fn projection(&self) -> Option<Result<Projection, WeatherError>> {
        self.weather
            .as_ref()
            .map(|bundle| project(bundle, self.period))
    }

    pub fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => self.handle_bootstrap(tx, cli)?,
            AppEvent::TickClock => self.refresh_meta.reevaluate(self.refresh_interval_secs),
            AppEvent::TickRefresh => self.dispatch(Intent::Refresh, tx),
            AppEvent::Input(input) => self.handle_input(input, tx),
            AppEvent::Intent(intent) => self.dispatch(intent, tx),
            AppEvent::FetchSucceeded {
                generation,
                place,
                bundle,
            } => self.handle_fetch_succeeded(generation, place, bundle),
            AppEvent::FetchFailed { generation, error } => {
                self.handle_fetch_failed(generation, error);
            }
            AppEvent::SearchResolved {
                token,
                query,
                result,
            } => self.handle_search_resolved(tx, token, &query, result),
            AppEvent::SuggestQuery(query) => self.request_suggestions(tx, query),
            AppEvent::SuggestionsReady { query, result } => {
                self.handle_suggestions_ready(&query, result);
            }
        }
        Ok(())
    }

    fn handle_bootstrap(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli) -> Result<()> {
        cli.validate()?;
        start_clock_task(tx.clone());
        start_refresh_task(tx.clone(), cli.refresh_interval);
        match (cli.initial_place(), cli.city.as_ref()) {
            (Some(place), _) => self.dispatch(Intent::SelectPlace(place), tx),
            (None, Some(city)) => self.dispatch(Intent::Search(city.clone()), tx),
            (None, None) => self.dispatch(Intent::SelectPlace(Place::default_place()), tx),
        }
        Ok(())
    }

    /// Single entry point for user and timer intents.
    pub fn dispatch(&mut self, intent: Intent, tx: &mpsc::Sender<AppEvent>) {
        match intent {
            Intent::SelectPlace(place) => self.select_place(tx, place),
            Intent::SelectPeriod(period) => self.select_period(tx, period),
            Intent::Refresh => self.refresh(tx),
            Intent::Search(query) => self.start_search(tx, &query),
        }
    }

    pub(crate) fn select_place(&mut self, tx: &mpsc::Sender<AppEvent>, place: Place) {
        info!("selected {}", place.label());
        self.selection_token = self.selection_token.wrapping_add(1);
        self.selected_place = Some(place.clone());
        self.start_fetch(tx, place);
    }

    pub(crate) fn select_period(&mut self, tx: &mpsc::Sender<AppEvent>, period: Period) {
        self.period = period;
        if self.weather.is_none() && !self.fetch_in_flight {
            self.refresh(tx);
        }
    }

    pub(crate) fn refresh(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.refresh_meta.reevaluate(self.refresh_interval_secs);
        if let Some(place) = self.selected_place.clone() {
            self.start_fetch(tx, place);
        }
    }

    pub(crate) fn handle_fetch_succeeded(
        &mut self,
        generation: u64,
        place: Place,
        bundle: ForecastBundle,
    ) {
        if generation != self.fetch_generation {
            debug!(
                "dropping stale forecast for {} (generation {generation}, latest {})",
                place.label(),
                self.fetch_generation
            );
            return;
        }
        info!("forecast ready for {}", place.label());
        self.fetch_in_flight = false;
        self.weather = Some(bundle);
        self.displayed_place = Some(place);
        self.mode = AppMode::Ready;
        self.last_error = None;
        self.refresh_meta.mark_success();
    }

    pub(crate) fn handle_fetch_failed(&mut self, generation: u64, error: WeatherError) {
        if generation != self.fetch_generation {
            debug!("dropping stale fetch failure (generation {generation}): {error}");
            return;
        }
        warn!("forecast fetch failed: {error}");
        self.fetch_in_flight = false;
        self.last_error = Some(error);
        self.mode = if self.weather.is_some() {
            AppMode::Ready
        } else {
            AppMode::Error
        };
        self.refresh_meta.mark_failure();
        self.refresh_meta.reevaluate(self.refresh_interval_secs);
    }

    pub(crate) fn handle_search_resolved(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        token: u64,
        query: &str,
        result: Result<Place, WeatherError>,
    ) {
        if token != self.selection_token {
            debug!("dropping stale search result for '{query}'");
            return;
        }
        match result {
            Ok(place) => self.select_place(tx, place),
            Err(error) => {
                warn!("search for '{query}' failed: {error}");
                self.last_error = Some(error);
                if self.weather.is_none() && !self.fetch_in_flight {
                    self.mode = AppMode::Error;
                }
            }
        }
    }

    pub(crate) fn handle_suggestions_ready(
        &mut self,
        query: &str,
        result: Result<Vec<Place>, WeatherError>,
    ) {
        match result {
            Ok(places) => {
                self.suggestions.store(query, places.clone());
                if self.suggestions_wanted_for(query) {
                    self.show_suggestions(places);
                }
            }
            Err(error) => warn!("suggestions for '{query}' failed: {error}"),
        }
    }

    /// Results only land while the overlay still shows the query they answer.
    pub(crate) fn suggestions_wanted_for(&self, query: &str) -> bool {
        self.search.open && self.search.trimmed_query() == query.trim()
    }

    pub(crate) fn show_suggestions(&mut self, places: Vec<Place>) {
        self.search.selected = None;
        self.search.suggestions = places;
    }
}
