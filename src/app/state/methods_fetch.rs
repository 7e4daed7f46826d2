use super::*;

impl AppState {
    /// Starts a forecast fetch tagged with a fresh generation. Any fetch still
    /// in flight becomes stale and its result is dropped on arrival.
    pub(crate) fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>, place: Place) {
        self.fetch_generation = self.fetch_generation.wrapping_add(1);
        let generation = self.fetch_generation;
        self.fetch_in_flight = true;
        self.loading_message = format!("Fetching weather for {}...", place.label());
        if self.weather.is_none() {
            self.mode = AppMode::Loading;
        }
        self.refresh_meta.mark_attempt();

        let client = self.forecast.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let event = match client.fetch(place.coordinates).await.and_then(normalize) {
                Ok(bundle) => AppEvent::FetchSucceeded {
                    generation,
                    place,
                    bundle,
                },
                Err(error) => AppEvent::FetchFailed { generation, error },
            };
            let _ = tx2.send(event).await;
        });
    }

    pub(crate) fn start_search(&mut self, tx: &mpsc::Sender<AppEvent>, query: &str) {
        let query = query.trim().to_string();
        if query.is_empty() {
            return;
        }
        self.selection_token = self.selection_token.wrapping_add(1);
        let token = self.selection_token;
        self.loading_message = format!("Searching for {query}...");

        let geocoder = self.geocoder.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = geocoder.resolve(&query).await;
            let _ = tx2
                .send(AppEvent::SearchResolved {
                    token,
                    query,
                    result,
                })
                .await;
        });
    }

    /// Serves suggestions from the cache, or asks the geocoder once per query.
    pub(crate) fn request_suggestions(&mut self, tx: &mpsc::Sender<AppEvent>, query: String) {
        if let Some(cached) = self.suggestions.lookup(&query) {
            debug!("suggestion cache hit for '{query}'");
            let places = cached.to_vec();
            if self.suggestions_wanted_for(&query) {
                self.show_suggestions(places);
            }
            return;
        }

        let geocoder = self.geocoder.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = geocoder.search(query.trim(), SUGGESTION_COUNT).await;
            let _ = tx2.send(AppEvent::SuggestionsReady { query, result }).await;
        });
    }
}
