use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{sync::mpsc, time::sleep};

use crate::{
    domain::{
        projection::Period,
        weather::{ForecastBundle, Place},
    },
    error::WeatherError,
};

const CLOCK_TICK_SECS: u64 = 15;

/// What the user (or a timer) asked for. Every intent runs through the same
/// fetch, normalize and project pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SelectPlace(Place),
    SelectPeriod(Period),
    Refresh,
    Search(String),
}

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickClock,
    TickRefresh,
    Input(Event),
    Intent(Intent),
    FetchSucceeded {
        generation: u64,
        place: Place,
        bundle: ForecastBundle,
    },
    FetchFailed {
        generation: u64,
        error: WeatherError,
    },
    SearchResolved {
        token: u64,
        query: String,
        result: Result<Place, WeatherError>,
    },
    SuggestQuery(String),
    SuggestionsReady {
        query: String,
        result: Result<Vec<Place>, WeatherError>,
    },
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn start_clock_task(tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        loop {
            sleep(Duration::from_secs(CLOCK_TICK_SECS)).await;
            if tx.send(AppEvent::TickClock).await.is_err() {
                break;
            }
        }
    });
}

pub fn start_refresh_task(tx: mpsc::Sender<AppEvent>, refresh_secs: u64) {
    tokio::spawn(async move {
        let period = Duration::from_secs(refresh_secs.max(60));
        loop {
            sleep(period).await;
            if tx.send(AppEvent::TickRefresh).await.is_err() {
                break;
            }
        }
    });
}
