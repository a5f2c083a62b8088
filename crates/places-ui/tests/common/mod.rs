//! Shared fixtures for controller integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use places_client::{ClientError, PlacesApi};
use places_types::{LocationCandidate, LocationDetails, Place, WeatherSummary};
use places_ui::{MemoryView, PlacesController, Renderer, UiConfig};
use tokio::sync::Semaphore;

/// Scripted backend.
///
/// Responses are consumed in order. Every call is recorded before it waits
/// on the gate, so a test can hold requests in flight and release them one
/// at a time.
pub struct StubApi {
    search_responses: Mutex<VecDeque<Result<Vec<LocationCandidate>, ClientError>>>,
    details_responses: Mutex<VecDeque<Result<LocationDetails, ClientError>>>,
    search_calls: Mutex<Vec<String>>,
    details_calls: Mutex<Vec<LocationCandidate>>,
    gate: Semaphore,
}

impl StubApi {
    /// Requests complete immediately.
    pub fn open() -> Arc<Self> {
        Arc::new(Self::with_permits(Semaphore::MAX_PERMITS))
    }

    /// Requests block until [`Self::release`] is called.
    pub fn gated() -> Arc<Self> {
        Arc::new(Self::with_permits(0))
    }

    fn with_permits(permits: usize) -> Self {
        Self {
            search_responses: Mutex::new(VecDeque::new()),
            details_responses: Mutex::new(VecDeque::new()),
            search_calls: Mutex::new(Vec::new()),
            details_calls: Mutex::new(Vec::new()),
            gate: Semaphore::new(permits),
        }
    }

    pub fn push_search(&self, response: Result<Vec<LocationCandidate>, ClientError>) {
        self.search_responses.lock().unwrap().push_back(response);
    }

    pub fn push_details(&self, response: Result<LocationDetails, ClientError>) {
        self.details_responses.lock().unwrap().push_back(response);
    }

    /// Let `n` held requests proceed.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn details_calls(&self) -> Vec<LocationCandidate> {
        self.details_calls.lock().unwrap().clone()
    }

    /// Yield until at least `n` search calls were recorded.
    pub async fn wait_for_search_calls(&self, n: usize) {
        while self.search_calls.lock().unwrap().len() < n {
            tokio::task::yield_now().await;
        }
    }

    /// Yield until at least `n` details calls were recorded.
    pub async fn wait_for_details_calls(&self, n: usize) {
        while self.details_calls.lock().unwrap().len() < n {
            tokio::task::yield_now().await;
        }
    }

    async fn pass_gate(&self) {
        if let Ok(permit) = self.gate.acquire().await {
            permit.forget();
        }
    }
}

impl PlacesApi for StubApi {
    async fn search(&self, query: &str) -> Result<Vec<LocationCandidate>, ClientError> {
        self.search_calls.lock().unwrap().push(query.to_owned());
        self.pass_gate().await;
        self.search_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn location_details(
        &self,
        location: &LocationCandidate,
    ) -> Result<LocationDetails, ClientError> {
        self.details_calls.lock().unwrap().push(location.clone());
        self.pass_gate().await;
        self.details_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no scripted response".to_owned())))
    }
}

pub type TestController = PlacesController<Arc<StubApi>, MemoryView>;

pub fn controller(api: &Arc<StubApi>) -> TestController {
    let renderer = Renderer::new(&UiConfig::default()).unwrap();
    PlacesController::new(Arc::clone(api), renderer, MemoryView::default())
}

pub fn paris() -> LocationCandidate {
    serde_json::from_value(serde_json::json!({
        "name": "Paris",
        "country": "France",
        "lat": 48.8566,
        "lon": 2.3522
    }))
    .unwrap()
}

pub fn clear_sky() -> WeatherSummary {
    WeatherSummary {
        description: "clear sky".to_owned(),
        icon: "01d".to_owned(),
        temp: 18.2,
        feels_like: 17.9,
        humidity: 60.0,
        wind_speed: 3.1,
    }
}

pub fn named_place(name: &str) -> Place {
    Place {
        name: Some(name.to_owned()),
        lat: 48.86,
        lon: 2.33,
        ..Place::default()
    }
}

pub fn details(
    location: &LocationCandidate,
    weather: Option<WeatherSummary>,
    places: Vec<Place>,
) -> LocationDetails {
    LocationDetails {
        location: location.clone(),
        weather,
        places: Some(places),
        error: None,
    }
}
