//! The presentation controller: Search Flow, Detail Flow, Modal Flow, and
//! navigation over one shared display state.
//!
//! # Flow
//!
//! ```text
//! search(query) --> candidate rows --> select_location(candidate)
//!     --> Loading --> Results (weather + places) --> show_modal(index)
//!                         \--> go_back() --> Search
//! ```
//!
//! All methods take `&self`. The view and [`UiState`] sit behind one lock that
//! is held only for the synchronous work before and after a network call, so
//! other events (a second click, the back button) can be processed while a
//! request is outstanding. The lock is never held across an `.await`, so it is
//! a plain [`std::sync::Mutex`] that drop guards can take synchronously.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use places_client::{HttpPlacesApi, PlacesApi};
use places_types::{LocationCandidate, LocationDetails};
use tracing::{debug, info, warn};

use crate::config::PlacesConfig;
use crate::error::{InlineError, UiError};
use crate::event::{Key, UiEvent};
use crate::render::Renderer;
use crate::screen::{self, Screen};
use crate::session::{ResultsSession, UiState};
use crate::view::View;

/// Result of a [`PlacesController::search`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was blank; the validation error is shown and no request was made.
    EmptyQuery,
    /// Another search is still in flight; this one was dropped.
    Busy,
    /// The backend found nothing; the "no locations" message is shown.
    NotFound,
    /// Candidate rows were rendered.
    Found {
        /// Number of rows.
        count: usize,
    },
    /// The request failed; the error is shown.
    Failed {
        /// Failure detail as shown to the user.
        message: String,
    },
}

/// Result of a [`PlacesController::select_location`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsOutcome {
    /// Another details request is still in flight; this one was dropped.
    Busy,
    /// The Results screen was rendered.
    Rendered {
        /// Number of places in the new list.
        places: usize,
        /// Whether a weather card was rendered.
        weather: bool,
    },
    /// The request failed; the error is shown on the Search screen.
    Failed {
        /// Failure detail as shown to the user.
        message: String,
    },
    /// The user navigated back before the response arrived; it was dropped.
    Discarded,
}

/// Result of [`PlacesController::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event ran the Search Flow.
    Search(SearchOutcome),
    /// The event ran the Detail Flow.
    Details(DetailsOutcome),
    /// The event changed what is displayed.
    Handled,
    /// The event does not apply; nothing changed.
    Ignored,
}

/// The view together with the state it reflects.
struct Shell<V> {
    view: V,
    state: UiState,
}

/// Lock the shell, recovering it if a previous holder panicked.
fn lock<V>(shell: &Mutex<Shell<V>>) -> MutexGuard<'_, Shell<V>> {
    shell.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Ends a search however the request settles: returned, panicked, or dropped.
///
/// Clears the in-flight flag and re-enables the search button.
struct SearchGuard<'a, V: View> {
    shell: &'a Mutex<Shell<V>>,
    label: &'static str,
}

impl<V: View> Drop for SearchGuard<'_, V> {
    fn drop(&mut self) {
        let mut shell = lock(self.shell);
        shell.state.search_in_flight = false;
        shell.view.set_search_button(true, self.label);
    }
}

/// Ends a details request that never delivered a response.
///
/// If the request is still marked in flight under the epoch it started in,
/// the Loading screen is abandoned and the controller returns to Search.
struct DetailsGuard<'a, V: View> {
    shell: &'a Mutex<Shell<V>>,
    epoch: u64,
}

impl<V: View> Drop for DetailsGuard<'_, V> {
    fn drop(&mut self) {
        let mut shell = lock(self.shell);
        if shell.state.details_in_flight && shell.state.epoch == self.epoch {
            warn!("details request ended without a response, returning to search");
            reset(&mut shell);
        }
    }
}

/// Drives a [`View`] from user events and backend responses.
pub struct PlacesController<A, V> {
    api: A,
    renderer: Renderer,
    shell: Mutex<Shell<V>>,
}

impl<V: View> PlacesController<HttpPlacesApi, V> {
    /// Build a controller talking HTTP to the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Template`] if the view templates cannot be loaded.
    pub fn from_config(config: &PlacesConfig, view: V) -> Result<Self, UiError> {
        let api = HttpPlacesApi::new(&config.api);
        let renderer = Renderer::new(&config.ui)?;
        info!(base_url = config.api.base_url, locale = ?config.ui.locale, "controller configured");
        Ok(Self::new(api, renderer, view))
    }
}

impl<A: PlacesApi, V: View> PlacesController<A, V> {
    /// Create a controller and put the view in its initial state: the Search
    /// screen with an idle search button.
    pub fn new(api: A, renderer: Renderer, mut view: V) -> Self {
        screen::show(&mut view, Screen::Search);
        view.set_search_button(true, renderer.messages().search_button);
        view.set_modal_visible(false);

        Self {
            api,
            renderer,
            shell: Mutex::new(Shell {
                view,
                state: UiState::new(),
            }),
        }
    }

    /// The renderer, for callers that want view models without a view.
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    fn shell(&self) -> MutexGuard<'_, Shell<V>> {
        lock(&self.shell)
    }

    /// Screen most recently shown.
    pub fn screen(&self) -> Screen {
        self.shell().state.screen
    }

    /// The session backing the current Results screen, if any.
    pub fn session(&self) -> Option<Arc<ResultsSession>> {
        self.shell().state.session.clone()
    }

    /// Index of the place shown in the modal, if it is open.
    pub fn modal_index(&self) -> Option<usize> {
        self.shell().state.modal
    }

    /// Read the view.
    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.shell().view)
    }

    /// Mutate the view directly, e.g. to type into the search input.
    pub fn with_view_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut self.shell().view)
    }

    // -----------------------------------------------------------------------
    // Event routing
    // -----------------------------------------------------------------------

    /// Route one page event to the operation it triggers.
    ///
    /// The search button and Enter in the search input both read the input
    /// and run [`Self::search`], so they share the same in-flight guard.
    pub async fn dispatch(&self, event: UiEvent) -> Result<EventOutcome, UiError> {
        match event {
            UiEvent::SearchClicked | UiEvent::SearchInputKey(Key::Enter) => {
                let raw = self.shell().view.search_input();
                self.search(&raw).await.map(EventOutcome::Search)
            }
            UiEvent::BackClicked => {
                self.go_back();
                Ok(EventOutcome::Handled)
            }
            UiEvent::CandidateActivated(candidate) => self
                .select_location(&candidate)
                .await
                .map(EventOutcome::Details),
            UiEvent::PlaceActivated(index) => {
                self.show_modal(index)?;
                Ok(EventOutcome::Handled)
            }
            UiEvent::ModalCloseClicked
            | UiEvent::ModalClicked { on_backdrop: true }
            | UiEvent::KeyDown(Key::Escape) => {
                self.close_modal();
                Ok(EventOutcome::Handled)
            }
            UiEvent::SearchInputKey(_) | UiEvent::ModalClicked { .. } | UiEvent::KeyDown(_) => {
                Ok(EventOutcome::Ignored)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Search Flow
    // -----------------------------------------------------------------------

    /// Geocode `raw_query` and render the candidates.
    ///
    /// A blank query shows the validation error without touching the
    /// network. While a search is in flight the button is disabled and a
    /// second call is dropped. The button is re-enabled on every path once
    /// the request settles, including a panic in the backend and the returned
    /// future being dropped before completion.
    pub async fn search(&self, raw_query: &str) -> Result<SearchOutcome, UiError> {
        let query = raw_query.trim();
        let messages = self.renderer.messages();

        {
            let mut shell = self.shell();
            if query.is_empty() {
                let html = self.renderer.error_banner(&InlineError::EmptyQuery)?;
                shell.view.set_error(html);
                return Ok(SearchOutcome::EmptyQuery);
            }
            if shell.state.search_in_flight {
                debug!(query, "search already in flight, dropping duplicate");
                return Ok(SearchOutcome::Busy);
            }
            shell.state.search_in_flight = true;
            shell.view.set_search_button(false, messages.searching);
        }

        let restore = SearchGuard {
            shell: &self.shell,
            label: messages.search_button,
        };

        info!(query, "searching locations");
        let result = self.api.search(query).await;

        let mut shell = self.shell();
        let outcome = self.apply_search_result(&mut shell.view, result);
        drop(shell);
        drop(restore);
        outcome
    }

    fn apply_search_result(
        &self,
        view: &mut V,
        result: Result<Vec<LocationCandidate>, places_client::ClientError>,
    ) -> Result<SearchOutcome, UiError> {
        match result {
            Ok(candidates) if candidates.is_empty() => {
                info!("no locations found");
                view.set_location_list(Vec::new());
                view.set_error(self.renderer.error_banner(&InlineError::NoLocations)?);
                Ok(SearchOutcome::NotFound)
            }
            Ok(candidates) => {
                let rows = self.renderer.candidate_rows(&candidates)?;
                let count = rows.len();
                info!(count, "locations found");
                view.set_location_list(rows);
                view.set_error(String::new());
                Ok(SearchOutcome::Found { count })
            }
            Err(err) => {
                warn!(error = %err, "search failed");
                let inline = InlineError::from(&err);
                view.set_error(self.renderer.error_banner(&inline)?);
                Ok(SearchOutcome::Failed {
                    message: err.to_string(),
                })
            }
        }
    }

    // -----------------------------------------------------------------------
    // Detail Flow
    // -----------------------------------------------------------------------

    /// Fetch details for `location` and render the Results screen.
    ///
    /// Shows Loading while the request is outstanding. On failure the error
    /// is shown and the controller navigates back to Search. A response that
    /// arrives after the user already went back is dropped.
    pub async fn select_location(
        &self,
        location: &LocationCandidate,
    ) -> Result<DetailsOutcome, UiError> {
        let epoch = {
            let mut shell = self.shell();
            if shell.state.details_in_flight {
                warn!(location = location.name, "details already in flight, dropping selection");
                return Ok(DetailsOutcome::Busy);
            }
            shell.state.details_in_flight = true;
            route(&mut shell, Screen::Loading);
            shell.state.epoch
        };
        let _abandon = DetailsGuard {
            shell: &self.shell,
            epoch,
        };

        info!(
            location = location.name,
            lat = location.lat,
            lon = location.lon,
            "loading location details"
        );
        let result = self.api.location_details(location).await;

        let mut shell = self.shell();
        if shell.state.epoch != epoch {
            info!(location = location.name, "navigated away, discarding details response");
            return Ok(DetailsOutcome::Discarded);
        }
        shell.state.details_in_flight = false;

        match result {
            Ok(details) => {
                let rendered = self.show_results(&mut shell, details);
                if rendered.is_err() {
                    reset(&mut shell);
                }
                rendered
            }
            Err(err) => {
                warn!(location = location.name, error = %err, "loading details failed");
                reset(&mut shell);
                let html = self.renderer.error_banner(&InlineError::from(&err))?;
                shell.view.set_error(html);
                Ok(DetailsOutcome::Failed {
                    message: err.to_string(),
                })
            }
        }
    }

    /// Render both Results panels, install the new session, switch screens.
    fn show_results(
        &self,
        shell: &mut Shell<V>,
        details: LocationDetails,
    ) -> Result<DetailsOutcome, UiError> {
        let session = ResultsSession::new(shell.state.take_session_id(), details);

        let weather_html = self
            .renderer
            .weather_card(session.location(), session.weather())?;
        let card = self.renderer.places_card(session.places())?;

        let outcome = DetailsOutcome::Rendered {
            places: session.places().len(),
            weather: session.weather().is_some(),
        };
        info!(
            location = session.location().name,
            session = session.id(),
            ?outcome,
            "results rendered"
        );

        shell.view.set_weather_card(weather_html);
        shell.view.set_places_card(card);
        shell.view.set_modal_visible(false);
        shell.state.modal = None;
        shell.state.session = Some(Arc::new(session));
        route(shell, Screen::Results);

        Ok(outcome)
    }

    // -----------------------------------------------------------------------
    // Modal Flow
    // -----------------------------------------------------------------------

    /// Open the modal for the place at `index` in the current list.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NoActivePlaces`] when no Results screen is active
    /// and [`UiError::PlaceOutOfRange`] when `index` is past the end of the
    /// list. Nothing is rendered in either case.
    pub fn show_modal(&self, index: usize) -> Result<(), UiError> {
        let mut shell = self.shell();
        let session = shell
            .state
            .session
            .clone()
            .ok_or(UiError::NoActivePlaces)?;
        let place = session.place(index)?;
        let html = self.renderer.modal_body(place)?;

        debug!(index, session = session.id(), "opening place modal");
        shell.view.set_modal_body(html);
        shell.view.set_modal_visible(true);
        shell.state.modal = Some(index);
        Ok(())
    }

    /// Hide the modal. Safe to call when it is already hidden.
    pub fn close_modal(&self) {
        let mut shell = self.shell();
        shell.view.set_modal_visible(false);
        shell.state.modal = None;
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// Return to Search, clearing the candidate list, the error, the modal,
    /// and the current places list.
    pub fn go_back(&self) {
        reset(&mut self.shell());
    }
}

fn reset<V: View>(shell: &mut Shell<V>) {
    route(shell, Screen::Search);
    shell.view.set_location_list(Vec::new());
    shell.view.set_error(String::new());
    shell.view.set_modal_visible(false);
    shell.state.session = None;
    shell.state.modal = None;
    shell.state.details_in_flight = false;
    shell.state.epoch = shell.state.epoch.wrapping_add(1);
    debug!(epoch = shell.state.epoch, "returned to search");
}

fn route<V: View>(shell: &mut Shell<V>, target: Screen) {
    screen::show(&mut shell.view, target);
    shell.state.screen = target;
}
