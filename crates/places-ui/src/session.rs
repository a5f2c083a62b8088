//! The record behind one Results screen, plus the controller's UI state.
//!
//! A [`ResultsSession`] is built once per successful Detail Flow and never
//! mutated afterwards. The controller swaps the whole record on the next run
//! and drops it when the user navigates back, so a places index can only ever
//! resolve against the list currently on screen.

use std::sync::Arc;

use places_types::{LocationCandidate, LocationDetails, Place, WeatherSummary};

use crate::error::UiError;
use crate::screen::Screen;

/// Immutable snapshot of one rendered Results screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsSession {
    id: u64,
    location: LocationCandidate,
    weather: Option<WeatherSummary>,
    places: Vec<Place>,
}

impl ResultsSession {
    /// Build a session from a details response.
    pub fn new(id: u64, details: LocationDetails) -> Self {
        Self {
            id,
            location: details.location,
            weather: details.weather,
            places: details.places.unwrap_or_default(),
        }
    }

    /// Sequence number, unique within one controller.
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Location the details were fetched for.
    pub const fn location(&self) -> &LocationCandidate {
        &self.location
    }

    /// Weather, if the backend had any.
    pub const fn weather(&self) -> Option<&WeatherSummary> {
        self.weather.as_ref()
    }

    /// Places in display order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Positional lookup into [`Self::places`].
    ///
    /// # Errors
    ///
    /// Returns [`UiError::PlaceOutOfRange`] if `index` does not address a place.
    pub fn place(&self, index: usize) -> Result<&Place, UiError> {
        self.places.get(index).ok_or(UiError::PlaceOutOfRange {
            index,
            len: self.places.len(),
        })
    }
}

/// Mutable controller state. Guarded together with the view.
#[derive(Debug)]
pub(crate) struct UiState {
    /// Screen most recently shown through the router.
    pub screen: Screen,
    /// A search request is outstanding.
    pub search_in_flight: bool,
    /// A details request is outstanding.
    pub details_in_flight: bool,
    /// Bumped on every navigation back to Search; a details response
    /// captured under an older epoch is discarded.
    pub epoch: u64,
    /// Id handed to the next session.
    pub next_session_id: u64,
    /// The Results screen currently addressable by the modal.
    pub session: Option<Arc<ResultsSession>>,
    /// Index of the place shown in the modal, if it is open.
    pub modal: Option<usize>,
}

impl UiState {
    pub(crate) const fn new() -> Self {
        Self {
            screen: Screen::Search,
            search_in_flight: false,
            details_in_flight: false,
            epoch: 0,
            next_session_id: 0,
            session: None,
            modal: None,
        }
    }

    /// Allocate the next session id.
    pub(crate) const fn take_session_id(&mut self) -> u64 {
        let id = self.next_session_id;
        self.next_session_id = self.next_session_id.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(places: Option<Vec<Place>>) -> LocationDetails {
        LocationDetails {
            location: LocationCandidate::new("Paris", 48.8566, 2.3522),
            weather: None,
            places,
            error: None,
        }
    }

    #[test]
    fn place_lookup_is_positional_and_bounded() {
        let session = ResultsSession::new(
            7,
            details(Some(vec![
                Place {
                    name: Some("first".to_owned()),
                    ..Place::default()
                },
                Place {
                    name: Some("second".to_owned()),
                    ..Place::default()
                },
            ])),
        );

        assert_eq!(session.id(), 7);
        assert_eq!(session.place(1).ok().and_then(Place::name), Some("second"));
        assert!(matches!(
            session.place(2),
            Err(UiError::PlaceOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn null_places_become_empty_list() {
        let session = ResultsSession::new(0, details(None));
        assert!(session.places().is_empty());
        assert!(session.weather().is_none());
    }

    #[test]
    fn session_ids_increase() {
        let mut state = UiState::new();
        assert_eq!(state.take_session_id(), 0);
        assert_eq!(state.take_session_id(), 1);
    }
}
