//! Page events routed through [`crate::PlacesController::dispatch`].

use places_types::LocationCandidate;

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Submits the search from inside the input.
    Enter,
    /// Closes the modal from anywhere.
    Escape,
    /// Any other key; ignored.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// A user interaction with the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The search button was activated.
    SearchClicked,
    /// A key was pressed inside the search input.
    SearchInputKey(Key),
    /// The back button on the Results screen was activated.
    BackClicked,
    /// A candidate row was activated; carries the row's bound candidate.
    CandidateActivated(LocationCandidate),
    /// A places row was activated; carries the row's index.
    PlaceActivated(usize),
    /// The modal's close control was activated.
    ModalCloseClicked,
    /// The modal overlay was clicked. `on_backdrop` is true when the click
    /// landed outside the modal content.
    ModalClicked {
        /// Whether the click target was the backdrop itself.
        on_backdrop: bool,
    },
    /// A key was pressed anywhere on the page.
    KeyDown(Key),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_key_names_map_to_keys() {
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom("a"), Key::Other);
    }
}
