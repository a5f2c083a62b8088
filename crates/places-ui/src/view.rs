//! The page surface the controller drives.
//!
//! [`View`] abstracts the named elements of the page shell: the search input
//! and button, the three screen sections, the candidate list, the error
//! container, the weather and places cards, and the modal. HTML handed to a
//! view has already been escaped by the renderer.
//!
//! Rows carry their bound value ([`CandidateRow::candidate`],
//! [`PlaceRow::index`]) so an implementation attaches it to the element's
//! activation handler directly instead of encoding it into markup.

use std::collections::BTreeMap;

use places_types::LocationCandidate;

use crate::screen::Screen;

/// One rendered entry of the candidate list.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRow {
    /// Escaped row markup.
    pub html: String,
    /// The candidate to pass to `select_location` when the row is activated.
    pub candidate: LocationCandidate,
}

/// One rendered entry of the places list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRow {
    /// Zero-based position in the current places list; opens the modal.
    pub index: usize,
    /// Escaped row markup.
    pub html: String,
}

/// Contents of the places card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacesCard {
    /// No points of interest; `html` is the localized empty-state message.
    Empty {
        /// Escaped message markup.
        html: String,
    },
    /// A header with the count followed by one row per place.
    List {
        /// Escaped header markup.
        header_html: String,
        /// Rows in list order.
        rows: Vec<PlaceRow>,
    },
}

impl PlacesCard {
    /// Number of place rows.
    pub fn row_count(&self) -> usize {
        match self {
            Self::Empty { .. } => 0,
            Self::List { rows, .. } => rows.len(),
        }
    }
}

/// The page elements the controller manipulates.
pub trait View {
    /// Current raw text of the search input.
    fn search_input(&self) -> String;

    /// Enable or disable the search button and set its label.
    fn set_search_button(&mut self, enabled: bool, label: &str);

    /// Show or hide one screen section.
    fn set_screen_visible(&mut self, screen: Screen, visible: bool);

    /// Replace the candidate list. An empty vector clears it.
    fn set_location_list(&mut self, rows: Vec<CandidateRow>);

    /// Replace the error container's markup. An empty string clears it.
    fn set_error(&mut self, html: String);

    /// Replace the weather card's markup. An empty string leaves it blank.
    fn set_weather_card(&mut self, html: String);

    /// Replace the places card.
    fn set_places_card(&mut self, card: PlacesCard);

    /// Replace the modal body's markup.
    fn set_modal_body(&mut self, html: String);

    /// Show or hide the modal overlay.
    fn set_modal_visible(&mut self, visible: bool);
}

/// In-memory view that records what the controller wrote.
///
/// Used for headless rendering and throughout the test suite.
#[derive(Debug, Clone)]
pub struct MemoryView {
    input: String,
    search_enabled: bool,
    search_label: String,
    button_history: Vec<(bool, String)>,
    screens: BTreeMap<Screen, bool>,
    location_rows: Vec<CandidateRow>,
    error_html: String,
    weather_html: String,
    places_card: Option<PlacesCard>,
    modal_body: String,
    modal_visible: bool,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self {
            input: String::new(),
            search_enabled: true,
            search_label: String::new(),
            button_history: Vec::new(),
            screens: BTreeMap::new(),
            location_rows: Vec::new(),
            error_html: String::new(),
            weather_html: String::new(),
            places_card: None,
            modal_body: String::new(),
            modal_visible: false,
        }
    }
}

impl MemoryView {
    /// Type into the search input.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether the search button is enabled.
    pub const fn search_enabled(&self) -> bool {
        self.search_enabled
    }

    /// Current label of the search button.
    pub fn search_label(&self) -> &str {
        &self.search_label
    }

    /// Every `(enabled, label)` pair written to the search button, oldest first.
    pub fn button_history(&self) -> &[(bool, String)] {
        &self.button_history
    }

    /// Screens currently visible, in page order.
    pub fn visible_screens(&self) -> Vec<Screen> {
        self.screens
            .iter()
            .filter_map(|(screen, visible)| visible.then_some(*screen))
            .collect()
    }

    /// Rendered candidate rows.
    pub fn location_rows(&self) -> &[CandidateRow] {
        &self.location_rows
    }

    /// Error container markup.
    pub fn error_html(&self) -> &str {
        &self.error_html
    }

    /// Weather card markup.
    pub fn weather_html(&self) -> &str {
        &self.weather_html
    }

    /// Places card, if one was ever rendered.
    pub const fn places_card(&self) -> Option<&PlacesCard> {
        self.places_card.as_ref()
    }

    /// Modal body markup.
    pub fn modal_body(&self) -> &str {
        &self.modal_body
    }

    /// Whether the modal overlay is shown.
    pub const fn modal_visible(&self) -> bool {
        self.modal_visible
    }
}

impl View for MemoryView {
    fn search_input(&self) -> String {
        self.input.clone()
    }

    fn set_search_button(&mut self, enabled: bool, label: &str) {
        self.search_enabled = enabled;
        label.clone_into(&mut self.search_label);
        self.button_history.push((enabled, label.to_owned()));
    }

    fn set_screen_visible(&mut self, screen: Screen, visible: bool) {
        self.screens.insert(screen, visible);
    }

    fn set_location_list(&mut self, rows: Vec<CandidateRow>) {
        self.location_rows = rows;
    }

    fn set_error(&mut self, html: String) {
        self.error_html = html;
    }

    fn set_weather_card(&mut self, html: String) {
        self.weather_html = html;
    }

    fn set_places_card(&mut self, card: PlacesCard) {
        self.places_card = Some(card);
    }

    fn set_modal_body(&mut self, html: String) {
        self.modal_body = html;
    }

    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }
}
