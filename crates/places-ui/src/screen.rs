//! View router: exactly one top-level screen is visible at a time.

use crate::view::View;

/// The three mutually exclusive top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Screen {
    /// Query input and candidate list.
    Search,
    /// Shown while location details are being fetched.
    Loading,
    /// Weather and places for the selected location.
    Results,
}

impl Screen {
    /// Every screen, in page order.
    pub const ALL: [Self; 3] = [Self::Search, Self::Loading, Self::Results];

    /// Id of the page section that hosts this screen.
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Search => "searchSection",
            Self::Loading => "loadingSection",
            Self::Results => "resultsSection",
        }
    }
}

/// Make `target` the only visible screen.
///
/// Only toggles visibility; calling it twice with the same target is a no-op
/// from the user's point of view.
pub fn show<V: View + ?Sized>(view: &mut V, target: Screen) {
    for screen in Screen::ALL {
        view.set_screen_visible(screen, screen == target);
    }
}
