//! Presentation controller for the Places explorer.
//!
//! The user searches for a place by name, picks one geocoding candidate,
//! and sees that location's current weather plus nearby points of interest,
//! with a modal detail view per point of interest.
//!
//! # Architecture
//!
//! ```text
//! UiEvent --> PlacesController --> PlacesApi (search, location details)
//!                  |
//!                  +--> Renderer (minijinja, auto-escaped HTML)
//!                  |
//!                  +--> View (page shell: screens, lists, cards, modal)
//! ```
//!
//! # Modules
//!
//! - [`controller`] -- Search, Detail, and Modal flows plus navigation
//! - [`screen`] -- View router over the Search, Loading, and Results screens
//! - [`view`] -- The page surface trait and an in-memory implementation
//! - [`render`] -- View models and HTML templates
//! - [`session`] -- Immutable record of the current Results screen
//! - [`text`] -- Truncation, previews, URL and number formatting
//! - [`messages`] -- Localized labels
//! - [`event`] -- Page events
//! - [`config`] -- YAML configuration
//! - [`error`] -- Inline (user-facing) and returned error types

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod messages;
pub mod render;
pub mod screen;
pub mod session;
pub mod text;
pub mod view;

pub use config::{ConfigError, PlacesConfig, UiConfig};
pub use controller::{DetailsOutcome, EventOutcome, PlacesController, SearchOutcome};
pub use error::{InlineError, UiError};
pub use event::{Key, UiEvent};
pub use messages::{Locale, Messages};
pub use render::Renderer;
pub use screen::Screen;
pub use session::ResultsSession;
pub use view::{CandidateRow, MemoryView, PlaceRow, PlacesCard, View};
