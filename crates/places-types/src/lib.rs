//! Shared type definitions for the Places explorer.
//!
//! This crate is the single source of truth for the JSON payloads exchanged
//! with the search and location-details endpoints. Both the HTTP client and
//! the UI controller depend on it.
//!
//! # Modules
//!
//! - [`structs`] -- Response entities (candidates, weather, places, details)
//! - [`requests`] -- Request bodies posted to the two endpoints

pub mod requests;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use requests::{DetailsRequest, SearchRequest};
pub use structs::{LocationCandidate, LocationDetails, Place, WeatherSummary};
