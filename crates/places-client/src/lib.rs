//! Client for the Places explorer backend.
//!
//! The controller only ever talks to two endpoints:
//!
//! ```text
//! POST {base}/search            {"query": ...}    --> [LocationCandidate] | null
//! POST {base}/location/details  {"location": ...} --> LocationDetails
//! ```
//!
//! [`PlacesApi`] is the seam the UI controller is generic over;
//! [`HttpPlacesApi`] implements it over HTTP via `reqwest`.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::PlacesApi;
pub use config::ApiConfig;
pub use error::ClientError;
pub use http::HttpPlacesApi;
