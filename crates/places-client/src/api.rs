//! The backend seam.
//!
//! Async trait methods are not dyn-compatible, so the controller is generic
//! over [`PlacesApi`] instead of holding a trait object. Tests plug in a
//! scripted implementation; production uses [`crate::HttpPlacesApi`].

use std::future::Future;
use std::sync::Arc;

use places_types::{LocationCandidate, LocationDetails};

use crate::error::ClientError;

/// The two backend operations the controller consumes.
pub trait PlacesApi {
    /// Geocode a trimmed, non-empty query.
    ///
    /// An empty vector means "no match"; the backend's `null` body maps to it.
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<LocationCandidate>, ClientError>> + Send;

    /// Fetch weather and nearby places for a candidate returned by [`Self::search`].
    ///
    /// The candidate is sent exactly as given.
    fn location_details(
        &self,
        location: &LocationCandidate,
    ) -> impl Future<Output = Result<LocationDetails, ClientError>> + Send;
}

impl<T: PlacesApi> PlacesApi for Arc<T> {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<LocationCandidate>, ClientError>> + Send {
        (**self).search(query)
    }

    fn location_details(
        &self,
        location: &LocationCandidate,
    ) -> impl Future<Output = Result<LocationDetails, ClientError>> + Send {
        (**self).location_details(location)
    }
}
