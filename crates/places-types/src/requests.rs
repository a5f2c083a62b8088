//! Request bodies for the two backend endpoints.

use serde::{Deserialize, Serialize};

use crate::structs::LocationCandidate;

/// Body of `POST {base}/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Trimmed, non-empty free-text place name.
    pub query: String,
}

/// Body of `POST {base}/location/details`.
///
/// Borrows the candidate so the exact value the user picked is serialized
/// without an intermediate copy.
#[derive(Debug, Clone, Serialize)]
pub struct DetailsRequest<'a> {
    /// The selected candidate, echoed back verbatim.
    pub location: &'a LocationCandidate,
}
