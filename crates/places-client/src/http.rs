//! `reqwest` implementation of [`PlacesApi`].
//!
//! Both endpoints are JSON-over-HTTP `POST`s with no authentication. No
//! retries and no timeouts beyond the transport defaults are applied.

use places_types::{DetailsRequest, LocationCandidate, LocationDetails, SearchRequest};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::PlacesApi;
use crate::config::ApiConfig;
use crate::error::ClientError;

/// Path of the geocoding endpoint, relative to the base URL.
const SEARCH_PATH: &str = "search";

/// Path of the aggregation endpoint, relative to the base URL.
const DETAILS_PATH: &str = "location/details";

/// HTTP client for the Places backend.
#[derive(Debug, Clone)]
pub struct HttpPlacesApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpPlacesApi {
    /// Create a client for the configured backend.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: config.clone(),
        }
    }

    /// Create a client reusing an existing `reqwest` connection pool.
    pub fn with_client(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    /// `POST` a JSON body and decode the JSON response.
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!(url, "posting request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            warn!(url, status = status.as_u16(), "backend returned an error status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: error_body.trim().to_owned(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(serde_json::from_str(&text)?)
    }
}

impl PlacesApi for HttpPlacesApi {
    async fn search(&self, query: &str) -> Result<Vec<LocationCandidate>, ClientError> {
        let body = SearchRequest {
            query: query.to_owned(),
        };
        let candidates: Option<Vec<LocationCandidate>> = self.post(SEARCH_PATH, &body).await?;
        Ok(candidates.unwrap_or_default())
    }

    async fn location_details(
        &self,
        location: &LocationCandidate,
    ) -> Result<LocationDetails, ClientError> {
        let details: LocationDetails = self
            .post(DETAILS_PATH, &DetailsRequest { location })
            .await?;

        if let Some(note) = details.error.as_deref().filter(|note| !note.is_empty()) {
            warn!(location = details.location.name, note, "backend reported a partial failure");
        }

        Ok(details)
    }
}
