//! Backend connection settings.

use serde::Deserialize;

/// Where the two endpoints live.
///
/// Corresponds to the `api` section of `places-config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are appended to, e.g. `http://localhost:8080/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ApiConfig {
    /// Settings pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL for an endpoint path such as `search` or `location/details`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_doubled_slashes() {
        let config = ApiConfig::new("http://example.test/api/");
        assert_eq!(config.endpoint("search"), "http://example.test/api/search");
        assert_eq!(
            config.endpoint("/location/details"),
            "http://example.test/api/location/details"
        );
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(
            ApiConfig::default().endpoint("search"),
            "http://localhost:8080/api/search"
        );
    }
}
