//! Response entities returned by the search and location-details endpoints.
//!
//! Optional fields are modelled as [`Option`]. The backend omits some fields
//! and sends empty strings for others, so accessors such as [`Place::name`]
//! treat an empty string the same as a missing value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Geocoding candidate
// ---------------------------------------------------------------------------

/// One geocoding result produced by the search endpoint.
///
/// The candidate the user picks is sent back to the details endpoint as-is.
/// Fields this crate does not know about are kept in [`Self::extra`] so the
/// round trip neither drops nor adds anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCandidate {
    /// Display name of the location.
    pub name: String,
    /// Region or state, when the geocoder reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Country name, when the geocoder reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Any other fields present in the search response.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocationCandidate {
    /// Create a candidate with only a name and coordinates.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            state: None,
            country: None,
            lat,
            lon,
            extra: Map::new(),
        }
    }

    /// Region line: the non-empty subset of `state` and `country`, comma-joined.
    pub fn region(&self) -> String {
        [self.state.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// Current weather conditions at the selected location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Human-readable conditions, e.g. `clear sky`.
    #[serde(default)]
    pub description: String,
    /// Icon code understood by the weather icon service, e.g. `01d`.
    #[serde(default)]
    pub icon: String,
    /// Air temperature in degrees Celsius.
    pub temp: f64,
    /// Apparent temperature in degrees Celsius.
    pub feels_like: f64,
    /// Relative humidity in percent.
    #[serde(default)]
    pub humidity: f64,
    /// Wind speed in metres per second.
    #[serde(default)]
    pub wind_speed: f64,
}

// ---------------------------------------------------------------------------
// Point of interest
// ---------------------------------------------------------------------------

/// A point of interest near the selected location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Provider identifier. Carried through, never displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xid: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Comma-separated category list, most specific first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kinds: Option<String>,
    /// Free-text description, possibly spanning several lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Website, with or without a scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Wikipedia article, with or without a scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikipedia: Option<String>,
    /// Distance from the selected location in metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

impl Place {
    /// Display name, if non-empty.
    pub fn name(&self) -> Option<&str> {
        present(self.name.as_ref())
    }

    /// First category token from [`Self::kinds`], trimmed.
    ///
    /// Returns `None` when `kinds` is missing or empty.
    pub fn first_category(&self) -> Option<&str> {
        present(self.kinds.as_ref()).map(|kinds| kinds.split(',').next().unwrap_or(kinds).trim())
    }

    /// Description, if non-empty.
    pub fn description(&self) -> Option<&str> {
        present(self.description.as_ref())
    }

    /// Image URL, if non-empty.
    pub fn image(&self) -> Option<&str> {
        present(self.image.as_ref())
    }

    /// Website, if non-empty.
    pub fn website(&self) -> Option<&str> {
        present(self.website.as_ref())
    }

    /// Wikipedia reference, if non-empty.
    pub fn wikipedia(&self) -> Option<&str> {
        present(self.wikipedia.as_ref())
    }
}

fn present(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|value| !value.is_empty())
}

// ---------------------------------------------------------------------------
// Details response
// ---------------------------------------------------------------------------

/// Aggregate payload returned by the location-details endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDetails {
    /// The location the details were computed for.
    pub location: LocationCandidate,
    /// Current weather. `None` means no weather card is rendered.
    #[serde(default)]
    pub weather: Option<WeatherSummary>,
    /// Nearby places. `None` and an empty list both mean "no places".
    #[serde(default)]
    pub places: Option<Vec<Place>>,
    /// Partial-failure note from the aggregation backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LocationDetails {
    /// Places as a slice, empty when the backend sent none.
    pub fn places(&self) -> &[Place] {
        self.places.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse<T: serde::de::DeserializeOwned>(value: Value) -> Option<T> {
        serde_json::from_value(value).ok()
    }

    #[test]
    fn candidate_round_trip_keeps_unknown_fields_and_omits_absent_ones() {
        let raw = serde_json::json!({
            "name": "Springfield",
            "state": "Illinois",
            "lat": 39.7817,
            "lon": -89.6501,
            "osm_id": 123_456,
            "postcode": "62701"
        });
        let Some(candidate) = parse::<LocationCandidate>(raw.clone()) else {
            panic!("candidate should deserialize");
        };

        assert_eq!(candidate.country, None);
        assert_eq!(candidate.extra.len(), 2);
        assert_eq!(serde_json::to_value(&candidate).ok(), Some(raw));
    }

    #[test]
    fn full_precision_coordinates_are_sent_back_unchanged() {
        let body = r#"{"name":"Gangnam","lat":37.5,"lon":127.03465148502943,"score":127.03465148502943}"#;

        let candidate: LocationCandidate = serde_json::from_str(body).unwrap();

        let exact: f64 = "127.03465148502943".parse().unwrap();
        assert_eq!(candidate.lon.to_bits(), exact.to_bits());
        assert_eq!(serde_json::to_string(&candidate).unwrap(), body);
    }

    #[test]
    fn region_skips_missing_and_empty_parts() {
        let mut candidate = LocationCandidate::new("Paris", 48.8566, 2.3522);
        assert_eq!(candidate.region(), "");

        candidate.country = Some("France".to_owned());
        assert_eq!(candidate.region(), "France");

        candidate.state = Some(String::new());
        assert_eq!(candidate.region(), "France");

        candidate.state = Some("Île-de-France".to_owned());
        assert_eq!(candidate.region(), "Île-de-France, France");
    }

    #[test]
    fn details_with_null_places_and_weather() {
        let Some(details) = parse::<LocationDetails>(serde_json::json!({
            "location": {"name": "Nowhere", "lat": 0.0, "lon": 0.0},
            "weather": null,
            "places": null
        })) else {
            panic!("details should deserialize");
        };

        assert!(details.weather.is_none());
        assert!(details.places().is_empty());
        assert!(details.error.is_none());
    }

    #[test]
    fn place_accessors_treat_empty_strings_as_absent() {
        let place = Place {
            name: Some(String::new()),
            kinds: Some(" museums , cultural,interesting_places".to_owned()),
            description: Some(String::new()),
            website: Some("example.com".to_owned()),
            lat: 1.0,
            lon: 2.0,
            ..Place::default()
        };

        assert_eq!(place.name(), None);
        assert_eq!(place.first_category(), Some("museums"));
        assert_eq!(place.description(), None);
        assert_eq!(place.website(), Some("example.com"));
        assert_eq!(place.wikipedia(), None);
    }

    #[test]
    fn place_without_kinds_has_no_category() {
        let place = Place {
            kinds: Some(String::new()),
            ..Place::default()
        };
        assert_eq!(place.first_category(), None);
        assert_eq!(Place::default().first_category(), None);
    }
}
