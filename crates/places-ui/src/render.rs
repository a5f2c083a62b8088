//! Turning API payloads into escaped HTML fragments.
//!
//! Rendering happens in two steps. Domain values are first shaped into small
//! serializable view models ([`CandidateItem`], [`WeatherPanel`],
//! [`PlaceItem`], [`ModalContent`]) that hold display-ready text. The models
//! are then fed to `minijinja` templates whose names end in `.html`, so every
//! interpolated value is HTML-escaped by the engine.
//!
//! Built-in templates are compiled into the binary. A configured templates
//! directory may override any of them file by file.

use std::path::Path;

use minijinja::{Environment, context};
use places_types::{LocationCandidate, Place, WeatherSummary};
use serde::Serialize;
use tracing::debug;

use crate::config::UiConfig;
use crate::error::{InlineError, UiError};
use crate::messages::Messages;
use crate::text::{
    description_preview, fill_url_template, format_coordinates, format_temperature, normalize_url,
};
use crate::view::{CandidateRow, PlaceRow, PlacesCard};

const CANDIDATE: &str = "candidate.html";
const WEATHER: &str = "weather.html";
const PLACES_HEADER: &str = "places_header.html";
const PLACES_EMPTY: &str = "places_empty.html";
const PLACE_ROW: &str = "place_row.html";
const MODAL: &str = "modal.html";
const ERROR: &str = "error.html";

/// Built-in templates, by name.
const BUILTIN_TEMPLATES: [(&str, &str); 7] = [
    (CANDIDATE, include_str!("../templates/candidate.html")),
    (WEATHER, include_str!("../templates/weather.html")),
    (PLACES_HEADER, include_str!("../templates/places_header.html")),
    (PLACES_EMPTY, include_str!("../templates/places_empty.html")),
    (PLACE_ROW, include_str!("../templates/place_row.html")),
    (MODAL, include_str!("../templates/modal.html")),
    (ERROR, include_str!("../templates/error.html")),
];

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// Display text for one candidate row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateItem {
    /// Location name.
    pub name: String,
    /// Non-empty subset of state and country, comma-joined.
    pub region: String,
    /// Coordinates with four decimals.
    pub coordinates: String,
    /// One-line summary, e.g. `Paris, France — 📍 48.8566, 2.3522`.
    pub summary: String,
}

/// Display text for the weather card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherPanel {
    /// Name of the location the weather belongs to.
    pub location_name: String,
    /// Conditions, e.g. `clear sky`.
    pub description: String,
    /// Icon image URL.
    pub icon_url: String,
    /// Rounded temperature, e.g. `18°C`.
    pub temperature: String,
    /// Rounded feels-like temperature.
    pub feels_like: String,
    /// Humidity with percent sign.
    pub humidity: String,
    /// Wind speed with unit.
    pub wind: String,
}

/// Display text for one places row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceItem {
    /// Zero-based position in the places list.
    pub index: usize,
    /// Name, or the localized "untitled" fallback.
    pub name: String,
    /// First category token.
    pub category: Option<String>,
    /// Description preview; `None` shows the "click for details" hint.
    pub preview: Option<String>,
}

/// Which external resource a modal link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// The place's own website.
    Website,
    /// The place's Wikipedia article.
    Wikipedia,
    /// A map search for the place's coordinates.
    Map,
}

/// One outbound link in the modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalLink {
    /// Link target.
    pub kind: LinkKind,
    /// Absolute URL.
    pub url: String,
    /// Localized label.
    pub label: String,
}

/// Display content of the place modal, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalContent {
    /// Image URL; the page hides the image if it fails to load.
    pub image: Option<String>,
    /// Name, or the localized "untitled" fallback.
    pub name: String,
    /// First category token.
    pub category: Option<String>,
    /// Full description.
    pub description: Option<String>,
    /// Website, Wikipedia, then map. The map link is always present.
    pub links: Vec<ModalLink>,
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders view models into escaped HTML using the configured locale and
/// URL templates.
pub struct Renderer {
    env: Environment<'static>,
    messages: &'static Messages,
    preview_chars: usize,
    weather_icon_url: String,
    map_search_url: String,
}

impl Renderer {
    /// Build a renderer from presentation settings.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Template`] if an override template cannot be read
    /// or any template fails to compile.
    pub fn new(config: &UiConfig) -> Result<Self, UiError> {
        let mut env = Environment::new();

        for (name, builtin) in BUILTIN_TEMPLATES {
            let source = match config.templates_dir.as_deref() {
                Some(dir) => load_override(dir, name)?.unwrap_or_else(|| builtin.to_owned()),
                None => builtin.to_owned(),
            };
            env.add_template_owned(name, source)
                .map_err(|e| UiError::Template(format!("failed to add {name}: {e}")))?;
        }

        Ok(Self {
            env,
            messages: Messages::for_locale(config.locale),
            preview_chars: config.preview_chars,
            weather_icon_url: config.weather_icon_url.clone(),
            map_search_url: config.map_search_url.clone(),
        })
    }

    /// Labels for the configured locale.
    pub const fn messages(&self) -> &'static Messages {
        self.messages
    }

    // --- Candidates ---

    /// Shape one candidate for display.
    pub fn candidate_item(candidate: &LocationCandidate) -> CandidateItem {
        let region = candidate.region();
        let coordinates = format_coordinates(candidate.lat, candidate.lon);
        let summary = if region.is_empty() {
            format!("{} — 📍 {coordinates}", candidate.name)
        } else {
            format!("{}, {region} — 📍 {coordinates}", candidate.name)
        };
        CandidateItem {
            name: candidate.name.clone(),
            region,
            coordinates,
            summary,
        }
    }

    /// One row per candidate, each bound to its candidate.
    pub fn candidate_rows(
        &self,
        candidates: &[LocationCandidate],
    ) -> Result<Vec<CandidateRow>, UiError> {
        candidates
            .iter()
            .map(|candidate| {
                let html = self.render(
                    CANDIDATE,
                    context! { item => Self::candidate_item(candidate) },
                )?;
                Ok(CandidateRow {
                    html,
                    candidate: candidate.clone(),
                })
            })
            .collect()
    }

    // --- Weather ---

    /// Shape the weather card; `None` when there is no weather.
    pub fn weather_panel(
        &self,
        location: &LocationCandidate,
        weather: Option<&WeatherSummary>,
    ) -> Option<WeatherPanel> {
        let weather = weather?;
        Some(WeatherPanel {
            location_name: location.name.clone(),
            description: weather.description.clone(),
            icon_url: fill_url_template(
                &self.weather_icon_url,
                &[("icon", weather.icon.as_str())],
            ),
            temperature: format_temperature(weather.temp),
            feels_like: format_temperature(weather.feels_like),
            humidity: format!("{}%", weather.humidity),
            wind: format!("{} {}", weather.wind_speed, self.messages.wind_unit),
        })
    }

    /// Weather card markup; empty when there is no weather.
    pub fn weather_card(
        &self,
        location: &LocationCandidate,
        weather: Option<&WeatherSummary>,
    ) -> Result<String, UiError> {
        match self.weather_panel(location, weather) {
            Some(panel) => self.render(WEATHER, context! { panel => panel, labels => self.messages }),
            None => Ok(String::new()),
        }
    }

    // --- Places ---

    /// Shape one places row.
    pub fn place_item(&self, index: usize, place: &Place) -> PlaceItem {
        PlaceItem {
            index,
            name: self.place_name(place),
            category: place.first_category().map(ToOwned::to_owned),
            preview: place
                .description()
                .map(|description| description_preview(description, self.preview_chars)),
        }
    }

    /// The places card: the empty-state message, or a header plus one row per place.
    pub fn places_card(&self, places: &[Place]) -> Result<PlacesCard, UiError> {
        if places.is_empty() {
            let html = self.render(PLACES_EMPTY, context! { labels => self.messages })?;
            return Ok(PlacesCard::Empty { html });
        }

        let header_html = self.render(
            PLACES_HEADER,
            context! { count => places.len(), labels => self.messages },
        )?;
        let rows = places
            .iter()
            .enumerate()
            .map(|(index, place)| {
                let html = self.render(
                    PLACE_ROW,
                    context! { item => self.place_item(index, place), labels => self.messages },
                )?;
                Ok(PlaceRow { index, html })
            })
            .collect::<Result<Vec<_>, UiError>>()?;

        Ok(PlacesCard::List { header_html, rows })
    }

    // --- Modal ---

    /// Shape the modal for one place.
    pub fn modal_content(&self, place: &Place) -> ModalContent {
        let mut links = Vec::with_capacity(3);

        if let Some(website) = place.website() {
            links.push(ModalLink {
                kind: LinkKind::Website,
                url: normalize_url(website).into_owned(),
                label: self.messages.website.to_owned(),
            });
        }

        if let Some(wikipedia) = place.wikipedia() {
            links.push(ModalLink {
                kind: LinkKind::Wikipedia,
                url: normalize_url(wikipedia).into_owned(),
                label: self.messages.wikipedia.to_owned(),
            });
        }

        let (lat, lon) = (place.lat.to_string(), place.lon.to_string());
        links.push(ModalLink {
            kind: LinkKind::Map,
            url: fill_url_template(
                &self.map_search_url,
                &[("lat", lat.as_str()), ("lon", lon.as_str())],
            ),
            label: self.messages.map.to_owned(),
        });

        ModalContent {
            image: place.image().map(ToOwned::to_owned),
            name: self.place_name(place),
            category: place.first_category().map(ToOwned::to_owned),
            description: place.description().map(ToOwned::to_owned),
            links,
        }
    }

    /// Modal body markup for one place.
    pub fn modal_body(&self, place: &Place) -> Result<String, UiError> {
        self.render(
            MODAL,
            context! { content => self.modal_content(place), labels => self.messages },
        )
    }

    // --- Errors ---

    /// Error container markup.
    pub fn error_banner(&self, error: &InlineError) -> Result<String, UiError> {
        self.render(ERROR, context! { message => error.message(self.messages) })
    }

    fn place_name(&self, place: &Place) -> String {
        place.name().unwrap_or(self.messages.untitled).to_owned()
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, UiError> {
        let html = self
            .env
            .get_template(name)
            .map_err(|e| UiError::Template(format!("missing {name}: {e}")))?
            .render(ctx)
            .map_err(|e| UiError::Template(format!("{name} render failed: {e}")))?;
        Ok(html)
    }
}

/// Read `dir/name` if it exists.
fn load_override(dir: &Path, name: &str) -> Result<Option<String>, UiError> {
    let path = dir.join(name);
    if !path.is_file() {
        return Ok(None);
    }
    debug!(path = %path.display(), "loading template override");
    std::fs::read_to_string(&path)
        .map(Some)
        .map_err(|e| UiError::Template(format!("failed to read {}: {e}", path.display())))
}
