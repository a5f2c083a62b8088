//! Localized user-visible strings.
//!
//! Every label the controller renders or writes into the view comes from a
//! [`Messages`] catalogue. Templates receive the catalogue as `labels`.

use serde::{Deserialize, Serialize};

/// Display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Russian.
    Ru,
}

/// The complete set of labels for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Messages {
    /// Idle label of the search button.
    pub search_button: &'static str,
    /// Label of the search button while a search is in flight.
    pub searching: &'static str,
    /// Validation error for an empty query.
    pub enter_place_name: &'static str,
    /// Shown when the geocoder returns nothing.
    pub no_locations: &'static str,
    /// Prefix placed before a request failure's detail.
    pub error_prefix: &'static str,
    /// Fallback title for a place without a name.
    pub untitled: &'static str,
    /// Hint shown instead of a description preview.
    pub click_for_details: &'static str,
    /// Shown when a location has no points of interest.
    pub no_places: &'static str,
    /// Places panel header; the count is appended in parentheses.
    pub places_header: &'static str,
    /// Temperature label.
    pub temperature: &'static str,
    /// Feels-like temperature label.
    pub feels_like: &'static str,
    /// Humidity label.
    pub humidity: &'static str,
    /// Wind label.
    pub wind: &'static str,
    /// Wind speed unit.
    pub wind_unit: &'static str,
    /// Modal description section title.
    pub information: &'static str,
    /// Modal links section title.
    pub links: &'static str,
    /// Website link label.
    pub website: &'static str,
    /// Wikipedia link label.
    pub wikipedia: &'static str,
    /// Map link label.
    pub map: &'static str,
}

const EN: Messages = Messages {
    search_button: "Search",
    searching: "Searching...",
    enter_place_name: "Enter a place name",
    no_locations: "No locations found",
    error_prefix: "Error: ",
    untitled: "Untitled",
    click_for_details: "Click for details",
    no_places: "No points of interest found",
    places_header: "Places",
    temperature: "Temperature",
    feels_like: "Feels like",
    humidity: "Humidity",
    wind: "Wind",
    wind_unit: "m/s",
    information: "Information",
    links: "Links",
    website: "🌐 Website",
    wikipedia: "📖 Wikipedia",
    map: "🗺️ Map",
};

const RU: Messages = Messages {
    search_button: "Поиск",
    searching: "Поиск...",
    enter_place_name: "Введите название места",
    no_locations: "Локации не найдены",
    error_prefix: "Ошибка: ",
    untitled: "Без названия",
    click_for_details: "Нажмите для просмотра деталей",
    no_places: "Интересные места не найдены",
    places_header: "Интересные места",
    temperature: "Температура",
    feels_like: "Ощущается",
    humidity: "Влажность",
    wind: "Ветер",
    wind_unit: "м/с",
    information: "Информация",
    links: "Ссылки",
    website: "🌐 Сайт",
    wikipedia: "📖 Wikipedia",
    map: "🗺️ Карта",
};

impl Messages {
    /// Catalogue for a locale.
    pub const fn for_locale(locale: Locale) -> &'static Self {
        match locale {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parses_lowercase_names() {
        let locale: Result<Locale, _> = serde_json::from_str("\"ru\"");
        assert_eq!(locale.ok(), Some(Locale::Ru));
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn catalogues_differ_per_locale() {
        assert_eq!(Messages::for_locale(Locale::En).untitled, "Untitled");
        assert_eq!(Messages::for_locale(Locale::Ru).untitled, "Без названия");
        assert_eq!(Messages::for_locale(Locale::Ru).search_button, "Поиск");
    }
}
