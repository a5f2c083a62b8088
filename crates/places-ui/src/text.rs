//! Text shaping shared by the renderers: truncation, description previews,
//! link normalization, and number formatting.
//!
//! HTML escaping is not done here; the template engine escapes every
//! interpolated value.

use std::borrow::Cow;

/// Appended to text cut by [`truncate`].
pub const ELLIPSIS: &str = "...";

/// Joins the preview lines of a description.
pub const PREVIEW_SEPARATOR: &str = " • ";

/// Default character budget of a description preview.
pub const DEFAULT_PREVIEW_CHARS: usize = 120;

/// Number of non-blank description lines a preview draws from.
const PREVIEW_LINES: usize = 2;

/// Cut `text` to at most `max_chars` characters, appending [`ELLIPSIS`] if
/// anything was removed.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => {
            let kept = text.get(..cut).unwrap_or(text);
            Cow::Owned(format!("{kept}{ELLIPSIS}"))
        }
    }
}

/// Short preview of a multi-line description.
///
/// Blank lines are dropped, the first two remaining lines are joined with
/// [`PREVIEW_SEPARATOR`], and the result is cut to `max_chars`.
pub fn description_preview(description: &str, max_chars: usize) -> String {
    let joined = description
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(PREVIEW_LINES)
        .collect::<Vec<_>>()
        .join(PREVIEW_SEPARATOR);
    truncate(&joined, max_chars).into_owned()
}

/// Prefix `https://` unless the value already starts with `http`.
pub fn normalize_url(url: &str) -> Cow<'_, str> {
    if url.starts_with("http") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("https://{url}"))
    }
}

/// Round to the nearest integer with halves going up, as browsers do.
///
/// `f64::round` sends `-2.5` to `-3`; this sends it to `-2`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Temperature in whole degrees Celsius, e.g. `22°C` for `21.6`.
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", round_half_up(celsius))
}

/// Coordinate pair with four decimals, e.g. `48.8566, 2.3522`.
pub fn format_coordinates(lat: f64, lon: f64) -> String {
    format!("{lat:.4}, {lon:.4}")
}

/// Substitute `{name}` placeholders in a URL template.
pub fn fill_url_template(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_owned(), |url, (name, value)| {
            url.replace(&format!("{{{name}}}"), value)
        })
}
