//! Error types for the presentation controller.
//!
//! Two families exist. [`InlineError`] is what the user sees in the error
//! container: it is rendered, never returned. [`UiError`] is a failure the
//! caller must handle: a broken template or an index that does not address
//! the current places list.

use places_client::ClientError;

use crate::messages::Messages;

/// Problems surfaced to the user inline, in the error container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineError {
    /// The query was empty after trimming. No request was made.
    EmptyQuery,
    /// The geocoder returned no candidates.
    NoLocations,
    /// A request to either endpoint failed; carries the failure detail.
    RequestFailed(String),
}

impl InlineError {
    /// Localized text for the error container.
    pub fn message(&self, messages: &Messages) -> String {
        match self {
            Self::EmptyQuery => messages.enter_place_name.to_owned(),
            Self::NoLocations => messages.no_locations.to_owned(),
            Self::RequestFailed(detail) => format!("{}{detail}", messages.error_prefix),
        }
    }
}

impl From<&ClientError> for InlineError {
    fn from(err: &ClientError) -> Self {
        Self::RequestFailed(err.to_string())
    }
}

/// Errors returned by controller operations.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A view template failed to load or render.
    #[error("template error: {0}")]
    Template(String),

    /// A modal was requested for a position outside the current places list.
    #[error("place index {index} out of range for {len} places")]
    PlaceOutOfRange {
        /// The requested position.
        index: usize,
        /// Length of the current places list.
        len: usize,
    },

    /// A modal was requested while no results are displayed.
    #[error("no places list is active")]
    NoActivePlaces,
}

impl From<minijinja::Error> for UiError {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Locale;

    #[test]
    fn request_failure_message_carries_detail() {
        let err = ClientError::Transport("connection refused".to_owned());
        let inline = InlineError::from(&err);

        assert_eq!(
            inline.message(Messages::for_locale(Locale::En)),
            "Error: request failed: connection refused"
        );
        assert_eq!(
            inline.message(Messages::for_locale(Locale::Ru)),
            "Ошибка: request failed: connection refused"
        );
    }

    #[test]
    fn validation_and_empty_state_messages_are_localized() {
        let en = Messages::for_locale(Locale::En);
        assert_eq!(InlineError::EmptyQuery.message(en), "Enter a place name");
        assert_eq!(InlineError::NoLocations.message(en), "No locations found");
    }
}
