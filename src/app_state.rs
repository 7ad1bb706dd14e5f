//! Defines the app state that holds the backend API client and server config.

use crate::{Error, api::ApiClient, pagination::PaginationConfig, timezone::get_local_offset};

/// The state of the application to be shared across request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the FinSet backend API.
    pub api: ApiClient,
    /// The canonical timezone that dates should be displayed in, e.g.
    /// "Pacific/Auckland".
    pub local_timezone: String,
    /// The settings for paginating the transactions view.
    pub pagination_config: PaginationConfig,
}

impl AppState {
    /// Create the shared app state.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidBaseUrl] if `api_url` is not a valid URL, or
    /// [Error::InvalidTimezone] if `local_timezone` is not a canonical
    /// timezone such as "Pacific/Auckland".
    pub fn new(
        api_url: &str,
        local_timezone: &str,
        pagination_config: PaginationConfig,
    ) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezone(local_timezone.to_owned()));
        }

        Ok(Self {
            api: ApiClient::new(api_url)?,
            local_timezone: local_timezone.to_owned(),
            pagination_config,
        })
    }
}

#[cfg(test)]
mod app_state_tests {
    use crate::Error;

    use super::AppState;

    #[test]
    fn accepts_valid_config() {
        let state = AppState::new(
            "http://localhost:5000",
            "Pacific/Auckland",
            Default::default(),
        );

        assert!(state.is_ok());
    }

    #[test]
    fn rejects_invalid_timezone() {
        let state = AppState::new("http://localhost:5000", "Middle/Earth", Default::default());

        assert!(matches!(state, Err(Error::InvalidTimezone(_))));
    }
}
