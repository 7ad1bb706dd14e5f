//! A web front end for the FinSet personal finance tracker.
//!
//! The server renders HTML with [maud] and talks to the FinSet backend API
//! over HTTP for all data. It holds no state of its own, so every page load
//! reflects whatever the backend currently stores.

use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use thiserror::Error;

mod account;
mod alert;
mod api;
mod app_state;
mod dashboard;
mod endpoints;
mod goal;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod pagination;
mod routing;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use logging::logging_middleware;
pub use pagination::PaginationConfig;
pub use routing::build_router;

use crate::{
    alert::{Alert, render_alert},
    html::error_view,
    internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// Errors that can occur within the application.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The backend API could not be reached at all.
    #[error("could not reach the backend API: {0}")]
    ApiUnreachable(String),

    /// The backend API answered with an error status.
    #[error("the backend API returned {status}: {message}")]
    ApiStatus {
        /// The HTTP status code the backend answered with.
        status: u16,
        /// The error message from the backend's response body.
        message: String,
    },

    /// The backend API answered with a body this crate could not parse.
    #[error("could not parse the backend API response: {0}")]
    ApiDecode(String),

    /// The configured timezone is not a valid canonical timezone.
    #[error("{0} is not a valid canonical timezone")]
    InvalidTimezone(String),

    /// The configured backend API URL could not be parsed.
    #[error("{0} is not a valid URL")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Error::ApiDecode(error.to_string())
        } else {
            Error::ApiUnreachable(error.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::ApiStatus { status: 404, .. } => get_404_not_found_response(),
            Error::ApiUnreachable(_) => (
                StatusCode::BAD_GATEWAY,
                error_view(
                    "Backend Unavailable",
                    "502",
                    "The FinSet backend API is not responding.",
                    "Check that the backend server is running and try again",
                ),
            )
                .into_response(),
            Error::InvalidTimezone(timezone) => InternalServerError {
                description: "An invalid timezone was set for the server.",
                fix: &format!(
                    "Restart the server with a valid canonical timezone instead of {timezone:?}"
                ),
            }
            .into_response(),
            _ => InternalServerError::default().into_response(),
        }
    }
}

impl Error {
    /// Render the error as an out-of-band alert for htmx requests.
    pub fn into_alert_response(self) -> Response {
        match self {
            Error::ApiUnreachable(details) => render_alert(
                StatusCode::BAD_GATEWAY,
                Alert::error("The backend API is not responding.", &details),
            ),
            Error::ApiStatus { status, message } => render_alert(
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Alert::error("The backend API rejected the request.", &message),
            ),
            Error::ApiDecode(details) => render_alert(
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error("The backend API sent an unexpected response.", &details),
            ),
            error => render_alert(
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error("Something went wrong.", &error.to_string()),
            ),
        }
    }
}

/// Enable graceful shutdown on Ctrl-C or SIGTERM.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal.");
    handle.graceful_shutdown(Some(std::time::Duration::from_secs(1)));
}
