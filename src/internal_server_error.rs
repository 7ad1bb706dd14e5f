//! The fallback page shown when the server hits an unrecoverable error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The copy for the 500 page.
///
/// The defaults point the user at the most likely culprit for this app, the
/// backend API, since the server itself holds no state that could be at
/// fault.
pub struct InternalServerError<'a> {
    /// A short, user-facing summary of what went wrong.
    pub description: &'a str,
    /// What the user or operator can do about it.
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again shortly, or check that the FinSet backend API is reachable",
        }
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_view("Internal Server Error", "500", self.description, self.fix),
        )
            .into_response()
    }
}

pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}

#[cfg(test)]
mod internal_server_error_tests {
    use axum::http::StatusCode;
    use scraper::{Html, Selector};

    use super::get_internal_server_error_page;

    #[tokio::test]
    async fn returns_500_with_error_page() {
        let response = get_internal_server_error_page().await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");
        let html = Html::parse_document(&String::from_utf8_lossy(&body));

        let header = html
            .select(&Selector::parse("h1").unwrap())
            .next()
            .expect("No h1 found");
        assert_eq!(header.text().collect::<String>().trim(), "500");
        assert!(html.html().contains("backend API"));
    }
}
