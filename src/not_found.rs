use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Not Found",
            "404",
            "Sorry, we couldn't find that page.",
            "Check the address for typos or head back to the dashboard.",
        ),
    )
        .into_response()
}

#[cfg(test)]
mod not_found_tests {
    use axum::http::StatusCode;
    use scraper::{Html, Selector};

    use super::get_404_not_found;

    #[tokio::test]
    async fn returns_404_with_error_page() {
        let response = get_404_not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");
        let html = Html::parse_document(&String::from_utf8_lossy(&body));

        let header = html
            .select(&Selector::parse("h1").unwrap())
            .next()
            .expect("No h1 found");
        assert_eq!(header.text().collect::<String>().trim(), "404");
    }
}
