//! Defines the route handler for the page that lists and filters transactions.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;

use crate::{
    AppState, Error,
    api::ApiClient,
    pagination::{PaginationConfig, create_pagination_indicators, page_count, paginate},
    timezone::current_local_date,
    transaction::{
        filter::{filter_transactions, summarize},
        query::FilterParams,
        view::{TransactionsViewModel, transactions_content, transactions_view},
    },
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    /// The client for the FinSet backend API.
    pub(crate) api: ApiClient,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub(crate) local_timezone: String,
    /// The settings for paginating the transaction table.
    pub(crate) pagination_config: PaginationConfig,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            local_timezone: state.local_timezone.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Render an overview of the user's transactions.
///
/// The query string carries the active filter; see [FilterParams]. Requests
/// made by htmx get back just the filterable content section so the form can
/// swap it in place, while everything else gets the full page.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
    HxRequest(is_htmx_request): HxRequest,
    Query(params): Query<FilterParams>,
) -> Result<Response, Error> {
    let today = current_local_date(&state.local_timezone)?;
    let transactions = state
        .api
        .get_transactions()
        .await
        .inspect_err(|error| tracing::error!("could not fetch transactions: {error}"))?;

    let (criteria, requested_page, canonical) = params.normalize(today);
    let filtered = filter_transactions(&transactions, &criteria);
    let summary = summarize(&filtered);

    let page_size = state.pagination_config.default_page_size;
    let page_count = page_count(filtered.len(), page_size);
    // A page past the end, e.g. from a stale link, falls back to the last page.
    let curr_page = requested_page.min(page_count);
    let page_transactions = paginate(&filtered, curr_page, page_size);
    let indicators =
        create_pagination_indicators(curr_page, page_count, state.pagination_config.max_pages);

    let model = TransactionsViewModel {
        page_transactions,
        summary,
        indicators,
        params: &canonical,
    };

    if is_htmx_request {
        Ok(transactions_content(&model).into_response())
    } else {
        Ok(transactions_view(&model).into_response())
    }
}

#[cfg(test)]
mod transactions_page_tests {
    use axum::{
        Json, Router,
        extract::{FromRef, Query, State},
        response::Response,
        routing::get,
    };
    use axum_htmx::HxRequest;
    use scraper::{Html, Selector};
    use serde_json::{Value, json};

    use crate::{AppState, transaction::query::FilterParams};

    use super::{TransactionsViewState, get_transactions_page};

    fn backend_transaction(id: u32, amount: f64, kind: &str, description: &str) -> Value {
        json!({
            "_id": id.to_string(),
            "amount": amount,
            "category": "General",
            "description": description,
            "date": "2024-06-03T08:00:00",
            "type": kind
        })
    }

    async fn state_with_transactions(transactions: Vec<Value>) -> TransactionsViewState {
        let router = Router::new().route(
            "/api/transactions",
            get(move || {
                let transactions = transactions.clone();
                async move { Json(Value::Array(transactions)) }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind test listener");
        let address = listener.local_addr().expect("Could not get local address");
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server stopped");
        });

        let app_state = AppState::new(&format!("http://{address}"), "Etc/UTC", Default::default())
            .expect("Could not create app state");

        TransactionsViewState::from_ref(&app_state)
    }

    async fn parse_html(response: Response) -> Html {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");

        Html::parse_document(&String::from_utf8_lossy(&body))
    }

    fn scrape<'a>(html: &'a Html, css_selector: &str) -> Vec<scraper::ElementRef<'a>> {
        html.select(&Selector::parse(css_selector).expect("Invalid selector"))
            .collect()
    }

    #[tokio::test]
    async fn renders_transactions_with_summary() {
        let state = state_with_transactions(vec![
            backend_transaction(1, 1000.0, "income", "Salary"),
            backend_transaction(2, 250.0, "expense", "Rent"),
        ])
        .await;

        let response = get_transactions_page(
            State(state),
            HxRequest(false),
            Query(FilterParams::default()),
        )
        .await
        .expect("Could not get transactions page");

        let html = parse_html(response).await;

        assert_eq!(scrape(&html, "tbody tr").len(), 2);
        assert_eq!(
            scrape(&html, "[data-summary-count]")[0]
                .text()
                .collect::<String>()
                .trim(),
            "2"
        );

        let page_text = html.html();
        assert!(page_text.contains("$1,000.00"));
        assert!(page_text.contains("$750.00"), "net should be rendered");
    }

    #[tokio::test]
    async fn keyword_filter_narrows_the_table() {
        let state = state_with_transactions(vec![
            backend_transaction(1, 1000.0, "income", "Salary"),
            backend_transaction(2, 250.0, "expense", "Rent"),
        ])
        .await;
        let params = FilterParams {
            keyword: Some("rent".to_owned()),
            ..Default::default()
        };

        let response = get_transactions_page(State(state), HxRequest(false), Query(params))
            .await
            .expect("Could not get transactions page");

        let html = parse_html(response).await;
        let rows = scrape(&html, "tbody tr");

        assert_eq!(rows.len(), 1);
        assert!(rows[0].html().contains("Rent"));
    }

    #[tokio::test]
    async fn second_page_holds_the_remainder() {
        let transactions = (0..25)
            .map(|n| backend_transaction(n, 10.0, "expense", &format!("Purchase {n}")))
            .collect();
        let state = state_with_transactions(transactions).await;
        let params = FilterParams {
            page: Some("2".to_owned()),
            ..Default::default()
        };

        let response = get_transactions_page(State(state), HxRequest(false), Query(params))
            .await
            .expect("Could not get transactions page");

        let html = parse_html(response).await;

        assert_eq!(scrape(&html, "tbody tr").len(), 5);
        let current_page = scrape(&html, "[aria-current=page]");
        assert_eq!(current_page[0].text().collect::<String>().trim(), "2");
    }

    #[tokio::test]
    async fn page_past_the_end_falls_back_to_the_last_page() {
        let state = state_with_transactions(vec![backend_transaction(
            1, 10.0, "expense", "Lone purchase",
        )])
        .await;
        let params = FilterParams {
            page: Some("99".to_owned()),
            ..Default::default()
        };

        let response = get_transactions_page(State(state), HxRequest(false), Query(params))
            .await
            .expect("Could not get transactions page");

        let html = parse_html(response).await;

        assert_eq!(scrape(&html, "tbody tr").len(), 1);
    }

    #[tokio::test]
    async fn htmx_requests_get_the_partial_without_the_page_shell() {
        let state = state_with_transactions(vec![backend_transaction(
            1, 10.0, "expense", "Lone purchase",
        )])
        .await;

        let response = get_transactions_page(
            State(state),
            HxRequest(true),
            Query(FilterParams::default()),
        )
        .await
        .expect("Could not get transactions page");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");
        let text = String::from_utf8_lossy(&body);

        assert!(text.contains("id=\"transactions-content\""));
        assert!(!text.contains("<html"));
    }

    #[tokio::test]
    async fn empty_result_renders_empty_state_row() {
        let state = state_with_transactions(vec![]).await;

        let response = get_transactions_page(
            State(state),
            HxRequest(false),
            Query(FilterParams::default()),
        )
        .await
        .expect("Could not get transactions page");

        let html = parse_html(response).await;

        assert_eq!(scrape(&html, "[data-empty-state]").len(), 1);
    }
}
