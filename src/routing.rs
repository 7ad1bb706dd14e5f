//! Application router configuration.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    account::{create_account_endpoint, get_accounts_page},
    dashboard::{get_dashboard_page, post_advice_endpoint},
    endpoints,
    goal::{create_goal_endpoint, get_goals_page, update_goal_progress_endpoint},
    internal_server_error::get_internal_server_error_page,
    logging::logging_middleware,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_new_transaction_page,
        get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let view_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::NEW_TRANSACTION_VIEW, get(get_new_transaction_page))
        .route(endpoints::GOALS_VIEW, get(get_goals_page))
        .route(endpoints::ACCOUNTS_VIEW, get(get_accounts_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint),
        )
        .route(endpoints::GOALS_API, post(create_goal_endpoint))
        .route(endpoints::ACCOUNTS_API, post(create_account_endpoint))
        .route(endpoints::GOAL_PROGRESS, put(update_goal_progress_endpoint))
        .route(endpoints::ADVICE_API, post(post_advice_endpoint));

    view_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod routing_tests {
    use axum::{
        Json, Router,
        body::Body,
        http::{Request, StatusCode, header::LOCATION},
        routing::get,
    };
    use serde_json::json;
    use tower::ServiceExt;

    use crate::{AppState, endpoints};

    use super::build_router;

    async fn test_app() -> Router {
        let backend = Router::new()
            .route("/api/transactions", get(|| async { Json(json!([])) }))
            .route("/api/goals", get(|| async { Json(json!([])) }))
            .route("/api/banks", get(|| async { Json(json!([])) }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind test listener");
        let address = listener.local_addr().expect("Could not get local address");
        tokio::spawn(async move {
            axum::serve(listener, backend)
                .await
                .expect("Test server stopped");
        });

        let state = AppState::new(&format!("http://{address}"), "Etc/UTC", Default::default())
            .expect("Could not create app state");

        build_router(state)
    }

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(endpoints::ROOT)
                    .body(Body::empty())
                    .expect("Could not build request"),
            )
            .await
            .expect("Could not get response");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response
                .headers()
                .get(LOCATION)
                .expect("Expected a location header"),
            endpoints::DASHBOARD_VIEW
        );
    }

    #[tokio::test]
    async fn unknown_routes_get_the_not_found_page() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/no/such/page")
                    .body(Body::empty())
                    .expect("Could not build request"),
            )
            .await
            .expect("Could not get response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn view_routes_respond_ok() {
        for route in [
            endpoints::TRANSACTIONS_VIEW,
            endpoints::NEW_TRANSACTION_VIEW,
            endpoints::GOALS_VIEW,
            endpoints::ACCOUNTS_VIEW,
        ] {
            let app = test_app().await;

            let response = app
                .oneshot(
                    Request::builder()
                        .uri(route)
                        .body(Body::empty())
                        .expect("Could not build request"),
                )
                .await
                .expect("Could not get response");

            assert_eq!(response.status(), StatusCode::OK, "route {route} failed");
        }
    }
}
