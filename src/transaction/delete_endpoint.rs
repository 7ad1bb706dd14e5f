//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    alert::{Alert, render_alert},
    api::ApiClient,
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The client for the FinSet backend API.
    pub(crate) api: ApiClient,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// A route handler for deleting a transaction by its id.
///
/// The response body only carries an out-of-band success alert, so htmx
/// swaps nothing into the table row it targeted and the row disappears.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<String>,
) -> impl IntoResponse {
    if let Err(error) = state
        .api
        .delete_transaction(&transaction_id)
        .await
        .inspect_err(|error| {
            tracing::error!("could not delete transaction {transaction_id}: {error}")
        })
    {
        return error.into_alert_response();
    }

    render_alert(StatusCode::OK, Alert::success("Transaction deleted.", ""))
}
