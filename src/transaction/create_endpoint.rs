//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState,
    api::ApiClient,
    endpoints,
    transaction::models::{NewTransaction, TransactionKind, iso_date},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The client for the FinSet backend API.
    pub(crate) api: ApiClient,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// The value of the transaction in dollars.
    pub amount: f64,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The category label for the transaction.
    #[serde(default)]
    pub category: String,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The date when the transaction occurred.
    #[serde(with = "iso_date")]
    pub date: Date,
}

/// A route handler for creating a new transaction, redirects to the
/// transactions view on success.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> impl IntoResponse {
    let new_transaction = NewTransaction {
        amount: form.amount,
        kind: form.kind,
        category: form.category,
        description: form.description,
        date: form.date,
    };

    if let Err(error) = state
        .api
        .create_transaction(&new_transaction)
        .await
        .inspect_err(|error| tracing::error!("could not create transaction: {error}"))
    {
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
