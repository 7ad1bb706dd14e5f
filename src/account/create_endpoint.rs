//! Defines the endpoint for linking a new bank account.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{AppState, account::models::NewBankAccount, api::ApiClient, endpoints};

/// The state needed to link a bank account.
#[derive(Debug, Clone)]
pub struct CreateAccountState {
    /// The client for the FinSet backend API.
    pub(crate) api: ApiClient,
}

impl FromRef<AppState> for CreateAccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// The form data for linking a bank account.
#[derive(Debug, Deserialize)]
pub struct AccountForm {
    /// The name of the bank holding the account.
    pub bank_name: String,
    /// The account number, as the bank formats it.
    pub account_number: String,
    /// The kind of account, e.g. "Checking" or "Savings".
    pub account_type: String,
    /// The balance from the most recent statement, in dollars.
    #[serde(default)]
    pub balance: Option<f64>,
}

/// A route handler for linking a new bank account, redirects to the accounts
/// view on success.
pub async fn create_account_endpoint(
    State(state): State<CreateAccountState>,
    Form(form): Form<AccountForm>,
) -> impl IntoResponse {
    let new_account = NewBankAccount {
        bank_name: form.bank_name,
        account_number: form.account_number,
        account_type: form.account_type,
        balance: form.balance.unwrap_or(0.0),
    };

    if let Err(error) = state
        .api
        .create_account(&new_account)
        .await
        .inspect_err(|error| tracing::error!("could not link account: {error}"))
    {
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::ACCOUNTS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
