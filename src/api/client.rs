//! The HTTP client wrapping the FinSet backend API.

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::{
    Error,
    account::{BankAccount, NewBankAccount},
    api::models::{AdviceBody, ErrorBody, InsightsBody, Prediction},
    goal::{Goal, GoalUpdate, NewGoal},
    transaction::{NewTransaction, Transaction},
};

/// A client for the FinSet backend API.
///
/// Cloning is cheap, the underlying connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the backend API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidBaseUrl] if `base_url` is not a valid URL.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let mut base_url =
            Url::parse(base_url).map_err(|_| Error::InvalidBaseUrl(base_url.to_owned()))?;

        // Url::join discards the last path segment unless it ends with a slash.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path)
            .map_err(|_| Error::InvalidBaseUrl(path.to_owned()))
    }

    /// Fetch the full transaction history, newest first.
    pub async fn get_transactions(&self) -> Result<Vec<Transaction>, Error> {
        let response = self.http.get(self.endpoint("api/transactions")?).send().await?;
        decode(response).await
    }

    /// Record a new transaction.
    pub async fn create_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> Result<Transaction, Error> {
        let response = self
            .http
            .post(self.endpoint("api/transactions")?)
            .json(transaction)
            .send()
            .await?;
        decode(response).await
    }

    /// Delete the transaction with the given id.
    pub async fn delete_transaction(&self, transaction_id: &str) -> Result<(), Error> {
        let response = self
            .http
            .delete(self.endpoint(&format!("api/transactions/{transaction_id}"))?)
            .send()
            .await?;
        check_status(response).await
    }

    /// Fetch all savings goals.
    pub async fn get_goals(&self) -> Result<Vec<Goal>, Error> {
        let response = self.http.get(self.endpoint("api/goals")?).send().await?;
        decode(response).await
    }

    /// Create a new savings goal.
    pub async fn create_goal(&self, goal: &NewGoal) -> Result<Goal, Error> {
        let response = self
            .http
            .post(self.endpoint("api/goals")?)
            .json(goal)
            .send()
            .await?;
        decode(response).await
    }

    /// Update the saved amount of the goal with the given id.
    pub async fn update_goal(&self, goal_id: &str, update: &GoalUpdate) -> Result<(), Error> {
        let response = self
            .http
            .put(self.endpoint(&format!("api/goals/{goal_id}"))?)
            .json(update)
            .send()
            .await?;
        check_status(response).await
    }

    /// Fetch all linked bank accounts.
    pub async fn get_accounts(&self) -> Result<Vec<BankAccount>, Error> {
        let response = self.http.get(self.endpoint("api/banks")?).send().await?;
        decode(response).await
    }

    /// Link a new bank account.
    pub async fn create_account(&self, account: &NewBankAccount) -> Result<BankAccount, Error> {
        let response = self
            .http
            .post(self.endpoint("api/banks")?)
            .json(account)
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch the backend's AI spending insights.
    pub async fn get_insights(&self) -> Result<String, Error> {
        let response = self.http.get(self.endpoint("api/ai/insights")?).send().await?;
        let body: InsightsBody = decode(response).await?;

        Ok(body.insights)
    }

    /// Fetch the backend's next-month spending prediction.
    pub async fn get_prediction(&self) -> Result<Prediction, Error> {
        let response = self
            .http
            .get(self.endpoint("api/ai/predictions")?)
            .send()
            .await?;
        decode(response).await
    }

    /// Ask the backend's AI advisor a free-form question.
    pub async fn get_advice(&self, query: &str) -> Result<String, Error> {
        let response = self
            .http
            .post(self.endpoint("api/ai/advice")?)
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await?;
        let body: AdviceBody = decode(response).await?;

        Ok(body.advice)
    }
}

/// Parse the response body as JSON, or surface the backend's error message.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let status = response.status();

    if status.is_success() {
        Ok(response.json().await?)
    } else {
        Err(error_from_body(status, response).await)
    }
}

/// Like [decode], for endpoints whose success body carries nothing we need.
async fn check_status(response: reqwest::Response) -> Result<(), Error> {
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        Err(error_from_body(status, response).await)
    }
}

async fn error_from_body(status: reqwest::StatusCode, response: reqwest::Response) -> Error {
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_owned(),
    };

    Error::ApiStatus {
        status: status.as_u16(),
        message,
    }
}
