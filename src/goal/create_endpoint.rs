//! Defines the endpoint for creating a new savings goal.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::Date;

use crate::{AppState, api::ApiClient, endpoints, goal::models::NewGoal};

/// The state needed to create a goal.
#[derive(Debug, Clone)]
pub struct CreateGoalState {
    /// The client for the FinSet backend API.
    pub(crate) api: ApiClient,
}

impl FromRef<AppState> for CreateGoalState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// The form data for creating a goal.
#[derive(Debug, Deserialize)]
pub struct GoalForm {
    /// What the user is saving for.
    pub title: String,
    /// The amount the user wants to reach, in dollars.
    pub target_amount: f64,
    /// The amount already saved, in dollars.
    #[serde(default)]
    pub current_amount: Option<f64>,
    /// When the user wants to reach the target by.
    pub target_date: Date,
}

/// A route handler for creating a new goal, redirects to the goals view on
/// success.
pub async fn create_goal_endpoint(
    State(state): State<CreateGoalState>,
    Form(form): Form<GoalForm>,
) -> impl IntoResponse {
    let new_goal = NewGoal {
        title: form.title,
        target_amount: form.target_amount,
        current_amount: form.current_amount.unwrap_or(0.0),
        target_date: form.target_date,
    };

    if let Err(error) = state
        .api
        .create_goal(&new_goal)
        .await
        .inspect_err(|error| tracing::error!("could not create goal: {error}"))
    {
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::GOALS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
