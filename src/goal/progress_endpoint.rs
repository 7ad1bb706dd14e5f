//! Defines the endpoint for adding savings to a goal.

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{AppState, api::ApiClient, endpoints, goal::models::GoalUpdate};

/// The state needed to update a goal's savings.
#[derive(Debug, Clone)]
pub struct GoalProgressState {
    /// The client for the FinSet backend API.
    pub(crate) api: ApiClient,
}

impl FromRef<AppState> for GoalProgressState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// The form data for adding savings to a goal.
#[derive(Debug, Deserialize)]
pub struct GoalProgressForm {
    /// The amount to add to the goal, in dollars.
    pub amount: f64,
    /// The amount already saved when the form was rendered, in dollars.
    pub current_amount: f64,
}

/// A route handler that adds `amount` to the goal's saved total, then
/// redirects to the goals view so the updated progress renders.
pub async fn update_goal_progress_endpoint(
    State(state): State<GoalProgressState>,
    Path(goal_id): Path<String>,
    Form(form): Form<GoalProgressForm>,
) -> impl IntoResponse {
    let update = GoalUpdate {
        current_amount: form.current_amount + form.amount,
    };

    if let Err(error) = state
        .api
        .update_goal(&goal_id, &update)
        .await
        .inspect_err(|error| tracing::error!("could not update goal {goal_id}: {error}"))
    {
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::GOALS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
