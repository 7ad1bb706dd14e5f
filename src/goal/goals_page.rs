//! Defines the route handler for the savings goals page.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    AppState, Error,
    api::ApiClient,
    endpoints,
    goal::models::Goal,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, base, dollar_input_styles, format_currency,
    },
    navigation::NavBar,
};

const DATE_LABEL_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day padding:none] [month repr:short] [year]");

/// The state needed for the goals page.
#[derive(Debug, Clone)]
pub struct GoalsViewState {
    /// The client for the FinSet backend API.
    pub(crate) api: ApiClient,
}

impl FromRef<AppState> for GoalsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Render an overview of the user's savings goals.
pub async fn get_goals_page(State(state): State<GoalsViewState>) -> Result<Response, Error> {
    let goals = state
        .api
        .get_goals()
        .await
        .inspect_err(|error| tracing::error!("could not fetch goals: {error}"))?;

    let nav_bar = NavBar::new(endpoints::GOALS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full max-w-2xl mx-auto"
            {
                h1 class="text-xl font-bold" { "Savings Goals" }

                @if goals.is_empty() {
                    p class="text-gray-500 dark:text-gray-400" data-empty-state="true"
                    {
                        "No savings goals yet. Create one below to start tracking."
                    }
                }

                @for goal in &goals {
                    (goal_card(goal))
                }

                (new_goal_form())
            }
        }
    };

    Ok(base("Goals", &[dollar_input_styles()], &content).into_response())
}

fn goal_card(goal: &Goal) -> Markup {
    let progress = goal.progress_percent();
    let update_route = endpoints::format_endpoint(endpoints::GOAL_PROGRESS, &goal.id);
    let target_date_label = goal
        .target_date
        .format(DATE_LABEL_FORMAT)
        .unwrap_or_else(|_| goal.target_date.to_string());

    html! {
        section class=(CARD_STYLE) data-goal=(goal.id)
        {
            header class="flex justify-between items-end mb-2"
            {
                h2 class="text-lg font-semibold" { (goal.title) }

                span class="text-sm text-gray-500 dark:text-gray-400"
                {
                    "by " (target_date_label)
                }
            }

            div class="w-full h-3 rounded-full bg-gray-200 dark:bg-gray-700 mb-2"
            {
                div
                    class="h-3 rounded-full bg-blue-600"
                    style={ "width: " (format!("{progress:.0}")) "%" }
                    data-progress=(format!("{progress:.0}"))
                {}
            }

            p class="text-sm text-gray-500 dark:text-gray-400 mb-3"
            {
                (format_currency(goal.current_amount))
                " of "
                (format_currency(goal.target_amount))
                " saved"
            }

            form hx-put=(update_route) hx-target-error="#alert-container" class="flex gap-2"
            {
                input type="hidden" name="current_amount" value=(goal.current_amount);

                div class="input-wrapper flex-1"
                {
                    input
                        type="number"
                        name="amount"
                        min="0"
                        step="0.01"
                        placeholder="Amount to add"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class={ (BUTTON_PRIMARY_STYLE) " max-w-40" }
                {
                    "Add Savings"
                }
            }
        }
    }
}

fn new_goal_form() -> Markup {
    html! {
        section class=(CARD_STYLE)
        {
            h2 class="text-lg font-semibold mb-2" { "New Goal" }

            form
                hx-post=(endpoints::GOALS_API)
                hx-target-error="#alert-container"
                class="space-y-4"
            {
                div
                {
                    label for="title" class=(FORM_LABEL_STYLE) { "Title" }
                    input
                        type="text"
                        id="title"
                        name="title"
                        placeholder="e.g. Emergency fund"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="target_amount" class=(FORM_LABEL_STYLE) { "Target amount" }
                    div class="input-wrapper w-full"
                    {
                        input
                            type="number"
                            id="target_amount"
                            name="target_amount"
                            min="0"
                            step="0.01"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                div
                {
                    label for="current_amount" class=(FORM_LABEL_STYLE) { "Already saved" }
                    div class="input-wrapper w-full"
                    {
                        input
                            type="number"
                            id="current_amount"
                            name="current_amount"
                            min="0"
                            step="0.01"
                            value="0"
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                div
                {
                    label for="target_date" class=(FORM_LABEL_STYLE) { "Target date" }
                    input
                        type="date"
                        id="target_date"
                        name="target_date"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create Goal" }
            }
        }
    }
}
