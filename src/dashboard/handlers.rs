//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for displaying the dashboard and asking the AI advisor
//! - HTML view functions for rendering the dashboard UI
//! - State and form types used by the handlers

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    alert::{Alert, render_alert},
    api::{ApiClient, Prediction},
    dashboard::{
        aggregation::{expense_totals_by_category, monthly_totals, recent_transactions},
        cards::{advisor_form, insights_view, prediction_view, recent_transactions_view, stat_cards},
        charts::{DashboardChart, category_chart, charts_script, charts_view, income_expense_chart},
    },
    endpoints,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
    timezone::current_local_date,
    transaction::{Transaction, filter::summarize},
};

/// How many months of history the dashboard charts cover.
const CHART_MONTHS: usize = 6;

/// How many transactions the recent activity list shows.
const RECENT_TRANSACTION_COUNT: usize = 5;

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for the FinSet backend API.
    pub(crate) api: ApiClient,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub(crate) local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display a page with an overview of the user's finances.
///
/// The transaction history is required, but the AI panels degrade to
/// placeholder copy when the backend cannot produce them so the rest of the
/// dashboard still loads.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let today = current_local_date(&state.local_timezone)?;
    let transactions = state
        .api
        .get_transactions()
        .await
        .inspect_err(|error| tracing::error!("could not fetch transactions: {error}"))?;

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    if transactions.is_empty() {
        return Ok(dashboard_no_data_view(nav_bar).into_response());
    }

    let insights = state
        .api
        .get_insights()
        .await
        .inspect_err(|error| tracing::warn!("could not fetch insights: {error}"))
        .ok();
    let prediction = state
        .api
        .get_prediction()
        .await
        .inspect_err(|error| tracing::warn!("could not fetch prediction: {error}"))
        .ok();

    let totals = monthly_totals(&transactions, today, CHART_MONTHS);
    let category_totals = expense_totals_by_category(&transactions);
    let charts = [
        DashboardChart {
            id: "income-expense-chart",
            options: income_expense_chart(&totals).to_string(),
        },
        DashboardChart {
            id: "category-chart",
            options: category_chart(&category_totals).to_string(),
        },
    ];

    Ok(dashboard_view(
        nav_bar,
        &transactions,
        insights.as_deref(),
        prediction.as_ref(),
        &charts,
    )
    .into_response())
}

fn dashboard_view(
    nav_bar: NavBar,
    transactions: &[Transaction],
    insights: Option<&str>,
    prediction: Option<&Prediction>,
    charts: &[DashboardChart],
) -> Markup {
    let all_transactions: Vec<&Transaction> = transactions.iter().collect();
    let summary = summarize(&all_transactions);
    let recent = recent_transactions(transactions, RECENT_TRANSACTION_COUNT);

    let content = html! {
        (nav_bar.into_html())

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full lg:max-w-5xl lg:mx-auto"
            {
                h1 class="text-xl font-bold my-4" { "Dashboard" }

                (stat_cards(summary))
                (charts_view(charts))
                (prediction_view(prediction))
                (insights_view(insights))
                (advisor_form())
                (recent_transactions_view(&recent))
            }
        }
    };

    let head_elements = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(charts),
    ];

    base("Dashboard", &head_elements, &content)
}

fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let content = html! {
        (nav_bar.into_html())

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-md mx-auto text-center"
            {
                h1 class="text-xl font-bold my-4" { "Dashboard" }

                p class="mb-4"
                {
                    "There are no transactions yet. "
                    (link(endpoints::NEW_TRANSACTION_VIEW, "Record your first transaction"))
                    " to see your finances here."
                }
            }
        }
    };

    base("Dashboard", &[], &content)
}

/// The state needed to ask the AI advisor a question.
#[derive(Debug, Clone)]
pub struct AdviceState {
    /// The client for the FinSet backend API.
    pub(crate) api: ApiClient,
}

impl FromRef<AppState> for AdviceState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// The form data for an advisor question.
#[derive(Debug, Deserialize)]
pub struct AdviceForm {
    /// The user's free-form question.
    pub query: String,
}

/// A route handler that forwards a question to the backend's AI advisor and
/// renders the answer.
pub async fn post_advice_endpoint(
    State(state): State<AdviceState>,
    Form(form): Form<AdviceForm>,
) -> Response {
    if form.query.trim().is_empty() {
        return render_alert(
            StatusCode::BAD_REQUEST,
            Alert::error("Please enter a question for the advisor.", ""),
        );
    }

    match state.api.get_advice(form.query.trim()).await {
        Ok(advice) => html! { p { (advice) } }.into_response(),
        Err(error) => {
            tracing::error!("could not fetch advice: {error}");
            error.into_alert_response()
        }
    }
}
