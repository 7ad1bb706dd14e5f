//! Defines the route handler for the page with the new transaction form.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
        dollar_input_styles,
    },
    navigation::NavBar,
    timezone::current_local_date,
};

/// The state needed for the new transaction page.
#[derive(Debug, Clone)]
pub struct NewTransactionPageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the page for creating a transaction.
pub async fn get_new_transaction_page(
    State(state): State<NewTransactionPageState>,
) -> Result<Response, Error> {
    let max_date = current_local_date(&state.local_timezone)?;
    let nav_bar = NavBar::new(endpoints::NEW_TRANSACTION_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold my-4" { "New Transaction" }

            form
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target-error="#alert-container"
                class="space-y-4 w-full"
            {
                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                    div class="input-wrapper w-full"
                    {
                        input
                            type="number"
                            id="amount"
                            name="amount"
                            min="0"
                            step="0.01"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                div
                {
                    label for="type" class=(FORM_LABEL_STYLE) { "Type" }
                    select id="type" name="type" class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value="expense" { "Expense" }
                        option value="income" { "Income" }
                    }
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                    input
                        type="text"
                        id="category"
                        name="category"
                        placeholder="e.g. Groceries"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                    input
                        type="text"
                        id="description"
                        name="description"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                    input
                        type="date"
                        id="date"
                        name="date"
                        value=(max_date)
                        max=(max_date)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create" }
            }
        }
    };

    Ok(base("New Transaction", &[dollar_input_styles()], &content).into_response())
}

#[cfg(test)]
mod new_transaction_page_tests {
    use axum::{body::Body, extract::State, http::Response};
    use scraper::{ElementRef, Html, Selector};
    use time::OffsetDateTime;

    use crate::endpoints;

    use super::{NewTransactionPageState, get_new_transaction_page};

    #[tokio::test]
    async fn new_transaction_returns_form() {
        let state = NewTransactionPageState {
            local_timezone: "Etc/UTC".to_owned(),
        };

        let response = get_new_transaction_page(State(state))
            .await
            .expect("Could not get new transaction page");

        let document = parse_html(response).await;
        assert_correct_form(&document);
    }

    #[track_caller]
    fn assert_correct_form(document: &Html) {
        let forms = document
            .select(&Selector::parse("form").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(forms.len(), 1, "want 1 form, got {}", forms.len());

        let form = forms.first().unwrap();
        let hx_post = form.value().attr("hx-post");
        assert_eq!(
            hx_post,
            Some(endpoints::TRANSACTIONS_API),
            "want form with attribute hx-post=\"{}\", got {hx_post:?}",
            endpoints::TRANSACTIONS_API,
        );

        assert_correct_inputs(form);
        assert_has_submit_button(form);
    }

    #[track_caller]
    fn assert_correct_inputs(form: &ElementRef) {
        for (name, element_type) in [
            ("amount", "number"),
            ("date", "date"),
            ("description", "text"),
        ] {
            let selector_string = format!("input[name={name}]");
            let inputs = form
                .select(&Selector::parse(&selector_string).unwrap())
                .collect::<Vec<_>>();
            assert_eq!(inputs.len(), 1, "want 1 {name} input, got {}", inputs.len());

            let input = inputs.first().unwrap();
            assert_eq!(input.value().attr("type"), Some(element_type));

            match name {
                "amount" => {
                    assert!(input.value().attr("required").is_some());
                    assert_eq!(input.value().attr("min"), Some("0"));
                    assert_eq!(input.value().attr("step"), Some("0.01"));
                }
                "date" => {
                    let today = OffsetDateTime::now_utc().date().to_string();
                    assert!(input.value().attr("required").is_some());
                    assert_eq!(input.value().attr("max"), Some(today.as_str()));
                    assert_eq!(input.value().attr("value"), Some(today.as_str()));
                }
                _ => {}
            }
        }

        let selects = form
            .select(&Selector::parse("select[name=type]").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(selects.len(), 1, "want 1 type select");
    }

    #[track_caller]
    fn assert_has_submit_button(form: &ElementRef) {
        let buttons = form
            .select(&Selector::parse("button").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(buttons.len(), 1, "want 1 button, got {}", buttons.len());
        assert_eq!(buttons.first().unwrap().value().attr("type"), Some("submit"));
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");

        Html::parse_document(&String::from_utf8_lossy(&body))
    }
}
