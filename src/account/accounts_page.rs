//! Defines the route handler for the bank accounts page.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    account::models::BankAccount,
    api::ApiClient,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, base, dollar_input_styles, format_currency,
    },
    navigation::NavBar,
};

/// The state needed for the accounts page.
#[derive(Debug, Clone)]
pub struct AccountsViewState {
    /// The client for the FinSet backend API.
    pub(crate) api: ApiClient,
}

impl FromRef<AppState> for AccountsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Render an overview of the user's linked bank accounts.
pub async fn get_accounts_page(State(state): State<AccountsViewState>) -> Result<Response, Error> {
    let accounts = state
        .api
        .get_accounts()
        .await
        .inspect_err(|error| tracing::error!("could not fetch accounts: {error}"))?;

    let total_balance: f64 = accounts.iter().map(|account| account.balance).sum();
    let nav_bar = NavBar::new(endpoints::ACCOUNTS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full max-w-2xl mx-auto"
            {
                header class="flex justify-between items-end"
                {
                    h1 class="text-xl font-bold" { "Accounts" }

                    span class="text-lg font-semibold" data-total-balance
                    {
                        (format_currency(total_balance))
                    }
                }

                @if accounts.is_empty() {
                    p class="text-gray-500 dark:text-gray-400" data-empty-state="true"
                    {
                        "No bank accounts are linked yet."
                    }
                }

                @for account in &accounts {
                    (account_card(account))
                }

                (new_account_form())
            }
        }
    };

    Ok(base("Accounts", &[dollar_input_styles()], &content).into_response())
}

fn account_card(account: &BankAccount) -> Markup {
    html! {
        section class=(CARD_STYLE) data-account=(account.id)
        {
            header class="flex justify-between items-end"
            {
                div
                {
                    h2 class="text-lg font-semibold" { (account.bank_name) }

                    p class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        (account.account_type) " · " (account.account_number)
                    }
                }

                span class="text-lg font-semibold" { (format_currency(account.balance)) }
            }
        }
    }
}

fn new_account_form() -> Markup {
    html! {
        section class=(CARD_STYLE)
        {
            h2 class="text-lg font-semibold mb-2" { "Link Account" }

            form
                hx-post=(endpoints::ACCOUNTS_API)
                hx-target-error="#alert-container"
                class="space-y-4"
            {
                div
                {
                    label for="bank_name" class=(FORM_LABEL_STYLE) { "Bank" }
                    input
                        type="text"
                        id="bank_name"
                        name="bank_name"
                        placeholder="e.g. Kiwibank"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="account_number" class=(FORM_LABEL_STYLE) { "Account number" }
                    input
                        type="text"
                        id="account_number"
                        name="account_number"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="account_type" class=(FORM_LABEL_STYLE) { "Account type" }
                    select id="account_type" name="account_type" class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value="Checking" { "Checking" }
                        option value="Savings" { "Savings" }
                    }
                }

                div
                {
                    label for="balance" class=(FORM_LABEL_STYLE) { "Current balance" }
                    div class="input-wrapper w-full"
                    {
                        input
                            type="number"
                            id="balance"
                            name="balance"
                            min="0"
                            step="0.01"
                            value="0"
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Link Account" }
            }
        }
    }
}

#[cfg(test)]
mod accounts_page_tests {
    use axum::{Json, Router, extract::State, response::Response, routing::get};
    use scraper::{Html, Selector};
    use serde_json::json;

    use crate::{api::ApiClient, endpoints};

    use super::{AccountsViewState, get_accounts_page};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind test listener");
        let address = listener.local_addr().expect("Could not get local address");
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server stopped");
        });

        format!("http://{address}")
    }

    async fn parse_html(response: Response) -> Html {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");

        Html::parse_document(&String::from_utf8_lossy(&body))
    }

    #[tokio::test]
    async fn renders_accounts_with_total_balance() {
        let router = Router::new().route(
            "/api/banks",
            get(|| async {
                Json(json!([
                    {
                        "_id": "b1",
                        "bank_name": "Kiwibank",
                        "account_number": "38-1234-0123456-00",
                        "account_type": "Checking",
                        "balance": 1500.0
                    },
                    {
                        "_id": "b2",
                        "bank_name": "ANZ",
                        "account_number": "01-0001-0000001-00",
                        "account_type": "Savings",
                        "balance": 2500.0
                    }
                ]))
            }),
        );
        let base_url = serve(router).await;
        let state = AccountsViewState {
            api: ApiClient::new(&base_url).expect("Could not create client"),
        };

        let response = get_accounts_page(State(state))
            .await
            .expect("Could not get accounts page");

        let html = parse_html(response).await;

        assert_eq!(
            html.select(&Selector::parse("[data-account]").unwrap()).count(),
            2
        );
        let total = html
            .select(&Selector::parse("[data-total-balance]").unwrap())
            .next()
            .expect("No total balance found");
        assert_eq!(total.text().collect::<String>().trim(), "$4,000.00");
    }

    #[tokio::test]
    async fn empty_account_list_still_shows_the_link_form() {
        let router = Router::new().route("/api/banks", get(|| async { Json(json!([])) }));
        let base_url = serve(router).await;
        let state = AccountsViewState {
            api: ApiClient::new(&base_url).expect("Could not create client"),
        };

        let response = get_accounts_page(State(state))
            .await
            .expect("Could not get accounts page");

        let html = parse_html(response).await;

        assert_eq!(
            html.select(&Selector::parse("[data-empty-state]").unwrap())
                .count(),
            1
        );
        let forms = html
            .select(&Selector::parse("form").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(forms.len(), 1, "want just the link account form");
        assert_eq!(
            forms[0].value().attr("hx-post"),
            Some(endpoints::ACCOUNTS_API)
        );
    }
}
