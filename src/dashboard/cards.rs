//! The dashboard's stat cards, recent activity list and AI panels.

use maud::{Markup, html};

use crate::{
    api::Prediction,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, CATEGORY_BADGE_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE,
        format_currency, loading_spinner,
    },
    transaction::{Transaction, TransactionKind},
    transaction::filter::Summary,
};

/// The top-line balance, income and expense cards.
pub(super) fn stat_cards(summary: Summary) -> Markup {
    let balance_class = if summary.net < 0.0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    };

    html! {
        div class="grid grid-cols-1 gap-3 sm:grid-cols-3 w-full mb-4"
        {
            div class=(CARD_STYLE)
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Balance" }
                p class={ "text-2xl font-bold " (balance_class) } { (format_currency(summary.net)) }
            }

            div class=(CARD_STYLE)
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Total Income" }
                p class="text-2xl font-bold text-green-700 dark:text-green-300"
                {
                    (format_currency(summary.income))
                }
            }

            div class=(CARD_STYLE)
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Total Expenses" }
                p class="text-2xl font-bold text-red-700 dark:text-red-300"
                {
                    (format_currency(summary.expense))
                }
            }
        }
    }
}

/// The short list of the most recent transactions.
pub(super) fn recent_transactions_view(recent: &[&Transaction]) -> Markup {
    html! {
        section class={ (CARD_STYLE) " w-full mb-4" }
        {
            header class="flex justify-between items-end mb-2"
            {
                h2 class="text-lg font-semibold" { "Recent Transactions" }

                a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) { "View all" }
            }

            @if recent.is_empty() {
                p class="text-sm text-gray-500 dark:text-gray-400" { "No transactions yet." }
            }

            ul class="divide-y divide-gray-200 dark:divide-gray-700"
            {
                @for transaction in recent {
                    li class="flex items-center justify-between py-2" data-recent-transaction
                    {
                        div
                        {
                            p { (transaction.description.as_deref().unwrap_or("(no description)")) }

                            @if let Some(ref category) = transaction.category {
                                span class=(CATEGORY_BADGE_STYLE) { (category) }
                            }
                        }

                        @match transaction.kind {
                            TransactionKind::Income => {
                                span class="font-semibold text-green-700 dark:text-green-300"
                                {
                                    (format_currency(transaction.amount))
                                }
                            }
                            TransactionKind::Expense => {
                                span class="font-semibold text-red-700 dark:text-red-300"
                                {
                                    (format_currency(-transaction.amount))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The AI spending insights panel.
///
/// Renders a placeholder when the insights could not be fetched so that the
/// dashboard still loads.
pub(super) fn insights_view(insights: Option<&str>) -> Markup {
    html! {
        section class={ (CARD_STYLE) " w-full mb-4" }
        {
            h2 class="text-lg font-semibold mb-2" { "Spending Insights" }

            @match insights {
                Some(insights) => {
                    p class="text-sm whitespace-pre-line" data-insights { (insights) }
                }
                None => {
                    p class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        "Insights are unavailable right now."
                    }
                }
            }
        }
    }
}

/// The next-month spending prediction panel.
pub(super) fn prediction_view(prediction: Option<&Prediction>) -> Markup {
    html! {
        section class={ (CARD_STYLE) " w-full mb-4" }
        {
            h2 class="text-lg font-semibold mb-2" { "Next Month Forecast" }

            @match prediction {
                Some(prediction) => {
                    @if let Some(ref message) = prediction.message {
                        p class="text-sm text-gray-500 dark:text-gray-400" { (message) }
                    } @else {
                        p class="text-2xl font-bold" data-prediction
                        {
                            (format_currency(prediction.next_month_prediction))
                        }
                        p class="text-sm text-gray-500 dark:text-gray-400"
                        {
                            "Based on "
                            (prediction.based_on_days)
                            " days of spending, averaging "
                            (format_currency(prediction.daily_average))
                            " per day. Confidence: "
                            (prediction.confidence)
                            "."
                        }
                    }
                }
                None => {
                    p class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        "The forecast is unavailable right now."
                    }
                }
            }
        }
    }
}

/// The free-form question form for the AI advisor.
pub(super) fn advisor_form() -> Markup {
    html! {
        section class={ (CARD_STYLE) " w-full mb-4" }
        {
            h2 class="text-lg font-semibold mb-2" { "Ask the Advisor" }

            form
                hx-post=(endpoints::ADVICE_API)
                hx-target="#advisor-reply"
                hx-swap="innerHTML"
                hx-indicator="#indicator"
                hx-target-error="#alert-container"
                class="flex gap-2"
            {
                input
                    type="text"
                    name="query"
                    placeholder="e.g. How can I cut my grocery spending?"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);

                button type="submit" class={ (BUTTON_PRIMARY_STYLE) " max-w-32" }
                {
                    span id="indicator" class="htmx-indicator" { (loading_spinner()) }
                    "Ask"
                }
            }

            div id="advisor-reply" class="mt-3 text-sm whitespace-pre-line" {}
        }
    }
}
