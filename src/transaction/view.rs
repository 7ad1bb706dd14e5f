//! HTML rendering for the transactions page.

use maud::{Markup, html};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CARD_STYLE, CATEGORY_BADGE_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
    },
    navigation::NavBar,
    pagination::PaginationIndicator,
    transaction::{
        filter::{KindFilter, QuickRange, Summary},
        models::{Transaction, TransactionKind},
        query::FilterParams,
    },
};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

const DATE_LABEL_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day padding:none] [month repr:short] [year]");

/// Everything the transactions page needs to render.
pub(crate) struct TransactionsViewModel<'a> {
    /// The transactions on the current page, in display order.
    pub page_transactions: &'a [&'a Transaction],
    /// Totals over the whole filtered set, not just the current page.
    pub summary: Summary,
    /// The page links to display under the table.
    pub indicators: Vec<PaginationIndicator>,
    /// The normalized filter, used to prefill the form and build links.
    pub params: &'a FilterParams,
}

/// The full transactions page.
pub(crate) fn transactions_view(model: &TransactionsViewModel) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl lg:mx-auto"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Transactions" }

                    a href=(endpoints::NEW_TRANSACTION_VIEW) class=(LINK_STYLE)
                    {
                        "Create Transaction"
                    }
                }

                (transactions_content(model))
            }
        }
    };

    base("Transactions", &[], &content)
}

/// The filterable portion of the page, swapped in place by htmx requests.
pub(crate) fn transactions_content(model: &TransactionsViewModel) -> Markup {
    html! {
        section id="transactions-content" class="space-y-4"
        {
            (filter_form(model.params))
            (quick_range_links(model.params))
            (summary_cards(model.summary))
            (transactions_table(model.page_transactions))
            (pagination_nav(&model.indicators, model.params))
        }
    }
}

fn filter_form(params: &FilterParams) -> Markup {
    let kind = params
        .kind
        .as_deref()
        .map(KindFilter::from_query_value)
        .unwrap_or_default();

    html! {
        form
            hx-get=(endpoints::TRANSACTIONS_VIEW)
            hx-target="#transactions-content"
            hx-swap="outerHTML"
            hx-push-url="true"
            class="grid grid-cols-2 gap-3 rounded bg-gray-50 dark:bg-gray-800 p-4 lg:grid-cols-4"
        {
            div class="col-span-2"
            {
                label for="keyword" class=(FORM_LABEL_STYLE) { "Search" }
                input
                    type="search"
                    id="keyword"
                    name="keyword"
                    value=[params.keyword.as_deref()]
                    placeholder="Description or category"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="type" class=(FORM_LABEL_STYLE) { "Type" }
                select id="type" name="type" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="all" selected[kind == KindFilter::All] { "All" }
                    option value="income" selected[kind == KindFilter::Income] { "Income" }
                    option value="expense" selected[kind == KindFilter::Expense] { "Expense" }
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                input
                    type="text"
                    id="category"
                    name="category"
                    value=[params.category.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="min_amount" class=(FORM_LABEL_STYLE) { "Min amount" }
                input
                    type="number"
                    id="min_amount"
                    name="min_amount"
                    value=[params.min_amount.as_deref()]
                    min="0"
                    step="0.01"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="max_amount" class=(FORM_LABEL_STYLE) { "Max amount" }
                input
                    type="number"
                    id="max_amount"
                    name="max_amount"
                    value=[params.max_amount.as_deref()]
                    min="0"
                    step="0.01"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="start_date" class=(FORM_LABEL_STYLE) { "From" }
                input
                    type="date"
                    id="start_date"
                    name="start_date"
                    value=[params.start_date.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="end_date" class=(FORM_LABEL_STYLE) { "To" }
                input
                    type="date"
                    id="end_date"
                    name="end_date"
                    value=[params.end_date.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="col-span-2 flex items-end lg:col-span-2"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Apply Filters" }
            }
        }
    }
}

fn quick_range_links(params: &FilterParams) -> Markup {
    html! {
        nav class="flex flex-wrap gap-2" aria-label="Quick date ranges"
        {
            @for quick_range in QuickRange::ALL {
                a
                    href=(params.with_quick_range(quick_range))
                    class="rounded-full border border-gray-300 px-3 py-1 text-sm
                        text-gray-700 hover:bg-gray-100 dark:border-gray-600
                        dark:text-gray-300 dark:hover:bg-gray-700"
                {
                    (quick_range.label())
                }
            }
        }
    }
}

fn summary_cards(summary: Summary) -> Markup {
    let net_class = if summary.net < 0.0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    };

    html! {
        div class="grid grid-cols-2 gap-3 lg:grid-cols-4"
        {
            div class=(CARD_STYLE)
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Income" }
                p class="text-lg font-semibold text-green-700 dark:text-green-300"
                {
                    (format_currency(summary.income))
                }
            }

            div class=(CARD_STYLE)
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Expenses" }
                p class="text-lg font-semibold text-red-700 dark:text-red-300"
                {
                    (format_currency(summary.expense))
                }
            }

            div class=(CARD_STYLE)
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Net" }
                p class={ "text-lg font-semibold " (net_class) }
                {
                    (format_currency(summary.net))
                }
            }

            div class=(CARD_STYLE)
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Transactions" }
                p class="text-lg font-semibold" data-summary-count=(summary.count)
                {
                    (summary.count)
                }
            }
        }
    }
}

fn transactions_table(transactions: &[&Transaction]) -> Markup {
    html! {
        div class="rounded bg-gray-50 dark:bg-gray-800 overflow-x-auto"
        {
            table class="w-full my-2 text-sm text-left rtl:text-right
                text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class="px-6 py-3 text-right" { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }

                    @if transactions.is_empty() {
                        tr
                        {
                            td
                                colspan="5"
                                data-empty-state="true"
                                class="px-6 py-4 text-center"
                            {
                                "No transactions match the current filters."
                            }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let delete_route =
        endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, &transaction.id);

    let (amount_class, amount_text) = match transaction.kind {
        TransactionKind::Income => (
            "text-green-700 dark:text-green-300",
            format_currency(transaction.amount),
        ),
        TransactionKind::Expense => (
            "text-red-700 dark:text-red-300",
            format_currency(-transaction.amount),
        ),
    };

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (date_label(transaction.date)) }

            td class=(TABLE_CELL_STYLE)
            {
                (truncated_description(transaction.description.as_deref()))
            }

            td class=(TABLE_CELL_STYLE)
            {
                @if let Some(ref category) = transaction.category {
                    span class=(CATEGORY_BADGE_STYLE) { (category) }
                }
            }

            td class={ "px-6 py-4 text-right font-semibold " (amount_class) }
            {
                (amount_text)
            }

            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    hx-delete=(delete_route)
                    hx-target="closest tr"
                    hx-swap="outerHTML"
                    hx-confirm="Delete this transaction?"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

fn pagination_nav(indicators: &[PaginationIndicator], params: &FilterParams) -> Markup {
    let page_link_class = "rounded px-3 py-1 text-sm text-blue-600 hover:underline \
        dark:text-blue-400";
    let current_page_class = "rounded px-3 py-1 text-sm font-semibold bg-blue-600 text-white";
    let ellipsis_class = "px-2 py-1 text-sm text-gray-400 dark:text-gray-500";

    html! {
        nav class="pagination flex justify-center" aria-label="Transaction pages"
        {
            ul class="flex items-center gap-1"
            {
                @for indicator in indicators {
                    li
                    {
                        @match indicator {
                            PaginationIndicator::BackButton(page) => {
                                a href=(params.with_page(*page)) class=(page_link_class)
                                {
                                    "Prev"
                                }
                            }
                            PaginationIndicator::Page(page) => {
                                a href=(params.with_page(*page)) class=(page_link_class)
                                {
                                    (page)
                                }
                            }
                            PaginationIndicator::CurrPage(page) => {
                                span aria-current="page" class=(current_page_class)
                                {
                                    (page)
                                }
                            }
                            PaginationIndicator::Ellipsis => {
                                span class=(ellipsis_class) { "..." }
                            }
                            PaginationIndicator::NextButton(page) => {
                                a href=(params.with_page(*page)) class=(page_link_class)
                                {
                                    "Next"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn date_label(date: Date) -> String {
    date.format(DATE_LABEL_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

fn truncated_description(description: Option<&str>) -> String {
    let Some(description) = description else {
        return String::new();
    };

    let graphemes: Vec<&str> = description.graphemes(true).collect();

    if graphemes.len() <= MAX_DESCRIPTION_GRAPHEMES {
        description.to_owned()
    } else {
        format!("{}...", graphemes[..MAX_DESCRIPTION_GRAPHEMES].concat())
    }
}
