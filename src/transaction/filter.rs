//! In-memory filtering and summarizing of the transaction list.
//!
//! The backend returns the full transaction history in one response, so the
//! transactions page shapes that list here: every criterion is applied as a
//! predicate over the list, the filtered set is summarized, and pagination
//! slices the result. Criteria arrive as raw query-string text and are parsed
//! leniently, so malformed numbers or dates behave as if the field were left
//! blank rather than failing the request.

use time::{Date, Duration, format_description::BorrowedFormatItem, macros::format_description};

use crate::transaction::models::{Transaction, TransactionKind};

/// Which transaction kinds to keep when filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    /// Parse a query-string value, treating anything unrecognized as [KindFilter::All].
    pub fn from_query_value(value: &str) -> Self {
        match value {
            "income" => KindFilter::Income,
            "expense" => KindFilter::Expense,
            _ => KindFilter::All,
        }
    }

    pub fn as_query_value(self) -> &'static str {
        match self {
            KindFilter::All => "all",
            KindFilter::Income => "income",
            KindFilter::Expense => "expense",
        }
    }

    fn matches(self, kind: TransactionKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => kind == TransactionKind::Income,
            KindFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

/// The criteria for narrowing the transaction list.
///
/// Every field is optional and unset fields do not constrain the result, so
/// the default criteria keep every transaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against description and category.
    pub keyword: Option<String>,
    /// Which transaction kinds to keep.
    pub kind: KindFilter,
    /// Exact, case-sensitive category label.
    pub category: Option<String>,
    /// Inclusive lower bound on the amount.
    pub min_amount: Option<f64>,
    /// Inclusive upper bound on the amount.
    pub max_amount: Option<f64>,
    /// Inclusive lower bound on the date.
    pub start_date: Option<Date>,
    /// Inclusive upper bound on the date.
    pub end_date: Option<Date>,
}

impl FilterCriteria {
    fn matches(&self, transaction: &Transaction) -> bool {
        self.matches_keyword(transaction)
            && self.kind.matches(transaction.kind)
            && self.matches_category(transaction)
            && self.min_amount.is_none_or(|min| transaction.amount >= min)
            && self.max_amount.is_none_or(|max| transaction.amount <= max)
            && self.start_date.is_none_or(|start| transaction.date >= start)
            && self.end_date.is_none_or(|end| transaction.date <= end)
    }

    fn matches_keyword(&self, transaction: &Transaction) -> bool {
        let Some(ref keyword) = self.keyword else {
            return true;
        };
        let needle = keyword.to_lowercase();

        let field_contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        };

        field_contains(&transaction.description) || field_contains(&transaction.category)
    }

    fn matches_category(&self, transaction: &Transaction) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| transaction.category.as_deref() == Some(category))
    }
}

/// Keep the transactions matching every criterion, preserving the input order.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    criteria: &FilterCriteria,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|transaction| criteria.matches(transaction))
        .collect()
}

/// Totals over a filtered transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// The sum of all income amounts.
    pub income: f64,
    /// The sum of all expense amounts.
    pub expense: f64,
    /// Income minus expenses.
    pub net: f64,
    /// How many transactions were summarized.
    pub count: usize,
}

/// Total the income, expenses and net over `transactions`.
pub fn summarize(transactions: &[&Transaction]) -> Summary {
    let mut income = 0.0;
    let mut expense = 0.0;

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => income += transaction.amount,
            TransactionKind::Expense => expense += transaction.amount,
        }
    }

    Summary {
        income,
        expense,
        net: income - expense,
        count: transactions.len(),
    }
}

/// Preset date windows anchored on today's date.
///
/// Selecting a quick range overwrites any explicit start and end dates and
/// resets pagination back to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickRange {
    Today,
    ThisWeek,
    ThisMonth,
    Last30Days,
}

impl QuickRange {
    pub const ALL: [QuickRange; 4] = [
        QuickRange::Today,
        QuickRange::ThisWeek,
        QuickRange::ThisMonth,
        QuickRange::Last30Days,
    ];

    pub fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "today" => Some(QuickRange::Today),
            "this_week" => Some(QuickRange::ThisWeek),
            "this_month" => Some(QuickRange::ThisMonth),
            "last_30_days" => Some(QuickRange::Last30Days),
            _ => None,
        }
    }

    pub fn as_query_value(self) -> &'static str {
        match self {
            QuickRange::Today => "today",
            QuickRange::ThisWeek => "this_week",
            QuickRange::ThisMonth => "this_month",
            QuickRange::Last30Days => "last_30_days",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuickRange::Today => "Today",
            QuickRange::ThisWeek => "This week",
            QuickRange::ThisMonth => "This month",
            QuickRange::Last30Days => "Last 30 days",
        }
    }

    /// The inclusive date window for this preset, anchored on `today`.
    ///
    /// Weeks start on Sunday, so `ThisWeek` runs from the most recent Sunday
    /// on or before `today` up to `today` itself.
    pub fn resolve(self, today: Date) -> (Date, Date) {
        let start = match self {
            QuickRange::Today => today,
            QuickRange::ThisWeek => {
                today - Duration::days(today.weekday().number_days_from_sunday() as i64)
            }
            QuickRange::ThisMonth => today.replace_day(1).unwrap_or(today),
            QuickRange::Last30Days => today - Duration::days(30),
        };

        (start, today)
    }
}

const QUERY_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

/// Parse an amount bound from query-string text.
///
/// Malformed or non-finite values are treated as unset.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Parse a date bound ("YYYY-MM-DD") from query-string text.
///
/// Malformed values are treated as unset.
pub fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), QUERY_DATE_FORMAT).ok()
}
