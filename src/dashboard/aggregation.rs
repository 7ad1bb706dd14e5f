//! Shaping transaction data for the dashboard's charts and tables.

use std::collections::BTreeMap;

use time::{Date, Month};

use crate::transaction::{Transaction, TransactionKind};

/// Per-month income and expense totals, oldest month first.
pub(super) struct MonthlyTotals {
    /// The month labels, e.g. "Jan 2024".
    pub labels: Vec<String>,
    /// The income total for each month.
    pub income: Vec<f64>,
    /// The expense total for each month.
    pub expense: Vec<f64>,
}

/// Total income and expenses per month for the `month_count` months up to and
/// including the month of `today`.
pub(super) fn monthly_totals(
    transactions: &[Transaction],
    today: Date,
    month_count: usize,
) -> MonthlyTotals {
    let months = last_months(today, month_count);

    let mut totals = MonthlyTotals {
        labels: months.iter().map(|&(year, month)| month_label(year, month)).collect(),
        income: vec![0.0; months.len()],
        expense: vec![0.0; months.len()],
    };

    for transaction in transactions {
        let Some(index) = months
            .iter()
            .position(|&(year, month)| {
                transaction.date.year() == year && transaction.date.month() == month
            })
        else {
            continue;
        };

        match transaction.kind {
            TransactionKind::Income => totals.income[index] += transaction.amount,
            TransactionKind::Expense => totals.expense[index] += transaction.amount,
        }
    }

    totals
}

/// The `month_count` months up to and including the month of `today`, oldest
/// first.
fn last_months(today: Date, month_count: usize) -> Vec<(i32, Month)> {
    let mut months = Vec::with_capacity(month_count);
    let mut year = today.year();
    let mut month = today.month();

    for _ in 0..month_count {
        months.push((year, month));

        month = month.previous();
        if month == Month::December {
            year -= 1;
        }
    }

    months.reverse();
    months
}

fn month_label(year: i32, month: Month) -> String {
    let month_name = month.to_string();

    format!("{} {year}", &month_name[..3])
}

/// Total expenses per category, largest first.
///
/// Transactions with no category are grouped under "Uncategorized".
pub(super) fn expense_totals_by_category(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }

        let category = transaction.category.as_deref().unwrap_or("Uncategorized");
        *totals.entry(category).or_insert(0.0) += transaction.amount;
    }

    let mut totals: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(category, total)| (category.to_owned(), total))
        .collect();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));

    totals
}

/// The `count` most recent transactions, newest first.
pub(super) fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<&Transaction> {
    let mut recent: Vec<&Transaction> = transactions.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(count);

    recent
}

#[cfg(test)]
mod aggregation_tests {
    use time::macros::date;

    use crate::transaction::{TransactionKind, test_utils::transaction};

    use super::{expense_totals_by_category, monthly_totals, recent_transactions};

    #[test]
    fn monthly_totals_cover_the_trailing_months() {
        let transactions = vec![
            transaction("1", 2500.0, TransactionKind::Income, "Salary", "April salary")
                .with_date(date!(2024 - 04 - 01)),
            transaction("2", 100.0, TransactionKind::Expense, "Groceries", "Shop")
                .with_date(date!(2024 - 05 - 12)),
            transaction("3", 50.0, TransactionKind::Expense, "Groceries", "Shop")
                .with_date(date!(2024 - 06 - 01)),
            // Outside the window, should be ignored.
            transaction("4", 999.0, TransactionKind::Expense, "Rent", "Old rent")
                .with_date(date!(2023 - 06 - 01)),
        ];

        let totals = monthly_totals(&transactions, date!(2024 - 06 - 15), 3);

        assert_eq!(totals.labels, ["Apr 2024", "May 2024", "Jun 2024"]);
        assert_eq!(totals.income, [2500.0, 0.0, 0.0]);
        assert_eq!(totals.expense, [0.0, 100.0, 50.0]);
    }

    #[test]
    fn monthly_totals_wrap_around_the_new_year() {
        let totals = monthly_totals(&[], date!(2024 - 02 - 10), 4);

        assert_eq!(
            totals.labels,
            ["Nov 2023", "Dec 2023", "Jan 2024", "Feb 2024"]
        );
    }

    #[test]
    fn category_totals_are_sorted_descending() {
        let transactions = vec![
            transaction("1", 30.0, TransactionKind::Expense, "Groceries", "Shop"),
            transaction("2", 120.0, TransactionKind::Expense, "Rent", "Rent"),
            transaction("3", 20.0, TransactionKind::Expense, "Groceries", "Shop"),
            transaction("4", 2500.0, TransactionKind::Income, "Salary", "Salary"),
        ];

        let totals = expense_totals_by_category(&transactions);

        assert_eq!(
            totals,
            vec![
                ("Rent".to_owned(), 120.0),
                ("Groceries".to_owned(), 50.0)
            ]
        );
    }

    #[test]
    fn uncategorized_expenses_are_grouped_together() {
        let mut uncategorized = transaction("1", 10.0, TransactionKind::Expense, "", "Cash");
        uncategorized.category = None;

        let totals = expense_totals_by_category(&[uncategorized]);

        assert_eq!(totals, vec![("Uncategorized".to_owned(), 10.0)]);
    }

    #[test]
    fn recent_transactions_are_newest_first() {
        let transactions = vec![
            transaction("old", 10.0, TransactionKind::Expense, "A", "Old")
                .with_date(date!(2024 - 01 - 01)),
            transaction("new", 10.0, TransactionKind::Expense, "A", "New")
                .with_date(date!(2024 - 06 - 01)),
            transaction("mid", 10.0, TransactionKind::Expense, "A", "Mid")
                .with_date(date!(2024 - 03 - 01)),
        ];

        let recent = recent_transactions(&transactions, 2);

        let got_ids: Vec<&str> = recent.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(got_ids, ["new", "mid"]);
    }
}
