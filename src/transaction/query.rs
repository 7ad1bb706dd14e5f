//! Query-string handling for the transactions page.
//!
//! The filter form submits its fields as a GET query string, so the URL is
//! the single source of truth for the active filter. [FilterParams] is the
//! raw, all-optional shape of that query string; [FilterParams::normalize]
//! turns it into typed [FilterCriteria] plus a page number and a canonical
//! copy of the params for rebuilding links.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    endpoints,
    transaction::filter::{FilterCriteria, KindFilter, QuickRange, parse_amount, parse_date},
};

const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

/// The raw query string of the transactions page.
///
/// Every field is optional text so that malformed input can be handled
/// leniently instead of failing extraction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl FilterParams {
    /// Convert the raw query string into typed filter criteria, the page
    /// number to display, and a canonical copy of the params.
    ///
    /// A valid `quick_range` overwrites both explicit dates with the window
    /// anchored on `today` and resets the page back to 1. The canonical
    /// params echo the parsed criteria back as text (with resolved dates in
    /// place of the quick range) and omit the page number so that pagination
    /// links can splice their own in.
    pub fn normalize(&self, today: Date) -> (FilterCriteria, u64, FilterParams) {
        let quick_range = self
            .quick_range
            .as_deref()
            .and_then(QuickRange::from_query_value);

        let (start_date, end_date) = match quick_range {
            Some(quick_range) => {
                let (start, end) = quick_range.resolve(today);
                (Some(start), Some(end))
            }
            None => (
                self.start_date.as_deref().and_then(parse_date),
                self.end_date.as_deref().and_then(parse_date),
            ),
        };

        let criteria = FilterCriteria {
            keyword: clean_text(&self.keyword),
            kind: self
                .kind
                .as_deref()
                .map(KindFilter::from_query_value)
                .unwrap_or_default(),
            category: clean_text(&self.category),
            min_amount: self.min_amount.as_deref().and_then(parse_amount),
            max_amount: self.max_amount.as_deref().and_then(parse_amount),
            start_date,
            end_date,
        };

        let page = if quick_range.is_some() {
            1
        } else {
            self.page
                .as_deref()
                .and_then(|raw| raw.trim().parse::<u64>().ok())
                .filter(|&page| page >= 1)
                .unwrap_or(1)
        };

        let canonical = FilterParams {
            keyword: criteria.keyword.clone(),
            kind: match criteria.kind {
                KindFilter::All => None,
                kind => Some(kind.as_query_value().to_owned()),
            },
            category: criteria.category.clone(),
            min_amount: criteria.min_amount.map(|amount| amount.to_string()),
            max_amount: criteria.max_amount.map(|amount| amount.to_string()),
            start_date: criteria.start_date.and_then(format_date),
            end_date: criteria.end_date.and_then(format_date),
            quick_range: None,
            page: None,
        };

        (criteria, page, canonical)
    }

    /// The transactions page URL for `page` with this filter applied.
    pub fn with_page(&self, page: u64) -> String {
        let params = FilterParams {
            page: Some(page.to_string()),
            ..self.clone()
        };

        match serde_urlencoded::to_string(&params) {
            Ok(query) if !query.is_empty() => {
                format!("{}?{query}", endpoints::TRANSACTIONS_VIEW)
            }
            _ => endpoints::TRANSACTIONS_VIEW.to_owned(),
        }
    }

    /// The transactions page URL with `quick_range` applied on top of this
    /// filter's non-date fields.
    pub fn with_quick_range(&self, quick_range: QuickRange) -> String {
        let params = FilterParams {
            start_date: None,
            end_date: None,
            page: None,
            quick_range: Some(quick_range.as_query_value().to_owned()),
            ..self.clone()
        };

        match serde_urlencoded::to_string(&params) {
            Ok(query) if !query.is_empty() => {
                format!("{}?{query}", endpoints::TRANSACTIONS_VIEW)
            }
            _ => endpoints::TRANSACTIONS_VIEW.to_owned(),
        }
    }
}

fn clean_text(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

fn format_date(date: Date) -> Option<String> {
    date.format(DATE_FORMAT).ok()
}

#[cfg(test)]
mod query_tests {
    use time::macros::date;

    use crate::transaction::filter::KindFilter;

    use super::FilterParams;

    #[test]
    fn deserializes_form_query_string() {
        let params: FilterParams =
            serde_html_form::from_str("keyword=coffee&type=expense&min_amount=5&page=3")
                .expect("Could not parse query string");

        assert_eq!(params.keyword.as_deref(), Some("coffee"));
        assert_eq!(params.kind.as_deref(), Some("expense"));
        assert_eq!(params.min_amount.as_deref(), Some("5"));
        assert_eq!(params.page.as_deref(), Some("3"));
        assert_eq!(params.category, None);
    }

    #[test]
    fn normalize_defaults_to_unfiltered_first_page() {
        let (criteria, page, canonical) =
            FilterParams::default().normalize(date!(2024 - 06 - 05));

        assert_eq!(criteria, Default::default());
        assert_eq!(page, 1);
        assert_eq!(canonical, FilterParams::default());
    }

    #[test]
    fn normalize_parses_each_field() {
        let params = FilterParams {
            keyword: Some("  coffee ".to_owned()),
            kind: Some("income".to_owned()),
            category: Some("Salary".to_owned()),
            min_amount: Some("5".to_owned()),
            max_amount: Some("100.50".to_owned()),
            start_date: Some("2024-05-01".to_owned()),
            end_date: Some("2024-05-31".to_owned()),
            quick_range: None,
            page: Some("2".to_owned()),
        };

        let (criteria, page, _) = params.normalize(date!(2024 - 06 - 05));

        assert_eq!(criteria.keyword.as_deref(), Some("coffee"));
        assert_eq!(criteria.kind, KindFilter::Income);
        assert_eq!(criteria.category.as_deref(), Some("Salary"));
        assert_eq!(criteria.min_amount, Some(5.0));
        assert_eq!(criteria.max_amount, Some(100.5));
        assert_eq!(criteria.start_date, Some(date!(2024 - 05 - 01)));
        assert_eq!(criteria.end_date, Some(date!(2024 - 05 - 31)));
        assert_eq!(page, 2);
    }

    #[test]
    fn normalize_ignores_malformed_fields() {
        let params = FilterParams {
            kind: Some("sideways".to_owned()),
            min_amount: Some("lots".to_owned()),
            start_date: Some("last Tuesday".to_owned()),
            page: Some("-3".to_owned()),
            ..Default::default()
        };

        let (criteria, page, _) = params.normalize(date!(2024 - 06 - 05));

        assert_eq!(criteria.kind, KindFilter::All);
        assert_eq!(criteria.min_amount, None);
        assert_eq!(criteria.start_date, None);
        assert_eq!(page, 1);
    }

    #[test]
    fn quick_range_overwrites_dates_and_resets_page() {
        let params = FilterParams {
            start_date: Some("2020-01-01".to_owned()),
            end_date: Some("2020-12-31".to_owned()),
            quick_range: Some("this_month".to_owned()),
            page: Some("4".to_owned()),
            ..Default::default()
        };

        let (criteria, page, canonical) = params.normalize(date!(2024 - 06 - 15));

        assert_eq!(criteria.start_date, Some(date!(2024 - 06 - 01)));
        assert_eq!(criteria.end_date, Some(date!(2024 - 06 - 15)));
        assert_eq!(page, 1);
        assert_eq!(canonical.start_date.as_deref(), Some("2024-06-01"));
        assert_eq!(canonical.end_date.as_deref(), Some("2024-06-15"));
        assert_eq!(canonical.quick_range, None);
    }

    #[test]
    fn unknown_quick_range_leaves_dates_alone() {
        let params = FilterParams {
            start_date: Some("2024-05-01".to_owned()),
            quick_range: Some("fortnight".to_owned()),
            page: Some("2".to_owned()),
            ..Default::default()
        };

        let (criteria, page, _) = params.normalize(date!(2024 - 06 - 15));

        assert_eq!(criteria.start_date, Some(date!(2024 - 05 - 01)));
        assert_eq!(page, 2);
    }

    #[test]
    fn with_page_builds_a_link_preserving_the_filter() {
        let params = FilterParams {
            keyword: Some("coffee".to_owned()),
            kind: Some("expense".to_owned()),
            ..Default::default()
        };

        let url = params.with_page(3);

        assert_eq!(url, "/transactions?keyword=coffee&type=expense&page=3");
    }

    #[test]
    fn with_quick_range_drops_explicit_dates() {
        let params = FilterParams {
            keyword: Some("coffee".to_owned()),
            start_date: Some("2024-05-01".to_owned()),
            page: Some("2".to_owned()),
            ..Default::default()
        };

        let url = params.with_quick_range(crate::transaction::filter::QuickRange::Today);

        assert_eq!(url, "/transactions?keyword=coffee&quick_range=today");
    }
}
