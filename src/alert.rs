//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered as out-of-band swaps into the `#alert-container`
//! element that [crate::html::base] places on every page, so any htmx
//! endpoint can surface a message without replacing its main target.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// Alert message types for styling
#[derive(Debug, Clone, Copy)]
pub enum AlertType {
    Success,
    Error,
}

/// Renders alert messages with appropriate styling
pub struct Alert<'a> {
    pub alert_type: AlertType,
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new success alert
    pub fn success(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Success,
            message,
            details,
        }
    }

    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Error,
            message,
            details,
        }
    }

    pub fn into_html(self) -> Markup {
        let color_style = match self.alert_type {
            AlertType::Success => {
                "text-green-800 border-green-300 bg-green-50 \
                dark:text-green-400 dark:border-green-800"
            }
            AlertType::Error => {
                "text-red-800 border-red-300 bg-red-50 \
                dark:text-red-400 dark:border-red-800"
            }
        };

        html! {
            div id="alert-container" hx-swap-oob="true"
            {
                div
                    role="alert"
                    class={ "flex items-start gap-3 p-4 mb-4 border rounded-lg dark:bg-gray-800 " (color_style) }
                {
                    div class="flex-1"
                    {
                        p class="font-medium" { (self.message) }

                        @if !self.details.is_empty() {
                            p class="mt-1 text-sm" { (self.details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Dismiss"
                        class="font-bold cursor-pointer"
                        onclick="this.closest('#alert-container').classList.add('hidden')"
                    {
                        "✕"
                    }
                }
            }
        }
    }
}

/// Render `alert` as a response with `status_code`.
///
/// The markup only carries the out-of-band alert, so the htmx target of the
/// failed request is left untouched.
pub fn render_alert(status_code: StatusCode, alert: Alert) -> Response {
    (status_code, alert.into_html()).into_response()
}

#[cfg(test)]
mod alert_tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn alert_swaps_into_alert_container() {
        let markup = Alert::error("Something went wrong", "Try again later.").into_html();

        let html = Html::parse_fragment(&markup.into_string());
        let container = html
            .select(&Selector::parse("#alert-container").unwrap())
            .next()
            .expect("No alert container found");

        assert_eq!(container.value().attr("hx-swap-oob"), Some("true"));

        let alert = container
            .select(&Selector::parse("[role='alert']").unwrap())
            .next()
            .expect("No alert element found");
        let text = alert.text().collect::<String>();
        assert!(text.contains("Something went wrong"));
        assert!(text.contains("Try again later."));
    }

    #[test]
    fn success_alert_omits_empty_details() {
        let markup = Alert::success("Saved", "").into_html();

        let html = Html::parse_fragment(&markup.into_string());
        let paragraphs: Vec<_> = html.select(&Selector::parse("p").unwrap()).collect();

        assert_eq!(paragraphs.len(), 1, "Empty details should not be rendered");
    }
}
