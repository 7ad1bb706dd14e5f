//! The dashboard page summarizing the user's finances.

mod aggregation;
mod cards;
mod charts;
mod handlers;

pub use handlers::{AdviceState, DashboardState, get_dashboard_page, post_advice_endpoint};
