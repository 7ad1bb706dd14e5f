//! The HTTP client for the FinSet backend API.

mod client;
mod models;

pub use client::ApiClient;
pub use models::Prediction;
