//! Payload types for the backend API's AI endpoints and error bodies.

use serde::Deserialize;

/// The error body the backend sends alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// The backend's next-month spending prediction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    /// The predicted total spend for next month in dollars.
    pub next_month_prediction: f64,
    /// The average daily spend the prediction was derived from.
    pub daily_average: f64,
    /// How confident the backend is in the prediction, e.g. "low" or "high".
    pub confidence: String,
    /// How many days of history the prediction is based on.
    pub based_on_days: u32,
    /// Set when the backend has too little history to predict from.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InsightsBody {
    pub insights: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdviceBody {
    pub advice: String,
}
