//! The savings goal types exchanged with the backend API.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::transaction::models::iso_date;

/// A savings goal as returned by the backend API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Goal {
    /// The backend's opaque identifier for the goal.
    #[serde(rename = "_id")]
    pub id: String,
    /// What the user is saving for.
    pub title: String,
    /// The amount the user wants to reach, in dollars.
    pub target_amount: f64,
    /// The amount saved so far, in dollars.
    pub current_amount: f64,
    /// When the user wants to reach the target by.
    #[serde(with = "iso_date")]
    pub target_date: Date,
}

impl Goal {
    /// How far along the goal is, from 0.0 to 100.0.
    ///
    /// Progress is capped at 100 even when the saved amount overshoots the
    /// target. A goal with a zero or negative target counts as complete.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 100.0;
        }

        (self.current_amount / self.target_amount).clamp(0.0, 1.0) * 100.0
    }
}

/// The payload for creating a goal via the backend API.
#[derive(Debug, Clone, Serialize)]
pub struct NewGoal {
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(with = "iso_date")]
    pub target_date: Date,
}

/// The payload for updating a goal's saved amount via the backend API.
#[derive(Debug, Clone, Serialize)]
pub struct GoalUpdate {
    pub current_amount: f64,
}

#[cfg(test)]
mod goal_model_tests {
    use time::macros::date;

    use super::Goal;

    fn goal(current_amount: f64, target_amount: f64) -> Goal {
        Goal {
            id: "g1".to_owned(),
            title: "Emergency fund".to_owned(),
            target_amount,
            current_amount,
            target_date: date!(2025 - 01 - 01),
        }
    }

    #[test]
    fn deserializes_backend_json() {
        let json = r#"{
            "_id": "665f1c2e9b3d2a0012345678",
            "user_id": "664a00000000000000000000",
            "title": "New laptop",
            "target_amount": 2000.0,
            "current_amount": 450.0,
            "target_date": "2025-03-01",
            "created_at": "2024-06-03T14:22:31.123456"
        }"#;

        let goal: Goal = serde_json::from_str(json).unwrap();

        assert_eq!(goal.title, "New laptop");
        assert_eq!(goal.target_date, date!(2025 - 03 - 01));
    }

    #[test]
    fn progress_is_a_capped_percentage() {
        assert_eq!(goal(450.0, 2000.0).progress_percent(), 22.5);
        assert_eq!(goal(2500.0, 2000.0).progress_percent(), 100.0);
        assert_eq!(goal(0.0, 2000.0).progress_percent(), 0.0);
    }

    #[test]
    fn zero_target_counts_as_complete() {
        assert_eq!(goal(0.0, 0.0).progress_percent(), 100.0);
    }
}
