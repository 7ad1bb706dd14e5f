//! Savings goal management for the FinSet front end.

mod create_endpoint;
mod goals_page;
mod models;
mod progress_endpoint;

pub use create_endpoint::create_goal_endpoint;
pub use goals_page::get_goals_page;
pub use models::{Goal, GoalUpdate, NewGoal};
pub use progress_endpoint::update_goal_progress_endpoint;
