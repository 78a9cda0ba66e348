//! SQLite storage implementation for goals.

mod model;
mod repository;

pub use model::{CompletedGoalDB, GoalDB, NewCompletedGoalDB, NewGoalDB};
pub use repository::GoalRepository;
