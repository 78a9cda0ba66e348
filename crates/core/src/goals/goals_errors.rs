use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD)")]
    DateFormat(String),

    #[error("Goal with ID {0} not found")]
    NotFound(i32),
}
