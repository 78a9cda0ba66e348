//! Goals domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::goals_errors::GoalError;
use super::goals_status::GoalStatus;

/// Storage format for deadlines and completion dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Domain model representing an active goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i32,
    pub description: String,
    pub deadline: NaiveDate,
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub description: String,
    pub deadline: NaiveDate,
}

/// Immutable record of a goal after completion.
///
/// The id comes from its own sequence and is unrelated to the id the goal had
/// while active.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletedGoal {
    pub id: i32,
    pub description: String,
    pub deadline: NaiveDate,
    pub completion_date: NaiveDate,
}

/// Active goal annotated with its status relative to a reference date.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalView {
    pub id: i32,
    pub description: String,
    pub deadline: NaiveDate,
    pub status: GoalStatus,
}

impl GoalView {
    pub fn new(goal: Goal, today: NaiveDate) -> Self {
        Self {
            status: GoalStatus::for_deadline(goal.deadline, today),
            id: goal.id,
            description: goal.description,
            deadline: goal.deadline,
        }
    }
}

/// Parses a deadline in strict `YYYY-MM-DD` form.
///
/// chrono alone accepts unpadded fields such as `2025-1-5`, so the layout is
/// checked before the calendar date is validated.
pub fn parse_deadline(text: &str) -> Result<NaiveDate, GoalError> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(GoalError::DateFormat(text.to_string()));
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| GoalError::DateFormat(text.to_string()))
}
