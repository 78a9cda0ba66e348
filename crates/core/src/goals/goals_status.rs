use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived classification of an active goal relative to a reference date.
/// Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalStatus {
    Upcoming,
    #[serde(rename = "Due Today")]
    DueToday,
    #[serde(rename = "Past Due")]
    PastDue,
}

impl GoalStatus {
    pub fn for_deadline(deadline: NaiveDate, today: NaiveDate) -> Self {
        match deadline.cmp(&today) {
            std::cmp::Ordering::Less => GoalStatus::PastDue,
            std::cmp::Ordering::Equal => GoalStatus::DueToday,
            std::cmp::Ordering::Greater => GoalStatus::Upcoming,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::Upcoming => "Upcoming",
            GoalStatus::DueToday => "Due Today",
            GoalStatus::PastDue => "Past Due",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
