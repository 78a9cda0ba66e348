//! Database models for goals.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for active goals
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: i32,
    pub description: String,
    pub deadline: NaiveDate,
}

/// Database model for creating a new goal; the id is assigned by SQLite
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalDB {
    pub description: String,
    pub deadline: NaiveDate,
}

/// Database model for completed goals
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals_completed)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CompletedGoalDB {
    pub id: i32,
    pub description: String,
    pub deadline: NaiveDate,
    pub completion_date: NaiveDate,
}

/// Database model for recording a completion
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals_completed)]
#[serde(rename_all = "camelCase")]
pub struct NewCompletedGoalDB {
    pub description: String,
    pub deadline: NaiveDate,
    pub completion_date: NaiveDate,
}

impl NewCompletedGoalDB {
    /// Detached copy of an active goal, stamped with its completion date.
    pub fn from_goal(goal: GoalDB, completion_date: NaiveDate) -> Self {
        Self {
            description: goal.description,
            deadline: goal.deadline,
            completion_date,
        }
    }
}

// Conversion to domain models
impl From<GoalDB> for goaltracker_core::goals::Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            description: db.description,
            deadline: db.deadline,
        }
    }
}

impl From<CompletedGoalDB> for goaltracker_core::goals::CompletedGoal {
    fn from(db: CompletedGoalDB) -> Self {
        Self {
            id: db.id,
            description: db.description,
            deadline: db.deadline,
            completion_date: db.completion_date,
        }
    }
}

impl From<goaltracker_core::goals::NewGoal> for NewGoalDB {
    fn from(domain: goaltracker_core::goals::NewGoal) -> Self {
        Self {
            description: domain.description,
            deadline: domain.deadline,
        }
    }
}
