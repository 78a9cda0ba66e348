use goaltracker_core::goals::{CompletedGoal, Goal, GoalRepositoryTrait, NewGoal};
use goaltracker_core::Result;

use super::model::{CompletedGoalDB, GoalDB, NewCompletedGoalDB, NewGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{goals, goals_completed};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use std::sync::Arc;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals::table
            .order(goals::id.asc())
            .select(GoalDB::as_select())
            .load::<GoalDB>(&mut conn)
            .into_core()?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    fn load_completed_goals(&self) -> Result<Vec<CompletedGoal>> {
        let mut conn = get_connection(&self.pool)?;
        let completed_db = goals_completed::table
            .order(goals_completed::id.asc())
            .select(CompletedGoalDB::as_select())
            .load::<CompletedGoalDB>(&mut conn)
            .into_core()?;
        Ok(completed_db.into_iter().map(CompletedGoal::from).collect())
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let new_goal_db: NewGoalDB = new_goal.into();
                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn complete_goal(
        &self,
        goal_id: i32,
        completion_date: NaiveDate,
    ) -> Result<Option<CompletedGoal>> {
        // The lookup, insert and delete share the writer's immediate
        // transaction; an error from any of them undoes the others.
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<CompletedGoal>> {
                let Some(goal_db) = goals::table
                    .find(goal_id)
                    .select(GoalDB::as_select())
                    .first::<GoalDB>(conn)
                    .optional()
                    .into_core()?
                else {
                    debug!("No active goal with id {}", goal_id);
                    return Ok(None);
                };

                let completed_db = diesel::insert_into(goals_completed::table)
                    .values(&NewCompletedGoalDB::from_goal(goal_db, completion_date))
                    .returning(CompletedGoalDB::as_returning())
                    .get_result(conn)
                    .into_core()?;

                diesel::delete(goals::table.find(goal_id))
                    .execute(conn)
                    .into_core()?;

                Ok(Some(CompletedGoal::from(completed_db)))
            })
            .await
    }
}
