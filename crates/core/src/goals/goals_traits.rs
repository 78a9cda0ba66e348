use crate::errors::Result;
use crate::goals::goals_model::{CompletedGoal, Goal, GoalView, NewGoal};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Active goals in store order.
    fn load_goals(&self) -> Result<Vec<Goal>>;
    /// Completed goals in store order.
    fn load_completed_goals(&self) -> Result<Vec<CompletedGoal>>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    /// Moves an active goal into the completed collection as one transaction.
    ///
    /// Returns `Ok(None)` without writing anything when no active goal has
    /// `goal_id`.
    async fn complete_goal(
        &self,
        goal_id: i32,
        completion_date: NaiveDate,
    ) -> Result<Option<CompletedGoal>>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    /// Reference date used for status derivation and completion dates.
    fn today(&self) -> NaiveDate;
    fn list_active_goals(&self, today: NaiveDate) -> Result<Vec<GoalView>>;
    fn list_completed_goals(&self) -> Result<Vec<CompletedGoal>>;
    async fn create_goal(&self, description: String, deadline_text: &str) -> Result<Goal>;
    async fn complete_goal(&self, goal_id: i32) -> Result<CompletedGoal>;
}
