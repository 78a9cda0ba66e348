use crate::errors::Result;
use crate::goals::goals_errors::GoalError;
use crate::goals::goals_model::{parse_deadline, CompletedGoal, Goal, GoalView, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::sync::Arc;

/// Source of the current calendar date.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// The local calendar date.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Goal lifecycle manager: creation, listing with derived status, and the
/// active-to-completed transition.
pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    clock: Clock,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService {
            goal_repo,
            clock: Arc::new(local_today),
        }
    }

    /// Replaces the date source.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    fn list_active_goals(&self, today: NaiveDate) -> Result<Vec<GoalView>> {
        let goals = self.goal_repo.load_goals()?;
        Ok(goals
            .into_iter()
            .map(|goal| GoalView::new(goal, today))
            .collect())
    }

    fn list_completed_goals(&self) -> Result<Vec<CompletedGoal>> {
        self.goal_repo.load_completed_goals()
    }

    async fn create_goal(&self, description: String, deadline_text: &str) -> Result<Goal> {
        let deadline = parse_deadline(deadline_text)?;
        let goal = self
            .goal_repo
            .insert_new_goal(NewGoal {
                description,
                deadline,
            })
            .await?;
        debug!("Created goal {} due {}", goal.id, goal.deadline);
        Ok(goal)
    }

    async fn complete_goal(&self, goal_id: i32) -> Result<CompletedGoal> {
        let completion_date = self.today();
        match self.goal_repo.complete_goal(goal_id, completion_date).await? {
            Some(completed) => {
                info!(
                    "Goal {} completed on {} (completed record {})",
                    goal_id, completion_date, completed.id
                );
                Ok(completed)
            }
            None => Err(GoalError::NotFound(goal_id).into()),
        }
    }
}
