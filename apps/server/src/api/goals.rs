use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState, views};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use goaltracker_core::goals::{CompletedGoal, GoalView};
use serde::{Deserialize, Serialize};

/// Fields submitted by the add form. A missing field is treated as empty.
#[derive(Debug, Deserialize)]
pub struct AddGoalForm {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub deadline: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsOverview {
    pub active_goals: Vec<GoalView>,
    pub completed_goals: Vec<CompletedGoal>,
}

async fn index(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let today = state.goal_service.today();
    let active = state.goal_service.list_active_goals(today)?;
    let completed = state.goal_service.list_completed_goals()?;
    Ok(Html(views::render_index(&active, &completed, today)))
}

async fn add_goal_form() -> Html<String> {
    Html(views::render_add_form())
}

async fn add_goal(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddGoalForm>,
) -> ApiResult<Redirect> {
    let goal = state
        .goal_service
        .create_goal(form.description, &form.deadline)
        .await?;
    tracing::info!(goal_id = goal.id, deadline = %goal.deadline, "Goal added");
    Ok(Redirect::to("/"))
}

/// Always redirects home. A missing goal or a failed transaction is only
/// reported in the server log.
///
/// Ids are non-negative integers; one beyond the id column's range cannot
/// name a stored goal and is handled as not found.
async fn complete_goal(
    Path(raw_id): Path<u64>,
    State(state): State<Arc<AppState>>,
) -> Redirect {
    let Ok(goal_id) = i32::try_from(raw_id) else {
        tracing::warn!(goal_id = raw_id, "Goal with ID {} not found", raw_id);
        return Redirect::to("/");
    };
    match state.goal_service.complete_goal(goal_id).await {
        Ok(completed) => tracing::info!(
            goal_id,
            completed_id = completed.id,
            completion_date = %completed.completion_date,
            "Goal completed"
        ),
        Err(e) if e.is_not_found() => {
            tracing::warn!(goal_id, "Goal with ID {} not found", goal_id)
        }
        Err(e) => tracing::error!(goal_id, error = %e, "Failed to complete goal; rolled back"),
    }
    Redirect::to("/")
}

async fn list_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<GoalsOverview>> {
    let today = state.goal_service.today();
    Ok(Json(GoalsOverview {
        active_goals: state.goal_service.list_active_goals(today)?,
        completed_goals: state.goal_service.list_completed_goals()?,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_goal_form).post(add_goal))
        .route("/complete/{goal_id}", post(complete_goal))
}

pub fn api_router() -> Router<Arc<AppState>> {
    Router::new().route("/goals", get(list_goals))
}
