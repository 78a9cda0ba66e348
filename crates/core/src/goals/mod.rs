//! Goals module - domain models, services, and traits.

mod goals_errors;
mod goals_model;
mod goals_service;
mod goals_status;
mod goals_traits;

pub use goals_errors::GoalError;
pub use goals_model::{parse_deadline, CompletedGoal, Goal, GoalView, NewGoal, DATE_FORMAT};
pub use goals_service::{local_today, Clock, GoalService};
pub use goals_status::GoalStatus;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
