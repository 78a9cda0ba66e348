use std::sync::Arc;

use crate::config::Config;
use goaltracker_core::goals::{local_today, Clock, GoalService, GoalServiceTrait};
use goaltracker_storage_sqlite::{
    db::{self, spawn_writer},
    goals::GoalRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("GT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Creates the database file and its tables. Used by `initdb`; safe to
/// run against an existing database.
pub fn init_database(config: &Config) -> anyhow::Result<String> {
    let db_path = db::init(&config.db_path)?;
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    Ok(db_path)
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    build_state_with_clock(config, Arc::new(local_today)).await
}

/// Like [`build_state`], with the goal service reading "today" from `clock`.
pub async fn build_state_with_clock(
    config: &Config,
    clock: Clock,
) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone())?;

    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer));
    let goal_service = Arc::new(GoalService::new(goal_repository).with_clock(clock));

    Ok(Arc::new(AppState {
        goal_service,
        db_path,
    }))
}
