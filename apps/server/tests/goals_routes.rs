use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::NaiveDate;
use diesel::RunQueryDsl;
use goaltracker_core::goals::GoalServiceTrait;
use goaltracker_server::{api::app_router, build_state_with_clock, config::Config, init_database};
use goaltracker_storage_sqlite::db::{create_pool, get_connection};
use serde_json::Value;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
}

fn test_config(dir: &TempDir) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db").to_string_lossy().to_string(),
        request_timeout: Duration::from_secs(30),
    }
}

/// Router over a fresh database whose clock is pinned to 2025-01-10.
/// The temp dir must outlive the router.
async fn build_test_router() -> (Router, TempDir) {
    let tmp = tempdir().unwrap();
    let config = test_config(&tmp);
    let state = build_state_with_clock(&config, Arc::new(today))
        .await
        .unwrap();
    (app_router(state, &config), tmp)
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, form: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

async fn overview(app: &Router) -> Value {
    let response = get(app, "/api/v1/goals").await;
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_str(&body_text(response).await).unwrap()
}

fn assert_redirects_home(response: &Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn healthz_works() {
    let (app, _tmp) = build_test_router().await;
    let response = get(&app, "/api/v1/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn add_form_is_served() {
    let (app, _tmp) = build_test_router().await;
    let response = get(&app, "/add").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("action=\"/add\""));
    assert!(html.contains("name=\"description\""));
    assert!(html.contains("name=\"deadline\""));
}

#[tokio::test]
async fn adding_a_goal_redirects_and_lists_it_with_status() {
    let (app, _tmp) = build_test_router().await;

    let response = post_form(&app, "/add", "description=Finish+report&deadline=2025-01-10").await;
    assert_redirects_home(&response);

    let data = overview(&app).await;
    let active = data["activeGoals"].as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["id"], 1);
    assert_eq!(active[0]["description"], "Finish report");
    assert_eq!(active[0]["deadline"], "2025-01-10");
    assert_eq!(active[0]["status"], "Due Today");

    let html = body_text(get(&app, "/").await).await;
    assert!(html.contains("<td>Finish report</td><td>2025-01-10</td>"));
    assert!(html.contains("Due Today"));
    assert!(html.contains("action=\"/complete/1\""));
}

#[tokio::test]
async fn index_shows_each_status() {
    let (app, _tmp) = build_test_router().await;
    for form in [
        "description=late&deadline=2025-01-09",
        "description=now&deadline=2025-01-10",
        "description=soon&deadline=2025-01-11",
    ] {
        assert_redirects_home(&post_form(&app, "/add", form).await);
    }

    let data = overview(&app).await;
    let statuses: Vec<_> = data["activeGoals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["status"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(statuses, ["Past Due", "Due Today", "Upcoming"]);

    let html = body_text(get(&app, "/").await).await;
    assert!(html.contains("Past Due"));
    assert!(html.contains("Upcoming"));
}

#[tokio::test]
async fn invalid_deadline_returns_plain_text_error_without_writing() {
    let (app, _tmp) = build_test_router().await;

    let response =
        post_form(&app, "/add", "description=Finish+report&deadline=13%2F25%2F2025").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let content_type = response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    assert!(body_text(response).await.starts_with("Invalid date format"));

    let unpadded = post_form(&app, "/add", "description=x&deadline=2025-1-5").await;
    assert_eq!(unpadded.status(), StatusCode::BAD_REQUEST);

    let missing = post_form(&app, "/add", "description=x").await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let data = overview(&app).await;
    assert!(data["activeGoals"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_description_is_accepted() {
    let (app, _tmp) = build_test_router().await;
    assert_redirects_home(&post_form(&app, "/add", "description=&deadline=2024-12-01").await);

    let data = overview(&app).await;
    let active = data["activeGoals"].as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["description"], "");
    assert_eq!(active[0]["status"], "Past Due");
}

#[tokio::test]
async fn completing_a_goal_moves_it_to_completed() {
    let (app, _tmp) = build_test_router().await;
    post_form(&app, "/add", "description=Finish+report&deadline=2025-01-10").await;
    post_form(&app, "/add", "description=Keep+going&deadline=2025-02-01").await;

    let response = post_form(&app, "/complete/1", "").await;
    assert_redirects_home(&response);

    let data = overview(&app).await;
    let active = data["activeGoals"].as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["id"], 2);

    let completed = data["completedGoals"].as_array().unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0]["description"], "Finish report");
    assert_eq!(completed[0]["deadline"], "2025-01-10");
    assert_eq!(completed[0]["completionDate"], "2025-01-10");

    let html = body_text(get(&app, "/").await).await;
    assert!(html.contains("<td>Finish report</td><td>2025-01-10</td><td>2025-01-10</td>"));
    assert!(!html.contains("action=\"/complete/1\""));
}

#[tokio::test]
async fn completing_a_missing_goal_still_redirects() {
    let (app, _tmp) = build_test_router().await;
    post_form(&app, "/add", "description=stay&deadline=2025-01-10").await;

    let response = post_form(&app, "/complete/42", "").await;
    assert_redirects_home(&response);

    let data = overview(&app).await;
    assert_eq!(data["activeGoals"].as_array().unwrap().len(), 1);
    assert!(data["completedGoals"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn completing_an_id_beyond_the_id_range_still_redirects() {
    let (app, _tmp) = build_test_router().await;
    post_form(&app, "/add", "description=stay&deadline=2025-01-10").await;

    let response = post_form(&app, "/complete/3000000000", "").await;
    assert_redirects_home(&response);

    let data = overview(&app).await;
    assert_eq!(data["activeGoals"].as_array().unwrap().len(), 1);
    assert!(data["completedGoals"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn completing_a_negative_id_is_rejected() {
    let (app, _tmp) = build_test_router().await;
    post_form(&app, "/add", "description=stay&deadline=2025-01-10").await;

    let response = post_form(&app, "/complete/-1", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let data = overview(&app).await;
    assert_eq!(data["activeGoals"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn failed_completion_redirects_and_keeps_the_goal_active() {
    let tmp = tempdir().unwrap();
    let config = test_config(&tmp);
    let state = build_state_with_clock(&config, Arc::new(today))
        .await
        .unwrap();
    let db_path = state.db_path.clone();
    let goal_service = Arc::clone(&state.goal_service);
    let app = app_router(state, &config);
    post_form(&app, "/add", "description=survivor&deadline=2025-01-10").await;

    // Make the insert half of the transition fail.
    let pool = create_pool(&db_path).unwrap();
    let mut conn = get_connection(&pool).unwrap();
    diesel::sql_query("DROP TABLE goals_completed")
        .execute(&mut conn)
        .unwrap();
    drop(conn);

    let response = post_form(&app, "/complete/1", "").await;
    assert_redirects_home(&response);

    let active = goal_service.list_active_goals(today()).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, 1);
    assert_eq!(active[0].description, "survivor");
}

#[tokio::test]
async fn completing_twice_matches_completing_once() {
    let (app, _tmp) = build_test_router().await;
    post_form(&app, "/add", "description=once&deadline=2025-01-10").await;

    assert_redirects_home(&post_form(&app, "/complete/1", "").await);
    let after_first = overview(&app).await;
    assert_redirects_home(&post_form(&app, "/complete/1", "").await);
    let after_second = overview(&app).await;

    assert_eq!(after_first, after_second);
    assert_eq!(after_second["completedGoals"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn descriptions_are_html_escaped() {
    let (app, _tmp) = build_test_router().await;
    post_form(
        &app,
        "/add",
        "description=%3Cscript%3Ealert(1)%3C%2Fscript%3E&deadline=2025-01-10",
    )
    .await;

    let html = body_text(get(&app, "/").await).await;
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[tokio::test]
async fn initdb_prepares_database_for_the_server() {
    let tmp = tempdir().unwrap();
    let config = test_config(&tmp);

    let db_path = init_database(&config).unwrap();
    assert!(std::path::Path::new(&db_path).exists());
    // Running it again against the same file is harmless.
    init_database(&config).unwrap();

    let state = build_state_with_clock(&config, Arc::new(today))
        .await
        .unwrap();
    let app = app_router(state, &config);
    let data = overview(&app).await;
    assert!(data["activeGoals"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn goals_persist_across_restarts() {
    let tmp = tempdir().unwrap();
    let config = test_config(&tmp);

    let first = app_router(
        build_state_with_clock(&config, Arc::new(today)).await.unwrap(),
        &config,
    );
    post_form(&first, "/add", "description=durable&deadline=2025-03-01").await;
    drop(first);

    let second = app_router(
        build_state_with_clock(&config, Arc::new(today)).await.unwrap(),
        &config,
    );
    let data = overview(&second).await;
    let active = data["activeGoals"].as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["description"], "durable");
}
