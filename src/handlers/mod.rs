use crate::AppState;
use crate::backend::ScheduleQuery;
use crate::error::LoadError;
use crate::loaders::CourseListPage;
use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;
use std::sync::Arc;

/// Page routes backed by the loaders
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/home", get(home_page))
        .route("/schedule", get(schedule_page))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Data for the home page: every course the API knows about
pub async fn home_page(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CourseListPage>, LoadError> {
    tracing::info!("Loading home page");
    let page = state.course_loader.load().await?;
    Ok(Json(page))
}

/// Data for the schedule page, driven by `?course=&sem=&year=`
pub async fn schedule_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, LoadError> {
    let query = ScheduleQuery::from_pairs(params);
    tracing::info!(
        "Loading schedule page for course {}",
        query.course_name.as_deref().unwrap_or("<none>")
    );
    let schedule = state.schedule_loader.load(query).await?;
    Ok(Json(schedule))
}
