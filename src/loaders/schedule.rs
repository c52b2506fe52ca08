use crate::backend::{BackendClient, BackendErrorBody, ScheduleQuery, SCHEDULE_PATH};
use crate::error::LoadError;
use serde_json::Value;

const UNREACHABLE: &str = "Server could not be reached";

/// Loads a schedule for the schedule page
#[derive(Clone)]
pub struct ScheduleLoader {
    backend: BackendClient,
}

impl ScheduleLoader {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// Forward `query` to the backend and return its body unmodified
    pub async fn load(&self, query: ScheduleQuery) -> Result<Value, LoadError> {
        tracing::debug!(
            course = ?query.course_name,
            semester = ?query.course_semester,
            years = ?query.course_years,
            "Submitting schedule query"
        );

        let response = self
            .backend
            .submit_schedule(&query)
            .await
            .map_err(|source| LoadError::ServiceUnavailable {
                message: UNREACHABLE,
                source,
            })?;

        let status = response.status();

        // The body is parsed before branching on status
        let body = response.json::<Value>().await;

        if status.is_success() {
            return body.map_err(|source| LoadError::MalformedResponse {
                path: SCHEDULE_PATH,
                source,
            });
        }

        let message = body
            .ok()
            .and_then(|value| serde_json::from_value::<BackendErrorBody>(value).ok())
            .and_then(|error_body| error_body.message())
            .unwrap_or_else(|| format!("Unexpected response from the server to {}", SCHEDULE_PATH));

        tracing::warn!("Schedule request failed with status {}: {}", status, message);

        Err(LoadError::BadRequest {
            upstream: status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::{spawn_backend, unreachable_backend};
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;

    fn failing_backend(status: StatusCode, body: Value) -> Router {
        Router::new().route(
            "/api/v1/shifter/schedule/",
            post(move || async move { (status, Json(body)) }),
        )
    }

    fn query() -> ScheduleQuery {
        ScheduleQuery {
            course_name: Some("CS101".to_string()),
            course_semester: Some("Fall".to_string()),
            course_years: Some("2023".to_string()),
        }
    }

    #[tokio::test]
    async fn test_load_returns_body_unmodified() {
        let app = Router::new().route(
            "/api/v1/shifter/schedule/",
            post(|| async { Json(json!({ "sessions": [{ "day": 1, "name": "T1" }] })) }),
        );
        let base = spawn_backend(app).await;

        let schedule = ScheduleLoader::new(BackendClient::new(base))
            .load(query())
            .await
            .unwrap();

        assert_eq!(schedule, json!({ "sessions": [{ "day": 1, "name": "T1" }] }));
    }

    #[tokio::test]
    async fn test_load_posts_json_payload() {
        // Echo back the content type and the received payload
        let app = Router::new().route(
            "/api/v1/shifter/schedule/",
            post(|headers: axum::http::HeaderMap, Json(payload): Json<Value>| async move {
                let content_type = headers
                    .get(axum::http::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({ "content_type": content_type, "payload": payload }))
            }),
        );
        let base = spawn_backend(app).await;
        let loader = ScheduleLoader::new(BackendClient::new(base));

        let echoed = loader.load(query()).await.unwrap();
        assert_eq!(echoed["content_type"], "application/json");
        assert_eq!(
            echoed["payload"],
            json!({
                "course_name": "CS101",
                "course_semester": "Fall",
                "course_years": "2023"
            })
        );

        let echoed = loader.load(ScheduleQuery::default()).await.unwrap();
        assert_eq!(
            echoed["payload"],
            json!({
                "course_name": null,
                "course_semester": null,
                "course_years": null
            })
        );
    }

    #[tokio::test]
    async fn test_load_detail_msg() {
        let app = failing_backend(
            StatusCode::BAD_REQUEST,
            json!({ "detail": { "msg": "course not found" } }),
        );
        let base = spawn_backend(app).await;

        let err = ScheduleLoader::new(BackendClient::new(base))
            .load(query())
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.upstream_status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.message(), "course not found");
    }

    #[tokio::test]
    async fn test_load_detail_string() {
        let app = failing_backend(StatusCode::BAD_REQUEST, json!({ "detail": "invalid year" }));
        let base = spawn_backend(app).await;

        let err = ScheduleLoader::new(BackendClient::new(base))
            .load(query())
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "invalid year");
    }

    #[tokio::test]
    async fn test_load_flattens_server_errors() {
        let app = failing_backend(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "detail": "scraper crashed" }),
        );
        let base = spawn_backend(app).await;

        let err = ScheduleLoader::new(BackendClient::new(base))
            .load(query())
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::BadRequest { .. }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "scraper crashed");
    }

    #[tokio::test]
    async fn test_load_failure_without_detail() {
        let app = Router::new().route(
            "/api/v1/shifter/schedule/",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream timeout") }),
        );
        let base = spawn_backend(app).await;

        let err = ScheduleLoader::new(BackendClient::new(base))
            .load(query())
            .await
            .unwrap_err();

        assert_eq!(err.upstream_status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(
            err.message(),
            "Unexpected response from the server to /api/v1/shifter/schedule/"
        );
    }

    #[tokio::test]
    async fn test_load_unreachable_backend() {
        let base = unreachable_backend().await;

        let err = ScheduleLoader::new(BackendClient::new(base))
            .load(query())
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::ServiceUnavailable { .. }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Server could not be reached");
    }
}
