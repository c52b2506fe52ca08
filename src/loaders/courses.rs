use crate::backend::BackendClient;
use crate::error::LoadError;
use serde::Serialize;
use serde_json::Value;

const UNREACHABLE: &str = "Api Server could not be reached, is the server running ?";
const UNEXPECTED: &str = "Unexpected response from the server to /api/v1/courses";

/// Data handed to the home page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseListPage {
    pub courses: Value,
}

/// Loads the course list for the home page
#[derive(Clone)]
pub struct CourseListLoader {
    backend: BackendClient,
}

impl CourseListLoader {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    pub async fn load(&self) -> Result<CourseListPage, LoadError> {
        tracing::debug!("Fetching course list from {}", self.backend.base_url());

        let response = self
            .backend
            .fetch_courses()
            .await
            .map_err(|source| LoadError::ServiceUnavailable {
                message: UNREACHABLE,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            // Body is deliberately left unread here
            tracing::warn!("Course list request failed with status {}", status);
            return Err(LoadError::BadGateway {
                upstream: status,
                message: UNEXPECTED.to_string(),
            });
        }

        let courses: Value = response
            .json()
            .await
            .map_err(|source| LoadError::MalformedResponse {
                path: crate::backend::COURSES_PATH,
                source,
            })?;

        Ok(CourseListPage { courses })
    }
}
