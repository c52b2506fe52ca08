use super::types::ScheduleQuery;
use reqwest::{Client, Response};

pub const COURSES_PATH: &str = "/api/v1/shifter/courses";
pub const SCHEDULE_PATH: &str = "/api/v1/shifter/schedule/";

/// Thin client for the Shifter API.
///
/// Responses are handed back untouched, so callers decide how status codes
/// and bodies are interpreted.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the list of course names
    pub async fn fetch_courses(&self) -> Result<Response, reqwest::Error> {
        self.client.get(self.url(COURSES_PATH)).send().await
    }

    /// Submit a schedule query as JSON
    pub async fn submit_schedule(&self, query: &ScheduleQuery) -> Result<Response, reqwest::Error> {
        // .json() sets Content-Type: application/json
        self.client
            .post(self.url(SCHEDULE_PATH))
            .json(query)
            .send()
            .await
    }
}
