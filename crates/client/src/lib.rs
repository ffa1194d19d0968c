//! Typed HTTP client for the taskboard REST API.
//!
//! Wraps every `/api` endpoint with [`reqwest`]. Error responses are
//! decoded from the server's `{ "error": ... }` body.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use taskboard_core::board::{TaskPriority, TaskStatus};
use taskboard_db::models::project::Project;
use taskboard_db::models::task::Task;

/// Base URL used when `TASKBOARD_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server, without a trailing slash.
    pub api_url: String,
}

impl ClientConfig {
    /// Read `TASKBOARD_API_URL`, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        let api_url = std::env::var("TASKBOARD_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.into());
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding, ...).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the response body.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body for creating a project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewProject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial project update; `None` fields are left out of the request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for creating a task.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

/// Partial task update; `None` fields are left out of the request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

#[derive(Debug, Deserialize)]
struct OkBody {
    ok: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

// ---------------------------------------------------------------------------
// TaskboardClient
// ---------------------------------------------------------------------------

/// HTTP client for one taskboard server.
pub struct TaskboardClient {
    client: reqwest::Client,
    api_url: String,
}

impl TaskboardClient {
    /// Create a client for the server at `api_url`, e.g. `http://host:5000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client from [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// `GET /api/health`. Returns the server's `ok` flag.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let response = self.client.get(self.url("/api/health")).send().await?;
        let body: OkBody = Self::parse_response(response).await?;
        Ok(body.ok)
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let response = self.client.get(self.url("/api/projects")).send().await?;
        Self::parse_response(response).await
    }

    pub async fn create_project(&self, body: &NewProject) -> Result<Project, ClientError> {
        let response = self
            .client
            .post(self.url("/api/projects"))
            .json(body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn update_project(
        &self,
        id: &str,
        body: &ProjectPatch,
    ) -> Result<Project, ClientError> {
        let response = self
            .client
            .patch(self.url(&format!("/api/projects/{id}")))
            .json(body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Delete a project and, server-side, all of its tasks.
    pub async fn delete_project(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/projects/{id}")))
            .send()
            .await?;
        Self::check_status(response).await
    }

    pub async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/projects/{project_id}/tasks")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn create_task(&self, project_id: &str, body: &NewTask) -> Result<Task, ClientError> {
        let response = self
            .client
            .post(self.url(&format!("/api/projects/{project_id}/tasks")))
            .json(body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn update_task(&self, id: &str, body: &TaskPatch) -> Result<Task, ClientError> {
        let response = self
            .client
            .patch(self.url(&format!("/api/tasks/{id}")))
            .json(body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/tasks/{id}")))
            .send()
            .await?;
        Self::check_status(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Turn a non-2xx response into [`ClientError::Api`], using the body's
    /// `error` field, then the status reason, then `"Request failed"`.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "Request failed".to_string());
        tracing::debug!(status = status.as_u16(), %message, "API request failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = TaskboardClient::new("http://localhost:5000/");
        assert_eq!(client.url("/api/health"), "http://localhost:5000/api/health");
    }

    #[test]
    fn patch_omits_unset_fields() {
        let patch = TaskPatch {
            status: Some(TaskStatus::Done),
            due_date: Some("2026-12-24".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "done", "dueDate": "2026-12-24" })
        );
    }
}
