use crate::dto::{ProgressDto, ProjectDto, SigninDto, StatusDto, TaskDto, ToggleDto};
use crate::payload::{NewProject, NewTask, ProjectPatch, TaskPatch};
use crate::{ClientError, ClientResult};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the taskdeck REST API
pub struct ApiClient {
    pub base_url: String,
    token: Option<String>,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL including the API prefix
    ///   (e.g., "http://localhost:8000/api")
    /// * `token` - Optional bearer token; absent means requests go out
    ///   unauthenticated
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Whether a bearer token is attached to outgoing requests.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Attach or clear the bearer token for subsequent requests.
    pub fn set_token(&mut self, token: Option<&str>) {
        self.token = token.map(String::from);
    }

    /// Build a request with the bearer token when present
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute a request and parse the body, mapping non-2xx responses to
    /// `ClientError::Api` with whatever message the backend supplied.
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let body = self.execute_raw(req).await?;
        serde_json::from_value(body).map_err(ClientError::from_json)
    }

    /// Execute a request where the response body carries no information
    /// (delete endpoints answer `{}`).
    async fn execute_empty(&self, req: reqwest::RequestBuilder) -> ClientResult<()> {
        self.execute_raw(req).await.map(|_| ())
    }

    async fn execute_raw(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        if !status.is_success() {
            let message = body
                .get("message")
                .or_else(|| body.get("error").and_then(|e| e.get("message")))
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Sign in and return the access token
    pub async fn sign_in(&self, username: &str, password: &str) -> ClientResult<String> {
        #[derive(Serialize)]
        struct SigninRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        let body = SigninRequest { username, password };
        let req = self.request(Method::POST, "/auth/signin").json(&body);
        let signin: SigninDto = self.execute(req).await?;
        Ok(signin.access_token)
    }

    /// End the backend session for the current token
    pub async fn logout(&self) -> ClientResult<()> {
        let req = self.request(Method::POST, "/auth/logout");
        self.execute_empty(req).await
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List all projects, including their tasks
    pub async fn list_projects(&self) -> ClientResult<Vec<ProjectDto>> {
        let req = self.request(Method::GET, "/projects");
        self.execute(req).await
    }

    /// Create a new project
    pub async fn create_project(&self, project: &NewProject) -> ClientResult<ProjectDto> {
        let req = self.request(Method::POST, "/projects").json(project);
        self.execute(req).await
    }

    /// Update a project
    pub async fn update_project(&self, id: &str, patch: &ProjectPatch) -> ClientResult<ProjectDto> {
        let req = self
            .request(Method::PUT, &format!("/projects/{}", id))
            .json(patch);
        self.execute(req).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: &str) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/projects/{}", id));
        self.execute_empty(req).await
    }

    /// Fetch the backend's own progress figure for a project
    pub async fn project_progress(&self, id: &str) -> ClientResult<ProgressDto> {
        let req = self.request(Method::GET, &format!("/projects/{}/progress", id));
        self.execute(req).await
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// List tasks of a project
    pub async fn list_tasks(&self, project_id: &str) -> ClientResult<Vec<TaskDto>> {
        let req = self.request(Method::GET, &format!("/projects/{}/tasks", project_id));
        self.execute(req).await
    }

    /// Create a task in a project
    pub async fn create_task(&self, project_id: &str, task: &NewTask) -> ClientResult<TaskDto> {
        let req = self
            .request(Method::POST, &format!("/projects/{}/tasks", project_id))
            .json(task);
        self.execute(req).await
    }

    /// Update a task
    pub async fn update_task(
        &self,
        project_id: &str,
        task_id: &str,
        patch: &TaskPatch,
    ) -> ClientResult<TaskDto> {
        let req = self
            .request(
                Method::PUT,
                &format!("/projects/{}/tasks/{}", project_id, task_id),
            )
            .json(patch);
        self.execute(req).await
    }

    /// Delete a task
    pub async fn delete_task(&self, project_id: &str, task_id: &str) -> ClientResult<()> {
        let req = self.request(
            Method::DELETE,
            &format!("/projects/{}/tasks/{}", project_id, task_id),
        );
        self.execute_empty(req).await
    }

    /// Flip a task's completion flag; the backend decides the new value
    pub async fn toggle_task(&self, project_id: &str, task_id: &str) -> ClientResult<ToggleDto> {
        let req = self.request(
            Method::PATCH,
            &format!("/projects/{}/tasks/{}/toggle", project_id, task_id),
        );
        self.execute(req).await
    }

    /// Advance a task to the backend-computed next status
    pub async fn advance_task_status(
        &self,
        project_id: &str,
        task_id: &str,
    ) -> ClientResult<StatusDto> {
        let req = self.request(
            Method::PATCH,
            &format!("/projects/{}/tasks/{}/status", project_id, task_id),
        );
        self.execute(req).await
    }
}
