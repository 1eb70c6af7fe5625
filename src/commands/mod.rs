//! Backend Commands
//!
//! The `Backend` seam the controller talks to, and its HTTP implementation
//! over `gloo-net`, organized by domain.

mod auth;
mod task;

use async_trait::async_trait;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Credentials, ErrorBody, LoginResponse, NewTask, SignupRequest, Task, TaskPatch};

/// Remote task API
///
/// Every method resolves to exactly one request. Implementations never retry.
#[async_trait(?Send)]
pub trait Backend {
    /// `POST /users/login`
    async fn login(&self, credentials: &Credentials) -> AppResult<LoginResponse>;

    /// `POST /users/`
    async fn signup(&self, request: &SignupRequest) -> AppResult<()>;

    /// `GET /tasks/`
    async fn list_tasks(&self, token: &str) -> AppResult<Vec<Task>>;

    /// `POST /tasks/`
    async fn create_task(&self, token: &str, task: &NewTask) -> AppResult<Task>;

    /// `PUT /tasks/{id}`
    async fn update_task(&self, token: &str, id: u32, patch: &TaskPatch) -> AppResult<Task>;

    /// `DELETE /tasks/{id}`
    async fn delete_task(&self, token: &str, id: u32) -> AppResult<()>;
}

/// `Backend` over the browser fetch API
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> AppResult<LoginResponse> {
        auth::login(&self.config, credentials).await
    }

    async fn signup(&self, request: &SignupRequest) -> AppResult<()> {
        auth::signup(&self.config, request).await
    }

    async fn list_tasks(&self, token: &str) -> AppResult<Vec<Task>> {
        task::list_tasks(&self.config, token).await
    }

    async fn create_task(&self, token: &str, new_task: &NewTask) -> AppResult<Task> {
        task::create_task(&self.config, token, new_task).await
    }

    async fn update_task(&self, token: &str, id: u32, patch: &TaskPatch) -> AppResult<Task> {
        task::update_task(&self.config, token, id, patch).await
    }

    async fn delete_task(&self, token: &str, id: u32) -> AppResult<()> {
        task::delete_task(&self.config, token, id).await
    }
}

// ========================
// Response Handling
// ========================

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn transport(e: gloo_net::Error) -> AppError {
    AppError::Transport(e.to_string())
}

/// Map a non-2xx status and its raw body onto `AppError::Server`
fn rejection(status: u16, body: &str) -> AppError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message());
    AppError::Server { status, detail }
}

/// Check the status, then decode the body as `T`
async fn read_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    if !response.ok() {
        return Err(reject(response).await);
    }
    let body = response.text().await.map_err(transport)?;
    Ok(serde_json::from_str(&body)?)
}

/// Check the status only; any body is ignored
async fn read_empty(response: Response) -> AppResult<()> {
    if response.ok() {
        return Ok(());
    }
    Err(reject(response).await)
}

/// A non-2xx response. An unreadable body still counts as a server rejection.
async fn reject(response: Response) -> AppError {
    let status = response.status();
    log::warn!("[API] {} rejected with {}", response.url(), status);
    let body = response.text().await.unwrap_or_default();
    rejection(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_takes_detail() {
        let err = rejection(401, r#"{"detail":"Not authenticated"}"#);
        assert_eq!(err, AppError::Server { status: 401, detail: Some("Not authenticated".into()) });
    }

    #[test]
    fn test_rejection_without_json_body() {
        let err = rejection(502, "<html>Bad Gateway</html>");
        assert_eq!(err, AppError::Server { status: 502, detail: None });
    }

    #[test]
    fn test_rejection_with_unreadable_body_is_not_transport() {
        let err = rejection(500, "");
        assert!(!err.is_transport());
        assert_eq!(err.user_message("Failed to load tasks", "Connection error"), "Failed to load tasks");
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(bearer("t1"), "Bearer t1");
    }
}
