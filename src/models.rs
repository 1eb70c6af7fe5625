//! Frontend Models
//!
//! Data structures matching the task API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Owner id sent when the stored profile has none (synthesized profiles)
pub const FALLBACK_OWNER_ID: u32 = 1;

/// User profile (matches backend `UserOut`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Profile built from the email alone, for login responses without a user.
    pub fn from_email(email: &str) -> Self {
        let local_part = email.split('@').next().unwrap_or(email);
        Self {
            id: None,
            first_name: Some(local_part.to_string()),
            last_name: None,
            email: email.to_string(),
        }
    }

    /// "First Last", or "User" when both are missing
    pub fn display_name(&self) -> String {
        let name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let name = name.trim();
        if name.is_empty() {
            "User".to_string()
        } else {
            name.to_string()
        }
    }
}

/// Authenticated session: bearer token plus profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Task record (matches backend `Task`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub owner_id: u32,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /tasks/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub owner_id: u32,
    pub date: Option<String>,
    pub time: Option<String>,
    pub completed: bool,
}

/// Partial body of `PUT /tasks/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn completed(completed: bool) -> Self {
        Self { completed: Some(completed), ..Default::default() }
    }
}

// ========================
// Response Bodies
// ========================

/// Body of a successful `POST /users/login`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl LoginResponse {
    /// `access_token` if present, else `token`
    pub fn bearer(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .or(self.token.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// Error payload: `{"detail": "..."}` or a list of `{"msg": "..."}` entries
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::String(s) => Some(s.clone()),
            Value::Array(entries) => entries
                .iter()
                .find_map(|e| e.get("msg").and_then(Value::as_str))
                .map(str::to_string),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_prefers_access_token() {
        let both: LoginResponse =
            serde_json::from_str(r#"{"access_token":"a","token":"b"}"#).unwrap();
        assert_eq!(both.bearer(), Some("a"));

        let legacy: LoginResponse =
            serde_json::from_str(r#"{"token":"t1","user":{"id":1,"email":"a@b.com"}}"#).unwrap();
        assert_eq!(legacy.bearer(), Some("t1"));
        let user = legacy.user.unwrap();
        assert_eq!(user.id, Some(1));
        assert_eq!(user.first_name, None);

        let none: LoginResponse = serde_json::from_str(r#"{"token":""}"#).unwrap();
        assert_eq!(none.bearer(), None);
    }

    #[test]
    fn test_user_from_email() {
        let user = User::from_email("jane.doe@example.com");
        assert_eq!(user.first_name.as_deref(), Some("jane.doe"));
        assert_eq!(user.email, "jane.doe@example.com");
        assert_eq!(user.id, None);
        assert_eq!(user.display_name(), "jane.doe");
    }

    #[test]
    fn test_display_name() {
        let mut user = User::from_email("x@y");
        user.first_name = None;
        assert_eq!(user.display_name(), "User");
        user.first_name = Some("Ada".into());
        user.last_name = Some("Lovelace".into());
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_task_patch_only_sends_set_fields() {
        let json = serde_json::to_value(TaskPatch::completed(true)).unwrap();
        assert_eq!(json, serde_json::json!({ "completed": true }));
    }

    #[test]
    fn test_new_task_sends_nulls() {
        let task = NewTask {
            title: "Buy milk".into(),
            description: None,
            owner_id: 1,
            date: None,
            time: None,
            completed: false,
        };
        let json = serde_json::to_value(task).unwrap();
        assert_eq!(json["description"], Value::Null);
        assert_eq!(json["completed"], Value::Bool(false));
    }

    #[test]
    fn test_error_body_message() {
        let plain: ErrorBody = serde_json::from_str(r#"{"detail":"Task not found"}"#).unwrap();
        assert_eq!(plain.message().as_deref(), Some("Task not found"));

        let listed: ErrorBody = serde_json::from_str(
            r#"{"detail":[{"loc":["body","email"],"msg":"field required","type":"missing"}]}"#,
        )
        .unwrap();
        assert_eq!(listed.message().as_deref(), Some("field required"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message(), None);
    }
}
