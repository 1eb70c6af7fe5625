//! Client Errors
//!
//! One taxonomy for every remote and local failure the client can hit.

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Missing or malformed local input; no request was sent
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response
    #[error("server rejected request ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Server { status: u16, detail: Option<String> },

    /// The request never completed
    #[error("transport failure: {0}")]
    Transport(String),

    /// 2xx response whose body did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Login succeeded but carried no bearer token
    #[error("login response carried no token")]
    MissingToken,

    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[cfg(test)]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Text shown to the user.
    ///
    /// Server rejections prefer the server's own detail; anything else that
    /// reached the server falls back to `fallback`, and transport failures
    /// always use `connection`.
    pub fn user_message(&self, fallback: &str, connection: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Server { detail: Some(detail), .. } if !detail.is_empty() => detail.clone(),
            Self::Transport(_) => connection.to_string(),
            Self::Server { .. } | Self::Decode(_) | Self::MissingToken | Self::Storage(_) => {
                fallback.to_string()
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Failed to create task";
    const CONNECTION: &str = "Connection error. Please try again.";

    #[test]
    fn test_server_detail_wins_over_fallback() {
        let err = AppError::Server { status: 400, detail: Some("Email already registered".into()) };
        assert_eq!(err.user_message(FALLBACK, CONNECTION), "Email already registered");
    }

    #[test]
    fn test_server_without_detail_uses_fallback() {
        let err = AppError::Server { status: 500, detail: None };
        assert_eq!(err.user_message(FALLBACK, CONNECTION), FALLBACK);

        let empty = AppError::Server { status: 500, detail: Some(String::new()) };
        assert_eq!(empty.user_message(FALLBACK, CONNECTION), FALLBACK);
    }

    #[test]
    fn test_transport_uses_connection_message() {
        let err = AppError::Transport("dns".into());
        assert!(err.is_transport());
        assert_eq!(err.user_message(FALLBACK, CONNECTION), CONNECTION);
    }

    #[test]
    fn test_validation_keeps_its_text() {
        let err = AppError::validation("Please enter a task title");
        assert_eq!(err.user_message(FALLBACK, CONNECTION), "Please enter a task title");
        assert_eq!(err.to_string(), "Please enter a task title");
    }

    #[test]
    fn test_decode_and_missing_token_use_fallback() {
        assert_eq!(AppError::Decode("eof".into()).user_message(FALLBACK, CONNECTION), FALLBACK);
        assert_eq!(AppError::MissingToken.user_message(FALLBACK, CONNECTION), FALLBACK);
    }
}
