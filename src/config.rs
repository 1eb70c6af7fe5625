//! Client Configuration
//!
//! API location and UI timings. The base URL is fixed at compile time.

/// Compile-time override for the API base URL
const API_URL_ENV: Option<&str> = option_env!("TASKS_API_URL");

const DEFAULT_API_URL: &str = "https://todo-application-y9xb.onrender.com";

/// localStorage slot holding the raw bearer token
pub const TOKEN_KEY: &str = "token";
/// localStorage slot holding the JSON user profile
pub const USER_KEY: &str = "user";

/// How long a toast stays visible
pub const TOAST_MS: u32 = 3000;
/// Delay between signup success and the switch to the login tab
pub const SIGNUP_REDIRECT_MS: u32 = 2000;
/// How long the "task created" message stays visible
pub const CREATE_MESSAGE_MS: u32 = 3000;

/// Remote API endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Config from the build environment, falling back to the hosted API
    pub fn from_env() -> Self {
        Self::new(API_URL_ENV.unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn signup_url(&self) -> String {
        format!("{}/users/", self.base_url)
    }

    pub fn login_url(&self) -> String {
        format!("{}/users/login", self.base_url)
    }

    pub fn tasks_url(&self) -> String {
        format!("{}/tasks/", self.base_url)
    }

    pub fn task_url(&self, id: u32) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://localhost:8000//");
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.tasks_url(), "http://localhost:8000/tasks/");
        assert_eq!(config.task_url(7), "http://localhost:8000/tasks/7");
    }

    #[test]
    fn test_user_endpoints() {
        let config = ApiConfig::new("http://api");
        assert_eq!(config.signup_url(), "http://api/users/");
        assert_eq!(config.login_url(), "http://api/users/login");
    }
}
