//! Auth Commands
//!
//! Login and signup requests.

use gloo_net::http::Request;

use super::{read_empty, read_json, transport};
use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Credentials, LoginResponse, SignupRequest};

pub async fn login(config: &ApiConfig, credentials: &Credentials) -> AppResult<LoginResponse> {
    log::debug!("[API] POST /users/login for {}", credentials.email);
    let response = Request::post(&config.login_url())
        .json(credentials)
        .map_err(|e| AppError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

pub async fn signup(config: &ApiConfig, request: &SignupRequest) -> AppResult<()> {
    log::debug!("[API] POST /users/ for {}", request.email);
    let response = Request::post(&config.signup_url())
        .json(request)
        .map_err(|e| AppError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(transport)?;
    read_empty(response).await
}
