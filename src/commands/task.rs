//! Task Commands
//!
//! Bearer-authenticated task CRUD requests.

use gloo_net::http::Request;

use super::{bearer, read_empty, read_json, transport};
use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};
use crate::models::{NewTask, Task, TaskPatch};

pub async fn list_tasks(config: &ApiConfig, token: &str) -> AppResult<Vec<Task>> {
    log::debug!("[API] GET /tasks/");
    let response = Request::get(&config.tasks_url())
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

pub async fn create_task(config: &ApiConfig, token: &str, task: &NewTask) -> AppResult<Task> {
    log::debug!("[API] POST /tasks/ \"{}\"", task.title);
    let response = Request::post(&config.tasks_url())
        .header("Authorization", &bearer(token))
        .json(task)
        .map_err(|e| AppError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

pub async fn update_task(config: &ApiConfig, token: &str, id: u32, patch: &TaskPatch) -> AppResult<Task> {
    log::debug!("[API] PUT /tasks/{}", id);
    let response = Request::put(&config.task_url(id))
        .header("Authorization", &bearer(token))
        .json(patch)
        .map_err(|e| AppError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

pub async fn delete_task(config: &ApiConfig, token: &str, id: u32) -> AppResult<()> {
    log::debug!("[API] DELETE /tasks/{}", id);
    let response = Request::delete(&config.task_url(id))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(transport)?;
    read_empty(response).await
}
