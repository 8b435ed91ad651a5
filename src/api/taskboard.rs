//! `reqwest` implementation of [`TaskApi`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::api::{TaskApi, TaskBoardClient};
//! use taskboard::libs::config::ServerConfig;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = TaskBoardClient::new(&ServerConfig::default())?;
//! client.probe().await?;
//! let stats = client.stats().await?;
//! println!("{} of {} done", stats.completed, stats.total);
//! # Ok(())
//! # }
//! ```

use super::{ApiError, TaskApi};
use crate::libs::config::ServerConfig;
use crate::libs::task::{NewTask, Stats, Task, TaskId, TaskPatch};
use crate::msg_debug;
use anyhow::Result;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

const TASKS_URL: &str = "tasks";
const STATS_URL: &str = "stats";

/// HTTP client bound to one Task Board API origin.
#[derive(Debug, Clone)]
pub struct TaskBoardClient {
    client: Client,
    base_url: String,
    probe_url: String,
}

impl TaskBoardClient {
    /// Builds a client for `config.api_url`.
    ///
    /// No timeout is set unless `timeout_secs` is configured, so a hung
    /// server keeps the calling operation waiting.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(format!("{}/{}", APP_METADATA_NAME, APP_METADATA_VERSION));
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let base_url = config.api_url.trim_end_matches('/').to_string();
        Ok(Self {
            client: builder.build()?,
            probe_url: origin_root(&base_url),
            base_url,
        })
    }

    /// Liveness route: the root of the API origin, not of the `/api` prefix.
    pub fn probe_url(&self) -> &str {
        &self.probe_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn task_url(&self, id: &TaskId) -> String {
        self.url(&format!("{}/{}", TASKS_URL, id))
    }

    /// Sends the request and turns transport failures and non-success
    /// statuses into [`ApiError`].
    async fn send(&self, method: Method, url: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Connection {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        tracing::debug!(%method, url, %status, "task board request");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            url: url.to_string(),
            status,
            detail: extract_detail(&body),
        })
    }

    async fn json<T: DeserializeOwned>(&self, url: &str, response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| ApiError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

impl TaskApi for TaskBoardClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn probe(&self) -> Result<(), ApiError> {
        let url = self.probe_url.clone();
        msg_debug!(format!("Probing {}", url));
        self.send(Method::GET, &url, self.client.get(&url)).await?;
        Ok(())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.url(TASKS_URL);
        let response = self.send(Method::GET, &url, self.client.get(&url)).await?;
        self.json(&url, response).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let url = self.url(TASKS_URL);
        let response = self.send(Method::POST, &url, self.client.post(&url).json(task)).await?;
        self.json(&url, response).await
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task, ApiError> {
        let url = self.task_url(id);
        let response = self.send(Method::PUT, &url, self.client.put(&url).json(patch)).await?;
        self.json(&url, response).await
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError> {
        let url = self.task_url(id);
        self.send(Method::DELETE, &url, self.client.delete(&url)).await?;
        Ok(())
    }

    async fn stats(&self) -> Result<Stats, ApiError> {
        let url = self.url(STATS_URL);
        let response = self.send(Method::GET, &url, self.client.get(&url)).await?;
        self.json(&url, response).await
    }
}

/// `scheme://host:port/` of `base_url`, or `base_url` itself when it does not parse.
fn origin_root(base_url: &str) -> String {
    match Url::parse(base_url) {
        Ok(mut url) => {
            url.set_path("/");
            url.set_query(None);
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => base_url.to_string(),
    }
}

/// Pulls the human-readable `detail` out of an error payload.
///
/// `detail` is either a string or, for request validation errors, a list of
/// objects carrying a `msg` each.
pub fn extract_detail(body: &str) -> Option<String> {
    let payload: Value = serde_json::from_str(body).ok()?;
    match payload.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .map(|item| match item.get("msg").and_then(Value::as_str) {
                    Some(msg) => msg.to_string(),
                    None => item.to_string(),
                })
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
