//! Client side of the Task Board HTTP JSON API.
//!
//! [`TaskApi`] is the seam between the board logic and the network: the
//! board only ever talks to this trait, [`TaskBoardClient`] implements it
//! over `reqwest`, and tests substitute an in-memory implementation.
//!
//! ## Endpoints
//!
//! | Method   | Path          | Body                  | Response          |
//! |----------|---------------|-----------------------|-------------------|
//! | `GET`    | `/`           |                       | any success       |
//! | `GET`    | `/tasks`      |                       | `[Task]`          |
//! | `POST`   | `/tasks`      | `{"title": ..}`       | `Task` / `detail` |
//! | `PUT`    | `/tasks/{id}` | `{"completed": ..}`   | `Task`            |
//! | `DELETE` | `/tasks/{id}` |                       | any success       |
//! | `GET`    | `/stats`      |                       | `Stats`           |

use crate::libs::task::{NewTask, Stats, Task, TaskId, TaskPatch};
use reqwest::StatusCode;
use thiserror::Error;

pub mod taskboard;

pub use taskboard::TaskBoardClient;

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never got a response: refused connection, DNS, timeout.
    #[error("cannot reach {url}: {reason}")]
    Connection { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("{url} responded with {status}{}", detail_suffix(.detail))]
    Status {
        url: String,
        status: StatusCode,
        detail: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {}", d)).unwrap_or_default()
}

impl ApiError {
    /// Backend-provided error detail, if the server sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, ApiError::Connection { .. })
    }
}

/// Operations the Task Board backend exposes.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    /// Base URL requests are resolved against, for messages.
    fn base_url(&self) -> &str;

    /// Liveness probe; any success status means the backend is up.
    async fn probe(&self) -> Result<(), ApiError>;

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError>;

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task, ApiError>;

    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError>;

    async fn stats(&self) -> Result<Stats, ApiError>;
}
