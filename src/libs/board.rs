//! Board controller: connectivity monitor, loaders and mutations.
//!
//! [`Board`] owns a [`BoardState`] and a [`TaskApi`]. Every operation turns
//! its outcome into [`Action`]s on the state and also returns it as a
//! `Result`, so callers can both render the state and react to the error.
//!
//! ## Synchronization Model
//!
//! The backend is the only source of truth. After every successful write
//! the board reloads the whole task list and the stats; nothing is patched
//! locally. A reload that fails after a successful write is reported as
//! [`BoardError::Reload`] and recorded as the state's error message, and the
//! previously loaded data stays on screen.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::api::TaskBoardClient;
//! use taskboard::libs::{board::Board, config::Config, prompt::TerminalConfirm};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = TaskBoardClient::new(&Config::read()?.server())?;
//! let mut board = Board::new(client);
//! board.connect().await?;
//! let task = board.add_task("Buy milk").await?;
//! board.toggle_task(&task.id).await?;
//! board.delete_task(&task.id, &TerminalConfirm).await?;
//! # Ok(())
//! # }
//! ```

use super::messages::Message;
use super::prompt::Confirm;
use super::state::{Action, BoardState};
use super::task::{NewTask, Task, TaskId, TaskPatch};
use crate::api::{ApiError, TaskApi};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    /// The last liveness probe failed or never ran; mutating controls are disabled.
    #[error("{}", Message::BackendNotRunning)]
    Offline,

    /// Rejected locally, no request was sent.
    #[error("{0}")]
    Validation(Message),

    #[error("{}", Message::TaskNotFoundWithId(.0.to_string()))]
    NotFound(TaskId),

    /// A create, toggle or delete request failed.
    #[error("{message}")]
    Write {
        message: String,
        #[source]
        source: ApiError,
    },

    /// Reloading the list or the stats failed.
    #[error("{message}")]
    Reload {
        message: String,
        #[source]
        source: ApiError,
    },

    #[error(transparent)]
    Prompt(#[from] anyhow::Error),
}

/// What happened to a task after a delete request.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(Task),
    /// The user declined the confirmation.
    Kept,
}

pub struct Board<A: TaskApi> {
    api: A,
    state: BoardState,
}

impl<A: TaskApi> Board<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: BoardState::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
    }

    pub fn set_draft(&mut self, draft: &str) {
        self.dispatch(Action::DraftChanged(draft.to_string()));
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(Action::ErrorDismissed);
    }

    /// Probes the backend and, when it is up, loads tasks and stats.
    pub async fn connect(&mut self) -> Result<(), BoardError> {
        match self.api.probe().await {
            Ok(()) => {
                tracing::debug!(url = self.api.base_url(), "backend is up");
                self.dispatch(Action::ProbeSucceeded);
                self.refresh().await
            }
            Err(error) => {
                tracing::warn!(%error, "liveness probe failed");
                self.dispatch(Action::ProbeFailed);
                Err(BoardError::Offline)
            }
        }
    }

    /// Clears the current error and re-runs the probe.
    pub async fn retry(&mut self) -> Result<(), BoardError> {
        self.dispatch(Action::ErrorDismissed);
        self.connect().await
    }

    /// Replaces the task list with a fresh copy from the backend.
    pub async fn load_tasks(&mut self) -> Result<(), BoardError> {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                self.dispatch(Action::TasksLoaded(tasks));
                Ok(())
            }
            Err(source) => {
                tracing::warn!(error = %source, "loading tasks failed");
                let message = Message::TasksLoadFailed(source.to_string()).to_string();
                self.dispatch(Action::ReloadFailed(message.clone()));
                Err(BoardError::Reload { message, source })
            }
        }
    }

    /// Replaces the stats with a fresh copy from the backend.
    pub async fn load_stats(&mut self) -> Result<(), BoardError> {
        match self.api.stats().await {
            Ok(stats) => {
                self.dispatch(Action::StatsLoaded(stats));
                Ok(())
            }
            Err(source) => {
                tracing::warn!(error = %source, "loading stats failed");
                let message = Message::StatsLoadFailed(source.to_string()).to_string();
                self.dispatch(Action::ReloadFailed(message.clone()));
                Err(BoardError::Reload { message, source })
            }
        }
    }

    /// Runs both loaders; both always run, the first failure is returned.
    pub async fn refresh(&mut self) -> Result<(), BoardError> {
        let tasks = self.load_tasks().await;
        let stats = self.load_stats().await;
        tasks.and(stats)
    }

    /// Reload after a successful write.
    async fn resync(&mut self) -> Result<(), BoardError> {
        match self.refresh().await {
            Err(BoardError::Reload { source, .. }) => {
                let message = Message::ReloadAfterWriteFailed(source.to_string()).to_string();
                self.dispatch(Action::ReloadFailed(message.clone()));
                Err(BoardError::Reload { message, source })
            }
            other => other,
        }
    }

    fn require_online(&self) -> Result<(), BoardError> {
        if self.state.is_online() {
            Ok(())
        } else {
            Err(BoardError::Offline)
        }
    }

    /// Sets the draft to `title` and submits it.
    pub async fn add_task(&mut self, title: &str) -> Result<Task, BoardError> {
        self.set_draft(title);
        self.submit().await
    }

    /// Creates a task from the current draft.
    ///
    /// A blank draft is rejected before any request is made. On success the
    /// draft is cleared and the board is reloaded.
    pub async fn submit(&mut self) -> Result<Task, BoardError> {
        let Some(new_task) = NewTask::new(&self.state.draft) else {
            self.dispatch(Action::SubmitFailed(Message::TaskTitleRequired.to_string()));
            return Err(BoardError::Validation(Message::TaskTitleRequired));
        };
        self.require_online()?;

        self.dispatch(Action::SubmitStarted);
        match self.api.create_task(&new_task).await {
            Ok(task) => {
                self.dispatch(Action::SubmitSucceeded);
                self.resync().await?;
                Ok(task)
            }
            Err(source) => {
                tracing::warn!(error = %source, "creating task failed");
                let message = source.detail().map(str::to_string).unwrap_or_else(|| Message::TaskAddFailed.to_string());
                self.dispatch(Action::SubmitFailed(message.clone()));
                Err(BoardError::Write { message, source })
            }
        }
    }

    /// Flips the completion flag of a loaded task.
    pub async fn toggle_task(&mut self, id: &TaskId) -> Result<Task, BoardError> {
        self.require_online()?;
        // Requests carry the id as the backend sent it
        let (id, completed) = self
            .state
            .find_task(id)
            .map(|task| (task.id.clone(), task.completed))
            .ok_or_else(|| BoardError::NotFound(id.clone()))?;

        let patch = TaskPatch { completed: !completed };
        match self.api.update_task(&id, &patch).await {
            Ok(task) => {
                self.resync().await?;
                Ok(task)
            }
            Err(source) => {
                tracing::warn!(error = %source, %id, "updating task failed");
                let message = Message::TaskUpdateError.to_string();
                self.dispatch(Action::WriteFailed(message.clone()));
                Err(BoardError::Write { message, source })
            }
        }
    }

    /// Deletes a loaded task once `confirm` agrees. Nothing is sent otherwise.
    pub async fn delete_task(&mut self, id: &TaskId, confirm: &impl Confirm) -> Result<DeleteOutcome, BoardError> {
        self.require_online()?;
        let task = self.state.find_task(id).cloned().ok_or_else(|| BoardError::NotFound(id.clone()))?;

        if !confirm.confirm(&Message::ConfirmDeleteTask.to_string())? {
            return Ok(DeleteOutcome::Kept);
        }

        match self.api.delete_task(&task.id).await {
            Ok(()) => {
                self.resync().await?;
                Ok(DeleteOutcome::Deleted(task))
            }
            Err(source) => {
                tracing::warn!(error = %source, %id, "deleting task failed");
                let message = Message::TaskDeleteError.to_string();
                self.dispatch(Action::WriteFailed(message.clone()));
                Err(BoardError::Write { message, source })
            }
        }
    }
}
