//! Client-side board state and its transitions.
//!
//! [`BoardState`] is never mutated field by field from the outside: every
//! change goes through [`BoardState::apply`] with an [`Action`], so a render
//! always sees a state produced by a known transition.

use super::messages::Message;
use super::task::{sort_by_recent_update, Stats, Task, TaskId};

/// Result of the last liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// No probe has finished yet.
    #[default]
    Unknown,
    Online,
    Offline,
}

/// Everything the client renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    /// Tasks ordered by last update, newest first.
    pub tasks: Vec<Task>,
    pub stats: Stats,
    /// Pending input of the add-task field.
    pub draft: String,
    /// A create request is in flight.
    pub loading: bool,
    pub error: Option<String>,
    pub connectivity: Connectivity,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ProbeSucceeded,
    ProbeFailed,
    DraftChanged(String),
    SubmitStarted,
    SubmitSucceeded,
    /// Local validation or backend rejection of a new task.
    SubmitFailed(String),
    TasksLoaded(Vec<Task>),
    StatsLoaded(Stats),
    /// A list or stats reload failed; prior data stays in place.
    ReloadFailed(String),
    /// A toggle or delete was rejected.
    WriteFailed(String),
    ErrorDismissed,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one transition.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ProbeSucceeded => {
                self.connectivity = Connectivity::Online;
                self.error = None;
            }
            Action::ProbeFailed => {
                self.connectivity = Connectivity::Offline;
                self.loading = false;
                self.error = Some(Message::BackendNotRunning.to_string());
            }
            Action::DraftChanged(draft) => self.draft = draft,
            Action::SubmitStarted => {
                self.loading = true;
                self.error = None;
            }
            Action::SubmitSucceeded => {
                self.loading = false;
                self.draft.clear();
            }
            Action::SubmitFailed(error) => {
                self.loading = false;
                self.error = Some(error);
            }
            Action::TasksLoaded(mut tasks) => {
                sort_by_recent_update(&mut tasks);
                self.tasks = tasks;
            }
            Action::StatsLoaded(stats) => self.stats = stats,
            Action::ReloadFailed(error) | Action::WriteFailed(error) => self.error = Some(error),
            Action::ErrorDismissed => self.error = None,
        }
    }

    /// Same as [`apply`](Self::apply), for chaining in tests and folds.
    pub fn reduce(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }

    pub fn is_online(&self) -> bool {
        self.connectivity == Connectivity::Online
    }

    pub fn is_offline(&self) -> bool {
        self.connectivity == Connectivity::Offline
    }

    /// Toggle, delete and the add-task input are usable.
    pub fn controls_enabled(&self) -> bool {
        self.is_online() && !self.loading
    }

    /// The add-task button is usable: online, idle, and a non-blank draft.
    pub fn can_submit(&self) -> bool {
        self.controls_enabled() && !self.draft.trim().is_empty()
    }

    /// The retry control is shown whenever the last probe failed.
    pub fn shows_retry(&self) -> bool {
        self.is_offline()
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }
}
