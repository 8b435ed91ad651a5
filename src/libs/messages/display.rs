//! Display implementation for taskboard application messages.
//!
//! All user-facing text lives here so that commands, views and errors
//! share one wording. Parameterized variants interpolate their payload.
//!
//! ```rust
//! use taskboard::libs::messages::Message;
//!
//! assert_eq!(Message::TaskTitleRequired.to_string(), "Please enter a task title");
//! assert_eq!(
//!     Message::StatsFooter { total: 3, completed: 1 }.to_string(),
//!     "3 tasks • 1 completed"
//! );
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONNECTION MESSAGES ===
            Message::BackendNotRunning => "Backend server is not running. Please start the backend server.".to_string(),
            Message::BackendNotRunningHint(url) => format!("Please start the backend server at {}", url),
            Message::BackendOnline(url) => format!("Task Board API is running at {}", url),
            Message::CheckingConnection(url) => format!("Checking connection to {}...", url),
            Message::WaitingForBackend => "Waiting for backend connection...".to_string(),
            Message::RetryHint => "Start the server, then choose \"Retry connection\" or run `taskboard status`.".to_string(),

            // === TASK MESSAGES ===
            Message::TaskTitleRequired => "Please enter a task title".to_string(),
            Message::TaskAddFailed => "Failed to add task".to_string(),
            Message::TaskUpdateError => "Error updating task".to_string(),
            Message::TaskDeleteError => "Error deleting task".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskCreated(title) => format!("Task '{}' added", title),
            Message::TaskCompleted(title) => format!("Task '{}' marked as completed", title),
            Message::TaskReopened(title) => format!("Task '{}' marked as pending", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskKept => "Task was not deleted.".to_string(),
            Message::ConfirmDeleteTask => "Are you sure you want to delete this task?".to_string(),
            Message::NoTasksYet => "No tasks yet. Add your first task!".to_string(),
            Message::TasksLoadFailed(error) => format!("Failed to load tasks: {}", error),
            Message::StatsLoadFailed(error) => format!("Failed to load stats: {}", error),
            Message::ReloadAfterWriteFailed(error) => format!("Changes were saved, but the board could not be reloaded: {}", error),

            // === BOARD MESSAGES ===
            Message::BoardTitle => "Task Board".to_string(),
            Message::BoardSubtitle => "Organize your tasks with simplicity".to_string(),
            Message::YourTasks => "Your Tasks".to_string(),
            Message::ProgressTitle => "Progress".to_string(),
            Message::ProgressComplete => "Complete".to_string(),
            Message::StatsTotal => "Total Tasks".to_string(),
            Message::StatsCompleted => "Completed".to_string(),
            Message::StatsPending => "Pending".to_string(),
            Message::StatsFooter { total, completed } => format!("{} tasks • {} completed", total, completed),
            Message::Adding => "Adding...".to_string(),

            // === BOARD ACTIONS ===
            Message::ActionAdd => "Add new task".to_string(),
            Message::ActionToggle => "Toggle task completion".to_string(),
            Message::ActionDelete => "Delete task".to_string(),
            Message::ActionRefresh => "Refresh".to_string(),
            Message::ActionRetry => "Retry connection".to_string(),
            Message::ActionDismiss => "Dismiss error".to_string(),
            Message::ActionQuit => "Quit".to_string(),
            Message::PromptNewTask => "What needs to be done?".to_string(),
            Message::PromptSelectAction => "What would you like to do?".to_string(),
            Message::PromptSelectTask => "Select a task".to_string(),
            Message::Goodbye => "Bye!".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigModuleServer => "Task Board server settings".to_string(),
            Message::PromptApiUrl => "Enter the Task Board API URL".to_string(),
            Message::PromptTimeout => "Request timeout in seconds (empty for none)".to_string(),
            Message::InvalidTimeout(value) => format!("'{}' is not a number of seconds", value),
        };
        write!(f, "{}", text)
    }
}
