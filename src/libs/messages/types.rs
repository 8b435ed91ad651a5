#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === CONNECTION MESSAGES ===
    BackendNotRunning,
    BackendNotRunningHint(String), // api url
    BackendOnline(String),         // api url
    CheckingConnection(String),    // api url
    WaitingForBackend,
    RetryHint,

    // === TASK MESSAGES ===
    TaskTitleRequired,
    TaskAddFailed,
    TaskUpdateError,
    TaskDeleteError,
    TaskNotFoundWithId(String),
    TaskCreated(String),   // title
    TaskCompleted(String), // title
    TaskReopened(String),  // title
    TaskDeleted(String),   // title
    TaskKept,
    ConfirmDeleteTask,
    NoTasksYet,
    TasksLoadFailed(String),
    StatsLoadFailed(String),
    ReloadAfterWriteFailed(String),

    // === BOARD MESSAGES ===
    BoardTitle,
    BoardSubtitle,
    YourTasks,
    ProgressTitle,
    ProgressComplete,
    StatsTotal,
    StatsCompleted,
    StatsPending,
    StatsFooter { total: u64, completed: u64 },
    Adding,

    // === BOARD ACTIONS ===
    ActionAdd,
    ActionToggle,
    ActionDelete,
    ActionRefresh,
    ActionRetry,
    ActionDismiss,
    ActionQuit,
    PromptNewTask,
    PromptSelectAction,
    PromptSelectTask,
    Goodbye,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleServer,
    PromptApiUrl,
    PromptTimeout,
    InvalidTimeout(String),
}
