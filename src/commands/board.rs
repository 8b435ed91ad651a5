//! Interactive task board.
//!
//! Renders the board, then offers only the actions the current state
//! allows: while the backend is unreachable that is "Retry connection" and
//! "Quit". Failed actions are not fatal; their error lands in the state and
//! shows up as a banner on the next render.

use super::open_board;
use crate::{
    api::TaskApi,
    libs::{
        board::{Board, BoardError, DeleteOutcome},
        messages::Message,
        prompt::TerminalConfirm,
        state::BoardState,
        task::TaskId,
        view::View,
    },
    msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    Add,
    Toggle,
    Delete,
    Refresh,
    Retry,
    Dismiss,
    Quit,
}

impl BoardAction {
    /// Actions offered for `state`, in menu order.
    pub fn available(state: &BoardState) -> Vec<BoardAction> {
        if !state.is_online() {
            return vec![BoardAction::Retry, BoardAction::Quit];
        }

        let mut actions = Vec::new();
        if state.controls_enabled() {
            actions.push(BoardAction::Add);
            if !state.tasks.is_empty() {
                actions.push(BoardAction::Toggle);
                actions.push(BoardAction::Delete);
            }
        }
        actions.push(BoardAction::Refresh);
        if state.error.is_some() {
            actions.push(BoardAction::Dismiss);
        }
        actions.push(BoardAction::Quit);
        actions
    }

    fn message(&self) -> Message {
        match self {
            BoardAction::Add => Message::ActionAdd,
            BoardAction::Toggle => Message::ActionToggle,
            BoardAction::Delete => Message::ActionDelete,
            BoardAction::Refresh => Message::ActionRefresh,
            BoardAction::Retry => Message::ActionRetry,
            BoardAction::Dismiss => Message::ActionDismiss,
            BoardAction::Quit => Message::ActionQuit,
        }
    }
}

impl fmt::Display for BoardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

pub async fn cmd() -> Result<()> {
    let mut board = open_board()?;
    // An unreachable backend is rendered as a banner, not returned
    if let Err(error) = board.connect().await {
        tracing::debug!(%error, "initial connect failed");
    }

    loop {
        msg_print!(View::board(board.state(), Local::now().date_naive()));

        let actions = BoardAction::available(board.state());
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectAction.to_string())
            .items(&actions)
            .default(0)
            .interact()?;

        let action = actions[selection];
        if action == BoardAction::Quit {
            msg_print!(Message::Goodbye);
            return Ok(());
        }

        match run_action(&mut board, action).await {
            Ok(Some(message)) => msg_success!(message),
            Ok(None) => {}
            Err(BoardError::Prompt(error)) => return Err(error),
            Err(error) => tracing::debug!(%error, ?action, "board action failed"),
        }
    }
}

/// Executes one menu action, returning a success message worth printing.
async fn run_action<A: TaskApi>(board: &mut Board<A>, action: BoardAction) -> Result<Option<Message>, BoardError> {
    match action {
        BoardAction::Add => {
            let title: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptNewTask.to_string())
                .with_initial_text(board.state().draft.clone())
                .allow_empty(true)
                .interact_text()
                .map_err(anyhow::Error::from)?;
            board.set_draft(&title);
            msg_print!(Message::Adding);
            let task = board.submit().await?;
            Ok(Some(Message::TaskCreated(task.title)))
        }
        BoardAction::Toggle => {
            let Some(id) = select_task(board.state())? else {
                return Ok(None);
            };
            let task = board.toggle_task(&id).await?;
            Ok(Some(match task.completed {
                true => Message::TaskCompleted(task.title),
                false => Message::TaskReopened(task.title),
            }))
        }
        BoardAction::Delete => {
            let Some(id) = select_task(board.state())? else {
                return Ok(None);
            };
            match board.delete_task(&id, &TerminalConfirm).await? {
                DeleteOutcome::Deleted(task) => Ok(Some(Message::TaskDeleted(task.title))),
                DeleteOutcome::Kept => Ok(None),
            }
        }
        BoardAction::Refresh => board.refresh().await.map(|_| None),
        BoardAction::Retry => board.retry().await.map(|_| None),
        BoardAction::Dismiss => {
            board.dismiss_error();
            Ok(None)
        }
        BoardAction::Quit => Ok(None),
    }
}

/// Lets the user pick a task; `None` when the selection is cancelled.
fn select_task(state: &BoardState) -> Result<Option<TaskId>, BoardError> {
    let labels: Vec<String> = state.tasks.iter().map(View::task_label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(anyhow::Error::from)?;

    Ok(selection.map(|index| state.tasks[index].id.clone()))
}
