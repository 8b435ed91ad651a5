use super::connect_board;
use crate::{
    libs::{board::BoardError, messages::Message, task::TaskId, view::View},
    msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// ID of the task, as shown by `taskboard list`
    id: String,
}

pub async fn cmd(args: ToggleArgs) -> Result<()> {
    let mut board = connect_board().await?;
    let id = TaskId::from(args.id.as_str());

    match board.toggle_task(&id).await {
        Ok(task) => {
            match task.completed {
                true => msg_success!(Message::TaskCompleted(task.title)),
                false => msg_success!(Message::TaskReopened(task.title)),
            }
            msg_print!(View::footer(&board.state().stats));
            Ok(())
        }
        Err(BoardError::Reload { message, .. }) => {
            msg_warning!(message);
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
