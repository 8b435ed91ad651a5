use super::connect_board;
use crate::{
    libs::{
        board::{BoardError, DeleteOutcome},
        messages::Message,
        prompt::{FixedAnswer, TerminalConfirm},
        task::TaskId,
        view::View,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task, as shown by `taskboard list`
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let mut board = connect_board().await?;
    let id = TaskId::from(args.id.as_str());

    let outcome = match args.yes {
        true => board.delete_task(&id, &FixedAnswer(true)).await,
        false => board.delete_task(&id, &TerminalConfirm).await,
    };

    match outcome {
        Ok(DeleteOutcome::Deleted(task)) => {
            msg_success!(Message::TaskDeleted(task.title));
            msg_print!(View::footer(&board.state().stats));
            Ok(())
        }
        Ok(DeleteOutcome::Kept) => {
            msg_info!(Message::TaskKept);
            Ok(())
        }
        Err(BoardError::Reload { message, .. }) => {
            msg_warning!(message);
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
