use super::connect_board;
use crate::{
    libs::{board::BoardError, messages::Message, view::View},
    msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; multiple words are joined with spaces
    #[arg(required = true)]
    title: Vec<String>,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let mut board = connect_board().await?;

    match board.add_task(&args.title.join(" ")).await {
        Ok(task) => {
            msg_success!(Message::TaskCreated(task.title));
            msg_print!(View::footer(&board.state().stats));
            Ok(())
        }
        // The task exists; only the follow-up reload failed
        Err(BoardError::Reload { message, .. }) => {
            msg_warning!(message);
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
