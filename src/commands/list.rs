use super::connect_board;
use crate::{libs::view::View, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the tasks as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let board = connect_board().await?;
    let state = board.state();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state.tasks)?);
        return Ok(());
    }

    msg_print!(View::task_list(state));
    msg_print!(View::footer(&state.stats));
    Ok(())
}
