use super::connect_board;
use crate::{libs::view::View, msg_print};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let board = connect_board().await?;

    msg_print!(View::stats(&board.state().stats));
    Ok(())
}
