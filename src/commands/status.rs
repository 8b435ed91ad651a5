use super::open_board;
use crate::{
    api::TaskApi,
    libs::{
        board::{Board, BoardError},
        messages::Message,
        view::View,
    },
    msg_debug, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;

/// Runs the liveness probe and reports the result with a one-line summary.
pub async fn cmd() -> Result<()> {
    let mut board = open_board()?;
    msg_debug!(Message::CheckingConnection(board.api().base_url().to_string()));

    match check(&mut board).await {
        Ok(reload_error) => {
            msg_success!(Message::BackendOnline(board.api().base_url().to_string()));
            match reload_error {
                Some(message) => msg_warning!(message),
                None => msg_print!(View::footer(&board.state().stats)),
            }
            Ok(())
        }
        Err(BoardError::Offline) => {
            msg_info!(Message::BackendNotRunningHint(board.api().base_url().to_string()));
            Err(BoardError::Offline.into())
        }
        Err(error) => Err(error.into()),
    }
}

/// Connects `board`; connectivity is decided by the probe alone.
///
/// Returns the message of a failed initial load when the backend is up but
/// the list or the stats could not be fetched.
pub async fn check<A: TaskApi>(board: &mut Board<A>) -> Result<Option<String>, BoardError> {
    match board.connect().await {
        Ok(()) => Ok(None),
        Err(BoardError::Reload { message, .. }) => Ok(Some(message)),
        Err(error) => Err(error),
    }
}
