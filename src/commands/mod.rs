pub mod add;
pub mod board;
pub mod delete;
pub mod init;
pub mod list;
pub mod stats;
pub mod status;
pub mod toggle;

use crate::{
    api::{TaskApi, TaskBoardClient},
    libs::{
        board::{Board, BoardError},
        config::Config,
        messages::Message,
    },
    msg_debug, msg_info,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the Task Board API connection")]
    Init(init::InitArgs),
    #[command(about = "Check whether the Task Board API is reachable")]
    Status,
    #[command(about = "List tasks, most recently updated first")]
    List(list::ListArgs),
    #[command(about = "Add a new task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Toggle completion of a task", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show completion statistics")]
    Stats,
    #[command(about = "Open the interactive task board")]
    Board,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Status => status::cmd().await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Toggle(args) => toggle::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Stats => stats::cmd().await,
            Commands::Board => board::cmd().await,
        }
    }
}

/// Builds a board for the configured API without probing it.
pub fn open_board() -> Result<Board<TaskBoardClient>> {
    let server = Config::read()?.server();
    Ok(Board::new(TaskBoardClient::new(&server)?))
}

/// Builds a board and runs the liveness probe with the initial load.
///
/// When the backend is down the hint is printed and the command fails;
/// one-shot commands have no retry control of their own.
pub async fn connect_board() -> Result<Board<TaskBoardClient>> {
    let mut board = open_board()?;
    msg_debug!(Message::CheckingConnection(board.api().base_url().to_string()));

    match board.connect().await {
        Ok(()) => Ok(board),
        Err(BoardError::Offline) => {
            msg_info!(Message::BackendNotRunningHint(board.api().base_url().to_string()));
            Err(BoardError::Offline.into())
        }
        Err(error) => Err(error.into()),
    }
}
