//! # TaskBoard - terminal client for the Task Board API
//!
//! A command-line client that creates, completes and deletes short text
//! tasks against a running Task Board HTTP service and renders completion
//! statistics as a progress ring.
//!
//! ## Features
//!
//! - **Connectivity Monitor**: Liveness probe with manual retry
//! - **Task Management**: Create, toggle and delete tasks with a full reload after each write
//! - **Statistics**: Server-computed totals rendered as a progress ring
//! - **Interactive Board**: A terminal board that only offers the actions the current state allows
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::commands::Cli;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
