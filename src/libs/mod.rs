//! Core library modules of the taskboard client.
//!
//! ## Usage
//!
//! ```rust
//! use taskboard::libs::state::{Action, BoardState};
//!
//! let state = BoardState::new().reduce(Action::ProbeFailed);
//! assert!(!state.controls_enabled());
//! assert!(state.shows_retry());
//! ```

pub mod board;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod progress;
pub mod prompt;
pub mod state;
pub mod task;
pub mod view;
