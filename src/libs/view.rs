//! Terminal rendering of the board.
//!
//! Every function returns the rendered text so commands decide when to
//! print it; nothing here touches the state.

use super::formatter::{format_board_date, format_task_date, truncate_title};
use super::messages::{self, Message};
use super::progress::{ProgressRing, GAUGE_WIDTH};
use super::state::BoardState;
use super::task::{Stats, Task};
use chrono::NaiveDate;
use prettytable::{format, row, Table};

const MAX_TITLE_WIDTH: usize = 60;

pub struct View {}

impl View {
    /// Full board: header, banner, stats card, task list and footer.
    pub fn board(state: &BoardState, today: NaiveDate) -> String {
        let mut sections = vec![Self::header(today)];
        if let Some(banner) = Self::banner(state) {
            sections.push(banner);
        }
        sections.push(Self::stats(&state.stats));
        sections.push(Self::task_list(state));
        sections.push(Self::footer(&state.stats));
        sections.join("\n")
    }

    pub fn header(today: NaiveDate) -> String {
        format!(
            "{}\n{}\n{}",
            Message::BoardTitle,
            Message::BoardSubtitle,
            format_board_date(today)
        )
    }

    /// Connection banner when offline, otherwise the current error if any.
    pub fn banner(state: &BoardState) -> Option<String> {
        if state.is_offline() {
            return Some(format!(
                "{}\n{}",
                messages::error(Message::BackendNotRunning),
                Message::RetryHint
            ));
        }
        state.error.as_ref().map(|error| format!("❌ {}", error))
    }

    /// Task table, or the matching empty state.
    pub fn task_list(state: &BoardState) -> String {
        if state.is_offline() {
            return format!("{}\n{}", Message::WaitingForBackend, Message::RetryHint);
        }
        if state.tasks.is_empty() {
            return Message::NoTasksYet.to_string();
        }
        format!("{}\n{}", Message::YourTasks, Self::tasks(&state.tasks))
    }

    pub fn tasks(tasks: &[Task]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["ID", "", "TASK", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                Self::check_mark(task),
                truncate_title(&task.title, MAX_TITLE_WIDTH),
                format_task_date(&task.created_at)
            ]);
        }
        table.to_string()
    }

    pub fn stats(stats: &Stats) -> String {
        let ring = ProgressRing::new(stats.progress);

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.add_row(row![Message::StatsTotal, stats.total]);
        table.add_row(row![Message::StatsCompleted, stats.completed]);
        table.add_row(row![Message::StatsPending, stats.pending()]);

        format!("{}\n{}\n{}", Message::ProgressTitle, Self::ring(&ring), table)
    }

    /// One-line rendition of the progress ring.
    pub fn ring(ring: &ProgressRing) -> String {
        format!("[{}] {} {}", ring.gauge(GAUGE_WIDTH), ring.label(), Message::ProgressComplete)
    }

    pub fn footer(stats: &Stats) -> String {
        Message::StatsFooter {
            total: stats.total,
            completed: stats.completed,
        }
        .to_string()
    }

    /// Selection label for a task in interactive lists.
    pub fn task_label(task: &Task) -> String {
        format!("{} {}", Self::check_mark(task), truncate_title(&task.title, MAX_TITLE_WIDTH))
    }

    fn check_mark(task: &Task) -> &'static str {
        if task.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}
