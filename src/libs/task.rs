//! Task and statistics models exchanged with the Task Board API.
//!
//! The backend owns every record; the client only keeps the last copy it
//! fetched. Identifiers are opaque: the API may hand out integers or strings
//! and the client only ever echoes them back in URLs.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Server-assigned task identifier.
///
/// The backend may use integers or strings. Two ids are equal when their
/// textual forms match, so `7` from the wire and `"7"` typed on the command
/// line name the same task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl PartialEq for TaskId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TaskId::Number(a), TaskId::Number(b)) => a == b,
            (TaskId::Text(a), TaskId::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for TaskId {}

impl Hash for TaskId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(id) => write!(f, "{}", id),
            TaskId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        TaskId::Number(id)
    }
}

impl From<&str> for TaskId {
    /// Command-line ids are kept verbatim; `007` stays `007`.
    fn from(id: &str) -> Self {
        TaskId::Text(id.trim().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Local>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Local>,
}

/// Aggregate counts computed by the backend after every write.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub total: u64,
    pub completed: u64,
    /// Completion percentage, 0 to 100.
    pub progress: f64,
}

impl Stats {
    pub fn pending(&self) -> u64 {
        self.total.saturating_sub(self.completed)
    }

}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
}

impl NewTask {
    /// Trims the title; returns `None` when nothing is left.
    pub fn new(title: &str) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self { title: title.to_string() })
    }
}

/// Body of `PUT /tasks/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaskPatch {
    pub completed: bool,
}

/// Orders tasks by last update, newest first. Ties keep the order the API returned.
pub fn sort_by_recent_update(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

/// Wire format for task timestamps.
///
/// Accepts RFC 3339 as well as naive ISO-8601 without an offset, which is
/// read as local time.
pub mod timestamp {
    use super::*;
    use serde::de::Error;

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn parse(value: &str) -> Option<DateTime<Local>> {
        if let Ok(date) = DateTime::parse_from_rfc3339(value) {
            return Some(date.with_timezone(&Local));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
    }

    pub fn serialize<S: Serializer>(date: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Local>, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse(&value).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{}'", value)))
    }
}
