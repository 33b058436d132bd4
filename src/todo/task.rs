use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a due date the way rows and the date button display it (YYYY-MM-DD)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Stable identifier of a task record
///
/// Opaque to callers. Generated once at creation and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Opaque reference to an image resource (typically a file or content URI)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoRef(String);

impl PhotoRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn uri(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A committed task entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Unique identifier, the only lookup key
    pub id: TaskId,
    /// Trimmed, never empty
    pub title: String,
    /// Due date (format: YYYY-MM-DD)
    pub due_date: NaiveDate,
    /// Attached photo, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<PhotoRef>,
}

/// Time-derived id source
///
/// Ids are epoch milliseconds. When the clock has not moved past the last
/// issued value the counter is bumped instead, so ids stay strictly
/// increasing even for several creations within one millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique task ID
    pub fn next_id(&mut self) -> TaskId {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub(crate) fn next_at(&mut self, now_ms: i64) -> TaskId {
        let value = if now_ms > self.last {
            now_ms
        } else {
            self.last + 1
        };
        self.last = value;
        TaskId(value.to_string())
    }
}
