use super::task::{PhotoRef, TaskId, TaskRecord, local_date_today};
use chrono::NaiveDate;

/// Whether committing the draft creates a record or overwrites one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftMode {
    Creating,
    Editing(TaskId),
}

/// The in-progress entry shown in the input form
///
/// Mirrors a task record's fields. `editing_id` is the only discriminator
/// between creating and editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Raw title as typed, trimmed only on commit
    pub title: String,
    pub due_date: NaiveDate,
    pub photo: Option<PhotoRef>,
    pub editing_id: Option<TaskId>,
}

impl Default for Draft {
    fn default() -> Self {
        Self::blank(local_date_today())
    }
}

impl Draft {
    /// Empty draft dated `today`
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            due_date: today,
            photo: None,
            editing_id: None,
        }
    }

    /// Draft preloaded from an existing record, in editing mode
    pub fn from_record(record: &TaskRecord) -> Self {
        Self {
            title: record.title.clone(),
            due_date: record.due_date,
            photo: record.photo.clone(),
            editing_id: Some(record.id.clone()),
        }
    }

    pub fn mode(&self) -> DraftMode {
        match &self.editing_id {
            Some(id) => DraftMode::Editing(id.clone()),
            None => DraftMode::Creating,
        }
    }

    /// Title as it would be stored, or `None` when it is blank
    pub fn committed_title(&self) -> Option<&str> {
        let trimmed = self.title.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
