//! Formatting helper functions for the list surface
//!
//! This module turns the task list and the draft into rows and display text.

use crate::todo::{Draft, TaskId, TaskRecord, format_date};

/// Shown in place of the list when there are no tasks
pub const EMPTY_PLACEHOLDER: &str = "Nothing to do yet";

/// One rendered list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 0-based position in the list
    pub index: usize,
    pub id: TaskId,
    pub title: String,
    pub date: String,
    pub photo: Option<String>,
}

/// Build one row per record, in list order
pub fn rows(tasks: &[TaskRecord]) -> Vec<Row> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| Row {
            index,
            id: task.id.clone(),
            title: task.title.clone(),
            date: format_date(task.due_date),
            photo: task.photo.as_ref().map(|p| p.uri().to_string()),
        })
        .collect()
}

/// Label of the commit button for the current draft
pub fn commit_label(draft: &Draft) -> &'static str {
    if draft.editing_id.is_some() {
        "Save"
    } else {
        "Add"
    }
}

/// Format the task list into a display string
///
/// Row numbers are 1-based, matching the indices the CLI accepts.
pub fn format_list(tasks: &[TaskRecord]) -> String {
    if tasks.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let mut result = format!("Todo List ({} item(s)):\n\n", tasks.len());
    for row in rows(tasks) {
        result.push_str(&format!("{}. {}\n", row.index + 1, row.title));
        result.push_str(&format!("   Due: {}\n", row.date));
        match row.photo {
            Some(ref uri) => result.push_str(&format!("   Photo: {}\n", uri)),
            None => result.push_str("   Photo: none\n"),
        }
        result.push_str("   [edit] [long-press to delete]\n");
    }

    result
}

/// Format the input form state
pub fn format_draft(draft: &Draft) -> String {
    let mut result = String::new();
    if let Some(ref id) = draft.editing_id {
        result.push_str(&format!("Editing: {}\n", id));
    }
    result.push_str(&format!("Title: {}\n", draft.title));
    result.push_str(&format!("Date: {}\n", format_date(draft.due_date)));
    match draft.photo {
        Some(ref photo) => result.push_str(&format!("Photo: {}\n", photo)),
        None => result.push_str("Photo: none\n"),
    }
    result.push_str(&format!("[{}]\n", commit_label(draft)));
    result
}
