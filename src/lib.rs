//! Photo Todo Library
//!
//! This library provides the state core of a todo-list application in which
//! each task carries a due date and optionally a photo taken with a camera or
//! picked from a gallery.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Domain Layer**: `todo` module - Task records, the draft and the task list store
//! - **Collaborator Layer**: `capture`, `picker` - Traits for platform services
//!   (camera, gallery, date picker, alerts), plus terminal stand-ins in `local`
//! - **Application Layer**: `app` module - `TodoApp` routes UI events through
//!   the collaborators into the store and keeps transient `effects` apart from task data
//!
//! # Example
//!
//! ```
//! use photo_todo::{CommitOutcome, TaskStore};
//!
//! let mut store = TaskStore::new();
//! store.begin_draft();
//! store.set_draft_title("  Buy milk ");
//! assert!(matches!(store.commit_draft(), CommitOutcome::Created(_)));
//! assert_eq!(store.tasks()[0].title, "Buy milk");
//! ```

pub mod app;
pub mod capture;
pub mod config;
pub mod effects;
pub mod local;
pub mod logging;
pub mod picker;
pub mod render;
pub mod todo;

// Re-export commonly used types
pub use app::{Collaborators, TodoApp};
pub use capture::{
    Alert, CaptureOptions, CaptureOutcome, PermissionStatus, PhotoSource, SourceKind,
    acquire_photo,
};
pub use config::AppConfig;
pub use picker::DatePicker;
pub use todo::{
    CommitOutcome, Draft, DraftMode, PhotoRef, StoreObserver, TaskId, TaskRecord, TaskStore,
};
