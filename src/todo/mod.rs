//! Task list domain model
//!
//! This module contains the task records, the draft being composed or edited,
//! and the store that owns both. It is split into submodules:
//! - `task`: Task record, identifiers and date helpers
//! - `draft`: The transient form state and its creating/editing discriminator
//! - `store`: The task list store and its mutation protocol

mod draft;
mod store;
mod task;

pub use draft::{Draft, DraftMode};
pub use store::{CommitOutcome, StoreObserver, TaskStore};
pub use task::{IdGenerator, PhotoRef, TaskId, TaskRecord, format_date, local_date_today};
