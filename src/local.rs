//! Terminal stand-ins for the platform collaborators
//!
//! The CLI has no camera or native picker, so each collaborator answers with
//! whatever the command line queued for it. An unqueued answer behaves like the
//! user dismissing the surface.

use crate::capture::{Alert, CaptureOptions, PermissionStatus, PhotoSource, SourceKind};
use crate::picker::DatePicker;
use crate::todo::PhotoRef;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Single-slot answer shared between the command loop and a collaborator
#[derive(Debug)]
pub struct Answer<T>(Arc<Mutex<Option<T>>>);

impl<T> Clone for Answer<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Default for Answer<T> {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(None)))
    }
}

impl<T> Answer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next answer, replacing an unconsumed one
    pub fn set(&self, value: Option<T>) {
        *self.lock() = value;
    }

    pub fn take(&self) -> Option<T> {
        self.lock().take()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<T>> {
        // A poisoned slot only ever holds a plain value
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Date picker answering with a queued date
#[derive(Debug, Clone, Default)]
pub struct ScriptedDatePicker {
    answer: Answer<NaiveDate>,
}

impl ScriptedDatePicker {
    pub fn new(answer: Answer<NaiveDate>) -> Self {
        Self { answer }
    }
}

#[async_trait]
impl DatePicker for ScriptedDatePicker {
    async fn pick(&self, _current: NaiveDate) -> Option<NaiveDate> {
        self.answer.take()
    }
}

/// Camera or gallery backed by local image files
#[derive(Debug, Clone)]
pub struct FilePhotoSource {
    kind: SourceKind,
    permitted: bool,
    answer: Answer<PathBuf>,
}

impl FilePhotoSource {
    pub fn new(kind: SourceKind, permitted: bool, answer: Answer<PathBuf>) -> Self {
        Self {
            kind,
            permitted,
            answer,
        }
    }
}

#[async_trait]
impl PhotoSource for FilePhotoSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    async fn request_permission(&self) -> PermissionStatus {
        if self.permitted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    async fn launch(&self, _options: &CaptureOptions) -> Option<PhotoRef> {
        let path = self.answer.take()?;
        match tokio::fs::canonicalize(&path).await {
            Ok(full) => Some(PhotoRef::new(format!("file://{}", full.display()))),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "image not readable, treating as cancelled");
                None
            }
        }
    }
}

/// Prints alerts to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalAlert;

impl Alert for TerminalAlert {
    fn alert(&self, message: &str) {
        eprintln!("! {}", message);
    }
}
