//! Photo acquisition from a camera or a gallery
//!
//! The platform side is abstracted behind [`PhotoSource`]. [`acquire_photo`]
//! runs the permission-then-launch flow and folds both steps into a single
//! [`CaptureOutcome`] that the caller matches on. Only `Granted` carries a
//! photo; `Denied` and `Cancelled` leave the draft untouched.

use crate::todo::PhotoRef;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Where a photo comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Camera,
    Gallery,
}

impl SourceKind {
    /// Message shown when the OS refuses access
    pub fn denial_message(self) -> &'static str {
        match self {
            SourceKind::Camera => "Camera permission is required",
            SourceKind::Gallery => "Gallery permission is required",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Camera => "camera",
            SourceKind::Gallery => "gallery",
        }
    }
}

/// Answer to a runtime permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Options passed to the capture UI
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOptions {
    /// Allow in-place crop/edit before returning
    pub allow_editing: bool,
    /// Compression quality in 0.0..=1.0
    pub quality: f32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            allow_editing: true,
            quality: 0.8,
        }
    }
}

/// Resolved result of a capture flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Granted(PhotoRef),
    Denied,
    Cancelled,
}

/// A camera or gallery provided by the platform
#[async_trait]
pub trait PhotoSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    async fn request_permission(&self) -> PermissionStatus;

    /// Open the capture/selection UI. `None` means the user backed out.
    async fn launch(&self, options: &CaptureOptions) -> Option<PhotoRef>;
}

/// Blocking user-facing notification
pub trait Alert: Send + Sync {
    fn alert(&self, message: &str);
}

/// Request permission, then launch the source if it was granted
pub async fn acquire_photo<S>(source: &S, options: &CaptureOptions) -> CaptureOutcome
where
    S: PhotoSource + ?Sized,
{
    let kind = source.kind();
    if source.request_permission().await == PermissionStatus::Denied {
        warn!(source = kind.label(), "permission denied");
        return CaptureOutcome::Denied;
    }

    match source.launch(options).await {
        Some(photo) => {
            debug!(source = kind.label(), photo = %photo, "photo acquired");
            CaptureOutcome::Granted(photo)
        }
        None => {
            debug!(source = kind.label(), "capture cancelled");
            CaptureOutcome::Cancelled
        }
    }
}
