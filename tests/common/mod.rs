//! Common test utilities for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use photo_todo::{
    Alert, AppConfig, CaptureOptions, Collaborators, CommitOutcome, DatePicker, PermissionStatus,
    PhotoRef, PhotoSource, SourceKind, TaskId, TaskStore, TodoApp,
};
use std::sync::{Arc, Mutex};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn fixed_today() -> NaiveDate {
    date(2024, 5, 20)
}

/// Create a task through the draft and return its ID
pub fn create_task(store: &mut TaskStore, title: &str) -> TaskId {
    store.begin_draft();
    store.set_draft_title(title);
    match store.commit_draft() {
        CommitOutcome::Created(id) => id,
        other => panic!("expected Created, got {:?}", other),
    }
}

pub fn titles(store: &TaskStore) -> Vec<String> {
    store.tasks().iter().map(|t| t.title.clone()).collect()
}

/// Picker returning a preset answer
#[derive(Clone, Default)]
pub struct FakePicker {
    pub answer: Arc<Mutex<Option<NaiveDate>>>,
    pub shown_with: Arc<Mutex<Vec<NaiveDate>>>,
}

#[async_trait]
impl DatePicker for FakePicker {
    async fn pick(&self, current: NaiveDate) -> Option<NaiveDate> {
        self.shown_with.lock().unwrap().push(current);
        *self.answer.lock().unwrap()
    }
}

/// Camera/gallery with a preset permission and result
#[derive(Clone)]
pub struct FakeSource {
    pub kind: SourceKind,
    pub permission: Arc<Mutex<PermissionStatus>>,
    pub result: Arc<Mutex<Option<PhotoRef>>>,
    pub launches: Arc<Mutex<Vec<CaptureOptions>>>,
}

impl FakeSource {
    pub fn new(kind: SourceKind) -> Self {
        Self {
            kind,
            permission: Arc::new(Mutex::new(PermissionStatus::Granted)),
            result: Arc::new(Mutex::new(None)),
            launches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn grant_with(&self, uri: &str) {
        *self.permission.lock().unwrap() = PermissionStatus::Granted;
        *self.result.lock().unwrap() = Some(PhotoRef::new(uri));
    }

    pub fn cancel_next(&self) {
        *self.result.lock().unwrap() = None;
    }

    pub fn deny(&self) {
        *self.permission.lock().unwrap() = PermissionStatus::Denied;
    }
}

#[async_trait]
impl PhotoSource for FakeSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    async fn request_permission(&self) -> PermissionStatus {
        *self.permission.lock().unwrap()
    }

    async fn launch(&self, options: &CaptureOptions) -> Option<PhotoRef> {
        self.launches.lock().unwrap().push(options.clone());
        self.result.lock().unwrap().clone()
    }
}

/// Records every alert message
#[derive(Clone, Default)]
pub struct RecordingAlert {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Handles onto the fakes wired into a test app
pub struct Fakes {
    pub picker: FakePicker,
    pub camera: FakeSource,
    pub gallery: FakeSource,
    pub alert: RecordingAlert,
}

/// Create a test app with fake collaborators and a fixed clock
pub fn get_test_app(config: AppConfig) -> (TodoApp, Fakes) {
    let fakes = Fakes {
        picker: FakePicker::default(),
        camera: FakeSource::new(SourceKind::Camera),
        gallery: FakeSource::new(SourceKind::Gallery),
        alert: RecordingAlert::default(),
    };
    let services = Collaborators {
        picker: Box::new(fakes.picker.clone()),
        camera: Box::new(fakes.camera.clone()),
        gallery: Box::new(fakes.gallery.clone()),
        alert: Box::new(fakes.alert.clone()),
    };
    let app = TodoApp::with_store(TaskStore::with_clock(fixed_today), config, services);
    (app, fakes)
}

/// Config with the delete acknowledgment disabled
pub fn immediate_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.ui.defer_delete = false;
    config
}
