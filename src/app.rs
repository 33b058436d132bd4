//! Application controller
//!
//! Wires the platform collaborators to the task store. Each `press_*` method
//! corresponds to one UI affordance and runs to completion before the next
//! event is handled, since it holds `&mut self` across every await.

use crate::capture::{Alert, CaptureOutcome, PhotoSource, SourceKind, acquire_photo};
use crate::config::AppConfig;
use crate::effects::{Effect, EffectTable, EffectTarget};
use crate::picker::DatePicker;
use crate::render;
use crate::todo::{CommitOutcome, StoreObserver, TaskId, TaskRecord, TaskStore};
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

/// Platform services the app depends on
pub struct Collaborators {
    pub picker: Box<dyn DatePicker>,
    pub camera: Box<dyn PhotoSource>,
    pub gallery: Box<dyn PhotoSource>,
    pub alert: Box<dyn Alert>,
}

pub struct TodoApp {
    store: TaskStore,
    effects: EffectTable,
    config: AppConfig,
    services: Collaborators,
}

impl TodoApp {
    pub fn new(config: AppConfig, services: Collaborators) -> Self {
        Self::with_store(TaskStore::new(), config, services)
    }

    pub fn with_store(store: TaskStore, config: AppConfig, services: Collaborators) -> Self {
        Self {
            store,
            effects: EffectTable::new(),
            config,
            services,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn effects(&self) -> &EffectTable {
        &self.effects
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.store.subscribe(observer);
    }

    pub fn commit_label(&self) -> &'static str {
        render::commit_label(self.store.draft())
    }

    /// Discard the current draft (including an edit in progress)
    pub fn new_entry(&mut self) {
        self.settle();
        self.store.begin_draft();
    }

    pub fn type_title(&mut self, title: impl Into<String>) {
        self.store.set_draft_title(title);
    }

    /// Open the date picker; returns whether the draft date changed
    pub async fn press_date(&mut self) -> bool {
        let current = self.store.draft().due_date;
        match self.services.picker.pick(current).await {
            Some(date) => {
                self.store.set_draft_date(date);
                true
            }
            None => false,
        }
    }

    pub async fn press_camera(&mut self) -> CaptureOutcome {
        self.capture(SourceKind::Camera).await
    }

    pub async fn press_gallery(&mut self) -> CaptureOutcome {
        self.capture(SourceKind::Gallery).await
    }

    pub fn clear_photo(&mut self) {
        self.store.clear_draft_photo();
    }

    pub fn press_commit(&mut self) -> CommitOutcome {
        self.settle();
        self.store.commit_draft()
    }

    /// Load a task into the form and play the form emphasis
    pub fn press_edit(&mut self, id: &TaskId) -> bool {
        self.settle();
        if !self.store.begin_edit(id) {
            return false;
        }
        self.effects
            .start(EffectTarget::Form, Effect::emphasis(&self.config.ui));
        true
    }

    /// Shake the row, then remove the task
    ///
    /// With `ui.defer_delete` the removal waits for the shake to play out.
    pub async fn long_press(&mut self, id: &TaskId) -> Option<TaskRecord> {
        self.settle();
        self.store.get(id)?;

        let target = EffectTarget::Task(id.clone());
        let duration = self
            .effects
            .start(target.clone(), Effect::shake(&self.config.ui));
        if self.config.ui.defer_delete {
            debug!(task_id = %id, ?duration, "waiting for delete acknowledgment");
            sleep(duration).await;
        }
        self.effects.finish(&target);
        self.store.delete_task(id)
    }

    async fn capture(&mut self, kind: SourceKind) -> CaptureOutcome {
        let source = match kind {
            SourceKind::Camera => self.services.camera.as_ref(),
            SourceKind::Gallery => self.services.gallery.as_ref(),
        };
        let outcome = acquire_photo(source, &self.config.capture.options()).await;

        match &outcome {
            CaptureOutcome::Granted(photo) => self.store.set_draft_photo(photo.clone()),
            CaptureOutcome::Denied => {
                info!(source = kind.label(), "notifying user of denied permission");
                self.services.alert.alert(kind.denial_message());
            }
            CaptureOutcome::Cancelled => {}
        }
        outcome
    }

    fn settle(&mut self) {
        let finished = self.effects.sweep(Instant::now());
        if finished > 0 {
            debug!(finished, "effects finished");
        }
    }
}
