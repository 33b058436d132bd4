use super::draft::{Draft, DraftMode};
use super::task::{IdGenerator, PhotoRef, TaskId, TaskRecord, local_date_today};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Receives change notifications from the store
///
/// The rendering surface implements this to re-render after every list
/// mutation. `edit_started` fires when a record is loaded into the draft.
pub trait StoreObserver {
    fn tasks_changed(&self, tasks: &[TaskRecord]);

    fn edit_started(&self, _id: &TaskId) {}
}

/// Result of committing the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new record was prepended
    Created(TaskId),
    /// The record being edited was overwritten in place
    Updated(TaskId),
    /// The record being edited no longer exists; nothing changed but the draft was reset
    Vanished(TaskId),
    /// The title was blank; nothing changed and the draft was kept
    Rejected,
}

/// Ordered task list plus the single active draft
///
/// The store is the only owner and mutator of both. Records are created and
/// overwritten exclusively through `commit_draft` and removed through
/// `delete_task`.
pub struct TaskStore {
    /// Newest first
    tasks: Vec<TaskRecord>,
    draft: Draft,
    ids: IdGenerator,
    today: fn() -> NaiveDate,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::with_clock(local_date_today)
    }
}

impl TaskStore {
    /// Create an empty store dated by the local clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store whose default due date comes from `today`
    pub fn with_clock(today: fn() -> NaiveDate) -> Self {
        Self {
            tasks: Vec::new(),
            draft: Draft::blank(today()),
            ids: IdGenerator::new(),
            today,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&TaskRecord> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Id of the record at a display position (0-based)
    pub fn id_at(&self, index: usize) -> Option<&TaskId> {
        self.tasks.get(index).map(|t| &t.id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.draft.editing_id.is_some()
    }

    /// Start composing a new entry, discarding any prior draft
    pub fn begin_draft(&mut self) {
        self.draft = Draft::blank((self.today)());
    }

    /// Load an existing record into the draft
    ///
    /// Returns `false` and leaves the draft alone when `id` is unknown.
    pub fn begin_edit(&mut self, id: &TaskId) -> bool {
        let Some(record) = self.get(id) else {
            debug!(task_id = %id, "edit requested for unknown task");
            return false;
        };

        self.draft = Draft::from_record(record);
        debug!(task_id = %id, "editing task");
        for observer in &self.observers {
            observer.edit_started(id);
        }
        true
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_date(&mut self, date: NaiveDate) {
        self.draft.due_date = date;
    }

    pub fn set_draft_photo(&mut self, photo: PhotoRef) {
        self.draft.photo = Some(photo);
    }

    pub fn clear_draft_photo(&mut self) {
        self.draft.photo = None;
    }

    /// Turn the draft into a created or updated record
    ///
    /// A blank title is a no-op. Otherwise the draft is reset afterwards.
    pub fn commit_draft(&mut self) -> CommitOutcome {
        let Some(title) = self.draft.committed_title().map(str::to_string) else {
            info!("ignoring commit with empty title");
            return CommitOutcome::Rejected;
        };

        let outcome = match self.draft.mode() {
            DraftMode::Editing(id) => match self.tasks.iter_mut().find(|t| t.id == id) {
                Some(record) => {
                    record.title = title;
                    record.due_date = self.draft.due_date;
                    record.photo = self.draft.photo.clone();
                    debug!(task_id = %id, mode = "editing", "task updated");
                    CommitOutcome::Updated(id)
                }
                None => {
                    info!(task_id = %id, "edited task was deleted before save");
                    CommitOutcome::Vanished(id)
                }
            },
            DraftMode::Creating => {
                let id = self.ids.next_id();
                self.tasks.insert(
                    0,
                    TaskRecord {
                        id: id.clone(),
                        title,
                        due_date: self.draft.due_date,
                        photo: self.draft.photo.clone(),
                    },
                );
                debug!(task_id = %id, mode = "creating", "task created");
                CommitOutcome::Created(id)
            }
        };

        self.begin_draft();
        if !matches!(outcome, CommitOutcome::Vanished(_)) {
            self.notify();
        }
        outcome
    }

    /// Remove a record by id, returning it
    pub fn delete_task(&mut self, id: &TaskId) -> Option<TaskRecord> {
        let pos = self.tasks.iter().position(|t| &t.id == id)?;
        let removed = self.tasks.remove(pos);
        debug!(task_id = %id, "task deleted");
        self.notify();
        Some(removed)
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.tasks_changed(&self.tasks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn create(store: &mut TaskStore, title: &str) -> TaskId {
        store.begin_draft();
        store.set_draft_title(title);
        match store.commit_draft() {
            CommitOutcome::Created(id) => id,
            other => panic!("expected Created, got {:?}", other),
        }
    }

    #[derive(Default, Clone)]
    struct Recorder {
        renders: Arc<Mutex<Vec<usize>>>,
        edits: Arc<Mutex<Vec<TaskId>>>,
    }

    impl StoreObserver for Recorder {
        fn tasks_changed(&self, tasks: &[TaskRecord]) {
            self.renders.lock().unwrap().push(tasks.len());
        }

        fn edit_started(&self, id: &TaskId) {
            self.edits.lock().unwrap().push(id.clone());
        }
    }

    #[test]
    fn test_new_store_has_blank_draft_dated_today() {
        let store = TaskStore::with_clock(fixed_today);
        assert!(store.is_empty());
        assert_eq!(store.draft().due_date, fixed_today());
        assert!(!store.is_editing());
    }

    #[test]
    fn test_commit_prepends_trimmed_record() {
        let mut store = TaskStore::with_clock(fixed_today);
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();

        store.begin_draft();
        store.set_draft_title("  wrap presents  ");
        store.set_draft_date(date);
        let outcome = store.commit_draft();

        let first = &store.tasks()[0];
        assert_eq!(outcome, CommitOutcome::Created(first.id.clone()));
        assert_eq!(first.title, "wrap presents");
        assert_eq!(first.due_date, date);
        assert!(first.photo.is_none());
    }

    #[test]
    fn test_commit_resets_draft_to_defaults() {
        let mut store = TaskStore::with_clock(fixed_today);
        store.set_draft_title("x");
        store.set_draft_date(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        store.set_draft_photo(PhotoRef::new("file:///x.png"));
        store.commit_draft();

        assert_eq!(store.draft(), &Draft::blank(fixed_today()));
    }

    #[test]
    fn test_blank_commit_keeps_draft_populated() {
        let mut store = TaskStore::with_clock(fixed_today);
        store.set_draft_title("   ");
        store.set_draft_photo(PhotoRef::new("file:///a.jpg"));

        assert_eq!(store.commit_draft(), CommitOutcome::Rejected);
        assert!(store.is_empty());
        assert_eq!(store.draft().title, "   ");
        assert!(store.draft().photo.is_some());
    }

    #[test]
    fn test_edit_overwrites_in_place() {
        let mut store = TaskStore::with_clock(fixed_today);
        let a = create(&mut store, "A");
        create(&mut store, "B");

        assert!(store.begin_edit(&a));
        assert!(store.is_editing());
        store.set_draft_title(" A2 ");
        assert_eq!(store.commit_draft(), CommitOutcome::Updated(a.clone()));

        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[1].id, a);
        assert_eq!(store.tasks()[1].title, "A2");
        assert!(!store.is_editing());
    }

    #[test]
    fn test_begin_edit_unknown_id_is_noop() {
        let mut store = TaskStore::with_clock(fixed_today);
        store.set_draft_title("half typed");

        assert!(!store.begin_edit(&TaskId::from("missing")));
        assert_eq!(store.draft().title, "half typed");
        assert!(!store.is_editing());
    }

    #[test]
    fn test_begin_edit_replaces_previous_draft() {
        let mut store = TaskStore::with_clock(fixed_today);
        let a = create(&mut store, "A");
        let b = create(&mut store, "B");

        store.begin_edit(&a);
        store.set_draft_title("changed A");
        store.begin_edit(&b);

        assert_eq!(store.draft().editing_id, Some(b));
        assert_eq!(store.draft().title, "B");
    }

    #[test]
    fn test_commit_after_edited_task_deleted() {
        let mut store = TaskStore::with_clock(fixed_today);
        let a = create(&mut store, "A");
        store.begin_edit(&a);
        store.delete_task(&a);
        store.set_draft_title("ghost");

        assert_eq!(store.commit_draft(), CommitOutcome::Vanished(a));
        assert!(store.is_empty());
        assert!(!store.is_editing());
    }

    #[test]
    fn test_delete_removes_one_and_keeps_order() {
        let mut store = TaskStore::with_clock(fixed_today);
        let a = create(&mut store, "A");
        let b = create(&mut store, "B");
        let c = create(&mut store, "C");

        let removed = store.delete_task(&b).unwrap();
        assert_eq!(removed.title, "B");
        let ids: Vec<_> = store.tasks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec![c, a]);

        assert!(store.delete_task(&b).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_observers_see_every_mutation() {
        let mut store = TaskStore::with_clock(fixed_today);
        let recorder = Recorder::default();
        store.subscribe(Box::new(recorder.clone()));

        let a = create(&mut store, "A");
        create(&mut store, "B");
        store.set_draft_title("");
        store.commit_draft();
        store.begin_edit(&a);
        store.delete_task(&a);

        assert_eq!(*recorder.renders.lock().unwrap(), vec![1, 2, 1]);
        assert_eq!(*recorder.edits.lock().unwrap(), vec![a]);
    }
}
