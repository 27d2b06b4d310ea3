//! Interactive scheduling session.
//!
//! A `SchedulerSession` owns everything one playlist editor needs: the task
//! store, the drag controller and the (single) translation dialog. Every
//! call that changes tasks pushes a fresh snapshot to the observer and
//! returns it. All state is explicit; there are no shared singletons.

pub mod drag;
pub mod resize;
pub mod script;
pub mod translation_dialog;

use crate::error::{Result, SchedulerError};
use crate::models::grid::TimeGrid;
use crate::models::media::MediaItem;
use crate::models::schedule::{PlaylistPayload, ScheduleRecord};
use crate::models::settings::SchedulerSettings;
use crate::models::task::Task;
use crate::services::placement::PlacementStore;
use crate::services::playlist::{PlaylistForm, PlaylistService};
use crate::services::projection::to_persisted;

use drag::{DragController, DropOutcome, DropZone};
use resize::ResizeHandle;
use translation_dialog::TranslationDialog;

/// Receives the full task list after every mutation.
#[cfg_attr(test, mockall::automock)]
pub trait TaskObserver {
    fn tasks_updated(&mut self, tasks: &[Task]);
}

impl<F> TaskObserver for F
where
    F: FnMut(&[Task]),
{
    fn tasks_updated(&mut self, tasks: &[Task]) {
        self(tasks)
    }
}

pub struct SchedulerSession {
    store: PlacementStore,
    drag: DragController,
    dialog: Option<TranslationDialog>,
    observer: Option<Box<dyn TaskObserver>>,
}

impl SchedulerSession {
    pub fn new(store: PlacementStore) -> Self {
        Self {
            store,
            drag: DragController::new(),
            dialog: None,
            observer: None,
        }
    }

    /// Build the grid from settings and hydrate tasks from the media list
    /// and any existing schedule.
    pub fn from_settings(
        settings: &SchedulerSettings,
        media: &[MediaItem],
        schedule: &[ScheduleRecord],
    ) -> Result<Self> {
        let grid = TimeGrid::from_settings(&settings.grid)?;
        let store = PlacementStore::initialize(grid, settings.content.clone(), media, schedule);
        Ok(Self::new(store))
    }

    pub fn with_observer(mut self, observer: impl TaskObserver + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    pub fn set_observer(&mut self, observer: impl TaskObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    pub fn grid(&self) -> &TimeGrid {
        self.store.grid()
    }

    pub fn snapshot(&self) -> Vec<Task> {
        self.store.snapshot()
    }

    pub fn scheduled_count(&self) -> usize {
        self.store.scheduled_count()
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    fn notify(&mut self) -> Vec<Task> {
        let snapshot = self.store.snapshot();
        if let Some(observer) = self.observer.as_mut() {
            observer.tasks_updated(&snapshot);
        }
        snapshot
    }

    fn require_placed(&self, task_id: &str) -> Result<&Task> {
        let task = self.store.get(task_id)?;
        if !task.is_placed() {
            return Err(SchedulerError::TaskNotPlaced(task_id.to_string()));
        }
        Ok(task)
    }

    // --- drag and drop ---

    /// Start dragging a task from a droppable id (`"task-list"` or
    /// `"{day}-{HH:mm}"`).
    pub fn begin_drag(&mut self, task_id: &str, source_id: &str) -> Result<()> {
        let source = DropZone::parse(source_id, self.store.grid())
            .ok_or_else(|| SchedulerError::UnknownDroppable(source_id.to_string()))?;
        self.begin_drag_from(task_id, source)
    }

    /// Start dragging from `source`, which must be where the task actually
    /// is: its cell when placed, the pool otherwise.
    pub fn begin_drag_from(&mut self, task_id: &str, source: DropZone) -> Result<()> {
        let actual = DropZone::of_task(self.store.get(task_id)?);
        if actual != source {
            return Err(SchedulerError::DragSourceMismatch {
                task_id: task_id.to_string(),
                source_id: source.droppable_id(),
            });
        }
        self.drag.begin(task_id, source);
        Ok(())
    }

    pub fn hover(&mut self, target_id: Option<&str>) -> Result<()> {
        let target = target_id.and_then(|id| DropZone::parse(id, self.store.grid()));
        self.drag.update_hover(target)
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Release the dragged task. Ids that name no zone count as a drop
    /// outside the grid.
    pub fn drop(&mut self, target_id: Option<&str>) -> Result<DropOutcome> {
        let target = target_id.and_then(|id| DropZone::parse(id, self.store.grid()));
        self.drop_on(target)
    }

    pub fn drop_on(&mut self, target: Option<DropZone>) -> Result<DropOutcome> {
        let outcome = self.drag.finish(target, &mut self.store)?;

        if let DropOutcome::Placed { task_id, .. } = &outcome {
            let task = self.store.get(task_id)?;
            let content = self.store.content_settings();
            let dialog = TranslationDialog::new(
                task_id.clone(),
                &task.translations,
                &content.languages,
                &content.primary_language,
            )
            .for_new_placement();
            self.open_dialog(dialog);
        }

        if outcome.mutated() {
            self.notify();
        }
        Ok(outcome)
    }

    // --- resize / unplace / discard ---

    pub fn resize(&mut self, task_id: &str, handle: ResizeHandle) -> Result<Vec<Task>> {
        let delta = handle.delta_minutes(self.grid().interval_minutes());
        self.resize_by(task_id, delta)
    }

    pub fn resize_by(&mut self, task_id: &str, delta_minutes: i64) -> Result<Vec<Task>> {
        self.store.resize(task_id, delta_minutes)?;
        Ok(self.notify())
    }

    /// The "delete" action on a placed card: back to the pool, record kept.
    pub fn unplace(&mut self, task_id: &str) -> Result<Vec<Task>> {
        self.require_placed(task_id)?;
        self.store.unplace(task_id)?;
        Ok(self.notify())
    }

    /// Remove a task from the session altogether.
    pub fn discard(&mut self, task_id: &str) -> Result<Vec<Task>> {
        self.store.discard(task_id)?;
        if self.editing_task_id() == Some(task_id) {
            self.dialog = None;
        }
        if self.drag.active().is_some_and(|ctx| ctx.task_id == task_id) {
            self.drag.cancel();
        }
        Ok(self.notify())
    }

    // --- translation dialog ---

    fn open_dialog(&mut self, dialog: TranslationDialog) {
        if let Some(previous) = &self.dialog {
            log::debug!("Replacing translation dialog for {}", previous.task_id());
        }
        self.dialog = Some(dialog);
    }

    /// Re-open the dialog for a placed task with its current translations.
    pub fn edit_translations(&mut self, task_id: &str) -> Result<&mut TranslationDialog> {
        let task = self.require_placed(task_id)?;
        let content = self.store.content_settings();
        let dialog = TranslationDialog::new(
            task_id,
            &task.translations,
            &content.languages,
            &content.primary_language,
        );
        self.open_dialog(dialog);
        self.dialog.as_mut().ok_or(SchedulerError::NoDialogOpen)
    }

    pub fn dialog(&self) -> Option<&TranslationDialog> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Result<&mut TranslationDialog> {
        self.dialog.as_mut().ok_or(SchedulerError::NoDialogOpen)
    }

    pub fn editing_task_id(&self) -> Option<&str> {
        self.dialog.as_ref().map(TranslationDialog::task_id)
    }

    /// Write the dialog's translations to its task and close it.
    pub fn submit_translations(&mut self) -> Result<Vec<Task>> {
        let dialog = self.dialog.take().ok_or(SchedulerError::NoDialogOpen)?;
        let task_id = dialog.task_id().to_string();
        self.store
            .set_translations(&task_id, dialog.into_translations())?;
        Ok(self.notify())
    }

    /// Close the dialog without saving. A task placed by the drop that
    /// opened the dialog stays placed.
    pub fn cancel_translations(&mut self) -> Result<()> {
        let dialog = self.dialog.take().ok_or(SchedulerError::NoDialogOpen)?;
        if dialog.is_fresh_placement() {
            log::info!(
                "Translation dialog cancelled; {} stays placed without a description",
                dialog.task_id()
            );
        }
        Ok(())
    }

    // --- output ---

    pub fn to_persisted(&self) -> Vec<ScheduleRecord> {
        to_persisted(&self.store)
    }

    pub fn build_payload(&self, form: &PlaylistForm) -> Result<PlaylistPayload> {
        PlaylistService::new(&self.store).build_payload(form)
    }
}
