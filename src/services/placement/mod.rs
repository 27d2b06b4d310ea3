mod hydrate;

use std::collections::HashMap;

use crate::error::{Result, SchedulerError};
use crate::models::grid::{GridCell, TimeGrid};
use crate::models::settings::ContentSettings;
use crate::models::task::{default_translations, Task, TaskTranslation};

pub use hydrate::{SkipReason, SkippedEntry};

/// Tasks placed on one day row, in task order. Derived from the task map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn {
    pub id: String,
    pub title: String,
    pub task_ids: Vec<String>,
}

/// Authoritative in-memory map of tasks for one editing session.
///
/// Every mutation goes through here and rebuilds the per-day index, so
/// `columns()` always agrees with the tasks' own placements.
#[derive(Debug, Clone)]
pub struct PlacementStore {
    grid: TimeGrid,
    content: ContentSettings,
    tasks: HashMap<String, Task>,
    order: Vec<String>,
    columns: Vec<DayColumn>,
    skipped: Vec<SkippedEntry>,
    dirty: bool,
}

impl PlacementStore {
    pub fn new(grid: TimeGrid, content: ContentSettings) -> Self {
        let mut store = Self {
            grid,
            content,
            tasks: HashMap::new(),
            order: Vec::new(),
            columns: Vec::new(),
            skipped: Vec::new(),
            dirty: false,
        };
        store.rebuild_columns();
        store
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn content_settings(&self) -> &ContentSettings {
        &self.content
    }

    /// Add a task at the end of the task order. A task with an id already in
    /// the store is ignored.
    pub fn insert(&mut self, task: Task) -> bool {
        if self.tasks.contains_key(&task.id) {
            log::warn!("Ignoring duplicate task id {}", task.id);
            return false;
        }
        self.order.push(task.id.clone());
        self.tasks.insert(task.id.clone(), task);
        self.touch();
        true
    }

    pub fn get(&self, task_id: &str) -> Result<&Task> {
        self.tasks
            .get(task_id)
            .ok_or_else(|| SchedulerError::TaskNotFound(task_id.to_string()))
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.tasks.contains_key(task_id)
    }

    fn task_mut(&mut self, task_id: &str) -> Result<&mut Task> {
        self.tasks
            .get_mut(task_id)
            .ok_or_else(|| SchedulerError::TaskNotFound(task_id.to_string()))
    }

    /// Place a task on a cell. Placing on the cell it already occupies is a
    /// no-op. A task placed for the first time gets one blank translation per
    /// configured language.
    pub fn place(&mut self, task_id: &str, cell: GridCell) -> Result<()> {
        let languages = self.content.languages.clone();
        let task = self.task_mut(task_id)?;
        if task.placement() == Some(&cell) {
            return Ok(());
        }

        log::debug!("Placing {} at {}", task_id, cell.droppable_id());
        if task.translations.is_empty() {
            task.translations = default_translations(&languages);
        }
        task.set_placement(Some(cell));
        self.touch();
        Ok(())
    }

    /// Validated placement from raw labels.
    pub fn place_at(&mut self, task_id: &str, day: &str, time: &str) -> Result<()> {
        self.get(task_id)?;
        let cell = self.grid.cell(day, time)?;
        self.place(task_id, cell)
    }

    /// Return a task to the unplaced pool, keeping its duration and
    /// translations.
    pub fn unplace(&mut self, task_id: &str) -> Result<()> {
        let task = self.task_mut(task_id)?;
        if task.placement().is_none() {
            return Ok(());
        }
        log::debug!("Unplacing {}", task_id);
        task.set_placement(None);
        self.touch();
        Ok(())
    }

    /// Remove a task from the session entirely.
    pub fn discard(&mut self, task_id: &str) -> Result<Task> {
        let task = self
            .tasks
            .remove(task_id)
            .ok_or_else(|| SchedulerError::TaskNotFound(task_id.to_string()))?;
        self.order.retain(|id| id != task_id);
        log::debug!("Discarded {}", task_id);
        self.touch();
        Ok(task)
    }

    /// Adjust a task's duration, clamped below at one slot interval.
    /// Returns the new duration.
    pub fn resize(&mut self, task_id: &str, delta_minutes: i64) -> Result<u32> {
        let interval = self.grid.interval_minutes();
        let task = self.task_mut(task_id)?;
        let resized = i64::from(task.duration)
            .saturating_add(delta_minutes)
            .clamp(i64::from(interval), i64::from(u32::MAX));
        let resized = resized as u32;
        if resized != task.duration {
            log::debug!("Resizing {}: {} -> {} min", task_id, task.duration, resized);
            task.duration = resized;
            self.touch();
        }
        Ok(resized)
    }

    /// Replace a task's translations. The display content follows the
    /// primary-language title when that title is non-blank.
    pub fn set_translations(
        &mut self,
        task_id: &str,
        translations: Vec<TaskTranslation>,
    ) -> Result<()> {
        let primary = self.content.primary_language.clone();
        let task = self.task_mut(task_id)?;
        task.translations = translations;
        if let Some(title) = task.title_in(&primary).map(str::to_string) {
            task.content = title;
        }
        self.touch();
        Ok(())
    }

    /// All tasks in order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.order.iter().filter_map(|id| self.tasks.get(id))
    }

    /// Owned copy of every task, in order.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks().cloned().collect()
    }

    pub fn placed(&self) -> Vec<&Task> {
        self.tasks().filter(|t| t.is_placed()).collect()
    }

    /// The unplaced pool
    pub fn unplaced(&self) -> Vec<&Task> {
        self.tasks().filter(|t| !t.is_placed()).collect()
    }

    pub fn scheduled_count(&self) -> usize {
        self.tasks.values().filter(|t| t.is_placed()).count()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn columns(&self) -> &[DayColumn] {
        &self.columns
    }

    pub fn column(&self, day: &str) -> Option<&DayColumn> {
        self.columns.iter().find(|c| c.id == day)
    }

    /// Schedule entries that could not be applied during `initialize`
    pub fn skipped_entries(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn touch(&mut self) {
        self.dirty = true;
        self.rebuild_columns();
    }

    fn rebuild_columns(&mut self) {
        let columns = self
            .grid
            .days()
            .iter()
            .map(|day| DayColumn {
                id: day.clone(),
                title: day.clone(),
                task_ids: self
                    .tasks()
                    .filter(|t| t.day() == day)
                    .map(|t| t.id.clone())
                    .collect(),
            })
            .collect();
        self.columns = columns;
    }
}
