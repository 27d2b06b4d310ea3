// Drag-and-drop reconciliation
//
// Tracks one drag gesture at a time and turns its source and destination
// into a store mutation:
// - pool -> cell: place (the session then asks for translations)
// - cell -> other cell: move, translations untouched
// - cell -> pool: unplace
// - same zone or no destination: nothing changes

use crate::error::{Result, SchedulerError};
use crate::models::grid::{GridCell, TimeGrid};
use crate::models::task::Task;
use crate::services::placement::PlacementStore;

/// Droppable id of the unplaced pool
pub const POOL_DROPPABLE_ID: &str = "task-list";

/// Where a task card can be picked up from or dropped onto
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropZone {
    Pool,
    Cell(GridCell),
}

impl DropZone {
    /// Parse a droppable id: `"task-list"` or `"{day}-{HH:mm}"`.
    /// Ids that name no zone of this grid yield `None`.
    pub fn parse(id: &str, grid: &TimeGrid) -> Option<Self> {
        if id == POOL_DROPPABLE_ID {
            return Some(DropZone::Pool);
        }
        let (day, time) = id.rsplit_once('-')?;
        grid.cell(day, time).ok().map(DropZone::Cell)
    }

    /// Zone a task currently sits in
    pub fn of_task(task: &Task) -> Self {
        match task.placement() {
            Some(cell) => DropZone::Cell(cell.clone()),
            None => DropZone::Pool,
        }
    }

    pub fn droppable_id(&self) -> String {
        match self {
            DropZone::Pool => POOL_DROPPABLE_ID.to_string(),
            DropZone::Cell(cell) => cell.droppable_id(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragContext {
    pub task_id: String,
    pub source: DropZone,
    pub hovered: Option<DropZone>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragContext),
}

/// Result of dropping a task
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Released outside any drop zone
    Nowhere { task_id: String },
    /// Released on the zone it came from
    Unchanged { task_id: String },
    /// Newly placed from the pool; needs translations
    Placed { task_id: String, cell: GridCell },
    /// Moved between cells
    Moved {
        task_id: String,
        from: GridCell,
        to: GridCell,
    },
    /// Dragged off the grid back into the pool
    ReturnedToPool { task_id: String, from: GridCell },
}

impl DropOutcome {
    pub fn task_id(&self) -> &str {
        match self {
            DropOutcome::Nowhere { task_id }
            | DropOutcome::Unchanged { task_id }
            | DropOutcome::Placed { task_id, .. }
            | DropOutcome::Moved { task_id, .. }
            | DropOutcome::ReturnedToPool { task_id, .. } => task_id,
        }
    }

    /// True when the store was changed
    pub fn mutated(&self) -> bool {
        matches!(
            self,
            DropOutcome::Placed { .. } | DropOutcome::Moved { .. } | DropOutcome::ReturnedToPool { .. }
        )
    }
}

#[derive(Debug, Default)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn active(&self) -> Option<&DragContext> {
        match &self.phase {
            DragPhase::Dragging(context) => Some(context),
            DragPhase::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active().is_some()
    }

    /// Pick up a task card. A gesture still in progress is abandoned.
    pub fn begin(&mut self, task_id: impl Into<String>, source: DropZone) {
        let task_id = task_id.into();
        if let Some(previous) = self.active() {
            log::debug!("Abandoning drag of {}", previous.task_id);
        }
        log::debug!("Drag {} from {}", task_id, source.droppable_id());
        self.phase = DragPhase::Dragging(DragContext {
            task_id,
            source,
            hovered: None,
        });
    }

    pub fn update_hover(&mut self, target: Option<DropZone>) -> Result<()> {
        match &mut self.phase {
            DragPhase::Dragging(context) => {
                context.hovered = target;
                Ok(())
            }
            DragPhase::Idle => Err(SchedulerError::NoActiveDrag),
        }
    }

    pub fn cancel(&mut self) -> Option<DragContext> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging(context) => Some(context),
            DragPhase::Idle => None,
        }
    }

    /// End the gesture and apply it to the store. The controller is idle
    /// afterwards even when the store rejects the mutation.
    ///
    /// The drop is resolved against where the task sits in the store, not
    /// the zone recorded by `begin`.
    pub fn finish(
        &mut self,
        destination: Option<DropZone>,
        store: &mut PlacementStore,
    ) -> Result<DropOutcome> {
        let context = self.cancel().ok_or(SchedulerError::NoActiveDrag)?;
        let task_id = context.task_id;
        let source = DropZone::of_task(store.get(&task_id)?);
        if source != context.source {
            log::warn!(
                "Drag of {} began at {} but the task is at {}",
                task_id,
                context.source.droppable_id(),
                source.droppable_id()
            );
        }

        let outcome = match (source, destination) {
            (_, None) => DropOutcome::Nowhere { task_id },
            (DropZone::Pool, Some(DropZone::Pool)) => DropOutcome::Unchanged { task_id },
            (DropZone::Cell(from), Some(DropZone::Cell(to))) if from == to => {
                DropOutcome::Unchanged { task_id }
            }
            (DropZone::Pool, Some(DropZone::Cell(cell))) => {
                store.place(&task_id, cell.clone())?;
                DropOutcome::Placed { task_id, cell }
            }
            (DropZone::Cell(from), Some(DropZone::Cell(to))) => {
                store.place(&task_id, to.clone())?;
                DropOutcome::Moved { task_id, from, to }
            }
            (DropZone::Cell(from), Some(DropZone::Pool)) => {
                store.unplace(&task_id)?;
                DropOutcome::ReturnedToPool { task_id, from }
            }
        };

        log::debug!("Drop resolved: {:?}", outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::{week_days, TimeRange};
    use crate::models::media::{MediaItem, MediaType};
    use crate::models::settings::ContentSettings;
    use crate::models::task::TaskTranslation;
    use chrono::Weekday;

    fn grid() -> TimeGrid {
        TimeGrid::new(
            TimeRange::parse("08:00", "18:00").unwrap(),
            30,
            week_days(Weekday::Sat),
        )
        .unwrap()
    }

    fn store() -> PlacementStore {
        let media = vec![
            MediaItem::new("t1", MediaType::Mp4),
            MediaItem::new("t2", MediaType::Png),
        ];
        PlacementStore::initialize(grid(), ContentSettings::default(), &media, &[])
    }

    fn cell(day: &str, time: &str) -> DropZone {
        DropZone::Cell(grid().cell(day, time).unwrap())
    }

    #[test]
    fn test_parse_droppable_ids() {
        let grid = grid();
        assert_eq!(DropZone::parse("task-list", &grid), Some(DropZone::Pool));
        assert_eq!(
            DropZone::parse("Monday-09:30", &grid),
            Some(cell("Monday", "09:30"))
        );
        assert_eq!(DropZone::parse("Monday-09:10", &grid), None);
        assert_eq!(DropZone::parse("nowhere", &grid), None);
    }

    #[test]
    fn test_parse_day_labels_containing_dashes() {
        let days: Vec<String> = ["Sat-A", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let grid = TimeGrid::new(TimeRange::parse("08:00", "09:00").unwrap(), 30, days).unwrap();
        let zone = DropZone::parse("Sat-A-08:30", &grid).unwrap();
        assert_eq!(zone.droppable_id(), "Sat-A-08:30");
    }

    #[test]
    fn test_drop_nowhere_reverts() {
        let mut store = store();
        let mut drag = DragController::new();
        drag.begin("t1", DropZone::Pool);
        let outcome = drag.finish(None, &mut store).unwrap();
        assert_eq!(outcome, DropOutcome::Nowhere { task_id: "t1".to_string() });
        assert!(!outcome.mutated());
        assert!(!store.is_dirty());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_pool_to_cell_places() {
        let mut store = store();
        let mut drag = DragController::new();
        drag.begin("t1", DropZone::Pool);
        let outcome = drag.finish(Some(cell("Sunday", "10:00")), &mut store).unwrap();
        assert!(matches!(outcome, DropOutcome::Placed { .. }));
        assert_eq!(store.get("t1").unwrap().day(), "Sunday");
    }

    #[test]
    fn test_cell_to_cell_moves_without_touching_translations() {
        let mut store = store();
        store.place_at("t1", "Sunday", "10:00").unwrap();
        let described = vec![TaskTranslation::new("fa", "عنوان", "شرح")];
        store.set_translations("t1", described.clone()).unwrap();

        let mut drag = DragController::new();
        drag.begin("t1", cell("Sunday", "10:00"));
        let outcome = drag.finish(Some(cell("Friday", "16:30")), &mut store).unwrap();

        assert!(matches!(outcome, DropOutcome::Moved { .. }));
        let task = store.get("t1").unwrap();
        assert_eq!((task.day(), task.time().as_str()), ("Friday", "16:30"));
        assert_eq!(task.translations, described);
    }

    #[test]
    fn test_same_cell_is_unchanged() {
        let mut store = store();
        store.place_at("t1", "Sunday", "10:00").unwrap();
        store.mark_clean();

        let mut drag = DragController::new();
        drag.begin("t1", cell("Sunday", "10:00"));
        let outcome = drag.finish(Some(cell("Sunday", "10:00")), &mut store).unwrap();
        assert_eq!(outcome, DropOutcome::Unchanged { task_id: "t1".to_string() });
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_cell_to_pool_unplaces() {
        let mut store = store();
        store.place_at("t2", "Monday", "08:00").unwrap();

        let mut drag = DragController::new();
        drag.begin("t2", cell("Monday", "08:00"));
        let outcome = drag.finish(Some(DropZone::Pool), &mut store).unwrap();
        assert!(matches!(outcome, DropOutcome::ReturnedToPool { .. }));
        assert!(!store.get("t2").unwrap().is_placed());
    }

    #[test]
    fn test_stale_cell_source_still_places_from_pool() {
        let mut store = store();
        let mut drag = DragController::new();
        drag.begin("t1", cell("Monday", "09:00"));
        let outcome = drag.finish(Some(cell("Tuesday", "10:00")), &mut store).unwrap();
        assert!(matches!(outcome, DropOutcome::Placed { .. }));
    }

    #[test]
    fn test_unplaced_task_dropped_on_pool_is_unchanged() {
        let mut store = store();
        let mut drag = DragController::new();
        drag.begin("t2", cell("Monday", "09:00"));
        let outcome = drag.finish(Some(DropZone::Pool), &mut store).unwrap();
        assert_eq!(outcome, DropOutcome::Unchanged { task_id: "t2".to_string() });
        assert!(!outcome.mutated());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_drop_resolves_against_actual_cell() {
        let mut store = store();
        store.place_at("t1", "Sunday", "10:00").unwrap();
        let mut drag = DragController::new();
        drag.begin("t1", cell("Monday", "09:00"));
        let outcome = drag.finish(Some(cell("Monday", "09:00")), &mut store).unwrap();
        assert_eq!(
            outcome,
            DropOutcome::Moved {
                task_id: "t1".to_string(),
                from: grid().cell("Sunday", "10:00").unwrap(),
                to: grid().cell("Monday", "09:00").unwrap(),
            }
        );
    }

    #[test]
    fn test_finish_without_begin_fails() {
        let mut store = store();
        let mut drag = DragController::new();
        assert_eq!(
            drag.finish(Some(DropZone::Pool), &mut store),
            Err(SchedulerError::NoActiveDrag)
        );
        assert_eq!(drag.update_hover(None), Err(SchedulerError::NoActiveDrag));
    }

    #[test]
    fn test_hover_is_tracked() {
        let mut drag = DragController::new();
        drag.begin("t1", DropZone::Pool);
        drag.update_hover(Some(cell("Monday", "09:00"))).unwrap();
        assert_eq!(drag.active().unwrap().hovered, Some(cell("Monday", "09:00")));
        assert!(drag.cancel().is_some());
        assert_eq!(drag.phase(), &DragPhase::Idle);
    }

    #[test]
    fn test_unknown_task_leaves_controller_idle() {
        let mut store = store();
        let mut drag = DragController::new();
        drag.begin("ghost", DropZone::Pool);
        assert_eq!(
            drag.finish(Some(cell("Monday", "09:00")), &mut store),
            Err(SchedulerError::TaskNotFound("ghost".to_string()))
        );
        assert!(!drag.is_dragging());
    }
}
