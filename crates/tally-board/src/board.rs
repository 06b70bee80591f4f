//! The task board: tasks in, drag events in, status changes and
//! notifications out.

use std::fmt;
use std::sync::{Arc, Weak};

use tally_core::dates::{DEFAULT_DATE_FORMAT, format_iso_date};
use tally_core::entities::Task;
use tally_core::enums::TaskStatus;

use crate::columns::{Partition, column_for};
use crate::drag::DragState;
use crate::handler::StatusChangeHandler;
use crate::notify::{Notification, Notifier};
use crate::view::BoardView;

/// Formats a raw due-date string for display.
pub type DateFormatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Input events a front end feeds into the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    DragStart(String),
    DragEnter(TaskStatus),
    DragLeave(TaskStatus),
    Drop(TaskStatus),
    DragEnd,
    Click(String),
    Edit(String),
}

/// Navigation the board asks its host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardRequest {
    View(String),
    Edit(String),
}

/// What a drop did.
pub enum DropOutcome {
    /// No drag was in progress.
    NotDragging,
    /// The dragged task is no longer in the task list.
    UnknownTask,
    /// Dropped onto the column it is already in.
    SameColumn,
    /// No handler is installed, so nothing is committed.
    Untracked,
    /// A status change to run with [`PendingStatusChange::commit`].
    Pending(PendingStatusChange),
}

impl DropOutcome {
    #[must_use]
    pub fn into_pending(self) -> Option<PendingStatusChange> {
        match self {
            Self::Pending(pending) => Some(pending),
            _ => None,
        }
    }
}

impl fmt::Debug for DropOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDragging => f.write_str("NotDragging"),
            Self::UnknownTask => f.write_str("UnknownTask"),
            Self::SameColumn => f.write_str("SameColumn"),
            Self::Untracked => f.write_str("Untracked"),
            Self::Pending(pending) => f.debug_tuple("Pending").field(pending).finish(),
        }
    }
}

/// Result of [`TaskBoard::handle`].
#[derive(Debug)]
pub enum EventOutcome {
    None,
    Request(BoardRequest),
    Drop(DropOutcome),
}

/// How a committed status change ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitResult {
    Moved,
    Failed(String),
    /// The board was dropped before the handler returned; nobody was told.
    Detached { succeeded: bool },
}

/// A status change accepted by a drop, not yet sent.
///
/// Holds no borrow of the board, so the next drag can start while this
/// runs. Only notifies if the board is still alive when the handler returns.
pub struct PendingStatusChange {
    task_id: String,
    from: TaskStatus,
    to: TaskStatus,
    handler: Arc<dyn StatusChangeHandler>,
    notifier: Arc<dyn Notifier>,
    board: Weak<()>,
}

impl PendingStatusChange {
    #[must_use]
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    #[must_use]
    pub const fn from_status(&self) -> TaskStatus {
        self.from
    }

    #[must_use]
    pub const fn to_status(&self) -> TaskStatus {
        self.to
    }

    /// Call the handler once and report the outcome.
    pub async fn commit(self) -> CommitResult {
        let title = column_for(self.to).title;
        tracing::debug!(task_id = %self.task_id, from = %self.from, to = %self.to, "committing status change");

        let outcome = self.handler.change_status(&self.task_id, self.to).await;

        if self.board.upgrade().is_none() {
            tracing::debug!(task_id = %self.task_id, "board gone before status change resolved");
            return CommitResult::Detached {
                succeeded: outcome.is_ok(),
            };
        }

        match outcome {
            Ok(()) => {
                self.notifier
                    .notify(Notification::success(format!("Task moved to {title}")));
                CommitResult::Moved
            }
            Err(error) => {
                tracing::warn!(task_id = %self.task_id, to = %self.to, "status change failed: {error}");
                self.notifier.notify(Notification::error(format!(
                    "Failed to move task to {title}: {error}"
                )));
                CommitResult::Failed(error.to_string())
            }
        }
    }
}

impl fmt::Debug for PendingStatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingStatusChange")
            .field("task_id", &self.task_id)
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

/// Three-column board over a caller-supplied task list.
pub struct TaskBoard {
    tasks: Vec<Task>,
    drag: DragState,
    handler: Option<Arc<dyn StatusChangeHandler>>,
    notifier: Arc<dyn Notifier>,
    format_date: DateFormatter,
    alive: Arc<()>,
}

impl TaskBoard {
    /// A read-only board: drags are tracked but never committed until a
    /// handler is installed with [`Self::with_handler`].
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            tasks: Vec::new(),
            drag: DragState::Idle,
            handler: None,
            notifier,
            format_date: Arc::new(|raw| format_iso_date(raw, DEFAULT_DATE_FORMAT)),
            alive: Arc::new(()),
        }
    }

    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn StatusChangeHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    #[must_use]
    pub fn with_date_formatter(mut self, format_date: DateFormatter) -> Self {
        self.format_date = format_date;
        self
    }

    /// Replace the task list wholesale.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub const fn drag_state(&self) -> &DragState {
        &self.drag
    }

    #[must_use]
    pub fn partition(&self) -> Partition<'_> {
        Partition::of(&self.tasks)
    }

    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::build(&self.tasks, &self.drag, self.format_date.as_ref())
    }

    /// Start dragging `task_id`. Returns `false` if the task is not on the
    /// board.
    pub fn start_drag(&mut self, task_id: &str) -> bool {
        if self.find(task_id).is_none() {
            tracing::debug!(task_id, "drag start for a task not on the board");
            return false;
        }
        self.drag.start(task_id);
        true
    }

    pub fn drag_enter(&mut self, column: TaskStatus) {
        self.drag.enter(column);
    }

    pub fn drag_leave(&mut self, column: TaskStatus) {
        self.drag.leave(column);
    }

    /// Drag ended without a drop.
    pub fn drag_end(&mut self) {
        if let Some(task_id) = self.drag.finish() {
            tracing::debug!(%task_id, "drag cancelled");
        }
    }

    /// Drop the dragged task onto `column`. Drag markers are always cleared.
    pub fn drop_on(&mut self, column: TaskStatus) -> DropOutcome {
        let Some(task_id) = self.drag.finish() else {
            return DropOutcome::NotDragging;
        };
        let Some(task) = self.find(&task_id) else {
            tracing::debug!(%task_id, "dropped task is no longer on the board");
            return DropOutcome::UnknownTask;
        };
        if task.status == column {
            return DropOutcome::SameColumn;
        }
        let Some(handler) = &self.handler else {
            return DropOutcome::Untracked;
        };

        DropOutcome::Pending(PendingStatusChange {
            from: task.status,
            to: column,
            task_id,
            handler: Arc::clone(handler),
            notifier: Arc::clone(&self.notifier),
            board: Arc::downgrade(&self.alive),
        })
    }

    /// Drop and commit in one step. `None` when nothing was committed.
    pub async fn drop_and_commit(&mut self, column: TaskStatus) -> Option<CommitResult> {
        let pending = self.drop_on(column).into_pending()?;
        Some(pending.commit().await)
    }

    #[must_use]
    pub fn click(&self, task_id: &str) -> BoardRequest {
        BoardRequest::View(task_id.to_string())
    }

    #[must_use]
    pub fn edit(&self, task_id: &str) -> BoardRequest {
        BoardRequest::Edit(task_id.to_string())
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, event: BoardEvent) -> EventOutcome {
        match event {
            BoardEvent::DragStart(task_id) => {
                self.start_drag(&task_id);
                EventOutcome::None
            }
            BoardEvent::DragEnter(column) => {
                self.drag_enter(column);
                EventOutcome::None
            }
            BoardEvent::DragLeave(column) => {
                self.drag_leave(column);
                EventOutcome::None
            }
            BoardEvent::Drop(column) => EventOutcome::Drop(self.drop_on(column)),
            BoardEvent::DragEnd => {
                self.drag_end();
                EventOutcome::None
            }
            BoardEvent::Click(task_id) => EventOutcome::Request(self.click(&task_id)),
            BoardEvent::Edit(task_id) => EventOutcome::Request(self.edit(&task_id)),
        }
    }

    fn find(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }
}

impl fmt::Debug for TaskBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskBoard")
            .field("tasks", &self.tasks.len())
            .field("drag", &self.drag)
            .field("has_handler", &self.handler.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::notify::MemoryNotifier;

    fn task(id: &str, status: TaskStatus) -> Task {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Task {id}"),
            "status": status,
        }))
        .unwrap()
    }

    fn board() -> TaskBoard {
        let mut board = TaskBoard::new(Arc::new(MemoryNotifier::new()));
        board.set_tasks(vec![task("t1", TaskStatus::Todo), task("t2", TaskStatus::Done)]);
        board
    }

    #[test]
    fn unknown_task_cannot_be_dragged() {
        let mut board = board();
        assert!(!board.start_drag("nope"));
        assert!(board.drag_state().is_idle());
    }

    #[test]
    fn drop_without_drag_does_nothing() {
        let mut board = board();
        assert!(matches!(board.drop_on(TaskStatus::Done), DropOutcome::NotDragging));
    }

    #[test]
    fn drop_without_handler_is_untracked_and_clears_markers() {
        let mut board = board();
        board.start_drag("t1");
        board.drag_enter(TaskStatus::Done);
        assert!(matches!(board.drop_on(TaskStatus::Done), DropOutcome::Untracked));
        assert!(board.drag_state().is_idle());
    }

    #[test]
    fn task_removed_mid_drag_cancels_the_drop() {
        let mut board = board();
        board.start_drag("t1");
        board.set_tasks(vec![task("t2", TaskStatus::Done)]);
        assert!(matches!(board.drop_on(TaskStatus::InProgress), DropOutcome::UnknownTask));
        assert!(board.drag_state().is_idle());
    }

    #[test]
    fn click_and_edit_only_request_navigation() {
        let mut board = board();
        assert_eq!(board.click("t1"), BoardRequest::View("t1".into()));
        assert!(matches!(
            board.handle(BoardEvent::Edit("t2".into())),
            EventOutcome::Request(BoardRequest::Edit(id)) if id == "t2"
        ));
        assert_eq!(board.tasks().len(), 2);
    }

    #[test]
    fn events_drive_the_same_state_machine() {
        let mut board = board();
        board.handle(BoardEvent::DragStart("t1".into()));
        board.handle(BoardEvent::DragEnter(TaskStatus::InProgress));
        assert_eq!(board.drag_state().hovered_column(), Some(TaskStatus::InProgress));
        board.handle(BoardEvent::DragEnd);
        assert!(board.drag_state().is_idle());
    }

    #[test]
    fn custom_date_formatter_is_used_by_the_view() {
        let mut board = TaskBoard::new(Arc::new(MemoryNotifier::new()))
            .with_date_formatter(Arc::new(|raw| format!("due {raw}")));
        let mut dated = task("t1", TaskStatus::Todo);
        dated.due_date = Some("2025-03-05".into());
        board.set_tasks(vec![dated]);

        let view = board.view();
        let card = &view.column(TaskStatus::Todo).unwrap().cards[0];
        assert_eq!(card.due.as_deref(), Some("due 2025-03-05"));
    }
}
