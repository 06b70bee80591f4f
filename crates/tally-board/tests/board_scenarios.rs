//! Drag-and-drop scenarios against recording and failing handlers.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tally_board::{
    CommitResult, DropOutcome, MemoryNotifier, NotificationLevel, StatusChangeError,
    StatusChangeHandler, TaskBoard,
};
use tally_core::entities::Task;
use tally_core::enums::TaskStatus;
use tokio::sync::Notify;

fn task(id: &str, status: TaskStatus) -> Task {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": format!("Task {id}"),
        "status": status,
    }))
    .unwrap()
}

#[derive(Default)]
struct Recording {
    calls: Mutex<Vec<(String, TaskStatus)>>,
}

impl Recording {
    fn calls(&self) -> Vec<(String, TaskStatus)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusChangeHandler for Recording {
    async fn change_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<(), StatusChangeError> {
        self.calls.lock().unwrap().push((task_id.to_string(), status));
        Ok(())
    }
}

struct Rejecting;

#[async_trait]
impl StatusChangeHandler for Rejecting {
    async fn change_status(&self, _: &str, _: TaskStatus) -> Result<(), StatusChangeError> {
        Err(StatusChangeError::new("server said no"))
    }
}

/// Blocks until released, so a test can act while the call is in flight.
#[derive(Default)]
struct Gated {
    release: Notify,
}

#[async_trait]
impl StatusChangeHandler for Gated {
    async fn change_status(&self, _: &str, _: TaskStatus) -> Result<(), StatusChangeError> {
        self.release.notified().await;
        Ok(())
    }
}

fn board_with(handler: Arc<dyn StatusChangeHandler>) -> (TaskBoard, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::new());
    let mut board = TaskBoard::new(notifier.clone()).with_handler(handler);
    board.set_tasks(vec![task("t1", TaskStatus::Todo), task("t2", TaskStatus::Done)]);
    (board, notifier)
}

#[tokio::test]
async fn dragging_t1_to_done_calls_handler_once_and_names_the_column() {
    let handler = Arc::new(Recording::default());
    let (mut board, notifier) = board_with(handler.clone());

    let view = board.view();
    assert_eq!(view.column(TaskStatus::Todo).unwrap().count, 1);
    assert_eq!(view.column(TaskStatus::Done).unwrap().count, 1);
    let in_progress = view.column(TaskStatus::InProgress).unwrap();
    assert_eq!(in_progress.count, 0);
    assert!(in_progress.placeholder.is_some());

    board.start_drag("t1");
    board.drag_enter(TaskStatus::Done);
    let result = board.drop_and_commit(TaskStatus::Done).await;

    assert_eq!(result, Some(CommitResult::Moved));
    assert_eq!(handler.calls(), vec![("t1".to_string(), TaskStatus::Done)]);
    let notes = notifier.take();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, NotificationLevel::Success);
    assert!(notes[0].message.contains("Done"), "{}", notes[0].message);
}

#[rstest]
#[case("t1", TaskStatus::Todo)]
#[case("t2", TaskStatus::Done)]
#[tokio::test]
async fn drop_on_own_column_never_calls_handler(#[case] id: &str, #[case] column: TaskStatus) {
    let handler = Arc::new(Recording::default());
    let (mut board, notifier) = board_with(handler.clone());

    board.start_drag(id);
    board.drag_enter(column);
    assert!(matches!(board.drop_on(column), DropOutcome::SameColumn));

    assert!(handler.calls().is_empty());
    assert!(notifier.snapshot().is_empty());
    assert!(board.drag_state().is_idle());
}

#[tokio::test]
async fn todo_to_in_progress_passes_id_and_status() {
    let handler = Arc::new(Recording::default());
    let (mut board, notifier) = board_with(handler.clone());

    board.start_drag("t1");
    let pending = board.drop_on(TaskStatus::InProgress).into_pending().unwrap();
    assert_eq!(pending.from_status(), TaskStatus::Todo);
    assert_eq!(pending.to_status(), TaskStatus::InProgress);
    pending.commit().await;

    assert_eq!(handler.calls(), vec![("t1".to_string(), TaskStatus::InProgress)]);
    let notes = notifier.take();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].message.contains("In Progress"));
}

#[tokio::test]
async fn rejection_notifies_failure_and_leaves_board_ready() {
    let (mut board, notifier) = board_with(Arc::new(Rejecting));

    board.start_drag("t1");
    board.drag_enter(TaskStatus::InProgress);
    let result = board.drop_and_commit(TaskStatus::InProgress).await;

    assert!(matches!(result, Some(CommitResult::Failed(message)) if message == "server said no"));
    let notes = notifier.take();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].is_error());
    assert!(board.drag_state().is_idle());
    assert!(!board.view().column(TaskStatus::InProgress).unwrap().highlighted);

    // Status is not changed locally.
    assert_eq!(board.tasks()[0].status, TaskStatus::Todo);

    // The next drag starts cleanly.
    assert!(board.start_drag("t2"));
    assert_eq!(board.drag_state().dragged_task(), Some("t2"));
}

#[tokio::test]
async fn cancelled_drag_requests_nothing() {
    let handler = Arc::new(Recording::default());
    let (mut board, notifier) = board_with(handler.clone());

    board.start_drag("t1");
    board.drag_enter(TaskStatus::Done);
    board.drag_end();

    assert!(board.drag_state().is_idle());
    assert!(handler.calls().is_empty());
    assert!(notifier.snapshot().is_empty());
}

#[test]
fn without_handler_drag_is_tracked_but_never_committed() {
    let notifier = Arc::new(MemoryNotifier::new());
    let mut board = TaskBoard::new(notifier.clone());
    board.set_tasks(vec![task("t1", TaskStatus::Todo)]);

    board.start_drag("t1");
    board.drag_enter(TaskStatus::Done);
    let view = board.view();
    assert!(view.column(TaskStatus::Done).unwrap().highlighted);
    assert!(view.column(TaskStatus::Todo).unwrap().cards[0].dragging);

    assert!(matches!(board.drop_on(TaskStatus::Done), DropOutcome::Untracked));
    assert!(notifier.snapshot().is_empty());
}

#[test]
fn empty_board_shows_three_placeholders() {
    let board = TaskBoard::new(Arc::new(MemoryNotifier::new()));
    let view = board.view();

    let titles: Vec<&str> = view.columns.iter().map(|column| column.title).collect();
    assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
    for column in &view.columns {
        assert_eq!(column.count, 0);
        assert!(column.cards.is_empty());
        assert!(column.placeholder.is_some());
    }
}

#[test]
fn counts_follow_every_set_tasks() {
    let mut board = TaskBoard::new(Arc::new(MemoryNotifier::new()));
    let lists = [
        vec![task("a", TaskStatus::Todo)],
        vec![
            task("a", TaskStatus::Done),
            task("b", TaskStatus::Done),
            task("c", TaskStatus::InProgress),
        ],
        vec![],
    ];

    for list in lists {
        board.set_tasks(list.clone());
        let view = board.view();
        for column in &view.columns {
            let expected = list.iter().filter(|t| t.status == column.status).count();
            assert_eq!(column.count, expected);
            assert_eq!(column.cards.len(), expected);
        }
    }
}

#[tokio::test]
async fn next_drag_can_start_while_a_change_is_in_flight() {
    let gated = Arc::new(Gated::default());
    let (mut board, notifier) = board_with(gated.clone());

    board.start_drag("t1");
    let pending = board.drop_on(TaskStatus::InProgress).into_pending().unwrap();
    let in_flight = tokio::spawn(pending.commit());

    assert!(board.start_drag("t2"));
    board.drag_enter(TaskStatus::Todo);
    assert_eq!(board.drag_state().hovered_column(), Some(TaskStatus::Todo));

    gated.release.notify_one();
    assert_eq!(in_flight.await.unwrap(), CommitResult::Moved);
    assert_eq!(notifier.take().len(), 1);
}

#[tokio::test]
async fn dropped_board_suppresses_notification() {
    let gated = Arc::new(Gated::default());
    let (mut board, notifier) = board_with(gated.clone());

    board.start_drag("t1");
    let pending = board.drop_on(TaskStatus::Done).into_pending().unwrap();
    let in_flight = tokio::spawn(pending.commit());

    drop(board);
    gated.release.notify_one();

    assert_eq!(
        in_flight.await.unwrap(),
        CommitResult::Detached { succeeded: true }
    );
    assert!(notifier.snapshot().is_empty());
}
