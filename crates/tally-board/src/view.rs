//! Render model for the board.
//!
//! Plain data, so any front end (terminal table, JSON, a GUI) can draw it
//! without knowing about drag state or handlers.

use serde::Serialize;
use tally_core::entities::Task;
use tally_core::enums::TaskStatus;

use crate::columns::{EMPTY_COLUMN_PLACEHOLDER, Partition};
use crate::drag::DragState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    pub(crate) fn build(
        tasks: &[Task],
        drag: &DragState,
        format_date: &dyn Fn(&str) -> String,
    ) -> Self {
        let partition = Partition::of(tasks);
        let hovered = drag.hovered_column();
        let dragged = drag.dragged_task();

        let columns = partition
            .iter()
            .map(|(column, tasks)| ColumnView {
                status: column.status,
                title: column.title,
                count: tasks.len(),
                highlighted: hovered == Some(column.status),
                placeholder: tasks.is_empty().then_some(EMPTY_COLUMN_PLACEHOLDER),
                cards: tasks
                    .iter()
                    .map(|task| CardView::build(task, dragged, format_date))
                    .collect(),
            })
            .collect();

        Self { columns }
    }

    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&ColumnView> {
        self.columns.iter().find(|column| column.status == status)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnView {
    pub status: TaskStatus,
    pub title: &'static str,
    pub count: usize,
    /// Drop-target highlight.
    pub highlighted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Due date already run through the board's date formatter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub time_entries: u32,
    /// Dimmed while being dragged.
    pub dragging: bool,
}

impl CardView {
    fn build(task: &Task, dragged: Option<&str>, format_date: &dyn Fn(&str) -> String) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task
                .description
                .clone()
                .filter(|description| !description.trim().is_empty()),
            due: task.due_date.as_deref().map(format_date),
            estimated_hours: task.estimated_hours,
            assignee: task.assigned_user.as_ref().map(|user| user.name.clone()),
            time_entries: task.time_entry_count(),
            dragging: dragged == Some(task.id.as_str()),
        }
    }
}
