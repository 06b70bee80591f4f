//! Drag gesture state.
//!
//! One gesture at a time: `Idle` → `Dragging` on drag start, `Dragging` ⇄
//! `Hovering` as the pointer enters and leaves columns, and back to `Idle`
//! on drop or drag end. Only one column is ever highlighted.

use tally_core::enums::TaskStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        task_id: String,
    },
    Hovering {
        task_id: String,
        column: TaskStatus,
    },
}

impl DragState {
    /// Id of the card being dragged.
    #[must_use]
    pub fn dragged_task(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Dragging { task_id } | Self::Hovering { task_id, .. } => Some(task_id),
        }
    }

    /// The highlighted drop target.
    #[must_use]
    pub const fn hovered_column(&self) -> Option<TaskStatus> {
        match self {
            Self::Hovering { column, .. } => Some(*column),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Begin dragging `task_id`. A gesture already in flight is abandoned.
    pub fn start(&mut self, task_id: impl Into<String>) {
        let task_id = task_id.into();
        if let Some(previous) = self.dragged_task() {
            tracing::debug!(previous, next = %task_id, "drag restarted before previous gesture ended");
        }
        *self = Self::Dragging { task_id };
    }

    /// Pointer entered `column`. Ignored when nothing is being dragged.
    pub fn enter(&mut self, column: TaskStatus) {
        if let Some(task_id) = self.dragged_task() {
            *self = Self::Hovering {
                task_id: task_id.to_string(),
                column,
            };
        }
    }

    /// Pointer left `column`.
    ///
    /// Enter for the next column can arrive before leave for the previous
    /// one, so leaving a column other than the highlighted one is a no-op.
    pub fn leave(&mut self, column: TaskStatus) {
        if self.hovered_column() != Some(column) {
            return;
        }
        if let Some(task_id) = self.finish() {
            *self = Self::Dragging { task_id };
        }
    }

    /// End the gesture, returning the dragged task id if there was one.
    pub fn finish(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging { task_id } | Self::Hovering { task_id, .. } => Some(task_id),
        }
    }
}
