//! Fixed board columns and the status partition.

use serde::Serialize;
use tally_core::entities::Task;
use tally_core::enums::TaskStatus;

/// Shown in place of cards when a column has none.
pub const EMPTY_COLUMN_PLACEHOLDER: &str = "No tasks";

/// One board column: a status bucket plus its display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub status: TaskStatus,
    pub title: &'static str,
}

/// Columns in render order, left to right.
pub const COLUMNS: [Column; 3] = [
    Column {
        status: TaskStatus::Todo,
        title: TaskStatus::Todo.title(),
    },
    Column {
        status: TaskStatus::InProgress,
        title: TaskStatus::InProgress.title(),
    },
    Column {
        status: TaskStatus::Done,
        title: TaskStatus::Done.title(),
    },
];

/// Look up the column for a status.
#[must_use]
pub const fn column_for(status: TaskStatus) -> Column {
    match status {
        TaskStatus::Todo => COLUMNS[0],
        TaskStatus::InProgress => COLUMNS[1],
        TaskStatus::Done => COLUMNS[2],
    }
}

const fn slot(status: TaskStatus) -> usize {
    match status {
        TaskStatus::Todo => 0,
        TaskStatus::InProgress => 1,
        TaskStatus::Done => 2,
    }
}

/// Tasks split by status, each bucket in input order.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    buckets: [Vec<&'a Task>; 3],
}

impl<'a> Partition<'a> {
    /// Partition `tasks` into the three columns.
    #[must_use]
    pub fn of(tasks: &'a [Task]) -> Self {
        let mut partition = Self::default();
        for task in tasks {
            if let Some(bucket) = partition.buckets.get_mut(slot(task.status)) {
                bucket.push(task);
            }
        }
        partition
    }

    /// Tasks in the column for `status`.
    #[must_use]
    pub fn tasks(&self, status: TaskStatus) -> &[&'a Task] {
        self.buckets
            .get(slot(status))
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn count(&self, status: TaskStatus) -> usize {
        self.tasks(status).len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Columns in render order with their tasks.
    pub fn iter(&self) -> impl Iterator<Item = (Column, &[&'a Task])> + '_ {
        COLUMNS
            .iter()
            .map(move |column| (*column, self.tasks(column.status)))
    }
}
