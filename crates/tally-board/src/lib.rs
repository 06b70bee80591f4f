//! # tally-board
//!
//! The three-column task board and its month-grid alternative.
//!
//! - [`columns`]: fixed column set and the status partition
//! - [`drag`]: the per-gesture drag state machine
//! - [`board`]: [`TaskBoard`], which ties tasks, drag state, the status
//!   change port, and notifications together
//! - [`handler`] / [`notify`]: ports the host wires to its API and UI
//! - [`view`]: the render model a front end draws
//! - [`calendar`]: tasks laid out by due date on a month grid
//!
//! The board never owns task data. It renders whatever list the host last
//! supplied and asks the host to persist status changes; the host re-fetches
//! and calls [`TaskBoard::set_tasks`] to reflect the outcome.

pub mod board;
pub mod calendar;
pub mod columns;
pub mod drag;
pub mod handler;
pub mod notify;
pub mod view;

pub use board::{
    BoardEvent, BoardRequest, CommitResult, DropOutcome, EventOutcome, PendingStatusChange,
    TaskBoard,
};
pub use calendar::{DayCell, MonthGrid, YearMonth};
pub use columns::{COLUMNS, Column, EMPTY_COLUMN_PLACEHOLDER, Partition};
pub use drag::DragState;
pub use handler::{StatusChangeError, StatusChangeHandler};
pub use notify::{MemoryNotifier, Notification, NotificationLevel, Notifier};
