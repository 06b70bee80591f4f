//! Text rendering of the month grid.

use chrono::Datelike;
use tally_board::MonthGrid;

use super::table::{format_cell, truncate_text};

const CELL_WIDTH: usize = 12;
/// Task titles shown per day before collapsing into "+N more".
const MAX_TASKS_PER_DAY: usize = 3;

#[must_use]
pub fn render_month(grid: &MonthGrid<'_>) -> String {
    let mut lines = vec![grid.month.label(), String::new()];

    let labels: Vec<String> = grid
        .weekday_labels()
        .into_iter()
        .map(str::to_string)
        .collect();
    lines.push(join_row(&labels));
    lines.push("─".repeat(CELL_WIDTH * 7 + 6));

    for week in &grid.weeks {
        let days: Vec<String> = week
            .iter()
            .map(|cell| {
                let day = cell.date.day();
                if !cell.in_month {
                    format!("({day})")
                } else if cell.is_today {
                    format!("[{day}]")
                } else {
                    day.to_string()
                }
            })
            .collect();
        lines.push(join_row(&days));

        let depth = week
            .iter()
            .map(|cell| cell.tasks.len().min(MAX_TASKS_PER_DAY + 1))
            .max()
            .unwrap_or(0);
        for slot in 0..depth {
            let titles: Vec<String> = week
                .iter()
                .map(|cell| task_slot(&cell.tasks, slot))
                .collect();
            lines.push(join_row(&titles));
        }
        lines.push(String::new());
    }

    if grid.unscheduled > 0 {
        lines.push(format!("{} task(s) without a due date", grid.unscheduled));
    } else {
        lines.pop();
    }

    lines.join("\n")
}

fn task_slot(tasks: &[&tally_core::entities::Task], slot: usize) -> String {
    if tasks.len() > MAX_TASKS_PER_DAY + 1 && slot == MAX_TASKS_PER_DAY {
        return format!("+{} more", tasks.len() - MAX_TASKS_PER_DAY);
    }
    tasks
        .get(slot)
        .map(|task| format!("• {}", task.title))
        .unwrap_or_default()
}

fn join_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| format_cell(&truncate_text(cell, CELL_WIDTH), CELL_WIDTH, false, false))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}
