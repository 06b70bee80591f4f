//! Side-by-side text rendering of the board.

use tally_board::view::{BoardView, CardView, ColumnView};

use super::table::{format_cell, truncate_text};

const GAP: &str = " │ ";
const DEFAULT_COLUMN_WIDTH: usize = 30;
const MIN_COLUMN_WIDTH: usize = 16;

/// Column width that fits three columns in `term_width`.
#[must_use]
pub fn column_width(term_width: Option<usize>) -> usize {
    term_width.map_or(DEFAULT_COLUMN_WIDTH, |width| {
        (width.saturating_sub(GAP.chars().count() * 2) / 3).max(MIN_COLUMN_WIDTH)
    })
}

#[must_use]
pub fn render_board(view: &BoardView, width: usize) -> String {
    let columns: Vec<Vec<String>> = view
        .columns
        .iter()
        .map(|column| column_lines(column, width))
        .collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    (0..height)
        .map(|row| {
            columns
                .iter()
                .map(|lines| {
                    let cell = lines.get(row).map_or("", String::as_str);
                    format_cell(cell, width, false, false)
                })
                .collect::<Vec<_>>()
                .join(GAP)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn column_lines(column: &ColumnView, width: usize) -> Vec<String> {
    let marker = if column.highlighted { "▸ " } else { "" };
    let mut lines = vec![
        truncate_text(&format!("{marker}{} ({})", column.title, column.count), width),
        "─".repeat(width),
    ];

    if let Some(placeholder) = column.placeholder {
        lines.push(truncate_text(placeholder, width));
        return lines;
    }

    for card in &column.cards {
        lines.extend(card_lines(card, width));
        lines.push(String::new());
    }
    lines.pop();
    lines
}

fn card_lines(card: &CardView, width: usize) -> Vec<String> {
    let mut lines = vec![truncate_text(&card.title, width)];

    let mut details = Vec::new();
    if let Some(due) = &card.due {
        details.push(format!("due {due}"));
    }
    if let Some(assignee) = &card.assignee {
        details.push(assignee.clone());
    }
    if let Some(hours) = card.estimated_hours {
        details.push(format!("{hours}h est"));
    }
    if card.time_entries > 0 {
        details.push(format!("{} logged", card.time_entries));
    }
    if !details.is_empty() {
        lines.push(truncate_text(&format!("  {}", details.join(" · ")), width));
    }
    lines.push(truncate_text(&format!("  #{}", card.id), width));
    lines
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use tally_board::{MemoryNotifier, TaskBoard};
    use tally_core::entities::Task;

    use super::*;

    fn task(id: &str, status: &str, due: Option<&str>) -> Task {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Task {id}"),
            "status": status,
            "dueDate": due,
            "assignedUser": { "id": "u1", "name": "Ana", "email": "ana@example.com" },
        }))
        .unwrap()
    }

    #[test]
    fn board_renders_three_headers_and_placeholder() {
        let mut board = TaskBoard::new(Arc::new(MemoryNotifier::new()));
        board.set_tasks(vec![
            task("t1", "TODO", Some("2025-03-05")),
            task("t2", "DONE", None),
        ]);

        let out = render_board(&board.view(), 24);
        let first = out.lines().next().unwrap();
        assert!(first.contains("To Do (1)"));
        assert!(first.contains("In Progress (0)"));
        assert!(first.contains("Done (1)"));
        assert!(out.contains("No tasks"));
        assert!(out.contains("due Mar 05, 2025 · Ana"));
    }

    #[test]
    fn column_width_respects_terminal() {
        assert_eq!(column_width(None), DEFAULT_COLUMN_WIDTH);
        assert_eq!(column_width(Some(96)), 30);
        assert_eq!(column_width(Some(20)), MIN_COLUMN_WIDTH);
    }
}
