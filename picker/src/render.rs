//! Stateless text rendering of the two visible months.
//!
//! Each day occupies four columns:
//!
//! ```text
//! " 07 "  no highlight
//! "[07 "  range start
//! " 07]"  range end
//! "[07]"  single-day range
//! "-07-"  inside the range
//! ```

use std::fmt::Write;

use chrono::Datelike;

use crate::calendar::{DayCell, WEEKDAY_LABELS};
use crate::controller::MonthView;

const CELL_WIDTH: usize = 4;
const MONTH_GAP: &str = "   ";

fn render_cell(cell: &DayCell) -> String {
    let h = cell.highlight;
    let day = cell.date.day();
    match (h.from, h.to, h.between) {
        (true, true, _) => format!("[{day:02}]"),
        (true, false, _) => format!("[{day:02} "),
        (false, true, _) => format!(" {day:02}]"),
        (false, false, true) => format!("-{day:02}-"),
        _ => format!(" {day:02} "),
    }
}

/// Lines of one month: caption, weekday header, then one line per week.
pub fn render_month(view: &MonthView) -> Vec<String> {
    let width = CELL_WIDTH * 7;
    let mut lines = vec![
        format!("{:^width$}", view.month.to_string()),
        WEEKDAY_LABELS
            .iter()
            .map(|w| format!("{:^1$}", w, CELL_WIDTH))
            .collect(),
    ];

    let mut week = String::new();
    for cell in &view.cells {
        if let Some(start) = cell.grid_start {
            week.push_str(&" ".repeat(CELL_WIDTH * (start as usize - 1)));
        }
        week.push_str(&render_cell(cell));
        if cell.weekday_column == 7 {
            lines.push(std::mem::take(&mut week));
        }
    }
    if !week.is_empty() {
        lines.push(format!("{week:<width$}"));
    }
    lines
}

/// Both months side by side.
pub fn render_months(months: &[MonthView; 2]) -> String {
    let left = render_month(&months[0]);
    let right = render_month(&months[1]);
    let width = CELL_WIDTH * 7;
    let rows = left.len().max(right.len());

    let mut out = String::new();
    for i in 0..rows {
        let l = left.get(i).map(String::as_str).unwrap_or("");
        let r = right.get(i).map(String::as_str).unwrap_or("");
        let _ = writeln!(out, "{l:<width$}{}{r}", MONTH_GAP);
    }
    out
}

// ─── tests ───────────────────────────────────────────────────────────────
