//! Fixed-width text layout of a usage table.

use std::fmt::Write;

use crate::domain::{PitchCell, UsageTable};

const NAME_WIDTH: usize = 20;
const DAY_WIDTH: usize = 8;
const SUM_WIDTH: usize = 6;
const VERT_BREAK: &str = "  ";

/// Render `table` as text, using `marker` for empty cells and zero sums.
///
/// Relievers come first; a rule separates them from the first pitcher with
/// a start.
#[must_use]
pub fn render(table: &UsageTable, marker: &str) -> String {
    let mut out = String::new();

    let mut heading = vec![pad("Pitcher", NAME_WIDTH)];
    heading.extend(table.labels.iter().map(|label| pad(label, DAY_WIDTH)));
    heading.push(VERT_BREAK.to_string());
    heading.push(pad(&format!("Last {}", table.windows.short), SUM_WIDTH));
    heading.push(pad(&format!("Last {}", table.windows.long), SUM_WIDTH));

    let mut rule = vec!["-".repeat(NAME_WIDTH)];
    rule.extend(table.labels.iter().map(|_| "-".repeat(DAY_WIDTH)));
    rule.push(VERT_BREAK.to_string());
    rule.push("-".repeat(SUM_WIDTH));
    rule.push("-".repeat(SUM_WIDTH));
    let rule = join(&rule);

    push_line(&mut out, &join(&heading));
    push_line(&mut out, &rule);

    let first_starter = table.first_starter();
    for (index, row) in table.rows.iter().enumerate() {
        if first_starter == Some(index) {
            push_line(&mut out, &rule);
        }

        let name: String = row.name.chars().take(NAME_WIDTH).collect();
        let mut cols = vec![pad(&name, NAME_WIDTH)];
        cols.extend(row.cells.iter().map(|cell| pad(&cell_text(*cell, marker), DAY_WIDTH)));
        cols.push(VERT_BREAK.to_string());
        cols.push(pad(&sum_text(row.last_short, marker), SUM_WIDTH));
        cols.push(pad(&sum_text(row.last_long, marker), SUM_WIDTH));
        push_line(&mut out, &join(&cols));
    }

    out
}

fn cell_text(cell: PitchCell, marker: &str) -> String {
    match cell {
        PitchCell::Pitches(n) => n.to_string(),
        PitchCell::NoPitches => marker.to_string(),
    }
}

/// A zero sum reads the same as a day off.
fn sum_text(sum: u32, marker: &str) -> String {
    if sum == 0 {
        marker.to_string()
    } else {
        sum.to_string()
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn join(cols: &[String]) -> String {
    cols.join(" ")
}

fn push_line(out: &mut String, line: &str) {
    let _ = writeln!(out, "{}", line.trim_end());
}
