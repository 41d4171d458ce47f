//! Plain-text rendering of the diagonal stage table.
//!
//! One column per stage plus a leading `Pair` column and a trailing
//! `Output` column. Pair *p*'s stage *s* cell sits at body row
//! `p + s + 1`, column `s + 1`, so each pair's trip through the pipeline
//! reads as a diagonal and simultaneous stages of different pairs share
//! a row. The renderer owns no state; it maps recorded histories to text
//! and nothing else.

use shiftadd_core::{BinaryWord, ItemHistory, OPERAND_BITS, STAGE_COUNT, StageKind};
use unicode_width::UnicodeWidthStr;

/// Column count: pair column, one per stage, output column.
const COLUMNS: usize = 1 + STAGE_COUNT + 1;

/// A cell is zero or more text lines.
type Cell = Vec<String>;

/// Render the full stage table for the given histories.
///
/// Returns an empty string when nothing was submitted.
#[must_use]
pub fn render(histories: &[&ItemHistory]) -> String {
    if histories.is_empty() {
        return String::new();
    }

    let mut rows: Vec<Vec<Cell>> = vec![header_row()];
    for row in 1..histories.len() + STAGE_COUNT {
        rows.push(
            (0..COLUMNS)
                .map(|column| body_cell(histories, row, column))
                .collect(),
        );
    }

    draw_grid(&rows)
}

fn header_row() -> Vec<Cell> {
    (0..COLUMNS)
        .map(|column| {
            let label = if column == 0 {
                "Pair".to_owned()
            } else if column == COLUMNS - 1 {
                "Output".to_owned()
            } else {
                match StageKind::of_index(column - 1) {
                    StageKind::Shift => StageKind::Shift.label().to_owned(),
                    StageKind::MultiplyAdd => {
                        // Multiplier bits are numbered from the least
                        // significant end in the header, so the first
                        // multiply-add column works on B[7].
                        format!("Mul A*B[{}] + add", (STAGE_COUNT - column) / 2)
                    }
                }
            };
            vec![label]
        })
        .collect()
}

fn body_cell(histories: &[&ItemHistory], row: usize, column: usize) -> Cell {
    let pairs = histories.len();

    // Initial pair cell: decimal operands and the seed record.
    if column == 0 {
        if (1..=pairs).contains(&row) {
            let history = histories[row - 1];
            let seed = &history.records()[0];
            return vec![
                format!("A: {}", history.multiplicand().decimal()),
                format!("B: {}", history.multiplier().decimal()),
                format!("Sum: {}", seed.sum),
                format!("t: {}", seed.timestamp),
            ];
        }
        return Vec::new();
    }

    // Output cell: operands and the decoded final product.
    if column == COLUMNS - 1 {
        if row >= STAGE_COUNT && row - STAGE_COUNT < pairs {
            let history = histories[row - STAGE_COUNT];
            let last = history.latest();
            // Sums are produced by grouped rendering, always parseable.
            let result = BinaryWord::parse_grouped(&last.sum).unwrap_or_default();
            return vec![
                format!("A: {}", history.multiplicand().grouped(OPERAND_BITS)),
                format!("B: {}", history.multiplier().grouped(OPERAND_BITS)),
                format!("Result: {result}"),
            ];
        }
        return Vec::new();
    }

    // Stage cell on pair (row - column)'s diagonal.
    if row < column || row - column >= pairs {
        return Vec::new();
    }
    let history = histories[row - column];
    let record = &history.records()[column];
    let mut lines = vec![
        format!("A: {}", history.multiplicand().grouped(OPERAND_BITS)),
        format!("B: {}", history.multiplier().grouped(OPERAND_BITS)),
    ];
    if StageKind::of_index(column - 1) == StageKind::MultiplyAdd {
        lines.push(format!("Bit: {}", record.bit));
    }
    lines.push(format!("Sum: {}", record.sum));
    lines.push(format!("t: {}", record.timestamp));
    lines
}

fn draw_grid(rows: &[Vec<Cell>]) -> String {
    let widths = column_widths(rows);

    let mut out = String::new();
    push_separator(&mut out, &widths);
    for row in rows {
        let height = row.iter().map(Vec::len).max().unwrap_or(0).max(1);
        for line in 0..height {
            out.push('|');
            for (cell, width) in row.iter().zip(&widths) {
                let text = cell.get(line).map_or("", String::as_str);
                let pad = width - text.width();
                out.push(' ');
                out.push_str(text);
                out.extend(std::iter::repeat_n(' ', pad + 1));
                out.push('|');
            }
            out.push('\n');
        }
        push_separator(&mut out, &widths);
    }
    out
}

fn column_widths(rows: &[Vec<Cell>]) -> Vec<usize> {
    let mut widths = vec![0; COLUMNS];
    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            for line in cell {
                widths[column] = widths[column].max(line.width());
            }
        }
    }
    widths
}

fn push_separator(out: &mut String, widths: &[usize]) {
    out.push('+');
    for width in widths {
        out.extend(std::iter::repeat_n('-', width + 2));
        out.push('+');
    }
    out.push('\n');
}
