use colored::Colorize;

use crate::cli::output::{current_preferences, OutputPreferences};
use crate::core::TableSnapshot;

/// Marker placed in the first column of highlighted rows.
pub const HIGHLIGHT_MARKER: &str = "*";

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    fn new(header: &str, min_width: usize, max_width: Option<usize>, alignment: Alignment) -> Self {
        Self {
            header: header.to_string(),
            min_width,
            max_width,
            alignment,
        }
    }
}

pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    /// Indices into `rows` drawn with the highlight style.
    pub highlighted: Vec<usize>,
    pub padding: usize,
}

impl Table {
    /// Builds the ledger table: one line per transaction and a closing total.
    pub fn from_snapshot(snapshot: &TableSnapshot, highlighted: &[usize]) -> Self {
        let columns = vec![
            TableColumn::new("", 1, Some(1), Alignment::Left),
            TableColumn::new("#", 2, None, Alignment::Right),
            TableColumn::new("Amount", 8, None, Alignment::Right),
            TableColumn::new("Category", 10, Some(24), Alignment::Left),
            TableColumn::new("Date", 16, None, Alignment::Left),
        ];

        let mut rows: Vec<Vec<String>> = snapshot
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let marker = if highlighted.contains(&idx) {
                    HIGHLIGHT_MARKER
                } else {
                    ""
                };
                vec![
                    marker.to_string(),
                    row.serial.to_string(),
                    format!("{:.2}", row.amount),
                    row.category.clone(),
                    row.timestamp.clone(),
                ]
            })
            .collect();
        rows.push(vec![
            String::new(),
            "Total".to_string(),
            format!("{:.2}", snapshot.total),
            String::new(),
            String::new(),
        ]);

        let highlighted = highlighted
            .iter()
            .copied()
            .filter(|idx| *idx < snapshot.rows.len())
            .collect();

        Self {
            columns,
            rows,
            highlighted,
            padding: 1,
        }
    }

    /// Computes each column's content width from headers, rows and limits.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                if let Some(max_width) = column.max_width {
                    width = width.min(max_width);
                }
                width
            })
            .collect()
    }

    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let rendered_cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell_text = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                render_cell(cell_text, widths[idx], &column.alignment, self.padding)
            })
            .collect();

        rendered_cells.join(" ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        self.render_with(&current_preferences())
    }

    pub fn render_with(&self, prefs: &OutputPreferences) -> String {
        let widths = self.compute_widths();
        let rule = horizontal_rule(&widths, self.padding, prefs);
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut lines = vec![self.render_row(&header, &widths), rule.clone()];
        let last = self.rows.len().saturating_sub(1);
        for (idx, row) in self.rows.iter().enumerate() {
            if idx == last {
                lines.push(rule.clone());
            }
            let line = self.render_row(row, &widths);
            if self.highlighted.contains(&idx) && !prefs.plain_mode {
                lines.push(line.bold().yellow().to_string());
            } else {
                lines.push(line);
            }
        }
        lines.join("\n")
    }
}

/// Counts printable characters, skipping ANSI escape sequences.
fn visible_width(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut idx = 0;
    let mut width = 0;

    while idx < bytes.len() {
        if bytes[idx] == 0x1b {
            idx += 1;
            if idx < bytes.len() && bytes[idx] == b'[' {
                idx += 1;
                while idx < bytes.len() {
                    let byte = bytes[idx];
                    idx += 1;
                    if (0x40..=0x7E).contains(&byte) {
                        break;
                    }
                }
                continue;
            }
        }

        if let Some(ch) = text[idx..].chars().next() {
            width += 1;
            idx += ch.len_utf8();
        } else {
            break;
        }
    }

    width
}

fn truncate_text(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 1 {
        return "…".to_string();
    }

    let mut result: String = text.chars().take(width - 1).collect();
    result.push('…');
    result
}

pub fn render_cell(text: &str, width: usize, alignment: &Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));

    let (left_spaces, right_spaces) = match alignment {
        Alignment::Left => (0, remaining),
        Alignment::Right => (remaining, 0),
    };

    let mut cell = String::new();
    cell.push_str(&" ".repeat(padding + left_spaces));
    cell.push_str(&fitted);
    cell.push_str(&" ".repeat(right_spaces + padding));
    cell
}

pub fn horizontal_rule(widths: &[usize], padding: usize, prefs: &OutputPreferences) -> String {
    if widths.is_empty() {
        return String::new();
    }

    let total_width: usize =
        widths.iter().map(|w| w + (padding * 2)).sum::<usize>() + widths.len().saturating_sub(1);
    let ch = if prefs.plain_mode { '-' } else { '─' };
    ch.to_string().repeat(total_width)
}
