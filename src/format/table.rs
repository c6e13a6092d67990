//! Tabular rendering of nested values
//!
//! A value is flattened into rows of string cells. Containers prefix each row
//! produced by a child with a label (index, key or field name); only the first
//! row of a child carries the label, the rest get an empty cell so the label
//! visually spans them. Rows end up ragged and are padded at render time.

use super::value::Value;
use std::fmt::Write as _;

/// Rectangular-on-render grid of string cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Flatten a value into rows
    pub fn from_value(value: &Value) -> Self {
        Self {
            rows: flatten(value),
        }
    }

    /// Rows as flattened, before padding
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns after padding (the longest row)
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Maximum cell width of each column, in characters
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.width()];
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Render as aligned text: a leading blank line, then one line per row
    /// with cells left-justified and joined by `separator`.
    pub fn render(&self, separator: &str) -> String {
        let widths = self.column_widths();
        let mut out = String::from("\n");

        for row in &self.rows {
            for (i, width) in widths.iter().enumerate() {
                if i > 0 {
                    out.push_str(separator);
                }
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let _ = write!(out, "{:<width$}", cell, width = *width);
            }
            out.push('\n');
        }

        out
    }
}

fn leaf(cell: String) -> Vec<Vec<String>> {
    vec![vec![cell]]
}

fn flatten(value: &Value) -> Vec<Vec<String>> {
    match value {
        Value::Null => leaf("nil".to_string()),
        Value::Reference(inner) => flatten(inner),
        Value::Scalar(text) => leaf(text.clone()),
        Value::Sequence(items) => labeled(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item)),
        ),
        Value::Mapping(entries) => {
            let mut sorted: Vec<&(String, Value)> = entries.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));
            labeled(sorted.into_iter().map(|(key, item)| (key.clone(), item)))
        }
        Value::Record(fields) => labeled(fields.iter().map(|(name, item)| (name.clone(), item))),
    }
}

fn labeled<'a, I>(children: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = (String, &'a Value)>,
{
    let mut rows = Vec::new();
    for (label, child) in children {
        let mut label = Some(label);
        for row in flatten(child) {
            let mut labeled_row = Vec::with_capacity(row.len() + 1);
            labeled_row.push(label.take().unwrap_or_default());
            labeled_row.extend(row);
            rows.push(labeled_row);
        }
    }
    rows
}
