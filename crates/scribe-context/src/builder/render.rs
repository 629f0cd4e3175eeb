//! Fragment rendering in the exact line format of the training data.

use scribe_core::models::{format_number, FieldValue};

/// Render one field, or `None` when it would contribute nothing.
///
/// Scalars render as `name: value`. Tables render as `name:` followed by one
/// pipe-joined line per row; rows that render empty are skipped, and a table
/// with no remaining rows produces no fragment at all.
pub fn render_fragment(name: &str, value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(text) if text.is_empty() => None,
        FieldValue::Text(text) => Some(format!("{name}: {text}")),
        FieldValue::Number(n) => Some(format!("{name}: {}", format_number(*n))),
        FieldValue::Table(rows) => {
            let lines: Vec<String> = rows
                .iter()
                .map(|row| row.render())
                .filter(|line| !line.is_empty())
                .collect();
            if lines.is_empty() {
                None
            } else {
                Some(format!("{name}:\n{}", lines.join("\n")))
            }
        }
    }
}
