//! Parsing of raw pipe-delimited table text returned by the model.
//!
//! One row per line, cells separated by `|`. A line carrying every declared
//! column maps positionally; a shorter line is taken to omit the calculated
//! columns, which the normalizer recomputes anyway. Lines without a
//! separator are commentary and skipped.

use std::sync::LazyLock;

use regex::Regex;
use scribe_context::{ColumnKind, LevelScale, TableSchema};
use scribe_core::constants::COLUMN_SEPARATOR;
use scribe_core::models::{format_number, TableRow};

static ISO_DATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d{4})-(\d{2})-(\d{2})").ok());

static FR_DATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").ok());

static DIGITS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d+").ok());

/// Parse `raw` into at most `schema.max_rows` rows.
pub fn parse_table(schema: &TableSchema, raw: &str) -> Vec<TableRow> {
    let mut rows = Vec::new();
    for line in raw.trim().lines() {
        if rows.len() >= schema.max_rows {
            break;
        }
        let line = line.trim();
        if !line.contains(COLUMN_SEPARATOR) {
            continue;
        }
        let cells: Vec<&str> = line.split(COLUMN_SEPARATOR).map(str::trim).collect();
        rows.push(parse_row(schema, &cells));
    }
    tracing::debug!(rows = rows.len(), "parsed raw table");
    rows
}

fn parse_row(schema: &TableSchema, cells: &[&str]) -> TableRow {
    let targets: Vec<usize> = if cells.len() >= schema.width() {
        (0..schema.width()).collect()
    } else {
        schema
            .columns
            .iter()
            .enumerate()
            .filter(|(_, spec)| !matches!(spec.kind, ColumnKind::Calculated(_)))
            .map(|(index, _)| index)
            .collect()
    };

    let mut row = TableRow::new();
    for (&col, cell) in targets.iter().zip(cells) {
        let Some(spec) = schema.column(col) else {
            continue;
        };
        let value = match spec.kind {
            ColumnKind::Level { scale, .. } => map_level(scale, cell).to_string(),
            ColumnKind::Number => format_number(extract_number(cell)),
            ColumnKind::Date { .. } => extract_date(cell),
            ColumnKind::Text { .. } | ColumnKind::Calculated(_) => cell.to_string(),
        };
        row.set(col, value);
    }
    row
}

/// Map free text onto a level scale. Low keywords win over high ones;
/// anything else is the middle level.
pub fn map_level(scale: LevelScale, text: &str) -> &'static str {
    let text = text.trim().to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| text.contains(w));

    if has(&["faible", "bas", "low"]) {
        return "Faible";
    }
    let high: &[&str] = match scale {
        LevelScale::Criticality => &["élevé", "elevé", "haut", "high", "critique"],
        LevelScale::Probability => &["élevé", "elevé", "haut", "high"],
        LevelScale::Impact => &["élevé", "elevé", "haut", "high", "majeur"],
    };
    match (scale, has(high)) {
        (LevelScale::Probability, true) => "Élevée",
        (_, true) => "Élevé",
        (LevelScale::Probability, false) => "Moyenne",
        (_, false) => "Moyen",
    }
}

/// First ISO or `DD/MM/YYYY` date in `text`, zero-padded; empty when none.
pub fn extract_date(text: &str) -> String {
    if text.trim().chars().count() < 6 {
        return String::new();
    }
    if let Some(m) = ISO_DATE.as_ref().and_then(|re| re.find(text)) {
        return m.as_str().to_string();
    }
    if let Some(caps) = FR_DATE.as_ref().and_then(|re| re.captures(text)) {
        return format!("{:0>2}/{:0>2}/{}", &caps[1], &caps[2], &caps[3]);
    }
    String::new()
}

/// First run of digits after stripping separators and currency, with `k`
/// read as thousands. `0` when there is none.
pub fn extract_number(text: &str) -> f64 {
    let cleaned = text
        .replace([' ', ',', '€'], "")
        .replace('k', "000");
    DIGITS
        .as_ref()
        .and_then(|re| re.find(&cleaned))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}
