//! Table normalization applied to every generated or corrected table
//! before it is stored.
//!
//! Every declared column ends up present. Numeric columns are parse-or-zero,
//! calculated columns are recomputed from their inputs (the model's own
//! totals are never trusted) and missing dates are synthesized forward from
//! a reference date, spaced by row index.

use chrono::{Datelike, Duration, Local, NaiveDate};
use scribe_context::{ColumnKind, FieldRegistry, Formula, TableSchema};
use scribe_core::config::TableConfig;
use scribe_core::models::{format_number, FieldValue, TableRow};

use crate::parse::parse_table;

/// Duration used when a phase's dates cannot be read.
pub const DEFAULT_WORKING_DAYS: i64 = 20;

#[derive(Debug, Clone, Copy)]
pub struct TableNormalizer {
    reference: NaiveDate,
    spacing_days: i64,
}

impl TableNormalizer {
    pub fn new(reference: NaiveDate, spacing_days: i64) -> Self {
        Self {
            reference,
            spacing_days,
        }
    }

    /// Normalizer anchored on today.
    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(Local::now().date_naive(), config.date_spacing_days)
    }

    /// Shape a value for storage under `field` (either vocabulary).
    ///
    /// Table fields are parsed from raw text when needed, then normalized.
    /// Scalar values pass through unchanged.
    pub fn prepare(&self, registry: &FieldRegistry, field: &str, value: FieldValue) -> FieldValue {
        let Some(schema) = registry.table_schema(field) else {
            return value;
        };
        let rows = match value {
            FieldValue::Table(rows) => rows,
            FieldValue::Text(raw) => parse_table(schema, &raw),
            FieldValue::Number(_) => return value,
        };
        FieldValue::Table(self.normalize(schema, rows))
    }

    pub fn normalize(&self, schema: &TableSchema, rows: Vec<TableRow>) -> Vec<TableRow> {
        rows.into_iter()
            .enumerate()
            .map(|(index, row)| self.normalize_row(schema, index, row))
            .collect()
    }

    fn normalize_row(&self, schema: &TableSchema, index: usize, mut row: TableRow) -> TableRow {
        for (col, spec) in schema.columns.iter().enumerate() {
            let current = row.get(col).map(str::trim).filter(|v| !v.is_empty());
            let value = match spec.kind {
                ColumnKind::Text { default } => match current {
                    Some(v) => v.to_string(),
                    None => default.unwrap_or_default().to_string(),
                },
                ColumnKind::Level { default, .. } => current.unwrap_or(default).to_string(),
                ColumnKind::Number => format_number(parse_or_zero(current.unwrap_or_default())),
                ColumnKind::Date { offset_days } => match current {
                    Some(v) => v.to_string(),
                    None => self.default_date(index, offset_days),
                },
                // Filled in below, once every input is settled.
                ColumnKind::Calculated(_) => String::new(),
            };
            row.set(col, value);
        }

        for (col, spec) in schema.columns.iter().enumerate() {
            if let ColumnKind::Calculated(formula) = spec.kind {
                let value = evaluate(formula, &row);
                row.set(col, value);
            }
        }
        row
    }

    /// Empty when the synthesized date falls outside the calendar range.
    fn default_date(&self, index: usize, offset_days: i64) -> String {
        i64::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .and_then(|row| row.checked_mul(self.spacing_days))
            .and_then(|days| days.checked_add(offset_days))
            .and_then(Duration::try_days)
            .and_then(|delta| self.reference.checked_add_signed(delta))
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

fn evaluate(formula: Formula, row: &TableRow) -> String {
    let cell = |index: usize| row.get(index).unwrap_or_default();
    match formula {
        Formula::Product { left, right } => {
            format_number(parse_or_zero(cell(left)) * parse_or_zero(cell(right)))
        }
        Formula::WorkingDaysBetween { start, end } => {
            working_days_between(cell(start), cell(end)).to_string()
        }
    }
}

/// Parse a user- or model-supplied number, `0` when unreadable.
///
/// Accepts spaces as thousands separators and a comma as decimal mark.
pub fn parse_or_zero(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Read an ISO `YYYY-MM-DD` (time suffix ignored) or `DD/MM/YYYY` date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.contains('/') {
        let mut parts = text.split('/').map(|p| p.trim().parse::<u32>().ok());
        let (day, month, year) = (parts.next()??, parts.next()??, parts.next()??);
        if parts.next().is_some() {
            return None;
        }
        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
    } else {
        NaiveDate::parse_from_str(text.get(..10).unwrap_or(text), "%Y-%m-%d").ok()
    }
}

/// Monday–Friday days from `start` to `end` inclusive, at least 1.
/// [`DEFAULT_WORKING_DAYS`] when either date is unreadable.
pub fn working_days_between(start: &str, end: &str) -> i64 {
    let (Some(start), Some(end)) = (parse_date(start), parse_date(end)) else {
        return DEFAULT_WORKING_DAYS;
    };
    let days = start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| day.weekday().number_from_monday() <= 5)
        .count() as i64;
    days.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_context::registry::schema;

    fn normalizer() -> TableNormalizer {
        TableNormalizer::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), 30)
    }

    #[test]
    fn out_of_range_spacing_leaves_dates_empty() {
        let normalizer = TableNormalizer::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), 100_000_000);
        let rows = normalizer.normalize(&schema::JALONS, vec![TableRow::from_cells(["Go"])]);
        assert_eq!(rows[0].get(2), Some(""));

        let normalizer = TableNormalizer::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), i64::MAX);
        let rows = normalizer.normalize(&schema::PHASES, vec![TableRow::from_cells(["Cadrage"])]);
        assert_eq!(rows[0].get(3), Some(""));
        assert_eq!(rows[0].get(2), Some("20"));
    }

    #[test]
    fn construction_total_is_recomputed() {
        let row = TableRow::from_cells(["Chef de projet", "10", "500", "999999", "CP"]);
        let rows = normalizer().normalize(&schema::COUTS_CONSTRUCTION, vec![row]);
        assert_eq!(rows[0].get(3), Some("5000"));
        assert_eq!(rows[0].get(4), Some("CP"));
    }

    #[test]
    fn unreadable_numbers_become_zero() {
        let row = TableRow::from_cells(["Licence", "beaucoup", "1 200,5"]);
        let rows = normalizer().normalize(&schema::COUTS_FONCTIONNEMENT, vec![row]);
        assert_eq!(rows[0].get(1), Some("0"));
        assert_eq!(rows[0].get(2), Some("1200.5"));
        assert_eq!(rows[0].get(3), Some("0"));
        assert_eq!(rows[0].get(4), Some(""));
    }

    #[test]
    fn defaults_fill_missing_columns() {
        let row = TableRow::from_cells(["Panne datacenter"]);
        let rows = normalizer().normalize(&schema::RISQUES, vec![row]);
        assert_eq!(
            rows[0].leading_cells(),
            vec!["Panne datacenter", "Moyenne", "Moyen", "", "Chef de projet"]
        );
    }

    #[test]
    fn dates_are_synthesized_forward_by_row() {
        let rows = normalizer().normalize(
            &schema::JALONS,
            vec![TableRow::from_cells(["Go"]), TableRow::from_cells(["Recette"])],
        );
        // reference + (index + 1) × 30 + 30
        assert_eq!(rows[0].get(2), Some("2025-03-02"));
        assert_eq!(rows[1].get(2), Some("2025-04-01"));
    }

    #[test]
    fn phase_duration_counts_working_days() {
        let row = TableRow::from_cells(["Lot 1", "Cadrage", "99", "2025-01-06", "2025-01-17"]);
        let rows = normalizer().normalize(&schema::PHASES, vec![row]);
        assert_eq!(rows[0].get(2), Some("10"));
        assert_eq!(rows[0].get(5), Some("Équipe projet"));
    }

    #[test]
    fn prepare_parses_raw_table_text() {
        let registry = FieldRegistry::standard();
        let value = normalizer().prepare(
            &registry,
            "coutsConstruction",
            FieldValue::from("Architecte|5|900|1|ARCH"),
        );
        let rows = value.as_table().unwrap();
        assert_eq!(rows[0].get(3), Some("4500"));

        let scalar = normalizer().prepare(&registry, "besoin", FieldValue::from("texte"));
        assert_eq!(scalar, FieldValue::from("texte"));
    }

    #[test]
    fn working_days_edge_cases() {
        assert_eq!(working_days_between("06/01/2025", "10/01/2025"), 5);
        assert_eq!(working_days_between("2025-01-11", "2025-01-12"), 1);
        assert_eq!(working_days_between("2025-01-17", "2025-01-06"), 1);
        assert_eq!(working_days_between("demain", "2025-01-06"), DEFAULT_WORKING_DAYS);
        assert_eq!(working_days_between("2025-01-06T08:00:00", "2025-01-07"), 2);
    }
}
