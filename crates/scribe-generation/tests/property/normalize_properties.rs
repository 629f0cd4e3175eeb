//! Property tests for table normalization.

use chrono::NaiveDate;
use proptest::prelude::*;
use scribe_context::registry::schema;
use scribe_core::models::TableRow;
use scribe_generation::TableNormalizer;

fn normalizer() -> TableNormalizer {
    TableNormalizer::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), 30)
}

fn cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        (0u32..10_000).prop_map(|n| Some(n.to_string())),
        "[a-zA-Z ]{0,8}".prop_map(Some),
    ]
}

fn raw_row(width: usize) -> impl Strategy<Value = TableRow> {
    proptest::collection::vec(cell(), width).prop_map(|cells| {
        let mut row = TableRow::new();
        for (index, cell) in cells.into_iter().enumerate() {
            if let Some(value) = cell {
                row.set(index, value);
            }
        }
        row
    })
}

proptest! {
    #[test]
    fn cost_totals_are_always_recomputed(rows in proptest::collection::vec(raw_row(5), 0..8)) {
        let normalized = normalizer().normalize(&schema::COUTS_CONSTRUCTION, rows.clone());
        prop_assert_eq!(normalized.len(), rows.len());
        for row in &normalized {
            prop_assert_eq!(row.leading_cells().len(), schema::COUTS_CONSTRUCTION.width());
            let quantity: f64 = row.get(1).unwrap().parse().unwrap();
            let rate: f64 = row.get(2).unwrap().parse().unwrap();
            let total: f64 = row.get(3).unwrap().parse().unwrap();
            prop_assert_eq!(total, quantity * rate);
        }
    }

    #[test]
    fn phase_rows_are_complete_with_positive_duration(rows in proptest::collection::vec(raw_row(6), 1..8)) {
        let normalized = normalizer().normalize(&schema::PHASES, rows);
        for row in &normalized {
            prop_assert_eq!(row.leading_cells().len(), schema::PHASES.width());
            let days: i64 = row.get(2).unwrap().parse().unwrap();
            prop_assert!(days >= 1);
            prop_assert!(!row.get(3).unwrap().is_empty());
            prop_assert!(!row.get(4).unwrap().is_empty());
        }
    }

    #[test]
    fn normalization_is_idempotent(rows in proptest::collection::vec(raw_row(4), 0..6)) {
        let once = normalizer().normalize(&schema::JALONS, rows);
        let twice = normalizer().normalize(&schema::JALONS, once.clone());
        prop_assert_eq!(once, twice);
    }
}
