//! Column schemas for table-shaped fields.

/// A table field's declared columns, in positional order (`col0`, `col1`, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSchema {
    pub columns: &'static [ColumnSpec],
    /// Most rows kept when parsing raw model output.
    pub max_rows: usize,
}

impl TableSchema {
    pub fn column(&self, index: usize) -> Option<&ColumnSpec> {
        self.columns.get(index)
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnKind {
    /// Free text, with an optional default when absent.
    Text { default: Option<&'static str> },
    /// Graded level (`Faible` / `Moyen` / `Élevé`), with its default.
    Level { scale: LevelScale, default: &'static str },
    /// Parse-or-zero numeric value.
    Number,
    /// Date, defaulted to `reference + (row_index + 1) × spacing + offset_days`.
    Date { offset_days: i64 },
    /// Never trusted from input; recomputed from other columns.
    Calculated(Formula),
}

/// Vocabulary a level column maps free text onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelScale {
    Criticality,
    Probability,
    Impact,
}

/// Formulas shared with the UI's manual-edit recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    /// `col[left] × col[right]`.
    Product { left: usize, right: usize },
    /// Working days (Mon–Fri) from `col[start]` to `col[end]` inclusive.
    WorkingDaysBetween { start: usize, end: usize },
}

impl Formula {
    /// Column indices this formula reads.
    pub fn inputs(&self) -> [usize; 2] {
        match *self {
            Self::Product { left, right } => [left, right],
            Self::WorkingDaysBetween { start, end } => [start, end],
        }
    }
}

const fn text(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Text { default: None },
    }
}

const fn text_or(name: &'static str, default: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Text {
            default: Some(default),
        },
    }
}

const fn level(name: &'static str, scale: LevelScale, default: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Level { scale, default },
    }
}

const fn number(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Number,
    }
}

const fn date(name: &'static str, offset_days: i64) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Date { offset_days },
    }
}

const fn calculated(name: &'static str, formula: Formula) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Calculated(formula),
    }
}

pub const CONTRAINTES: TableSchema = TableSchema {
    columns: &[
        text("type"),
        text("description"),
        level("criticité", LevelScale::Criticality, "Moyen"),
        text_or("mitigation", "À définir"),
    ],
    max_rows: 5,
};

pub const RISQUES: TableSchema = TableSchema {
    columns: &[
        text("risque"),
        level("probabilité", LevelScale::Probability, "Moyenne"),
        level("impact", LevelScale::Impact, "Moyen"),
        text("planActions"),
        text_or("responsable", "Chef de projet"),
    ],
    max_rows: 6,
};

pub const PHASES: TableSchema = TableSchema {
    columns: &[
        text("phase"),
        text_or("description", "Description à définir"),
        calculated("durée", Formula::WorkingDaysBetween { start: 3, end: 4 }),
        date("dateDébut", 0),
        date("dateFin", 27),
        text_or("équipes", "Équipe projet"),
    ],
    max_rows: 8,
};

pub const LIVRABLES: TableSchema = TableSchema {
    columns: &[
        text("nom"),
        text_or("description", "Document"),
        date("date", 30),
        text_or("responsable", "NOTRE ENTREPRISE"),
    ],
    max_rows: 6,
};

pub const JALONS: TableSchema = TableSchema {
    columns: &[
        text("nom"),
        text_or("type", "Validation"),
        date("date", 30),
        text_or("critères", "Critères à définir"),
    ],
    max_rows: 5,
};

pub const COUTS_CONSTRUCTION: TableSchema = TableSchema {
    columns: &[
        text("profil"),
        number("nombre_jh"),
        number("tjm"),
        calculated("total", Formula::Product { left: 1, right: 2 }),
        text("code"),
    ],
    max_rows: 7,
};

pub const COUTS_FONCTIONNEMENT: TableSchema = TableSchema {
    columns: &[
        text("poste"),
        number("quantite"),
        number("coutUnitaire"),
        calculated("total", Formula::Product { left: 1, right: 2 }),
        text("code"),
    ],
    max_rows: 7,
};
